//! # CLI Layer
//!
//! One possible UI client for the calculator library.
//!
//! This is the **only** place that:
//! - Reads stdin and writes stdout/stderr
//! - Parses process arguments
//! - Installs the log subscriber
//!
//! ## Structure
//!
//! - `run()`: Parses arguments, builds `AppContext`, dispatches
//! - `handle_*()`: Per-command handlers that call the API and print
//! - `handle_shell()`: The interactive read-eval-print loop

use super::print::{
    print_actions, print_banner, print_config, print_entries, print_history, print_messages,
    PROMPT,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use warden::api::{CalcApi, ConfigAction, RECENT_ENTRIES};
use warden::dispatch::available_actions;
use warden::error::Result;
use warden::model::format_value;
use warden::store::fs::FileHistory;

struct AppContext {
    api: CalcApi<FileHistory>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Shell) => handle_shell(&mut ctx),
        Some(Commands::Eval { action }) => handle_eval(&mut ctx, action),
        Some(Commands::History { count }) => handle_history(&ctx, count),
        Some(Commands::Sum { count }) => handle_sum(&ctx, count),
        Some(Commands::Clear) => handle_clear(&mut ctx),
        Some(Commands::Config { key }) => handle_config(&ctx, key),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    debug!(data_dir = %cli.data_dir.display(), "opening calculator storage");
    let api = CalcApi::open(&cli.data_dir)?;
    Ok(AppContext { api })
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    print_banner();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::new();
    let actions = available_actions();

    loop {
        print_actions(&actions);

        let settings = ctx.api.display_settings();
        if settings.show_history {
            let recent = ctx.api.recent(RECENT_ENTRIES)?;
            print_history(&recent.entries);
        }
        if settings.show_entry_sum {
            let total = ctx.api.entry_sum(RECENT_ENTRIES)?;
            println!("\nSum of last {} results: {}", RECENT_ENTRIES, format_value(total));
        }

        print!("\n{}", PROMPT);
        io::stdout().flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            // EOF behaves like `stop`.
            println!();
            let result = ctx.api.process("stop")?;
            print_messages(&result.messages);
            return Ok(());
        }
        // Undecodable bytes become U+FFFD and fail evaluation as invalid input.
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');

        println!();
        let result = ctx.api.process(line)?;
        print_messages(&result.messages);
        if result.is_stop() {
            return Ok(());
        }
    }
}

fn handle_eval(ctx: &mut AppContext, action: Vec<String>) -> Result<()> {
    let line = action.join(" ");
    let mut result = ctx.api.process(&line)?;
    print_messages(&result.messages);
    match result.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn handle_history(ctx: &AppContext, count: usize) -> Result<()> {
    let result = ctx.api.recent(count)?;
    print_entries(&result.entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_sum(ctx: &AppContext, count: usize) -> Result<()> {
    let result = ctx.api.sum(count)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_history()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>) -> Result<()> {
    let action = match key {
        Some(key) => ConfigAction::ShowKey(key),
        None => ConfigAction::ShowAll,
    };
    let mut result = ctx.api.config(action)?;
    print_config(&result.config);
    print_messages(&result.messages);
    match result.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
