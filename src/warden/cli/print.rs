use colored::Colorize;
use warden::api::{CmdMessage, MessageLevel};
use warden::model::HistoryEntry;

pub(super) const PROMPT: &str = "Enter the action(num action num / action num / action): ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_banner() {
    print!("{}", render_banner(env!("CARGO_PKG_VERSION")));
}

pub(super) fn print_actions(actions: &[&str]) {
    print!("{}", render_actions(actions));
}

pub(super) fn print_history(entries: &[HistoryEntry]) {
    println!("\n{}", "Calculator History:".bold());
    print!("{}", render_entries(entries));
}

pub(super) fn print_entries(entries: &[HistoryEntry]) {
    print!("{}", render_entries(entries));
}

pub(super) fn print_config(options: &[(String, String)]) {
    for (key, value) in options {
        println!("{} = {}", key.yellow(), value);
    }
}

fn render_banner(version: &str) -> String {
    let rule = "=".repeat(29);
    let title = format!("WARDEN-CALCULATOR V {}", version);
    format!("\n{}\n{:^29}\n{}\n", rule, title, rule)
}

fn render_actions(actions: &[&str]) -> String {
    let mut out = String::from("\nAvailable actions:\n\n");
    for action in actions {
        out.push_str(&format!("> {}\n", action));
    }
    out
}

fn render_entries(entries: &[HistoryEntry]) -> String {
    entries.iter().map(|e| format!("{}\n", e)).collect()
}
