//! # Warden Calculator Architecture
//!
//! Warden is a calculator **library** with a small interactive shell on top. The
//! shell reads a line, hands it to the library, and prints whatever comes back.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Banner, menu, prompt, history view                       │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - CalcApi: the application context, built once            │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Evaluate + record, history views, config views           │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Dispatch (dispatch/)         │ │  Storage (config, store/) │
//! │  - Tokenizer, operation table │ │  - settings.ini           │
//! │  - Pure, no I/O               │ │  - saved_actions.json     │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## Error Classes
//!
//! Bad input and division by zero are reported inside the `CmdResult` and the
//! session goes on. Filesystem failures surface as `Err` and end the process.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`dispatch`]: Input parsing and the operation table
//! - [`config`]: The INI-backed settings store
//! - [`store`]: History storage abstraction and implementations
//! - [`model`]: History entry and document types
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod store;
