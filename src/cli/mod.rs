//! CLI module - command-line interface
//!
//! Contains the REPL, command parsing, and terminal alerts.

pub mod commands;
pub mod notifier;
pub mod repl;

pub use notifier::TerminalNotifier;
pub use repl::Repl;
