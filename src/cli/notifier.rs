//! Terminal alerts
//!
//! Prints an alert box and blocks further input until the user acknowledges
//! it with Enter.

use std::io::{self, Write};

use tracing::warn;

use crate::navigation::Notifier;

/// Notifier that writes alerts to a terminal stream
pub struct TerminalNotifier<W: Write = io::Stdout> {
    out: W,
    acknowledge_label: String,
    pending: bool,
}

impl TerminalNotifier {
    /// Create a notifier that writes to stdout
    pub fn stdout(acknowledge_label: impl Into<String>) -> Self {
        Self::new(io::stdout(), acknowledge_label)
    }
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(out: W, acknowledge_label: impl Into<String>) -> Self {
        Self {
            out,
            acknowledge_label: acknowledge_label.into(),
            pending: false,
        }
    }

    /// Whether an alert is waiting to be acknowledged
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Dismiss the pending alert
    pub fn acknowledge(&mut self) {
        self.pending = false;
    }

    /// Prompt shown while an alert is pending
    pub fn prompt(&self) -> String {
        format!("Press Enter for {}: ", self.acknowledge_label)
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn render(&mut self, title: &str, message: &str) -> io::Result<()> {
        let width = title.chars().count().max(message.chars().count()) + 2;
        let rule = "─".repeat(width);

        writeln!(self.out)?;
        writeln!(self.out, "┌{}┐", rule)?;
        writeln!(self.out, "│ {:<w$} │", title, w = width - 2)?;
        writeln!(self.out, "├{}┤", rule)?;
        writeln!(self.out, "│ {:<w$} │", message, w = width - 2)?;
        writeln!(self.out, "└{}┘", rule)?;
        self.out.flush()
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn notify(&mut self, title: &str, message: &str) {
        self.pending = true;
        if let Err(e) = self.render(title, message) {
            warn!(error = %e, "Failed to print alert");
        }
    }
}
