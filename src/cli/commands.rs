//! REPL commands
//!
//! Each input line is either a shell command or an address to submit.

use crate::cli::notifier::TerminalNotifier;
use crate::core::Config;
use crate::navigation::{ContentSurface, NavigationController};
use crate::surface::HttpSurface;

/// The controller the REPL drives
pub type Browser = NavigationController<HttpSurface, TerminalNotifier>;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Back,
    Forward,
    Reload,
    Home,
    Status,
    Page,
    Open,
    Help,
    Quit,
    /// Anything that is not a command is an address
    Navigate(String),
    /// `/word` that names no command
    Unknown(String),
}

/// Result of executing a command
pub enum CommandResult {
    /// Command was handled, show output
    Handled(String),
    /// Exit the REPL
    Exit,
    /// No output needed
    None,
}

/// Parse an input line
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let slashed = input.starts_with('/');
    let word = input.strip_prefix('/').unwrap_or(input).to_lowercase();

    match word.as_str() {
        "back" => Command::Back,
        "forward" => Command::Forward,
        "reload" => Command::Reload,
        "home" => Command::Home,
        "status" => Command::Status,
        "page" | "info" => Command::Page,
        "open" => Command::Open,
        "help" | "?" => Command::Help,
        "exit" | "quit" => Command::Quit,
        // Single letters are plausible host names, so they need the slash
        "b" if slashed => Command::Back,
        "f" if slashed => Command::Forward,
        "r" if slashed => Command::Reload,
        "q" if slashed => Command::Quit,
        _ if slashed => Command::Unknown(word),
        _ => Command::Navigate(input.to_string()),
    }
}

/// Execute a parsed command against the browser
pub fn execute(command: Command, browser: &mut Browser, config: &Config) -> CommandResult {
    match command {
        Command::Back => {
            if !browser.surface().can_go_back() {
                return CommandResult::Handled("Nothing to go back to.".to_string());
            }
            browser.go_back();
            CommandResult::None
        }

        Command::Forward => {
            if !browser.surface().can_go_forward() {
                return CommandResult::Handled("Nothing to go forward to.".to_string());
            }
            browser.go_forward();
            CommandResult::None
        }

        Command::Reload => {
            browser.reload();
            CommandResult::None
        }

        Command::Home => {
            browser.submit(&config.browser.home_url);
            CommandResult::None
        }

        Command::Status => CommandResult::Handled(status_text(browser)),

        Command::Page => CommandResult::Handled(
            browser
                .surface()
                .current_page()
                .map(|page| page.format_for_display())
                .unwrap_or_else(|| "No page loaded.".to_string()),
        ),

        Command::Open => {
            let address = browser.view().address.clone();
            if address.is_empty() {
                return CommandResult::Handled("No page loaded.".to_string());
            }
            match webbrowser::open(&address) {
                Ok(()) => CommandResult::Handled(format!("Opened {} in the system browser.", address)),
                Err(e) => CommandResult::Handled(format!("Could not open system browser: {}", e)),
            }
        }

        Command::Help => CommandResult::Handled(help_text()),

        Command::Quit => CommandResult::Exit,

        Command::Navigate(address) => {
            browser.submit(&address);
            CommandResult::None
        }

        Command::Unknown(word) => CommandResult::Handled(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            word
        )),
    }
}

/// Current state of the browser for the `status` command
pub fn status_text(browser: &Browser) -> String {
    let view = browser.view();
    format!(
        "Status:\n\
         ─────────────────────────────\n\
         State:    {}\n\
         Address:  {}\n\
         Loading:  {}\n\
         Back:     {}\n\
         Forward:  {}\n\
         History:  {} entries",
        browser.state(),
        if view.address.is_empty() {
            "(none)"
        } else {
            view.address.as_str()
        },
        if view.loading { "yes" } else { "no" },
        if view.back_enabled { "enabled" } else { "disabled" },
        if view.forward_enabled {
            "enabled"
        } else {
            "disabled"
        },
        browser.surface().history().len(),
    )
}

/// Generate help text
pub fn help_text() -> String {
    r#"Commands:
─────────────────────────────────────────────
  <address>        Load an address (http:// is added if missing)
  back, /b         Go back
  forward, /f      Go forward
  reload, /r       Reload the current page
  home             Load the home page
  status           Show navigation state
  page, info       Show details of the loaded page
  open             Open the current page in the system browser
  help, ?          Show this help message
  exit, quit, /q   Exit

Command words win over host names: to load a host called
"home" or "info", type it with its scheme (http://home).
When an alert is shown, press Enter to dismiss it.
─────────────────────────────────────────────"#
        .to_string()
}
