//! Interactive REPL for broeser
//!
//! Runs the single event loop: input lines and surface messages are handled
//! one at a time on the current task.

use std::io::{self, Write};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::commands::{execute, parse_command, Browser, CommandResult};
use crate::cli::notifier::TerminalNotifier;
use crate::core::{Config, Result};
use crate::navigation::{NavigationController, NavigationEvent};
use crate::surface::{HttpSurface, PageFetcher, ReqwestFetcher, SurfaceMessage};

enum Input {
    Line(Option<String>),
    Surface(SurfaceMessage),
}

/// Interactive REPL (Read-Eval-Print Loop)
pub struct Repl {
    browser: Browser,
    messages: mpsc::UnboundedReceiver<SurfaceMessage>,
    config: Config,
}

impl Repl {
    /// Create a REPL with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let fetcher = ReqwestFetcher::new(&config.browser)?;
        info!(
            fetcher = fetcher.name(),
            timeout_secs = config.browser.timeout_secs,
            max_history = config.browser.max_history,
            "Content surface ready"
        );
        let (surface, messages) =
            HttpSurface::with_history_limit(Arc::new(fetcher), config.browser.max_history);
        let notifier = TerminalNotifier::stdout(config.alerts.acknowledge_label.clone());
        let browser = NavigationController::with_alerts(surface, notifier, config.alerts.clone());

        Ok(Self {
            browser,
            messages,
            config,
        })
    }

    /// Run the REPL, optionally loading `start_url` first
    pub async fn run(&mut self, start_url: Option<&str>) -> Result<()> {
        self.print_banner();

        if let Some(url) = start_url {
            info!(url, "Loading start page");
            self.browser.submit(url);
        }
        self.prompt()?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            let input = tokio::select! {
                line = lines.next_line() => Input::Line(line?),
                Some(message) = self.messages.recv() => Input::Surface(message),
            };

            match input {
                Input::Line(None) => {
                    // EOF (Ctrl+D)
                    println!("\nGoodbye!");
                    break;
                }
                Input::Line(Some(line)) => {
                    if !self.handle_line(&line) {
                        println!("Goodbye!");
                        break;
                    }
                    self.prompt()?;
                }
                Input::Surface(message) => {
                    if let Some(event) = self.browser.surface_mut().complete(message) {
                        self.apply(event);
                        self.prompt()?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle one input line; returns false when the REPL should exit
    fn handle_line(&mut self, line: &str) -> bool {
        if self.browser.notifier().is_pending() {
            self.browser.notifier_mut().acknowledge();
            return true;
        }

        if line.trim().is_empty() {
            return true;
        }

        let command = parse_command(line);
        debug!(?command, "Input");
        match execute(command, &mut self.browser, &self.config) {
            CommandResult::Exit => false,
            CommandResult::Handled(output) => {
                println!("{}\n", output);
                true
            }
            CommandResult::None => true,
        }
    }

    fn apply(&mut self, event: NavigationEvent) {
        let started = matches!(event, NavigationEvent::Started);
        let finished = matches!(event, NavigationEvent::Finished { .. });

        // Failures print through the notifier
        self.browser.handle_event(event);

        if started {
            println!("\nLoading...");
        } else if finished {
            println!("\n{}", self.location_line());
        }
    }

    /// Address bar as text: back/forward controls, address, page title
    fn location_line(&self) -> String {
        let view = self.browser.view();
        let back = if view.back_enabled { "◀" } else { "◁" };
        let forward = if view.forward_enabled { "▶" } else { "▷" };
        let title = self
            .browser
            .surface()
            .current_page()
            .and_then(|page| page.title.clone())
            .map(|title| format!("  {}", title))
            .unwrap_or_default();
        format!("{} {} {}{}", back, forward, view.address, title)
    }

    fn prompt(&self) -> Result<()> {
        let notifier = self.browser.notifier();
        if notifier.is_pending() {
            print!("{}", notifier.prompt());
        } else {
            print!("> ");
        }
        io::stdout().flush()?;
        Ok(())
    }

    /// Print the startup banner
    fn print_banner(&self) {
        println!("broeser {}", env!("CARGO_PKG_VERSION"));
        println!("Home:    {}", self.config.browser.home_url);
        println!("Timeout: {}s", self.config.browser.timeout_secs);
        println!();
        println!("Type an address to load it. Commands: back, forward, reload, help, quit");
        println!("─────────────────────────────────────────────");
    }
}
