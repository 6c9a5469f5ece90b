//! HTTP content surface
//!
//! Loads pages on spawned tasks and reports their outcome through a channel
//! that the event loop drains with [`HttpSurface::complete`]. Every load gets
//! a generation number; outcomes of superseded or stopped loads are dropped.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::Url;

use crate::core::{NavigationErrorKind, Page};
use crate::navigation::{ContentSurface, NavigationEvent, NormalizedUrl};
use crate::surface::fetcher::PageFetcher;
use crate::surface::history::{History, DEFAULT_HISTORY_LIMIT};

/// Message sent from a load task (or the surface itself) to the event loop
#[derive(Debug)]
pub struct SurfaceMessage {
    generation: u64,
    outcome: LoadOutcome,
}

#[derive(Debug)]
enum LoadOutcome {
    Started,
    Cancelled,
    Fetched(std::result::Result<Page, NavigationErrorKind>),
}

/// How a finished load moves the history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavigationKind {
    Visit,
    Back,
    Forward,
    Reload,
}

struct InFlight {
    generation: u64,
    kind: NavigationKind,
    task: JoinHandle<()>,
}

/// Content surface that fetches pages over HTTP(S)
pub struct HttpSurface {
    fetcher: Arc<dyn PageFetcher>,
    history: History,
    events: mpsc::UnboundedSender<SurfaceMessage>,
    generation: u64,
    in_flight: Option<InFlight>,
    current_page: Option<Page>,
}

impl HttpSurface {
    /// Create a surface and the receiver its messages arrive on
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> (Self, mpsc::UnboundedReceiver<SurfaceMessage>) {
        Self::with_history_limit(fetcher, DEFAULT_HISTORY_LIMIT)
    }

    /// Create a surface whose back stack keeps at most `limit` entries
    pub fn with_history_limit(
        fetcher: Arc<dyn PageFetcher>,
        limit: usize,
    ) -> (Self, mpsc::UnboundedReceiver<SurfaceMessage>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let surface = Self {
            fetcher,
            history: History::with_limit(limit),
            events,
            generation: 0,
            in_flight: None,
            current_page: None,
        };
        (surface, receiver)
    }

    /// Turn a channel message into a lifecycle event, committing history on
    /// success. Returns None for messages of superseded loads.
    pub fn complete(&mut self, message: SurfaceMessage) -> Option<NavigationEvent> {
        match message.outcome {
            LoadOutcome::Started => {
                (message.generation == self.generation).then_some(NavigationEvent::Started)
            }
            LoadOutcome::Cancelled => {
                Some(NavigationEvent::Failed(NavigationErrorKind::Cancelled))
            }
            LoadOutcome::Fetched(outcome) => {
                let is_current = self
                    .in_flight
                    .as_ref()
                    .is_some_and(|f| f.generation == message.generation);
                if !is_current {
                    debug!(generation = message.generation, "Dropping stale load outcome");
                    return None;
                }
                let in_flight = self.in_flight.take()?;

                match outcome {
                    Ok(page) => {
                        let url = page.url.to_string();
                        self.commit(in_flight.kind, &url);
                        self.current_page = Some(page);
                        Some(NavigationEvent::Finished {
                            url,
                            can_go_back: self.history.can_go_back(),
                            can_go_forward: self.history.can_go_forward(),
                        })
                    }
                    Err(kind) => Some(NavigationEvent::Failed(kind)),
                }
            }
        }
    }

    /// The last successfully loaded page
    pub fn current_page(&self) -> Option<&Page> {
        self.current_page.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether a load is in flight
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    fn commit(&mut self, kind: NavigationKind, url: &str) {
        match kind {
            NavigationKind::Visit => self.history.visit(url),
            NavigationKind::Back => {
                self.history.go_back();
                self.history.replace_current(url);
            }
            NavigationKind::Forward => {
                self.history.go_forward();
                self.history.replace_current(url);
            }
            NavigationKind::Reload => self.history.replace_current(url),
        }
    }

    fn start(&mut self, url: Url, kind: NavigationKind) {
        if let Some(previous) = self.in_flight.take() {
            debug!(generation = previous.generation, "Superseding in-flight load");
            previous.task.abort();
            self.send(previous.generation, LoadOutcome::Cancelled);
        }

        self.generation += 1;
        let generation = self.generation;
        self.send(generation, LoadOutcome::Started);

        let fetcher = Arc::clone(&self.fetcher);
        let events = self.events.clone();
        let task = tokio::spawn(async move {
            let outcome = match url.scheme() {
                "http" | "https" => fetcher.fetch(url).await,
                _ => Err(NavigationErrorKind::UnsupportedScheme),
            };
            let _ = events.send(SurfaceMessage {
                generation,
                outcome: LoadOutcome::Fetched(outcome),
            });
        });

        self.in_flight = Some(InFlight {
            generation,
            kind,
            task,
        });
    }

    /// Start loading a stored history entry
    fn start_entry(&mut self, entry: Option<String>, kind: NavigationKind) {
        let Some(entry) = entry else {
            return;
        };
        match Url::parse(&entry) {
            Ok(url) => self.start(url, kind),
            Err(e) => warn!(url = %entry, error = %e, "History entry is not a valid URL"),
        }
    }

    fn send(&self, generation: u64, outcome: LoadOutcome) {
        // The receiver only goes away when the event loop shuts down
        let _ = self.events.send(SurfaceMessage {
            generation,
            outcome,
        });
    }
}

impl ContentSurface for HttpSurface {
    fn load(&mut self, url: &NormalizedUrl) {
        self.start(url.url().clone(), NavigationKind::Visit);
    }

    fn stop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            debug!(generation = in_flight.generation, "Stopping load");
            in_flight.task.abort();
        }
    }

    fn reload(&mut self) {
        let entry = self.history.current().map(str::to_string);
        self.start_entry(entry, NavigationKind::Reload);
    }

    fn go_back(&mut self) {
        let entry = self.history.peek_back().map(str::to_string);
        self.start_entry(entry, NavigationKind::Back);
    }

    fn go_forward(&mut self) {
        let entry = self.history.peek_forward().map(str::to_string);
        self.start_entry(entry, NavigationKind::Forward);
    }

    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }
}

impl Drop for HttpSurface {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.task.abort();
        }
    }
}
