//! Navigation controller
//!
//! Routes address submissions to the content surface and reflects the
//! surface's lifecycle events into view state. Errors are shown through the
//! notifier with fixed messages.

use tracing::{debug, info, warn};

use crate::core::config::AlertConfig;
use crate::core::{NavigationErrorKind, NavigationState, ViewState};
use crate::navigation::normalizer::normalize;
use crate::navigation::traits::{ContentSurface, NavigationEvent, NavigationEvents, Notifier};

/// Event-routing layer over a content surface
pub struct NavigationController<S, N> {
    surface: S,
    notifier: N,
    alerts: AlertConfig,
    state: NavigationState,
    view: ViewState,
}

impl<S: ContentSurface, N: Notifier> NavigationController<S, N> {
    /// Create a controller with the default alert texts
    pub fn new(surface: S, notifier: N) -> Self {
        Self::with_alerts(surface, notifier, AlertConfig::default())
    }

    /// Create a controller with custom alert texts
    pub fn with_alerts(surface: S, notifier: N, alerts: AlertConfig) -> Self {
        Self {
            surface,
            notifier,
            alerts,
            state: NavigationState::Idle,
            view: ViewState::default(),
        }
    }

    /// Normalize `raw` and load it, or alert if it is not a URL.
    ///
    /// Overlapping submissions are not serialized here; the surface decides
    /// what happens to a load that is still in flight.
    pub fn submit(&mut self, raw: &str) {
        match normalize(raw) {
            Ok(url) => {
                info!(url = %url, "Submitting navigation");
                self.surface.load(&url);
                self.state = NavigationState::Loading;
            }
            Err(e) => {
                debug!(input = raw, error = %e, "Rejected address input");
                self.notifier
                    .notify(&self.alerts.title, &self.alerts.invalid_url_message);
            }
        }
    }

    /// Go back if the surface has history behind the current page
    pub fn go_back(&mut self) {
        if self.surface.can_go_back() {
            self.surface.go_back();
        }
    }

    /// Go forward if the surface has history ahead of the current page
    pub fn go_forward(&mut self) {
        if self.surface.can_go_forward() {
            self.surface.go_forward();
        }
    }

    /// Reload the current page
    pub fn reload(&mut self) {
        self.surface.reload();
    }

    /// Deliver a surface event to the matching callback
    pub fn handle_event(&mut self, event: NavigationEvent) {
        event.dispatch(self);
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}

impl<S: ContentSurface, N: Notifier> NavigationEvents for NavigationController<S, N> {
    fn on_navigation_start(&mut self) {
        self.state = NavigationState::Loading;
        self.view.loading = true;
    }

    fn on_navigation_finish(&mut self, url: &str, can_go_back: bool, can_go_forward: bool) {
        debug!(url, can_go_back, can_go_forward, "Navigation finished");
        self.state = NavigationState::Loaded;
        self.view.loading = false;
        self.view.address = url.to_string();
        self.view.back_enabled = can_go_back;
        self.view.forward_enabled = can_go_forward;
    }

    fn on_navigation_error(&mut self, kind: NavigationErrorKind) {
        // A cancelled load leaves state and indicator alone
        if kind.is_cancelled() {
            debug!("Navigation cancelled");
            return;
        }

        warn!(error = %kind, "Navigation failed");
        self.surface.stop();
        self.view.loading = false;
        self.state = NavigationState::Failed;
        self.notifier
            .notify(&self.alerts.title, &self.alerts.navigation_error_message);
    }
}
