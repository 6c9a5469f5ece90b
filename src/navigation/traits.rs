//! Seams between the navigation controller and its collaborators
//!
//! The content surface loads pages and reports lifecycle events; the
//! notifier shows blocking alerts. Both are supplied by the front end.

use crate::core::NavigationErrorKind;
use crate::navigation::normalizer::NormalizedUrl;

/// Component that performs navigation and keeps back/forward history
pub trait ContentSurface {
    /// Start loading a URL
    fn load(&mut self, url: &NormalizedUrl);

    /// Abort the in-flight load, if any
    fn stop(&mut self);

    /// Load the current page again
    fn reload(&mut self);

    /// Navigate one entry back in history
    fn go_back(&mut self);

    /// Navigate one entry forward in history
    fn go_forward(&mut self);

    /// Whether there is a history entry behind the current one
    fn can_go_back(&self) -> bool;

    /// Whether there is a history entry ahead of the current one
    fn can_go_forward(&self) -> bool;
}

/// Blocking, user-acknowledged message
pub trait Notifier {
    /// Present a message with a single acknowledgement button
    fn notify(&mut self, title: &str, message: &str);
}

/// Lifecycle callbacks a content surface reports into
pub trait NavigationEvents {
    /// A navigation started
    fn on_navigation_start(&mut self);

    /// A navigation finished at `url`
    fn on_navigation_finish(&mut self, url: &str, can_go_back: bool, can_go_forward: bool);

    /// A navigation failed
    fn on_navigation_error(&mut self, kind: NavigationErrorKind);
}

/// A lifecycle event carried from the surface to the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    Started,
    Finished {
        url: String,
        can_go_back: bool,
        can_go_forward: bool,
    },
    Failed(NavigationErrorKind),
}

impl NavigationEvent {
    /// Deliver this event to the matching callback
    pub fn dispatch<E: NavigationEvents + ?Sized>(self, sink: &mut E) {
        match self {
            NavigationEvent::Started => sink.on_navigation_start(),
            NavigationEvent::Finished {
                url,
                can_go_back,
                can_go_forward,
            } => sink.on_navigation_finish(&url, can_go_back, can_go_forward),
            NavigationEvent::Failed(kind) => sink.on_navigation_error(kind),
        }
    }
}
