//! Navigation module - address normalization and the navigation controller
//!
//! The controller only talks to its collaborators through the traits in
//! [`traits`], so it can be driven without any terminal or network.

pub mod controller;
pub mod normalizer;
pub mod traits;

pub use controller::NavigationController;
pub use normalizer::{normalize, NormalizedUrl};
pub use traits::{ContentSurface, NavigationEvent, NavigationEvents, Notifier};
