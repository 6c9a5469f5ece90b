//! broeser - Single-Screen Terminal Browser Shell
//!
//! An address field, a content surface, and back/forward/reload controls
//! wired through a small set of navigation callbacks.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **Navigation**: Address normalization and the navigation controller
//! - **Surface**: HTTP(S) content surface with back/forward history
//! - **CLI**: REPL, commands, and terminal alerts
//!
//! # Usage
//!
//! ```rust
//! use broeser::navigation::normalize;
//!
//! let url = normalize("  example.org ").unwrap();
//! assert_eq!(url.as_str(), "http://example.org");
//! ```

pub mod cli;
pub mod core;
pub mod logging;
pub mod navigation;
pub mod surface;

// Re-export commonly used items
pub use cli::Repl;
pub use crate::core::{BroeserError, Config, Result, ValidationError};
pub use navigation::{normalize, NavigationController, NormalizedUrl};
