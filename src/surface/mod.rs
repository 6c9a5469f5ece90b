//! Content surface module
//!
//! HTTP(S) page loading with native back/forward history.

mod fetcher;
mod history;
mod http;

pub use fetcher::{extract_title, PageFetcher, ReqwestFetcher};
pub use history::{History, DEFAULT_HISTORY_LIMIT};
pub use http::{HttpSurface, SurfaceMessage};
