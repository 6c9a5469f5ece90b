//! Shared types used across broeser modules
//!
//! Navigation state, error classification, and the fetched page summary.

use std::fmt;

use url::Url;

/// State of the navigation state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A navigation is in flight
    Loading,
    /// The last navigation finished
    Loaded,
    /// The last navigation failed
    Failed,
}

impl fmt::Display for NavigationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationState::Idle => write!(f, "idle"),
            NavigationState::Loading => write!(f, "loading"),
            NavigationState::Loaded => write!(f, "loaded"),
            NavigationState::Failed => write!(f, "failed"),
        }
    }
}

/// Classification of a failed navigation reported by a content surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationErrorKind {
    /// The load was interrupted on purpose, e.g. superseded by a new one
    Cancelled,
    /// The server did not answer in time
    Timeout,
    /// Could not connect (DNS, refused, TLS handshake)
    Connection,
    /// Redirect limit exceeded
    TooManyRedirects,
    /// The surface cannot load this scheme
    UnsupportedScheme,
    /// Anything else
    Other,
}

impl NavigationErrorKind {
    /// Whether this error only signals a deliberate interruption
    pub fn is_cancelled(self) -> bool {
        self == NavigationErrorKind::Cancelled
    }
}

impl fmt::Display for NavigationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationErrorKind::Cancelled => write!(f, "cancelled"),
            NavigationErrorKind::Timeout => write!(f, "timeout"),
            NavigationErrorKind::Connection => write!(f, "connection"),
            NavigationErrorKind::TooManyRedirects => write!(f, "too many redirects"),
            NavigationErrorKind::UnsupportedScheme => write!(f, "unsupported scheme"),
            NavigationErrorKind::Other => write!(f, "other"),
        }
    }
}

/// UI-observable state driven by the navigation controller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Text shown in the address field
    pub address: String,
    /// Whether the loading indicator is visible
    pub loading: bool,
    /// Whether the back control is enabled
    pub back_enabled: bool,
    /// Whether the forward control is enabled
    pub forward_enabled: bool,
}

/// Summary of a page fetched by the HTTP surface
#[derive(Debug, Clone)]
pub struct Page {
    /// Final URL after redirects
    pub url: Url,
    /// HTTP status code
    pub status: u16,
    /// Content-Type header, if any
    pub content_type: Option<String>,
    /// Text of the first `<title>` element
    pub title: Option<String>,
    /// Number of body bytes read
    pub bytes: usize,
    /// Whether the body was cut off at the size limit
    pub truncated: bool,
}

impl Page {
    /// Create a page with an empty body
    pub fn new(url: Url, status: u16) -> Self {
        Self {
            url,
            status,
            content_type: None,
            title: None,
            bytes: 0,
            truncated: false,
        }
    }

    /// Format the page summary for display
    pub fn format_for_display(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("URL:     {}\n", self.url));
        output.push_str(&format!("Status:  {}\n", self.status));
        if let Some(title) = &self.title {
            output.push_str(&format!("Title:   {}\n", title));
        }
        if let Some(content_type) = &self.content_type {
            output.push_str(&format!("Type:    {}\n", content_type));
        }
        output.push_str(&format!(
            "Size:    {} bytes{}",
            self.bytes,
            if self.truncated { " (truncated)" } else { "" }
        ));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_cancelled_is_cancelled() {
        assert!(NavigationErrorKind::Cancelled.is_cancelled());
        assert!(!NavigationErrorKind::Timeout.is_cancelled());
        assert!(!NavigationErrorKind::Connection.is_cancelled());
        assert!(!NavigationErrorKind::Other.is_cancelled());
    }

    #[test]
    fn test_page_display() {
        let mut page = Page::new(Url::parse("https://example.com/").unwrap(), 200);
        page.title = Some("Example Domain".to_string());
        page.bytes = 1256;

        let shown = page.format_for_display();
        assert!(shown.contains("https://example.com/"));
        assert!(shown.contains("Example Domain"));
        assert!(shown.contains("1256 bytes"));
        assert!(!shown.contains("truncated"));
    }
}
