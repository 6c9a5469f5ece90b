//! Back/forward history for the content surface.

use std::collections::VecDeque;

/// Entries kept when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// Native back/forward history: back stack, current entry, forward stack.
///
/// The back stack holds at most `limit` entries; the oldest are dropped.
#[derive(Debug, Clone)]
pub struct History {
    back_stack: VecDeque<String>,
    forward_stack: Vec<String>,
    current: Option<String>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// History keeping at most `limit` back entries (at least one).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            back_stack: VecDeque::new(),
            forward_stack: Vec::new(),
            current: None,
            limit: limit.max(1),
        }
    }

    /// Record a newly visited URL. Pushes current page to back stack,
    /// clears forward stack.
    pub fn visit(&mut self, url: impl Into<String>) {
        if let Some(entry) = self.current.take() {
            self.push_back(entry);
        }
        self.forward_stack.clear();
        self.current = Some(url.into());
    }

    fn push_back(&mut self, entry: String) {
        if self.back_stack.len() == self.limit {
            self.back_stack.pop_front();
        }
        self.back_stack.push_back(entry);
    }

    /// Move one entry back. Returns the new current URL, or None.
    pub fn go_back(&mut self) -> Option<&str> {
        let prev = self.back_stack.pop_back()?;
        if let Some(current) = self.current.take() {
            self.forward_stack.push(current);
        }
        self.current = Some(prev);
        self.current()
    }

    /// Move one entry forward. Returns the new current URL, or None.
    pub fn go_forward(&mut self) -> Option<&str> {
        let next = self.forward_stack.pop()?;
        if let Some(current) = self.current.take() {
            self.push_back(current);
        }
        self.current = Some(next);
        self.current()
    }

    /// Replace the current entry's URL (after a redirect) without moving.
    pub fn replace_current(&mut self, url: impl Into<String>) {
        self.current = Some(url.into());
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// URL a back navigation would load.
    pub fn peek_back(&self) -> Option<&str> {
        self.back_stack.back().map(String::as_str)
    }

    /// URL a forward navigation would load.
    pub fn peek_forward(&self) -> Option<&str> {
        self.forward_stack.last().map(String::as_str)
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }

    /// Number of entries including the current one.
    pub fn len(&self) -> usize {
        self.back_stack.len() + self.forward_stack.len() + usize::from(self.current.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_and_back() {
        let mut history = History::new();
        assert!(history.is_empty());
        assert!(!history.can_go_back());

        history.visit("http://a.com/");
        history.visit("http://b.com/");
        assert!(history.can_go_back());
        assert!(!history.can_go_forward());
        assert_eq!(history.peek_back(), Some("http://a.com/"));

        assert_eq!(history.go_back(), Some("http://a.com/"));
        assert!(history.can_go_forward());
        assert!(!history.can_go_back());
        assert_eq!(history.peek_forward(), Some("http://b.com/"));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_forward_after_back() {
        let mut history = History::new();
        history.visit("1");
        history.visit("2");
        history.go_back();

        assert_eq!(history.go_forward(), Some("2"));
        assert_eq!(history.current(), Some("2"));
        assert!(history.go_forward().is_none());
    }

    #[test]
    fn test_visit_clears_forward() {
        let mut history = History::new();
        history.visit("1");
        history.visit("2");
        history.go_back();
        history.visit("3");

        assert!(!history.can_go_forward());
        assert_eq!(history.peek_back(), Some("1"));
        assert_eq!(history.current(), Some("3"));
    }

    #[test]
    fn test_replace_current_keeps_stacks() {
        let mut history = History::new();
        history.visit("http://a.com/");
        history.visit("http://b.com/");
        history.replace_current("https://b.com/");

        assert_eq!(history.current(), Some("https://b.com/"));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_back_stack_is_capped() {
        let mut history = History::with_limit(3);
        for i in 0..10 {
            history.visit(i.to_string());
        }

        assert_eq!(history.current(), Some("9"));
        assert_eq!(history.len(), 4);
        assert_eq!(history.go_back(), Some("8"));
        assert_eq!(history.go_back(), Some("7"));
        assert_eq!(history.go_back(), Some("6"));
        assert!(!history.can_go_back());
    }

    #[test]
    fn test_forward_respects_cap() {
        let mut history = History::with_limit(2);
        history.visit("1");
        history.visit("2");
        history.visit("3");
        history.go_back();
        history.go_back();
        history.go_forward();
        history.go_forward();

        assert_eq!(history.current(), Some("3"));
        assert_eq!(history.peek_back(), Some("2"));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_back_on_empty_is_none() {
        let mut history = History::new();
        assert!(history.go_back().is_none());
        assert!(history.current().is_none());
    }
}
