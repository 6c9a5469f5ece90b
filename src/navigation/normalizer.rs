//! Address normalization
//!
//! Turns whatever the user typed into the address field into a URL with a
//! scheme, or rejects it.

use std::fmt;
use std::str::FromStr;

use url::{ParseError, Url};

use crate::core::ValidationError;

/// Prefix added to addresses typed without a scheme
pub const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// A syntactically valid URL derived from user input, scheme guaranteed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    text: String,
    url: Url,
}

impl NormalizedUrl {
    /// The normalized text, exactly as it would be shown in the address field
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The parsed URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Scheme of the URL, lowercased
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for NormalizedUrl {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl FromStr for NormalizedUrl {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

/// Normalize raw address input.
///
/// Surrounding spaces and tabs are stripped. Input that is not a URI
/// reference at all is rejected; input without a scheme gets
/// [`DEFAULT_SCHEME_PREFIX`]; input with a scheme passes through unchanged.
pub fn normalize(input: &str) -> Result<NormalizedUrl, ValidationError> {
    let trimmed = input.trim_matches(is_horizontal_whitespace);

    if !is_uri_reference(trimmed) {
        return Err(ValidationError::Malformed);
    }

    let text = match Url::parse(trimmed) {
        Ok(_) => trimmed.to_string(),
        Err(ParseError::RelativeUrlWithoutBase) => format!("{DEFAULT_SCHEME_PREFIX}{trimmed}"),
        Err(_) => return Err(ValidationError::Malformed),
    };

    let url = Url::parse(&text).map_err(|_| ValidationError::Malformed)?;
    Ok(NormalizedUrl { text, url })
}

/// Space, tab and the other Unicode space separators; line breaks excluded.
fn is_horizontal_whitespace(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// RFC 3986 URI-reference character check, extended to non-ASCII text.
fn is_uri_reference(s: &str) -> bool {
    if s.is_empty() || s.matches('#').count() > 1 {
        return false;
    }

    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '%' {
            let escaped = chars.next().zip(chars.next());
            match escaped {
                Some((hi, lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => continue,
                _ => return false,
            }
        }
        if !is_uri_char(c) {
            return false;
        }
    }
    true
}

fn is_uri_char(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || "-._~:/?#[]@!$&'()*+,;=".contains(c)
    } else {
        !c.is_whitespace() && !c.is_control()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_existing_scheme() {
        let url = normalize("https://example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com");
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_strips_whitespace() {
        let url = normalize("  https://a.com  ").unwrap();
        assert_eq!(url.as_str(), "https://a.com");

        let url = normalize("\thttps://a.com\u{3000}").unwrap();
        assert_eq!(url.as_str(), "https://a.com");
    }

    #[test]
    fn test_prefixes_missing_scheme() {
        let url = normalize("a.com").unwrap();
        assert_eq!(url.as_str(), "http://a.com");
        assert_eq!(url.url().host_str(), Some("a.com"));

        let url = normalize("example.com/search?q=rust#top").unwrap();
        assert_eq!(url.as_str(), "http://example.com/search?q=rust#top");
        assert_eq!(url.url().path(), "/search");
    }

    #[test]
    fn test_bare_word_gets_scheme() {
        let url = normalize("intranet").unwrap();
        assert_eq!(url.as_str(), "http://intranet");
    }

    #[test]
    fn test_empty_and_blank_are_malformed() {
        assert_eq!(normalize(""), Err(ValidationError::Malformed));
        assert_eq!(normalize("   "), Err(ValidationError::Malformed));
        assert_eq!(normalize("\t \t"), Err(ValidationError::Malformed));
    }

    #[test]
    fn test_inner_spaces_are_malformed() {
        assert_eq!(normalize("not a url!! "), Err(ValidationError::Malformed));
        assert_eq!(normalize("https://a.com/a b"), Err(ValidationError::Malformed));
    }

    #[test]
    fn test_line_breaks_are_not_trimmed() {
        assert_eq!(normalize("a.com\n"), Err(ValidationError::Malformed));
    }

    #[test]
    fn test_bad_escapes_and_fragments() {
        assert_eq!(normalize("a.com/%zz"), Err(ValidationError::Malformed));
        assert_eq!(normalize("a.com/%4"), Err(ValidationError::Malformed));
        assert_eq!(normalize("a.com/#x#y"), Err(ValidationError::Malformed));
        assert!(normalize("a.com/%41").is_ok());
    }

    #[test]
    fn test_disallowed_ascii_is_malformed() {
        assert_eq!(normalize("a.com/<script>"), Err(ValidationError::Malformed));
        assert_eq!(normalize("a.com/{x}"), Err(ValidationError::Malformed));
    }

    #[test]
    fn test_scheme_with_invalid_host_is_malformed() {
        assert_eq!(normalize("http://"), Err(ValidationError::Malformed));
        assert_eq!(normalize("https://[::1"), Err(ValidationError::Malformed));
    }

    #[test]
    fn test_schemeless_that_cannot_parse_is_malformed() {
        // "http://?q" has an empty host
        assert_eq!(normalize("?q"), Err(ValidationError::Malformed));
    }

    #[test]
    fn test_non_ascii_host() {
        let url = normalize("bücher.de").unwrap();
        assert_eq!(url.as_str(), "http://bücher.de");
        assert_eq!(url.url().host_str(), Some("xn--bcher-kva.de"));
    }

    #[test]
    fn test_renormalizing_is_idempotent() {
        let once = normalize("http://a.com").unwrap();
        let twice = normalize(once.as_str()).unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.as_str(), "http://a.com");

        let once = normalize("a.com").unwrap();
        let twice = normalize(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_from_str() {
        let url: NormalizedUrl = "example.org".parse().unwrap();
        assert_eq!(url.to_string(), "http://example.org");
        assert!("".parse::<NormalizedUrl>().is_err());
    }
}
