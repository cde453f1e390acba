//! URL detection in message bodies.

use std::sync::LazyLock;

use regex::Regex;

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?xi)
        \b(?:
            https?://[^\s<>"']+                      # explicit scheme
          | www\.[^\s<>"']+                          # www. prefix
          | [a-z0-9](?:[a-z0-9-]*[a-z0-9])?          # bare domain ...
            (?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)*
            \.(?:com|org|net|edu|gov|io|co|in|uk|de|me|ly|app|dev|info|biz|tv|gg)
            \b(?:/[^\s<>"']*)?                       # ... with optional path
        )"#,
    )
    .unwrap()
});

/// Punctuation that closes a sentence rather than belonging to a URL.
const TRAILING: &[char] = &['.', ',', '!', '?', ';', ':', ')', ']', '}'];

/// Returns every URL found in `text`, in order.
///
/// # Example
///
/// ```rust
/// use chatstat::analysis::find_links;
///
/// let links = find_links("see https://example.com/a, or www.rust-lang.org.");
/// assert_eq!(links, vec!["https://example.com/a", "www.rust-lang.org"]);
/// ```
pub fn find_links(text: &str) -> Vec<&str> {
    URL.find_iter(text)
        .map(|m| m.as_str().trim_end_matches(TRAILING))
        .filter(|url| !url.is_empty())
        .collect()
}

/// Number of URLs in `text`.
pub fn count_links(text: &str) -> usize {
    find_links(text).len()
}
