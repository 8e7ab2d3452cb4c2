//! Parameterize tags into URL-safe slugs

use regex::Regex;
use std::fmt;
use std::sync::{Arc, OnceLock};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Runs of characters that are not allowed in a slug
fn separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)[^a-z0-9\-_]+").unwrap())
}

fn repeated_separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"-{2,}").unwrap())
}

/// Turns a tag into its parameterized form
///
/// Implemented for any `Fn(&str) -> String`, so an embedding application can
/// plug in its own slug convention.
pub trait Parameterize: Send + Sync {
    fn parameterize(&self, input: &str) -> String;
}

impl<F> Parameterize for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn parameterize(&self, input: &str) -> String {
        self(input)
    }
}

/// Default slug convention
///
/// Diacritics are stripped, every run of characters outside `[a-z0-9_-]`
/// becomes a single `-`, and the result is lowercased.
#[derive(Debug, Clone, Copy, Default)]
pub struct Slugifier;

impl Slugifier {
    /// Decompose and drop combining marks; anything still non-ASCII becomes `?`
    fn transliterate(input: &str) -> String {
        input
            .nfkd()
            .filter(|c| !is_combining_mark(*c))
            .map(|c| if c.is_ascii() { c } else { '?' })
            .collect()
    }
}

impl Parameterize for Slugifier {
    fn parameterize(&self, input: &str) -> String {
        let ascii = Self::transliterate(input);
        let separated = separator_regex().replace_all(&ascii, "-");
        let collapsed = repeated_separator_regex().replace_all(&separated, "-");
        collapsed.trim_matches('-').to_lowercase()
    }
}

/// Shared handle to the configured `Parameterize` implementation
#[derive(Clone)]
pub struct Parameterizer(Arc<dyn Parameterize>);

impl Parameterizer {
    pub fn new(parameterize: impl Parameterize + 'static) -> Self {
        Parameterizer(Arc::new(parameterize))
    }

    pub fn apply(&self, input: &str) -> String {
        self.0.parameterize(input)
    }
}

impl Default for Parameterizer {
    fn default() -> Self {
        Parameterizer::new(Slugifier)
    }
}

impl fmt::Debug for Parameterizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Parameterizer(..)")
    }
}
