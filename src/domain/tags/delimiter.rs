//! Delimiter definitions and literal matching

use crate::error::{Result, TagListError};
use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Separator between tags in text form
///
/// A single string or an ordered list of alternatives. Alternatives are
/// tried in order at every position, the first one that matches wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Delimiter {
    Single(String),
    Many(Vec<String>),
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Single(",".to_string())
    }
}

impl Delimiter {
    /// All alternatives in match order
    pub fn alternatives(&self) -> &[String] {
        match self {
            Delimiter::Single(d) => std::slice::from_ref(d),
            Delimiter::Many(ds) => ds,
        }
    }

    /// Check that there is at least one alternative and none is empty
    pub fn validate(&self) -> Result<()> {
        let alternatives = self.alternatives();
        if alternatives.is_empty() {
            return Err(TagListError::InvalidConfig(
                "Delimiter list must not be empty".to_string(),
            ));
        }
        if alternatives.iter().any(|d| d.is_empty()) {
            return Err(TagListError::InvalidConfig(
                "Delimiter must not be empty".to_string(),
            ));
        }
        DelimiterMatcher::compile(alternatives).map_err(|e| {
            TagListError::InvalidConfig(format!("Delimiter cannot be matched: {}", e))
        })?;
        Ok(())
    }

    pub(crate) fn matcher(&self) -> DelimiterMatcher {
        DelimiterMatcher::compile(self.alternatives()).unwrap_or_else(|e| {
            warn!("delimiter {} cannot be matched, splitting disabled: {}", self, e);
            DelimiterMatcher {
                any: None,
                anchored: Vec::new(),
            }
        })
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Delimiter::Single(d) => write!(f, "{:?}", d),
            Delimiter::Many(ds) => {
                let quoted: Vec<String> = ds.iter().map(|d| format!("{:?}", d)).collect();
                write!(f, "[{}]", quoted.join(", "))
            }
        }
    }
}

impl From<&str> for Delimiter {
    fn from(d: &str) -> Self {
        Delimiter::Single(d.to_string())
    }
}

impl From<String> for Delimiter {
    fn from(d: String) -> Self {
        Delimiter::Single(d)
    }
}

impl From<Vec<String>> for Delimiter {
    fn from(ds: Vec<String>) -> Self {
        Delimiter::Many(ds)
    }
}

impl From<Vec<&str>> for Delimiter {
    fn from(ds: Vec<&str>) -> Self {
        Delimiter::Many(ds.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Delimiter {
    fn from(ds: [&str; N]) -> Self {
        Delimiter::Many(ds.iter().map(|d| d.to_string()).collect())
    }
}

/// Delimiter alternatives compiled into escaped regexes
///
/// Empty alternatives are left out so a hand-built `Delimiter` can never make
/// the scanner loop without progress.
#[derive(Debug, Clone)]
pub(crate) struct DelimiterMatcher {
    /// Every alternative in one leftmost-first alternation
    any: Option<Regex>,
    /// One start-anchored pattern per alternative, in alternative order
    anchored: Vec<Regex>,
}

impl DelimiterMatcher {
    fn compile(alternatives: &[String]) -> std::result::Result<Self, regex::Error> {
        let escaped: Vec<String> = alternatives
            .iter()
            .filter(|d| !d.is_empty())
            .map(|d| regex::escape(d))
            .collect();

        let any = if escaped.is_empty() {
            None
        } else {
            Some(Regex::new(&escaped.join("|"))?)
        };
        let anchored = escaped
            .iter()
            .map(|pattern| Regex::new(&format!("^(?:{})", pattern)))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { any, anchored })
    }

    /// End offsets of every alternative matching at `pos`, in alternative order
    pub(crate) fn ends_at(&self, text: &str, pos: usize) -> Vec<usize> {
        let rest = &text[pos..];
        self.anchored
            .iter()
            .filter_map(|re| re.find(rest))
            .map(|m| pos + m.end())
            .collect()
    }

    /// Whether some alternative matches at `pos`
    pub(crate) fn is_at(&self, text: &str, pos: usize) -> bool {
        let rest = &text[pos..];
        self.anchored.iter().any(|re| re.is_match(rest))
    }

    /// Whether any alternative occurs anywhere in `text`
    pub(crate) fn occurs_in(&self, text: &str) -> bool {
        self.any.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// Split `text` on every delimiter occurrence
    pub(crate) fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        match &self.any {
            Some(re) => re.split(text).collect(),
            None => vec![text],
        }
    }
}
