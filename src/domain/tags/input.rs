//! Arguments accepted by tag list mutations

use crate::error::{Result, TagListError};

/// A raw mutation argument: one string or a (possibly nested) sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagInput {
    Text(String),
    List(Vec<TagInput>),
}

impl TagInput {
    /// Append every string in this input, depth first
    pub fn flatten_into(self, out: &mut Vec<String>) {
        match self {
            TagInput::Text(text) => out.push(text),
            TagInput::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }

    pub fn flatten(self) -> Vec<String> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }
}

impl From<&str> for TagInput {
    fn from(text: &str) -> Self {
        TagInput::Text(text.to_string())
    }
}

impl From<String> for TagInput {
    fn from(text: String) -> Self {
        TagInput::Text(text)
    }
}

impl From<&String> for TagInput {
    fn from(text: &String) -> Self {
        TagInput::Text(text.clone())
    }
}

impl<T: Into<TagInput>> From<Vec<T>> for TagInput {
    fn from(items: Vec<T>) -> Self {
        TagInput::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<TagInput>, const N: usize> From<[T; N]> for TagInput {
    fn from(items: [T; N]) -> Self {
        TagInput::List(items.into_iter().map(Into::into).collect())
    }
}

/// Options recognized by `add` and `remove`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MutationOptions {
    /// Run every plain string argument through the parser first
    pub parse: bool,
}

impl MutationOptions {
    pub fn parsed() -> Self {
        MutationOptions { parse: true }
    }

    /// Build options from raw key/value pairs
    ///
    /// Fails on the first key other than `parse`.
    pub fn from_pairs<K, I>(pairs: I) -> Result<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, bool)>,
    {
        let mut options = MutationOptions::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "parse" => options.parse = value,
                other => return Err(TagListError::InvalidOptionKey(other.to_string())),
            }
        }
        Ok(options)
    }
}
