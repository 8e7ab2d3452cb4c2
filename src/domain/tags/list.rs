//! Ordered, duplicate-free tag list
//!
//! # Examples
//!
//! ```
//! use taglist::domain::tags::{TagConfig, TagList};
//!
//! let mut tags: TagList = TagList::parse(TagConfig::default(), "Happy, Sad");
//! tags.add(["Lonely", "Happy"]);
//! assert_eq!(tags.as_slice(), ["Happy", "Sad", "Lonely"]);
//!
//! tags.append("Square,Cube");
//! assert_eq!(tags.to_string(), r#"Happy, Sad, Lonely, "Square,Cube""#);
//! ```

use super::config::TagConfig;
use super::input::{MutationOptions, TagInput};
use super::normalizer::clean;
use super::parser::parse_candidates;
use crate::error::Result;
use std::fmt;
use std::sync::Arc;

/// Tag names in insertion order, normalized after every mutation
///
/// `O` is an opaque owner handle carried for the caller and never inspected.
#[derive(Debug, Clone)]
pub struct TagList<O = ()> {
    tags: Vec<String>,
    config: Arc<TagConfig>,
    owner: Option<O>,
}

impl<O> TagList<O> {
    /// Create an empty list
    pub fn new(config: impl Into<Arc<TagConfig>>) -> Self {
        TagList {
            tags: Vec::new(),
            config: config.into(),
            owner: None,
        }
    }

    /// Create a list from raw items, optionally parsing each string
    pub fn with_items<I, T>(
        config: impl Into<Arc<TagConfig>>,
        items: I,
        options: MutationOptions,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TagInput>,
    {
        let mut list = TagList::new(config);
        list.add_with(items, options);
        list
    }

    /// Parse text into a new list
    ///
    /// A sequence input is joined with the glue first, so it parses exactly
    /// like its serialized form.
    pub fn parse(config: impl Into<Arc<TagConfig>>, input: impl Into<TagInput>) -> Self {
        let mut list = TagList::new(config);
        let text = match input.into() {
            TagInput::Text(text) => text,
            list_input => list_input.flatten().join(list.config.glue()),
        };
        let candidates = parse_candidates(&text, &list.config);
        list.add(candidates);
        list
    }

    pub fn config(&self) -> &Arc<TagConfig> {
        &self.config
    }

    /// Swap the settings; they apply from the next mutation or serialization
    pub fn reconfigure(&mut self, config: impl Into<Arc<TagConfig>>) {
        self.config = config.into();
    }

    pub fn owner(&self) -> Option<&O> {
        self.owner.as_ref()
    }

    pub fn set_owner(&mut self, owner: O) {
        self.owner = Some(owner);
    }

    pub fn take_owner(&mut self) -> Option<O> {
        self.owner.take()
    }

    pub fn with_owner(mut self, owner: O) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Add raw items, then normalize
    pub fn add<I, T>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TagInput>,
    {
        self.add_with(items, MutationOptions::default())
    }

    /// Add raw items with options, then normalize
    pub fn add_with<I, T>(&mut self, items: I, options: MutationOptions) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TagInput>,
    {
        let items = self.expand(items, options);
        self.tags.extend(items);
        self.normalize()
    }

    /// Add raw items with untyped options
    ///
    /// Any option key other than `parse` fails before the list is touched.
    pub fn add_with_options<I, T, K, P>(&mut self, items: I, options: P) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<TagInput>,
        K: AsRef<str>,
        P: IntoIterator<Item = (K, bool)>,
    {
        let options = MutationOptions::from_pairs(options)?;
        Ok(self.add_with(items, options))
    }

    /// Add a single item
    pub fn append(&mut self, item: impl Into<TagInput>) -> &mut Self {
        self.add([item.into()])
    }

    /// Remove members equal to any of the items, then normalize
    pub fn remove<I, T>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TagInput>,
    {
        self.remove_with(items, MutationOptions::default())
    }

    pub fn remove_with<I, T>(&mut self, items: I, options: MutationOptions) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TagInput>,
    {
        let doomed = self.expand(items, options);
        self.tags.retain(|tag| !doomed.contains(tag));
        self.normalize()
    }

    /// Remove items with untyped options
    ///
    /// Any option key other than `parse` fails before the list is touched.
    pub fn remove_with_options<I, T, K, P>(&mut self, items: I, options: P) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<TagInput>,
        K: AsRef<str>,
        P: IntoIterator<Item = (K, bool)>,
    {
        let options = MutationOptions::from_pairs(options)?;
        Ok(self.remove_with(items, options))
    }

    /// Append every element of another list or sequence, then normalize
    pub fn concat<I, T>(&mut self, other: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TagInput>,
    {
        for item in other {
            item.into().flatten_into(&mut self.tags);
        }
        self.normalize()
    }

    /// New list holding this list's tags followed by `other`'s
    ///
    /// Neither operand changes; the result has no owner.
    pub fn combine<P>(&self, other: &TagList<P>) -> TagList<O> {
        let mut combined = TagList::new(Arc::clone(&self.config));
        combined.add(self.iter()).add(other.iter());
        combined
    }

    /// Re-apply normalization with the current settings
    pub fn normalize(&mut self) -> &mut Self {
        clean(&mut self.tags, &self.config);
        self
    }

    /// Text form: tags containing a delimiter are double-quoted, all joined by glue
    ///
    /// Works on a normalized copy, so `self` is never modified.
    pub fn serialize(&self) -> String {
        let mut tags = self.tags.clone();
        clean(&mut tags, &self.config);

        let matcher = self.config.delimiter().matcher();
        tags.iter()
            .map(|tag| {
                if matcher.occurs_in(tag) {
                    format!("\"{}\"", tag)
                } else {
                    tag.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(self.config.glue())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tags.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tags
    }

    /// Flatten items into strings, parsing plain strings when asked
    ///
    /// Nested sequences are never parsed, only flattened.
    fn expand<I, T>(&self, items: I, options: MutationOptions) -> Vec<String>
    where
        I: IntoIterator<Item = T>,
        T: Into<TagInput>,
    {
        let mut expanded = Vec::new();
        for item in items {
            match item.into() {
                TagInput::Text(text) if options.parse => {
                    let parsed: TagList = TagList::parse(Arc::clone(&self.config), text);
                    expanded.extend(parsed.into_vec());
                }
                other => other.flatten_into(&mut expanded),
            }
        }
        expanded
    }
}

impl<O> fmt::Display for TagList<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl<O, P> PartialEq<TagList<P>> for TagList<O> {
    /// Lists are equal when their tags are, regardless of owner or settings
    fn eq(&self, other: &TagList<P>) -> bool {
        self.tags == other.tags
    }
}

impl<O, T: Into<TagInput>> Extend<T> for TagList<O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.add(items);
    }
}

impl<'a, O> IntoIterator for &'a TagList<O> {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

impl<O> From<&TagList<O>> for TagInput {
    fn from(list: &TagList<O>) -> Self {
        TagInput::List(list.iter().map(TagInput::from).collect())
    }
}

impl<O> From<TagList<O>> for TagInput {
    fn from(list: TagList<O>) -> Self {
        TagInput::List(list.into_vec().into_iter().map(TagInput::Text).collect())
    }
}
