//! taglist - Parse and serialize human-entered tag lists
//!
//! Turns free-form strings like `One, Two, "Three, Four"` into an ordered,
//! duplicate-free list of normalized tag names and back into editable text.
//! Delimiters, glue and normalization come from a [`TagConfig`].

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::tags::{Delimiter, MutationOptions, TagConfig, TagInput, TagList};
pub use error::TagListError;
