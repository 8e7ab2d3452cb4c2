//! Domain layer - Tag list parsing, normalization and serialization

pub mod tags;

pub use tags::{Delimiter, TagConfig, TagList};
