//! Tag list engine

pub mod config;
pub mod delimiter;
pub mod input;
pub mod list;
pub mod normalizer;
pub mod parser;
pub mod slug;

// Re-export main types
pub use config::{ParserKind, TagConfig};
pub use delimiter::Delimiter;
pub use input::{MutationOptions, TagInput};
pub use list::TagList;
pub use normalizer::clean;
pub use parser::{parse_candidates, DefaultParser, GenericParser, TagParser};
pub use slug::{Parameterize, Parameterizer, Slugifier};
