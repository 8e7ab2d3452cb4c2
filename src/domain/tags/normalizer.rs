//! Tag normalization

use super::config::TagConfig;
use log::trace;
use std::collections::HashSet;

/// Normalize tags in place
///
/// Steps run in a fixed order so that lowercasing and parameterizing happen
/// before deduplication:
/// 1. drop blank tags
/// 2. trim surrounding whitespace
/// 3. lowercase (when `force_lowercase`)
/// 4. parameterize (when `force_parameterize`), trimming the result and
///    dropping tags that slug to nothing
/// 5. drop duplicates, keeping the first occurrence
pub fn clean(tags: &mut Vec<String>, config: &TagConfig) {
    let before = tags.len();

    tags.retain(|tag| !tag.trim().is_empty());

    for tag in tags.iter_mut() {
        let trimmed = tag.trim();
        if trimmed.len() != tag.len() {
            *tag = trimmed.to_string();
        }
    }

    if config.force_lowercase() {
        for tag in tags.iter_mut() {
            *tag = tag.to_lowercase();
        }
    }

    if config.force_parameterize() {
        let parameterizer = config.parameterizer();
        for tag in tags.iter_mut() {
            *tag = parameterizer.apply(tag).trim().to_string();
        }
        tags.retain(|tag| !tag.is_empty());
    }

    let mut seen = HashSet::with_capacity(tags.len());
    tags.retain(|tag| seen.insert(tag.clone()));

    trace!("cleaned {} raw tags into {}", before, tags.len());
}
