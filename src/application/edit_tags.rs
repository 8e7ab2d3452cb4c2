//! Tag editing use cases

use crate::domain::tags::{MutationOptions, TagConfig, TagList};
use crate::error::Result;
use log::debug;
use std::sync::Arc;

/// Service running parse, normalize and mutation requests against one set of settings
pub struct TagEditService {
    config: Arc<TagConfig>,
}

impl TagEditService {
    pub fn new(config: impl Into<Arc<TagConfig>>) -> Self {
        TagEditService {
            config: config.into(),
        }
    }

    /// Parse one or more raw strings into a list
    ///
    /// Several inputs are treated as a sequence, i.e. joined with the glue first.
    pub fn parse(&self, inputs: &[String]) -> TagList {
        TagList::parse(Arc::clone(&self.config), inputs.to_vec())
    }

    /// Parse and serialize back into canonical text
    pub fn normalize(&self, inputs: &[String]) -> String {
        self.parse(inputs).serialize()
    }

    /// Parse `list`, then add `items` with raw options
    pub fn add(&self, list: &str, items: &[String], options: &[(String, bool)]) -> Result<TagList> {
        // Validate before parsing so a bad key never does any work
        let options = MutationOptions::from_pairs(options.iter().map(|(k, v)| (k.as_str(), *v)))?;
        let mut tags = self.parse_one(list);
        tags.add_with(items, options);
        debug!("added {} items, list now has {} tags", items.len(), tags.len());
        Ok(tags)
    }

    /// Parse `list`, then remove `items` with raw options
    pub fn remove(
        &self,
        list: &str,
        items: &[String],
        options: &[(String, bool)],
    ) -> Result<TagList> {
        let options = MutationOptions::from_pairs(options.iter().map(|(k, v)| (k.as_str(), *v)))?;
        let mut tags = self.parse_one(list);
        tags.remove_with(items, options);
        debug!("removed {} items, list now has {} tags", items.len(), tags.len());
        Ok(tags)
    }

    /// Union of two parsed lists, left first
    pub fn combine(&self, left: &str, right: &str) -> TagList {
        self.parse_one(left).combine(&self.parse_one(right))
    }

    fn parse_one(&self, input: &str) -> TagList {
        TagList::parse(Arc::clone(&self.config), input)
    }
}
