//! Output formatting utilities

use crate::application::manage_config::{config_value, CONFIG_KEYS};
use crate::domain::TagConfig;

/// Format a list of tags for display, one per line
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(tag);
        output.push('\n');
    }

    output
}

/// Format every setting as `key = value` lines
pub fn format_config(config: &TagConfig) -> String {
    let mut output = String::new();
    for key in CONFIG_KEYS {
        // Every listed key is known, so lookups cannot fail
        if let Ok(value) = config_value(config, key) {
            output.push_str(&format!("{} = {}\n", key, value));
        }
    }
    output
}
