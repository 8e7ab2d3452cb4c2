//! CLI command definitions

use crate::application::SettingsOverrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "taglist")]
#[command(about = "Parse, normalize and edit delimited tag lists", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides applied on top of the persisted settings for one invocation
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Delimiter to split on (repeat for alternatives)
    #[arg(short, long = "delimiter", global = true, value_name = "DELIMITER")]
    pub delimiters: Vec<String>,

    /// Glue used to join tags back into text
    #[arg(short, long, global = true)]
    pub glue: Option<String>,

    /// Force tags to lowercase
    #[arg(long, global = true)]
    pub lowercase: bool,

    /// Force tags into URL-safe slugs
    #[arg(long, global = true)]
    pub parameterize: bool,
}

impl From<SettingsArgs> for SettingsOverrides {
    fn from(args: SettingsArgs) -> Self {
        SettingsOverrides {
            delimiters: args.delimiters,
            glue: args.glue,
            force_lowercase: args.lowercase,
            force_parameterize: args.parameterize,
        }
    }
}

/// Options shared by `add` and `remove`
#[derive(Args, Debug, Clone, Default)]
pub struct MutationArgs {
    /// Parse each item as a tag string before applying it
    #[arg(short, long)]
    pub parse: bool,

    /// Raw mutation option (e.g. parse=true)
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_option_pair)]
    pub options: Vec<(String, bool)>,
}

impl MutationArgs {
    /// All options as key/value pairs, `--parse` included
    pub fn pairs(&self) -> Vec<(String, bool)> {
        let mut pairs = self.options.clone();
        if self.parse {
            pairs.push(("parse".to_string(), true));
        }
        pairs
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize settings in a directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Parse tag strings and print one tag per line
    Parse {
        /// Raw tag strings; several are joined with the glue first
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Parse tag strings and print the canonical text form
    Normalize {
        /// Raw tag strings; several are joined with the glue first
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Add items to a tag string
    Add {
        /// Existing tag string
        list: String,

        /// Items to add
        #[arg(required = true)]
        items: Vec<String>,

        #[command(flatten)]
        mutation: MutationArgs,
    },

    /// Remove items from a tag string
    Remove {
        /// Existing tag string
        list: String,

        /// Items to remove
        #[arg(required = true)]
        items: Vec<String>,

        #[command(flatten)]
        mutation: MutationArgs,
    },

    /// Combine two tag strings into one
    Combine {
        left: String,
        right: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

/// Parse `key=value` where value is a boolean
fn parse_option_pair(raw: &str) -> Result<(String, bool), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    let value = value
        .parse::<bool>()
        .map_err(|_| format!("expected true or false for '{}', got '{}'", key, value))?;
    Ok((key.to_string(), value))
}
