//! Tag list settings

use super::delimiter::Delimiter;
use super::slug::{Parameterize, Parameterizer};
use crate::error::{Result, TagListError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which tokenizer turns text into tag candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParserKind {
    /// Quote-aware parser honoring the configured delimiter
    #[default]
    Default,
    /// Plain comma split with no quote handling
    Generic,
}

impl FromStr for ParserKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(ParserKind::Default),
            "generic" => Ok(ParserKind::Generic),
            _ => Err(format!(
                "Invalid parser: {}. Valid parsers are: default, generic",
                s
            )),
        }
    }
}

impl std::fmt::Display for ParserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParserKind::Default => f.write_str("default"),
            ParserKind::Generic => f.write_str("generic"),
        }
    }
}

/// Settings read by every parse, mutation and serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TagConfig {
    delimiter: Delimiter,
    glue: String,
    force_lowercase: bool,
    force_parameterize: bool,
    parser: ParserKind,
    #[serde(skip)]
    parameterizer: Parameterizer,
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            delimiter: Delimiter::default(),
            glue: ", ".to_string(),
            force_lowercase: false,
            force_parameterize: false,
            parser: ParserKind::default(),
            parameterizer: Parameterizer::default(),
        }
    }
}

impl TagConfig {
    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    pub fn glue(&self) -> &str {
        &self.glue
    }

    pub fn force_lowercase(&self) -> bool {
        self.force_lowercase
    }

    pub fn force_parameterize(&self) -> bool {
        self.force_parameterize
    }

    pub fn parser(&self) -> ParserKind {
        self.parser
    }

    pub fn parameterizer(&self) -> &Parameterizer {
        &self.parameterizer
    }

    /// Replace the delimiter; rejected if any alternative is empty
    pub fn set_delimiter(&mut self, delimiter: impl Into<Delimiter>) -> Result<()> {
        let delimiter = delimiter.into();
        delimiter.validate()?;
        self.delimiter = delimiter;
        Ok(())
    }

    /// Replace the glue; rejected if empty
    pub fn set_glue(&mut self, glue: impl Into<String>) -> Result<()> {
        let glue = glue.into();
        validate_glue(&glue)?;
        self.glue = glue;
        Ok(())
    }

    pub fn set_force_lowercase(&mut self, enabled: bool) {
        self.force_lowercase = enabled;
    }

    pub fn set_force_parameterize(&mut self, enabled: bool) {
        self.force_parameterize = enabled;
    }

    pub fn set_parser(&mut self, parser: ParserKind) {
        self.parser = parser;
    }

    pub fn set_parameterizer(&mut self, parameterize: impl Parameterize + 'static) {
        self.parameterizer = Parameterizer::new(parameterize);
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<Delimiter>) -> Result<Self> {
        self.set_delimiter(delimiter)?;
        Ok(self)
    }

    pub fn with_glue(mut self, glue: impl Into<String>) -> Result<Self> {
        self.set_glue(glue)?;
        Ok(self)
    }

    pub fn with_force_lowercase(mut self, enabled: bool) -> Self {
        self.force_lowercase = enabled;
        self
    }

    pub fn with_force_parameterize(mut self, enabled: bool) -> Self {
        self.force_parameterize = enabled;
        self
    }

    pub fn with_parser(mut self, parser: ParserKind) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_parameterizer(mut self, parameterize: impl Parameterize + 'static) -> Self {
        self.set_parameterizer(parameterize);
        self
    }

    /// Check values that bypassed the setters, e.g. after deserializing
    pub fn validate(&self) -> Result<()> {
        self.delimiter.validate()?;
        validate_glue(&self.glue)
    }
}

fn validate_glue(glue: &str) -> Result<()> {
    if glue.is_empty() {
        return Err(TagListError::InvalidConfig(
            "Glue must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TagConfig::default();
        assert_eq!(config.delimiter(), &Delimiter::Single(",".to_string()));
        assert_eq!(config.glue(), ", ");
        assert!(!config.force_lowercase());
        assert!(!config.force_parameterize());
        assert_eq!(config.parser(), ParserKind::Default);
    }

    #[test]
    fn test_setters_validate() {
        let mut config = TagConfig::default();
        assert!(config.set_delimiter("").is_err());
        assert!(config.set_glue("").is_err());
        // Rejected values leave the previous ones in place
        assert_eq!(config.delimiter(), &Delimiter::from(","));
        assert_eq!(config.glue(), ", ");

        config.set_delimiter([",", ";"]).unwrap();
        config.set_glue(" | ").unwrap();
        assert_eq!(config.delimiter().alternatives(), [",", ";"]);
        assert_eq!(config.glue(), " | ");
    }

    #[test]
    fn test_builders() {
        let config = TagConfig::default()
            .with_delimiter(";")
            .unwrap()
            .with_glue("; ")
            .unwrap()
            .with_force_lowercase(true)
            .with_parser(ParserKind::Generic);

        assert_eq!(config.delimiter(), &Delimiter::from(";"));
        assert_eq!(config.glue(), "; ");
        assert!(config.force_lowercase());
        assert_eq!(config.parser(), ParserKind::Generic);
    }

    #[test]
    fn test_custom_parameterizer() {
        let config = TagConfig::default().with_parameterizer(|s: &str| s.to_uppercase());
        assert_eq!(config.parameterizer().apply("abc"), "ABC");
    }

    #[test]
    fn test_parser_kind_from_str() {
        assert_eq!(ParserKind::from_str("default").unwrap(), ParserKind::Default);
        assert_eq!(ParserKind::from_str("GENERIC").unwrap(), ParserKind::Generic);
        assert!(ParserKind::from_str("fancy").is_err());
    }

    #[test]
    fn test_toml_single_delimiter() {
        let config: TagConfig = toml::from_str("delimiter = \";\"\nforce_lowercase = true").unwrap();
        assert_eq!(config.delimiter(), &Delimiter::from(";"));
        assert!(config.force_lowercase());
        assert_eq!(config.glue(), ", ");
    }

    #[test]
    fn test_toml_many_delimiters() {
        let config: TagConfig =
            toml::from_str("delimiter = [\",\", \";\"]\nparser = \"generic\"").unwrap();
        assert_eq!(config.delimiter(), &Delimiter::from([",", ";"]));
        assert_eq!(config.parser(), ParserKind::Generic);
    }

    #[test]
    fn test_toml_empty_glue_fails_validation() {
        let config: TagConfig = toml::from_str("glue = \"\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_serialize_omits_parameterizer() {
        let text = toml::to_string_pretty(&TagConfig::default()).unwrap();
        assert!(text.contains("delimiter = \",\""));
        assert!(text.contains("glue = \", \""));
        assert!(!text.contains("parameterizer"));
    }
}
