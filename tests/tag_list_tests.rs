//! Behavioural tests for the tag list engine through the public API

use std::sync::Arc;
use taglist::domain::tags::{clean, ParserKind};
use taglist::{Delimiter, MutationOptions, TagConfig, TagList, TagListError};

fn default_config() -> Arc<TagConfig> {
    Arc::new(TagConfig::default())
}

fn sorted(list: &TagList) -> Vec<String> {
    let mut tags = list.as_slice().to_vec();
    tags.sort();
    tags
}

#[test]
fn test_normalization_is_idempotent() {
    let configs = [
        TagConfig::default(),
        TagConfig::default().with_force_lowercase(true),
        TagConfig::default().with_force_parameterize(true),
        TagConfig::default()
            .with_force_lowercase(true)
            .with_force_parameterize(true),
    ];
    let raw: Vec<String> = [" Über ", "", "über", "A  B", "a-b", "  ", "Zed", "zed"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    for config in &configs {
        let mut once = raw.clone();
        clean(&mut once, config);
        let mut twice = once.clone();
        clean(&mut twice, config);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_round_trip_simple_tags() {
    let mut list: TagList = TagList::new(default_config());
    list.add(["alpha", " beta ", "", "gamma", "alpha", "Delta"]);

    let reparsed: TagList = TagList::parse(default_config(), list.serialize());
    assert_eq!(reparsed, list);
}

#[test]
fn test_round_trip_delimiter_tags() {
    let mut list: TagList = TagList::new(default_config());
    list.add(["Round", "Square,Cube"]);

    let text = list.serialize();
    assert_eq!(text, r#"Round, "Square,Cube""#);

    let reparsed: TagList = TagList::parse(default_config(), text);
    assert_eq!(sorted(&reparsed), vec!["Round", "Square,Cube"]);
}

#[test]
fn test_round_trip_with_alternative_delimiters() {
    let config = Arc::new(TagConfig::default().with_delimiter([",", ";"]).unwrap());
    let mut list: TagList = TagList::new(Arc::clone(&config));
    list.add(["plain", "semi;colon", "com,ma"]);

    let reparsed: TagList = TagList::parse(config, list.serialize());
    assert_eq!(sorted(&reparsed), sorted(&list));
}

#[test]
fn test_quote_extraction_precedence() {
    let list: TagList = TagList::parse(default_config(), "One , Two,  Three");
    assert_eq!(list.as_slice(), ["One", "Two", "Three"]);
}

#[test]
fn test_double_and_single_quote_mixing() {
    let list: TagList = TagList::parse(default_config(), r#"foo, "bar, baz", 'qux, quux'"#);
    assert_eq!(sorted(&list), vec!["bar, baz", "foo", "qux, quux"]);
    // Double-quoted, then single-quoted, then the split remainder
    assert_eq!(list.as_slice(), ["bar, baz", "qux, quux", "foo"]);
}

#[test]
fn test_deduplication_respects_case_setting() {
    let mut sensitive: TagList = TagList::new(default_config());
    sensitive.add(["Fun", "fun"]);
    assert_eq!(sensitive.as_slice(), ["Fun", "fun"]);

    let mut folded: TagList = TagList::new(TagConfig::default().with_force_lowercase(true));
    folded.add(["Fun", "fun"]);
    assert_eq!(folded.as_slice(), ["fun"]);
}

#[test]
fn test_blank_rejection() {
    let mut list: TagList = TagList::new(default_config());
    list.add(["", "  ", "Fun"]);
    assert_eq!(list.as_slice(), ["Fun"]);
}

#[test]
fn test_remove_with_parse() {
    let mut list: TagList = TagList::parse(default_config(), "Happy, Sad, Lonely, Sadness");
    list.remove_with(["Sad, Lonely"], MutationOptions::parsed());
    assert_eq!(list.as_slice(), ["Happy", "Sadness"]);
}

#[test]
fn test_multiple_configured_delimiters() {
    let config = TagConfig::default().with_delimiter([",", ";"]).unwrap();
    let list: TagList = TagList::parse(config, "a,b;c");
    assert_eq!(list.as_slice(), ["a", "b", "c"]);
}

#[test]
fn test_invalid_option_key() {
    let mut list: TagList = TagList::parse(default_config(), "one, two");

    let err = list
        .add_with_options(["x"], [("unknownKey", true)])
        .unwrap_err();

    assert!(matches!(err, TagListError::InvalidOptionKey(ref key) if key == "unknownKey"));
    assert_eq!(list.as_slice(), ["one", "two"]);
}

#[test]
fn test_settings_change_applies_on_next_call() {
    let mut list: TagList = TagList::parse(default_config(), "Alpha; Beta, Gamma");
    assert_eq!(list.as_slice(), ["Alpha; Beta", "Gamma"]);

    let semicolons = Arc::new(
        TagConfig::default()
            .with_delimiter(";")
            .unwrap()
            .with_glue("; ")
            .unwrap(),
    );
    list.reconfigure(Arc::clone(&semicolons));
    assert_eq!(list.serialize(), r#""Alpha; Beta"; Gamma"#);

    list.add_with(["Delta;Epsilon"], MutationOptions::parsed());
    assert_eq!(list.as_slice(), ["Alpha; Beta", "Gamma", "Delta", "Epsilon"]);
}

#[test]
fn test_owner_is_carried_but_not_interpreted() {
    #[derive(Debug, Clone, PartialEq)]
    struct Post {
        id: u64,
    }

    let mut list: TagList<Post> =
        TagList::parse(default_config(), "rust, parsing").with_owner(Post { id: 9 });
    list.append("tags").remove(["parsing"]);

    assert_eq!(list.owner(), Some(&Post { id: 9 }));
    assert_eq!(list.as_slice(), ["rust", "tags"]);
}

#[test]
fn test_generic_parser_selected_by_config() {
    let config = TagConfig::default()
        .with_delimiter(";")
        .unwrap()
        .with_parser(ParserKind::Generic);
    let list: TagList = TagList::parse(config, "a;b, c");
    assert_eq!(list.as_slice(), ["a;b", "c"]);
}

#[test]
fn test_sequence_input_equals_serialized_form() {
    let items = vec!["x", r#""y, z""#, "w"];
    let from_sequence: TagList = TagList::parse(default_config(), items.clone());
    let from_text: TagList = TagList::parse(default_config(), items.join(", "));
    assert_eq!(from_sequence, from_text);
}

#[test]
fn test_delimiter_set_from_toml() {
    let config: TagConfig = toml::from_str("delimiter = [\"|\", \"/\"]").unwrap();
    assert_eq!(config.delimiter(), &Delimiter::from(["|", "/"]));
    let list: TagList = TagList::parse(config, "a|b/c.d");
    assert_eq!(list.as_slice(), ["a", "b", "c.d"]);
}

#[test]
fn test_custom_parameterizer_cannot_leave_padding() {
    let config = TagConfig::default()
        .with_force_parameterize(true)
        .with_parameterizer(|s: &str| format!("{} ", s));
    let list: TagList = TagList::parse(config, "a, b");

    assert_eq!(list.as_slice(), ["a", "b"]);
    assert!(list.iter().all(|tag| tag.trim() == tag));
}
