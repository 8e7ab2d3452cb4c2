//! Tag parsing from delimited text
//!
//! The default parser pulls quoted tags out of the text before splitting on
//! the delimiter, which is what lets a quoted tag contain the delimiter:
//!
//! ```
//! use taglist::domain::tags::{TagConfig, TagList};
//!
//! let tags: TagList = TagList::parse(TagConfig::default(), r#"Round, "Square,Cube""#);
//! assert_eq!(tags.as_slice(), ["Square,Cube", "Round"]);
//! ```

use super::config::{ParserKind, TagConfig};
use super::delimiter::DelimiterMatcher;
use log::debug;

/// Turns text into raw tag candidates; normalization happens afterwards
pub trait TagParser {
    fn parse(&self, input: &str, config: &TagConfig) -> Vec<String>;
}

/// Quote-aware parser honoring the configured delimiter
///
/// Candidates come out as: double-quoted tags in order found, then
/// single-quoted tags in order found, then the delimiter-split remainder.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultParser;

/// Comma split with no quote handling
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericParser;

impl ParserKind {
    pub fn parser(&self) -> &'static dyn TagParser {
        match self {
            ParserKind::Default => &DefaultParser,
            ParserKind::Generic => &GenericParser,
        }
    }
}

/// Parse `input` with the parser selected in `config`
pub fn parse_candidates(input: &str, config: &TagConfig) -> Vec<String> {
    let candidates = config.parser().parser().parse(input, config);
    debug!(
        "parsed {:?} into {} candidates with {} parser",
        input,
        candidates.len(),
        config.parser()
    );
    candidates
}

impl TagParser for DefaultParser {
    fn parse(&self, input: &str, config: &TagConfig) -> Vec<String> {
        let matcher = config.delimiter().matcher();

        let (remaining, mut candidates) = extract_quoted(input, '"', &matcher);
        let (remaining, single_quoted) = extract_quoted(&remaining, '\'', &matcher);
        candidates.extend(single_quoted);
        candidates.extend(matcher.split(&remaining).into_iter().map(str::to_string));

        candidates
    }
}

impl TagParser for GenericParser {
    fn parse(&self, input: &str, _config: &TagConfig) -> Vec<String> {
        input
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect()
    }
}

/// Whitespace as recognized between delimiters and quotes
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn skip_space(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .find(|(_, c)| !is_space(*c))
        .map(|(offset, _)| pos + offset)
        .unwrap_or(text.len())
}

/// A quoted segment found by the scanner
#[derive(Debug, PartialEq, Eq)]
struct QuotedMatch {
    /// End of the leading boundary (start of string or a delimiter)
    boundary_end: usize,
    body_start: usize,
    body_end: usize,
    /// End of the whole match, trailing whitespace included
    end: usize,
}

/// Try to match a quoted segment starting exactly at `pos`
///
/// Shape: boundary, optional whitespace, quote, shortest body without a
/// newline, quote, optional whitespace, then a delimiter or end of text must
/// follow without being consumed. When a closing quote is not followed by a
/// valid boundary the body is extended to the next quote.
fn match_quoted_at(
    text: &str,
    pos: usize,
    quote: char,
    matcher: &DelimiterMatcher,
) -> Option<QuotedMatch> {
    let mut boundaries = Vec::new();
    if pos == 0 {
        boundaries.push(0);
    }
    boundaries.extend(matcher.ends_at(text, pos));

    for boundary_end in boundaries {
        let open = skip_space(text, boundary_end);
        if !text[open..].starts_with(quote) {
            continue;
        }
        let body_start = open + quote.len_utf8();

        for (offset, c) in text[body_start..].char_indices() {
            if c == '\n' {
                break;
            }
            if c != quote {
                continue;
            }

            let body_end = body_start + offset;
            let after_quote = body_end + quote.len_utf8();
            let space_end = skip_space(text, after_quote);

            // Trailing whitespace is all single-byte, so every offset is a char boundary
            for end in (after_quote..=space_end).rev() {
                if end == text.len() || matcher.is_at(text, end) {
                    return Some(QuotedMatch {
                        boundary_end,
                        body_start,
                        body_end,
                        end,
                    });
                }
            }
        }
    }

    None
}

/// Remove every quoted segment, returning the remaining text and the bodies
///
/// The leading boundary of each match stays in the text so the later split
/// still sees the delimiter.
fn extract_quoted(
    text: &str,
    quote: char,
    matcher: &DelimiterMatcher,
) -> (String, Vec<String>) {
    let mut remaining = String::with_capacity(text.len());
    let mut bodies = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        if let Some(found) = match_quoted_at(text, pos, quote, matcher) {
            remaining.push_str(&text[pos..found.boundary_end]);
            bodies.push(text[found.body_start..found.body_end].to_string());
            pos = found.end;
            continue;
        }

        // Unmatched text is copied one character at a time
        let next = text[pos..]
            .chars()
            .next()
            .map(|c| pos + c.len_utf8())
            .unwrap_or(text.len());
        remaining.push_str(&text[pos..next]);
        pos = next;
    }

    (remaining, bodies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tags::Delimiter;
    use rstest::rstest;

    fn parse(input: &str) -> Vec<String> {
        DefaultParser.parse(input, &TagConfig::default())
    }

    /// Candidates with blanks and padding stripped, the way the list stores them
    fn parse_clean(input: &str, config: &TagConfig) -> Vec<String> {
        DefaultParser
            .parse(input, config)
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    #[rstest]
    #[case("", vec![])]
    #[case(",", vec![])]
    #[case("One , Two,  Three", vec!["One", "Two", "Three"])]
    #[case("Fun", vec!["Fun"])]
    #[case(r#""Three, Four""#, vec!["Three, Four"])]
    #[case(r#"One, Two, "Three, Four""#, vec!["Three, Four", "One", "Two"])]
    #[case(r#"Round, "Square,Cube""#, vec!["Square,Cube", "Round"])]
    #[case(r#"foo, "bar, baz", 'qux, quux'"#, vec!["bar, baz", "qux, quux", "foo"])]
    #[case(r#"'single', "double""#, vec!["double", "single"])]
    #[case(r#"  "padded"  , next"#, vec!["padded", "next"])]
    fn test_default_parser(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(parse_clean(input, &TagConfig::default()), expected);
    }

    #[test]
    fn test_boundary_delimiter_kept_for_split() {
        let matcher_source = Delimiter::from(",");
        let matcher = matcher_source.matcher();
        let (remaining, bodies) = extract_quoted(r#"a, "b, c", d"#, '"', &matcher);
        assert_eq!(bodies, vec!["b, c"]);
        assert_eq!(remaining, "a,, d");
    }

    #[test]
    fn test_quote_inside_word_is_not_a_segment() {
        // No delimiter or start of text before the quote
        assert_eq!(
            parse_clean(r#"say "hi", there"#, &TagConfig::default()),
            vec![r#"say "hi""#, "there"]
        );
    }

    #[test]
    fn test_apostrophes_survive() {
        assert_eq!(
            parse_clean("rock 'n' roll, jazz", &TagConfig::default()),
            vec!["rock 'n' roll", "jazz"]
        );
    }

    #[test]
    fn test_unbalanced_quote_is_lenient() {
        assert_eq!(
            parse_clean(r#""unterminated, other"#, &TagConfig::default()),
            vec![r#""unterminated"#, "other"]
        );
    }

    #[test]
    fn test_closing_quote_must_reach_boundary() {
        // The first closing quote is followed by text, so the body extends
        assert_eq!(
            parse_clean(r#""a"b", c"#, &TagConfig::default()),
            vec![r#"a"b"#, "c"]
        );
    }

    #[test]
    fn test_body_does_not_cross_newline() {
        assert_eq!(
            parse_clean("\"a\nb\", c", &TagConfig::default()),
            vec!["\"a\nb\"", "c"]
        );
    }

    #[test]
    fn test_multiple_delimiters() {
        let config = TagConfig::default().with_delimiter([",", ";"]).unwrap();
        assert_eq!(parse_clean("a,b;c", &config), vec!["a", "b", "c"]);
        assert_eq!(
            parse_clean(r#"a; "b;c", d"#, &config),
            vec!["b;c", "a", "d"]
        );
    }

    #[test]
    fn test_space_delimiter_with_quotes() {
        let config = TagConfig::default().with_delimiter(" ").unwrap();
        assert_eq!(
            parse_clean(r#"alpha "beta gamma" delta"#, &config),
            vec!["beta gamma", "alpha", "delta"]
        );
    }

    #[test]
    fn test_delimiter_is_literal() {
        let config = TagConfig::default().with_delimiter("|").unwrap();
        assert_eq!(parse_clean("a|b|c.d", &config), vec!["a", "b", "c.d"]);
    }

    #[test]
    fn test_split_keeps_blank_pieces_for_normalizer() {
        assert_eq!(parse("a,,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            parse_clean(r#"東京, "大阪, 京都""#, &TagConfig::default()),
            vec!["大阪, 京都", "東京"]
        );
    }

    #[test]
    fn test_generic_parser_ignores_quotes_and_delimiter() {
        let config = TagConfig::default().with_delimiter(";").unwrap();
        assert_eq!(
            GenericParser.parse(r#"a; b, "c, d""#, &config),
            vec!["a; b", "\"c", "d\""]
        );
    }

    #[test]
    fn test_parse_candidates_dispatches_on_parser_kind() {
        let config = TagConfig::default().with_parser(ParserKind::Generic);
        assert_eq!(parse_candidates(" x ,, y ", &config), vec!["x", "y"]);
    }
}
