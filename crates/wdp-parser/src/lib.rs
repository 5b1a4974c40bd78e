//! wikidata-people Parser - N-Triples line parsing
//!
//! Reads gzip-compressed N-Triples dumps line by line and turns each
//! line into a normalized [`Triple`]:
//! - surrounding whitespace, angle brackets and the trailing ` .` are removed
//! - the line is split on single spaces at most twice
//! - known URI prefixes are stripped from every field
//!
//! Lines that do not split into exactly three fields are reported as
//! [`ParseOutcome::Malformed`] rather than raising an error.

pub mod source;

pub use source::{open_dump, read_lines, DumpReader, Lines};

use wdp_core::{ParserConfig, Triple};

/// Characters trimmed from both ends of a raw line
fn is_line_trim(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '.')
}

/// Characters trimmed from both ends of each field
fn is_field_trim(c: char) -> bool {
    matches!(c, ' ' | '\r' | '<' | '>')
}

// ============================================================================
// Parse Outcome
// ============================================================================

/// Result of parsing a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The line split into exactly three fields
    Triple(Triple),
    /// Any other field count; carries the normalized parts for diagnostics
    Malformed(Vec<String>),
}

// ============================================================================
// Triple Parser
// ============================================================================

/// Line parser with a fixed list of URI prefixes to strip
#[derive(Debug, Clone)]
pub struct TripleParser {
    prefixes: Vec<String>,
}

impl TripleParser {
    /// Create a parser stripping the given prefixes, in order
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(Into::<String>::into)
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Create a parser from configuration
    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new(config.strip_prefixes.iter().cloned())
    }

    /// Parse one decompressed line
    pub fn parse_line(&self, line: &str) -> ParseOutcome {
        let parts: Vec<String> = line
            .trim_matches(is_line_trim)
            .splitn(3, ' ')
            .map(|field| self.normalize(field))
            .collect();

        match <[String; 3]>::try_from(parts) {
            Ok([subject, predicate, object]) => ParseOutcome::Triple(Triple {
                subject,
                predicate,
                object,
            }),
            Err(parts) => ParseOutcome::Malformed(parts),
        }
    }

    /// Trim a single field and remove every occurrence of each prefix
    fn normalize(&self, field: &str) -> String {
        let mut value = field.trim_matches(is_field_trim).to_string();
        for prefix in &self.prefixes {
            if value.contains(prefix.as_str()) {
                value = value.replace(prefix.as_str(), "");
            }
        }
        value
    }
}

impl Default for TripleParser {
    fn default() -> Self {
        Self::from_config(&ParserConfig::default())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn triple(s: &str, p: &str, o: &str) -> ParseOutcome {
        ParseOutcome::Triple(Triple::new(s, p, o))
    }

    #[test]
    fn test_parse_wikidata_line() {
        let parser = TripleParser::default();
        let line = "<http://www.wikidata.org/entity/Q1> <http://www.wikidata.org/prop/direct/P19> <http://www.wikidata.org/entity/Q2> .";
        assert_eq!(parser.parse_line(line), triple("Q1", "P19", "Q2"));
    }

    #[test]
    fn test_parse_crlf_line() {
        let parser = TripleParser::default();
        let line = "<http://www.wikidata.org/entity/Q42> <http://www.wikidata.org/prop/direct/P26> <http://www.wikidata.org/entity/Q14623681> .\r\n";
        assert_eq!(parser.parse_line(line), triple("Q42", "P26", "Q14623681"));
    }

    #[test]
    fn test_parse_literal_object_with_spaces() {
        let parser = TripleParser::default();
        assert_eq!(
            parser.parse_line("<Q1> <P21> \"some text\" ."),
            triple("Q1", "P21", "\"some text\"")
        );
    }

    #[test]
    fn test_parse_language_tagged_literal() {
        let parser = TripleParser::default();
        let line = "<http://www.wikidata.org/entity/Q42> <http://schema.org/name> \"Douglas Adams\"@en .";
        assert_eq!(
            parser.parse_line(line),
            triple("Q42", "http://schema.org/name", "\"Douglas Adams\"@en")
        );
    }

    #[test]
    fn test_malformed_lines() {
        let parser = TripleParser::default();

        assert_eq!(
            parser.parse_line(""),
            ParseOutcome::Malformed(vec![String::new()])
        );
        assert_eq!(
            parser.parse_line("<http://www.wikidata.org/entity/Q1> <P19> ."),
            ParseOutcome::Malformed(vec!["Q1".to_string(), "P19".to_string()])
        );
        assert!(matches!(
            parser.parse_line("# comment"),
            ParseOutcome::Malformed(_)
        ));
    }

    #[test]
    fn test_double_space_yields_empty_field() {
        let parser = TripleParser::default();
        // A double space splits off an empty predicate; the rest stays in the object
        assert_eq!(
            parser.parse_line("<Q1>  <P19> <Q2> ."),
            triple("Q1", "", "P19> <Q2")
        );
    }

    #[test]
    fn test_prefix_stripped_anywhere() {
        let parser = TripleParser::default();
        let line = "<http://www.wikidata.org/entity/Q1> <http://www.wikidata.org/prop/direct/P40> <http://example.org/http://www.wikidata.org/entity/Q7> .";
        assert_eq!(
            parser.parse_line(line),
            triple("Q1", "P40", "http://example.org/Q7")
        );
    }

    #[test]
    fn test_custom_prefixes() {
        // Empty prefixes are ignored
        let parser = TripleParser::new(["http://example.org/", ""]);
        assert_eq!(
            parser.parse_line("<http://example.org/a> <http://example.org/b> <http://www.wikidata.org/entity/Q2> ."),
            triple("a", "b", "http://www.wikidata.org/entity/Q2")
        );
    }

    proptest! {
        #[test]
        fn prop_three_fields_parse(
            s in "[A-Za-z0-9]{1,12}",
            p in "[A-Za-z0-9]{1,12}",
            o in "[A-Za-z0-9]{1,12}"
        ) {
            let parser = TripleParser::default();
            let line = format!(
                "<http://www.wikidata.org/entity/{s}> <http://www.wikidata.org/prop/direct/{p}> <http://www.wikidata.org/entity/{o}> ."
            );
            prop_assert_eq!(parser.parse_line(&line), triple(&s, &p, &o));
        }

        #[test]
        fn prop_object_keeps_inner_spaces(
            s in "[A-Za-z0-9]{1,12}",
            words in prop::collection::vec("[a-z]{1,8}", 1..6)
        ) {
            let parser = TripleParser::default();
            let literal = format!("\"{}\"", words.join(" "));
            let line = format!("<{s}> <P21> {literal} .");
            prop_assert_eq!(parser.parse_line(&line), triple(&s, "P21", &literal));
        }

        #[test]
        fn prop_short_lines_are_malformed(
            fields in prop::collection::vec("[A-Za-z0-9]{1,12}", 1..3)
        ) {
            let parser = TripleParser::default();
            let line = fields
                .iter()
                .map(|f| format!("<{f}>"))
                .collect::<Vec<_>>()
                .join(" ");
            let outcome = parser.parse_line(&format!("{line} ."));
            prop_assert_eq!(outcome, ParseOutcome::Malformed(fields));
        }
    }
}
