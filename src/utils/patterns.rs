// file: src/utils/patterns.rs
// description: compiled regex patterns for text cleanup, slugs and model output
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Document cleanup
    pub static ref LINE_ENDING: Regex = Regex::new(
        r"\r\n?"
    ).expect("LINE_ENDING regex is valid");

    pub static ref EXCESS_NEWLINES: Regex = Regex::new(
        r"\n{3,}"
    ).expect("EXCESS_NEWLINES regex is valid");

    // Markup
    pub static ref MARKUP_TAG: Regex = Regex::new(
        r"<[^>]*>"
    ).expect("MARKUP_TAG regex is valid");

    // Slugs and identifiers
    pub static ref NON_SLUG_CHAR: Regex = Regex::new(
        r"[^a-z0-9\s-]"
    ).expect("NON_SLUG_CHAR regex is valid");

    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s+"
    ).expect("WHITESPACE_RUN regex is valid");

    pub static ref HYPHEN_RUN: Regex = Regex::new(
        r"-+"
    ).expect("HYPHEN_RUN regex is valid");

    // Model output: leftmost bracketed span, greedy to the last closer
    pub static ref JSON_SPAN: Regex = Regex::new(
        r"(?s)\[.*\]|\{.*\}"
    ).expect("JSON_SPAN regex is valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_span_prefers_leftmost_bracket() {
        let text = "Here you go: [{\"a\": 1}, {\"b\": 2}] hope it helps";
        let found = JSON_SPAN.find(text).unwrap();
        assert_eq!(found.as_str(), "[{\"a\": 1}, {\"b\": 2}]");
    }

    #[test]
    fn test_json_span_object() {
        let text = "Result:\n{\"items\": []}\n";
        let found = JSON_SPAN.find(text).unwrap();
        assert_eq!(found.as_str(), "{\"items\": []}");
    }

    #[test]
    fn test_markup_tag() {
        assert_eq!(MARKUP_TAG.replace_all("<b>Water</b> boils", ""), "Water boils");
    }
}
