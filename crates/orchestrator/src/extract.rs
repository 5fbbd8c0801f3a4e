//! Best-effort verdict scan over free-text model output.
//!
//! Advisor instructions ask for exactly one `GREEN`/`YELLOW`/`RED` token,
//! but nothing guarantees it. The scan takes the first token by position
//! and falls back to `Unknown`. It never errors and is deliberately not
//! a parser.

use boardroom_core::Verdict;
use regex::Regex;

pub struct VerdictExtractor {
    pattern: Regex,
}

impl VerdictExtractor {
    pub fn new() -> Self {
        // Case-sensitive by contract: lowercase "green" is prose, not a verdict.
        let pattern = Regex::new(r"GREEN|YELLOW|RED").expect("Invalid verdict pattern");
        Self { pattern }
    }

    /// First token by position wins; `Unknown` when none appear.
    pub fn extract(&self, text: &str) -> Verdict {
        match self.pattern.find(text).map(|m| m.as_str()) {
            Some("GREEN") => Verdict::Green,
            Some("YELLOW") => Verdict::Yellow,
            Some("RED") => Verdict::Red,
            _ => Verdict::Unknown,
        }
    }
}

impl Default for VerdictExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_each_token() {
        let extractor = VerdictExtractor::new();
        assert_eq!(
            extractor.extract("**Technical Assessment: GREEN**"),
            Verdict::Green
        );
        assert_eq!(
            extractor.extract("**Product Readiness: YELLOW**"),
            Verdict::Yellow
        );
        assert_eq!(
            extractor.extract("**Financial Viability: RED**"),
            Verdict::Red
        );
    }

    #[test]
    fn test_first_match_by_position_wins() {
        let extractor = VerdictExtractor::new();
        assert_eq!(
            extractor.extract("Verdict: YELLOW (was nearly RED)"),
            Verdict::Yellow
        );
        assert_eq!(
            extractor.extract("RED flags everywhere, definitely not GREEN"),
            Verdict::Red
        );
    }

    #[test]
    fn test_missing_token_falls_back_to_unknown() {
        let extractor = VerdictExtractor::new();
        assert_eq!(
            extractor.extract("The idea seems fine overall."),
            Verdict::Unknown
        );
        assert_eq!(extractor.extract(""), Verdict::Unknown);
    }

    #[test]
    fn test_scan_is_case_sensitive() {
        let extractor = VerdictExtractor::new();
        assert_eq!(
            extractor.extract("a green light from the team"),
            Verdict::Unknown
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = VerdictExtractor::new();
        let text = "Some framing... YELLOW ... more text ... RED";
        let first = extractor.extract(text);
        let second = extractor.extract(text);
        assert_eq!(first, second);
        assert_eq!(first, Verdict::Yellow);
    }

    #[test]
    fn test_token_inside_a_longer_word_still_matches() {
        // The contract is a plain substring scan, not word boundaries.
        let extractor = VerdictExtractor::new();
        assert_eq!(extractor.extract("EVERGREEN business"), Verdict::Green);
    }
}
