//! Document splitting
//!
//! A document is a flat sequence of sections separated by Markdown
//! asterisk horizontal rules. The rule line itself is discarded.

use regex::Regex;
use std::sync::LazyLock;

/// A line consisting solely of three or more asterisks
static RULE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mi)^\*{3,}$").unwrap());

/// Split a document on asterisk horizontal rules.
///
/// Content before the first rule is itself a block, so a document with
/// N rules always yields N+1 blocks, in document order. A document with
/// no rules yields a single block.
pub fn split_document(text: &str) -> Vec<&str> {
    RULE_RE.split(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rules_yields_single_block() {
        let blocks = split_document("## Start\nHello.\n");
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_n_rules_yield_n_plus_one_blocks() {
        let text = "intro\n***\n## One\na\n***\n## Two\nb\n***\n## Three\nc\n";
        let blocks = split_document(text);
        assert_eq!(blocks.len(), 4);
        assert!(blocks[0].contains("intro"));
        assert!(blocks[3].contains("Three"));
    }

    #[test]
    fn test_blocks_preserve_document_order() {
        let blocks = split_document("first\n***\nsecond\n***\nthird");
        assert_eq!(blocks[0].trim(), "first");
        assert_eq!(blocks[1].trim(), "second");
        assert_eq!(blocks[2].trim(), "third");
    }

    #[test]
    fn test_longer_rules_also_split() {
        let blocks = split_document("a\n**********\nb\n");
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_two_asterisks_are_not_a_rule() {
        let blocks = split_document("a\n**\nb\n");
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_rule_must_fill_the_line() {
        let blocks = split_document("a\n*** note\nb\n");
        assert_eq!(blocks.len(), 1);

        let blocks = split_document("a\nx***\nb\n");
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_empty_document() {
        let blocks = split_document("");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0], "");
    }

    #[test]
    fn test_leading_rule_yields_empty_first_block() {
        let blocks = split_document("***\n## Start\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "");
    }
}
