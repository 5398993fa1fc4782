//! Shared documentation-comment sub-table
//!
//! A language-independent sub-grammar for `/** ... */` documentation
//! comments. Language tables embed it under a namespace prefix and wire
//! [`end_rule`] back into their own state graph:
//!
//! ```
//! use hilite_core::rules::{doc_comment, HighlightRules, StateDef, START_STATE};
//!
//! let mut table = HighlightRules::new();
//! table.add_state(
//!     START_STATE,
//!     StateDef::new(vec![doc_comment::start_rule("doc-start")]),
//! );
//! table.embed(
//!     &doc_comment::rules(),
//!     "doc-",
//!     &[doc_comment::end_rule(START_STATE)],
//! );
//! assert!(table.validate().is_ok());
//! ```

use crate::classes::TokenClass;
use crate::rules::{HighlightRules, Rule, StateDef, START_STATE};

/// The doc-comment body rules: `@tag` annotations, TODO-style notes, and a
/// `comment.doc` default for everything else.
pub fn rules() -> HighlightRules {
    let mut table = HighlightRules::new();
    table.add_state(
        START_STATE,
        StateDef::new(vec![
            Rule::new(TokenClass::CommentDocTag, r"@[\w\d_]+"),
            note_rule(),
        ])
        .with_default(TokenClass::CommentDoc),
    );
    table
}

/// Highlighted note words inside doc comments, matched case-insensitively
pub fn note_rule() -> Rule {
    Rule::new(TokenClass::CommentDocNote, r"(?i)\b(?:TODO|FIXME|XXX|HACK)\b")
}

/// Opening rule for the embedding table's rule list.
///
/// Matches `/*` only when another `*` follows; the guard is not consumed,
/// so the body state sees it as doc-comment text.
pub fn start_rule(next: &str) -> Rule {
    Rule::new(TokenClass::CommentDoc, r"/\*")
        .followed_by(r"\*")
        .next(next)
}

/// Closing rule, prepended to every embedded state via
/// [`HighlightRules::embed`]
pub fn end_rule(next: &str) -> Rule {
    Rule::new(TokenClass::CommentDoc, r"\*/").next(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_table_is_well_formed() {
        assert!(rules().validate().is_ok());
    }

    #[test]
    fn test_start_rule_carries_guard() {
        let rule = start_rule("doc-start");
        assert_eq!(rule.followed_by.as_deref(), Some(r"\*"));
        assert_eq!(rule.next.as_deref(), Some("doc-start"));
    }
}
