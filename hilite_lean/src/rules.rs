//! The Lean highlight rule table
//!
//! Declares the scanning states for Lean source: the `start` state, the
//! block-comment and string-continuation states, the preprocessor-directive
//! state, and the embedded documentation-comment sub-grammar. The table is
//! built once, compiled, and shared read-only by every engine invocation.
//!
//! Rule order within a state is matching order and is preserved from the
//! authored table, including the block-comment closing text `-/` exactly as
//! written.

use crate::keywords::{
    classify_identifier, directive_words, operator_glyphs, storage_modifiers,
};
use hilite_core::rules::{doc_comment, literal_alternation};
use hilite_core::{HighlightRules, Rule, StateDef, TokenClass, Tokenizer, START_STATE};
use log::debug;
use std::sync::OnceLock;

/// Language name for host-side registration
pub const LANGUAGE: &str = "lean";

/// File extensions hosts typically map to this table (the mapping itself
/// is maintained by the host)
pub const FILE_EXTENSIONS: &[&str] = &["lean"];

/// Identifier pattern: Unicode letter start, then letters, digits, marks,
/// and the apostrophe. The ranges cover Greek letters (excluding λ, which
/// stays an operator), polytonic Greek, sub-/superscripts, and letterlike
/// symbols.
const IDENTIFIER_PATTERN: &str = "[A-Za-z_\u{3b1}-\u{3ba}\u{3bc}-\u{3fb}\u{1f00}-\u{1ffe}\u{2100}-\u{214f}][A-Za-z0-9_'\u{3b1}-\u{3ba}\u{3bc}-\u{3fb}\u{1f00}-\u{1ffe}\u{2070}-\u{2079}\u{207f}-\u{2089}\u{2090}-\u{209c}\u{2100}-\u{214f}]*";

/// C-style numeric suffix letters accepted after hex and decimal literals
const NUMERIC_SUFFIX: &str = "(?:L|l|UL|ul|u|U|F|f|ll|LL|ull|ULL)?";

/// Build the Lean rule table.
///
/// Plain declarative data: callers hand the result to the engine via
/// [`HighlightRules::compile`], or use the shared [`tokenizer`].
pub fn highlight_rules() -> HighlightRules {
    let mut table = HighlightRules::new();

    table.add_state(
        START_STATE,
        StateDef::new(vec![
            // Line comment to end of line.
            Rule::new(TokenClass::Comment, r"--.*$"),
            doc_comment::start_rule("doc-start"),
            // Block comment body is scanned in its own state.
            Rule::new(TokenClass::Comment, r"/-").next("comment"),
            // Single-line double-quoted string.
            Rule::new(TokenClass::String, r#"["](?:(?:\\.)|(?:[^"\\]))*?["]"#),
            // Line ending in a backslash inside quotes continues the string.
            Rule::new(TokenClass::String, r#"["].*\\$"#).next("qqstring"),
            Rule::new(TokenClass::String, r"['](?:(?:\\.)|(?:[^'\\]))*?[']"),
            Rule::new(TokenClass::String, r"['].*\\$").next("qstring"),
            Rule::new(
                TokenClass::ConstantNumeric,
                format!(r"0[xX][0-9a-fA-F]+{NUMERIC_SUFFIX}\b"),
            ),
            Rule::new(
                TokenClass::ConstantNumeric,
                format!(r"[+-]?\d+(?:(?:\.\d*)?(?:[eE][+-]?\d+)?)?{NUMERIC_SUFFIX}\b"),
            ),
            Rule::new(
                TokenClass::StorageModifier,
                format!(r"\[(?:{})\]", literal_alternation(storage_modifiers())),
            ),
            Rule::new(
                TokenClass::Keyword,
                format!(r"#\s*(?:{})\b", literal_alternation(directive_words())),
            )
            .next("directive"),
            // Bare #endif closes a directive without opening one.
            Rule::new(TokenClass::Keyword, r"(?:#\s*endif)\b"),
            Rule::classify(classify_identifier, IDENTIFIER_PATTERN),
            Rule::new(TokenClass::Operator, literal_alternation(operator_glyphs())),
            Rule::new(TokenClass::PunctuationOperator, r"\?|:|,|;|\."),
            Rule::new(TokenClass::ParenLparen, r"[\[({]"),
            Rule::new(TokenClass::ParenRparen, r"[\])}]"),
            Rule::new(TokenClass::Text, r"\s+"),
        ]),
    );

    table.add_state(
        "comment",
        StateDef::new(vec![
            // First textual terminator closes the block; nesting is not
            // tracked.
            Rule::new(TokenClass::Comment, r".*?-/").next(START_STATE),
            Rule::new(TokenClass::Comment, r".+"),
        ]),
    );

    table.add_state(
        "qqstring",
        StateDef::new(vec![
            Rule::new(TokenClass::String, r#"(?:(?:\\.)|(?:[^"\\]))*?""#).next(START_STATE),
            Rule::new(TokenClass::String, r".+"),
        ]),
    );

    table.add_state(
        "qstring",
        StateDef::new(vec![
            Rule::new(TokenClass::String, r"(?:(?:\\.)|(?:[^'\\]))*?'").next(START_STATE),
            Rule::new(TokenClass::String, r".+"),
        ]),
    );

    table.add_state(
        "directive",
        StateDef::new(vec![
            // A backslash implies line continuation, a slash would start a
            // comment; both end the plain-content rule below.
            Rule::new(TokenClass::ConstantOtherMultiline, r"\\"),
            Rule::new(TokenClass::ConstantOtherMultiline, r".*\\"),
            Rule::new(TokenClass::ConstantOther, r"\s*<.+?>").next(START_STATE),
            Rule::new(TokenClass::ConstantOther, r#"\s*["](?:(?:\\.)|(?:[^"\\]))*?["]"#)
                .next(START_STATE),
            Rule::new(TokenClass::ConstantOther, r"\s*['](?:(?:\\.)|(?:[^'\\]))*?[']")
                .next(START_STATE),
            Rule::new(TokenClass::ConstantOther, r"[^\\/]+").next(START_STATE),
        ]),
    );

    table.embed(
        &doc_comment::rules(),
        "doc-",
        &[doc_comment::end_rule(START_STATE)],
    );

    table
}

/// The compiled Lean table, built eagerly on first use and shared by all
/// engine invocations.
pub fn tokenizer() -> &'static Tokenizer {
    static TOKENIZER: OnceLock<Tokenizer> = OnceLock::new();
    TOKENIZER.get_or_init(|| {
        debug!("compiling {LANGUAGE} highlight rules");
        highlight_rules()
            .compile()
            .expect("lean highlight rules are well-formed")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilite_core::LineTokens;

    fn classes(line: &LineTokens) -> Vec<TokenClass> {
        line.tokens.iter().map(|t| t.class).collect()
    }

    fn texts(line: &LineTokens) -> Vec<&str> {
        line.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_table_compiles_and_declares_all_states() {
        let table = highlight_rules();
        assert!(table.validate().is_ok());
        for state in ["start", "comment", "qqstring", "qstring", "directive", "doc-start"] {
            assert!(table.state(state).is_some(), "missing state {state}");
        }
    }

    #[test]
    fn test_line_comment_spans_to_end_of_line() {
        let line = tokenizer().tokenize_line("-- comment text", START_STATE);
        assert_eq!(classes(&line), vec![TokenClass::Comment]);
        assert_eq!(line.tokens[0].text, "-- comment text");
        assert_eq!(line.end_state, START_STATE);
    }

    #[test]
    fn test_block_comment_closes_at_first_terminator() {
        let line = tokenizer().tokenize_line("/- a /- nested -/ still open", START_STATE);
        assert_eq!(line.end_state, START_STATE);
        assert_eq!(line.tokens[0].class, TokenClass::Comment);
        assert_eq!(line.tokens[0].text, "/- a /- nested -/");
        assert_eq!(
            classes(&line)[1..],
            [
                TokenClass::Text,
                TokenClass::Identifier,
                TokenClass::Text,
                TokenClass::Identifier,
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment_carries_state() {
        let lines = tokenizer().tokenize("/- first\nsecond\nclosed -/ end");
        assert_eq!(lines[0].end_state, "comment");
        assert_eq!(classes(&lines[1]), vec![TokenClass::Comment]);
        assert_eq!(lines[1].end_state, "comment");
        assert_eq!(lines[2].end_state, START_STATE);
        assert_eq!(lines[2].tokens[0].text, "closed -/");
        assert_eq!(*classes(&lines[2]).last().unwrap(), TokenClass::KeywordControl);
    }

    #[test]
    fn test_single_line_strings() {
        let line = tokenizer().tokenize_line(r#""hi \" there" 'x'"#, START_STATE);
        assert_eq!(
            classes(&line),
            vec![TokenClass::String, TokenClass::Text, TokenClass::String]
        );
        assert_eq!(line.tokens[0].text, r#""hi \" there""#);
    }

    #[test]
    fn test_double_quote_continuation() {
        let lines = tokenizer().tokenize("\"hello\\\nworld\"");
        assert_eq!(lines[0].end_state, "qqstring");
        assert_eq!(classes(&lines[0]), vec![TokenClass::String]);
        assert_eq!(lines[1].end_state, START_STATE);
        assert_eq!(texts(&lines[1]), vec!["world\""]);
        assert_eq!(lines[1].tokens[0].class, TokenClass::String);
    }

    #[test]
    fn test_single_quote_continuation_retains_state() {
        let lines = tokenizer().tokenize("'abc\\\nstill going\ndone'");
        assert_eq!(lines[0].end_state, "qstring");
        // A line without the closing quote stays in the string.
        assert_eq!(classes(&lines[1]), vec![TokenClass::String]);
        assert_eq!(lines[1].end_state, "qstring");
        assert_eq!(lines[2].end_state, START_STATE);
    }

    #[test]
    fn test_numeric_literals_match_in_one_token() {
        let float = tokenizer().tokenize_line("3.14e-10f", START_STATE);
        assert_eq!(classes(&float), vec![TokenClass::ConstantNumeric]);
        assert_eq!(float.tokens[0].text, "3.14e-10f");

        let hex = tokenizer().tokenize_line("0xFFul", START_STATE);
        assert_eq!(classes(&hex), vec![TokenClass::ConstantNumeric]);
        assert_eq!(hex.tokens[0].text, "0xFFul");
    }

    #[test]
    fn test_storage_modifier_annotation_is_one_token() {
        let line = tokenizer().tokenize_line("[persistent]", START_STATE);
        assert_eq!(classes(&line), vec![TokenClass::StorageModifier]);
        assert_eq!(line.tokens[0].text, "[persistent]");
    }

    #[test]
    fn test_unlisted_attribute_word_falls_through_to_brackets() {
        let line = tokenizer().tokenize_line("[banana]", START_STATE);
        assert_eq!(
            classes(&line),
            vec![
                TokenClass::ParenLparen,
                TokenClass::Identifier,
                TokenClass::ParenRparen,
            ]
        );
    }

    #[test]
    fn test_include_directive_round_trips_through_directive_state() {
        let line = tokenizer().tokenize_line("#include <foo.h>", START_STATE);
        assert_eq!(line.end_state, START_STATE);
        assert_eq!(
            classes(&line),
            vec![TokenClass::Keyword, TokenClass::ConstantOther]
        );
        assert_eq!(line.tokens[1].text, " <foo.h>");
    }

    #[test]
    fn test_directive_continuation_line_stays_in_directive() {
        let line = tokenizer().tokenize_line("#define X \\", START_STATE);
        assert_eq!(line.end_state, "directive");
        assert_eq!(
            classes(&line),
            vec![TokenClass::Keyword, TokenClass::ConstantOtherMultiline]
        );
    }

    #[test]
    fn test_quoted_include_target() {
        let line = tokenizer().tokenize_line("#include \"foo.h\"", START_STATE);
        assert_eq!(line.end_state, START_STATE);
        assert_eq!(line.tokens[1].class, TokenClass::ConstantOther);
    }

    #[test]
    fn test_bare_endif_does_not_transition() {
        let line = tokenizer().tokenize_line("#endif", START_STATE);
        assert_eq!(classes(&line), vec![TokenClass::Keyword]);
        assert_eq!(line.end_state, START_STATE);
    }

    #[test]
    fn test_definition_line_classifications() {
        let line = tokenizer().tokenize_line("theorem foo : Prop := sorry", START_STATE);
        assert_eq!(
            classes(&line),
            vec![
                TokenClass::KeywordControl,
                TokenClass::Text,
                TokenClass::Identifier,
                TokenClass::Text,
                TokenClass::PunctuationOperator,
                TokenClass::Text,
                TokenClass::StorageType,
                TokenClass::Text,
                TokenClass::Operator,
                TokenClass::Text,
                TokenClass::VariableLanguage,
            ]
        );
        assert_eq!(line.tokens[8].text, ":=");
    }

    #[test]
    fn test_operator_glyphs_and_lambda() {
        let line = tokenizer().tokenize_line("λ x, x → x", START_STATE);
        assert_eq!(line.tokens[0].class, TokenClass::Operator);
        assert_eq!(line.tokens[0].text, "λ");
        let arrow = line.tokens.iter().find(|t| t.text == "→").unwrap();
        assert_eq!(arrow.class, TokenClass::Operator);
        let comma = line.tokens.iter().find(|t| t.text == ",").unwrap();
        assert_eq!(comma.class, TokenClass::PunctuationOperator);
    }

    #[test]
    fn test_primed_identifier_is_one_token() {
        let line = tokenizer().tokenize_line("foo_bar'", START_STATE);
        assert_eq!(classes(&line), vec![TokenClass::Identifier]);
        assert_eq!(line.tokens[0].text, "foo_bar'");
    }

    #[test]
    fn test_doc_comment_embedding() {
        let line = tokenizer().tokenize_line("/** @author TODO fix */ fun", START_STATE);
        assert_eq!(line.end_state, START_STATE);
        assert_eq!(
            classes(&line),
            vec![
                TokenClass::CommentDoc,
                TokenClass::CommentDocTag,
                TokenClass::CommentDoc,
                TokenClass::CommentDocNote,
                TokenClass::CommentDoc,
                TokenClass::Text,
                TokenClass::KeywordControl,
            ]
        );
    }

    #[test]
    fn test_unclosed_doc_comment_carries_state() {
        let lines = tokenizer().tokenize("/** open\nstill doc */ end");
        assert_eq!(lines[0].end_state, "doc-start");
        assert_eq!(lines[1].end_state, START_STATE);
        assert_eq!(lines[1].tokens[0].class, TokenClass::CommentDoc);
    }

    #[test]
    fn test_plain_slash_star_is_not_a_doc_comment() {
        // Without the second `*` the doc start rule must not fire; `/` is
        // an operator and `*` follows separately.
        let line = tokenizer().tokenize_line("/* x", START_STATE);
        assert_eq!(line.tokens[0].class, TokenClass::Operator);
        assert_eq!(line.end_state, START_STATE);
    }

    #[test]
    fn test_tokenization_terminates_on_arbitrary_input() {
        let junk = "∄∄∄ \u{1}\u{2} \"unclosed λλ /- -- #nonsense ⟨⟩";
        for line in tokenizer().tokenize(junk) {
            let total: usize = line.tokens.iter().map(|t| t.text.len()).sum();
            assert!(total > 0);
        }
    }
}
