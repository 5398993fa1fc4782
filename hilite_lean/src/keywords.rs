//! Lean word sets and the keyword classification selector
//!
//! Identifier-shaped words are classified through a word → class map built
//! once from the groups declared here. Group order is significant: the
//! first group containing a word decides its class, and anything unlisted
//! is a plain identifier.
use hilite_core::{KeywordMapper, KeywordMapperBuilder, TokenClass};
use std::sync::OnceLock;

/// The single reserved identifier treated as a distinguished language
/// variable
pub const LANGUAGE_VARIABLE: &str = "sorry";

/// Reserved control keywords
pub fn keyword_controls() -> &'static [&'static str] {
    &[
        "import",
        "reducible",
        "irreducible",
        "tactic_hint",
        "protected",
        "private",
        "opaque",
        "definition",
        "renaming",
        "hiding",
        "exposing",
        "parameter",
        "parameters",
        "begin",
        "proof",
        "qed",
        "conjecture",
        "constant",
        "constants",
        "example",
        "hypothesis",
        "lemma",
        "corollary",
        "variable",
        "variables",
        "print",
        "theorem",
        "context",
        "open",
        "as",
        "export",
        "axiom",
        "inductive",
        "with",
        "structure",
        "universe",
        "universes",
        "alias",
        "help",
        "environment",
        "options",
        "precedence",
        "postfix",
        "prefix",
        "calc_trans",
        "calc_subst",
        "calc_refl",
        "infix",
        "infixl",
        "infixr",
        "notation",
        "eval",
        "check",
        "exit",
        "coercion",
        "end",
        "using",
        "namespace",
        "instance",
        "class",
        "section",
        "set_option",
        "omit",
        "classes",
        "instances",
        "coercions",
        "raw",
        "add_rewrite",
        "extends",
        "calc",
        "have",
        "obtains",
        "show",
        "by",
        "in",
        "let",
        "forall",
        "fun",
        "exists",
        "if",
        "then",
        "else",
        "assume",
        "match",
        "take",
        "obtain",
        "from",
    ]
}

/// Storage type names (`Type₊` and friends never pass the identifier
/// pattern, but the words stay listed as authored)
pub fn storage_types() -> &'static [&'static str] {
    &["Prop", "Type", "Type'", "Type₊", "Type₁", "Type₂", "Type₃"]
}

/// Keyword-form operators; Lean has none, the group is declared empty
pub fn keyword_operators() -> &'static [&'static str] {
    &[]
}

/// Literal and boolean constants
pub fn builtin_constants() -> &'static [&'static str] {
    &["NULL", "true", "false", "TRUE", "FALSE"]
}

/// Attribute words allowed inside `[...]` storage-modifier annotations
pub fn storage_modifiers() -> &'static [&'static str] {
    &[
        "persistent",
        "notation",
        "visible",
        "instance",
        "class",
        "coercion",
        "reducible",
        "off",
        "none",
        "on",
    ]
}

/// Words opening a preprocessor directive line (`#endif` is special-cased
/// in the rule table and not listed here)
pub fn directive_words() -> &'static [&'static str] {
    &[
        "include", "import", "pragma", "line", "define", "undef", "if", "ifdef", "else", "elif",
        "ifndef",
    ]
}

/// Mathematical and logical operator glyphs and ASCII operator sequences.
///
/// Declared order is matching order: the first listed alternative wins, so
/// `==` must stay ahead of `=`.
pub fn operator_glyphs() -> &'static [&'static str] {
    &[
        "#", "@", "->", "∼", "↔", "/", "==", "=", ":=", "<->", r"/\", r"\/", "∧", "∨", "≠", "<",
        ">", "≤", "≥", "¬", "<=", ">=", "⁻¹", "⬝", "▸", "+", "*", "-", "λ", "→", "∃", "∀",
    ]
}

fn keyword_mapper() -> &'static KeywordMapper {
    static MAPPER: OnceLock<KeywordMapper> = OnceLock::new();
    MAPPER.get_or_init(|| {
        KeywordMapperBuilder::new(TokenClass::Identifier)
            .map_words(TokenClass::KeywordControl, keyword_controls())
            .map_words(TokenClass::StorageType, storage_types())
            .map_words(TokenClass::KeywordOperator, keyword_operators())
            .map_words(TokenClass::VariableLanguage, &[LANGUAGE_VARIABLE])
            .map_words(TokenClass::ConstantLanguage, builtin_constants())
            .build()
    })
}

/// Classify a word matched by the identifier pattern
pub fn classify_identifier(word: &str) -> TokenClass {
    keyword_mapper().classify(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_keywords() {
        for word in ["theorem", "namespace", "begin", "end", "fun", "match", "have", "show"] {
            assert_eq!(
                classify_identifier(word),
                TokenClass::KeywordControl,
                "{word} should be a control keyword"
            );
        }
    }

    #[test]
    fn test_storage_types() {
        assert_eq!(classify_identifier("Prop"), TokenClass::StorageType);
        assert_eq!(classify_identifier("Type"), TokenClass::StorageType);
        assert_eq!(classify_identifier("Type'"), TokenClass::StorageType);
    }

    #[test]
    fn test_language_variable() {
        assert_eq!(classify_identifier("sorry"), TokenClass::VariableLanguage);
    }

    #[test]
    fn test_builtin_constants() {
        for word in ["true", "false", "NULL", "TRUE", "FALSE"] {
            assert_eq!(classify_identifier(word), TokenClass::ConstantLanguage);
        }
    }

    #[test]
    fn test_plain_identifiers_fall_through() {
        for word in ["foo_bar'", "Theorem", "sorries", "truely", "x"] {
            assert_eq!(
                classify_identifier(word),
                TokenClass::Identifier,
                "{word} should be a plain identifier"
            );
        }
    }

    #[test]
    fn test_operator_keyword_group_is_empty() {
        assert!(keyword_operators().is_empty());
    }
}
