//! Token classification labels for highlight output
//!
//! A classification is a dotted hierarchical label (a general category plus
//! an optional specialization) attached to a matched span. It is consumed by
//! a downstream styling layer; this crate never maps labels to colors.
use serde::{Deserialize, Serialize};

/// Dotted classification labels emitted by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenClass {
    // === COMMENTS ===
    Comment,
    CommentDoc,
    CommentDocTag,
    CommentDocNote,

    // === LITERALS ===
    String,
    ConstantNumeric,
    ConstantLanguage,
    ConstantOther,
    ConstantOtherMultiline,

    // === KEYWORDS AND STORAGE ===
    Keyword,
    KeywordControl,
    KeywordOperator,
    StorageType,
    StorageModifier,
    VariableLanguage,

    // === IDENTIFIERS, OPERATORS, PUNCTUATION ===
    Identifier,
    Operator,
    PunctuationOperator,
    ParenLparen,
    ParenRparen,

    // === FALLBACK ===
    Text,
}

impl TokenClass {
    /// Get the dotted label as consumed by styling layers
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::CommentDoc => "comment.doc",
            Self::CommentDocTag => "comment.doc.tag",
            Self::CommentDocNote => "comment.doc.tag.storage.type",
            Self::String => "string",
            Self::ConstantNumeric => "constant.numeric",
            Self::ConstantLanguage => "constant.language",
            Self::ConstantOther => "constant.other",
            Self::ConstantOtherMultiline => "constant.other.multiline",
            Self::Keyword => "keyword",
            Self::KeywordControl => "keyword.control",
            Self::KeywordOperator => "keyword.operator",
            Self::StorageType => "storage.type",
            Self::StorageModifier => "storage.modifier",
            Self::VariableLanguage => "variable.language",
            Self::Identifier => "identifier",
            Self::Operator => "operator",
            Self::PunctuationOperator => "punctuation.operator",
            Self::ParenLparen => "paren.lparen",
            Self::ParenRparen => "paren.rparen",
            Self::Text => "text",
        }
    }

    /// Parse a dotted label with exact matching
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "comment" => Some(Self::Comment),
            "comment.doc" => Some(Self::CommentDoc),
            "comment.doc.tag" => Some(Self::CommentDocTag),
            "comment.doc.tag.storage.type" => Some(Self::CommentDocNote),
            "string" => Some(Self::String),
            "constant.numeric" => Some(Self::ConstantNumeric),
            "constant.language" => Some(Self::ConstantLanguage),
            "constant.other" => Some(Self::ConstantOther),
            "constant.other.multiline" => Some(Self::ConstantOtherMultiline),
            "keyword" => Some(Self::Keyword),
            "keyword.control" => Some(Self::KeywordControl),
            "keyword.operator" => Some(Self::KeywordOperator),
            "storage.type" => Some(Self::StorageType),
            "storage.modifier" => Some(Self::StorageModifier),
            "variable.language" => Some(Self::VariableLanguage),
            "identifier" => Some(Self::Identifier),
            "operator" => Some(Self::Operator),
            "punctuation.operator" => Some(Self::PunctuationOperator),
            "paren.lparen" => Some(Self::ParenLparen),
            "paren.rparen" => Some(Self::ParenRparen),
            "text" => Some(Self::Text),
            _ => None,
        }
    }

    /// Get the general category (the label segment before the first dot)
    pub fn category(self) -> &'static str {
        let label = self.as_str();
        match label.find('.') {
            Some(idx) => &label[..idx],
            None => label,
        }
    }

    /// Check if this class labels comment text (plain or documentation)
    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            Self::Comment | Self::CommentDoc | Self::CommentDocTag | Self::CommentDocNote
        )
    }
}

impl std::fmt::Display for TokenClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
