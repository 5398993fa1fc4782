//! Rule-table model and tokenizer engine for editor syntax highlighting
//!
//! A language crate declares a [`rules::HighlightRules`] table: named states,
//! each an ordered list of pattern rules mapping matched spans to
//! [`classes::TokenClass`] labels, with optional transitions between states.
//! Compiling the table yields a [`tokenizer::Tokenizer`] that walks source
//! text line by line, first-match-wins, and emits classified tokens for a
//! downstream styling layer.

// Internal modules
pub mod classes;
pub mod keywords;
pub mod rules;
pub mod tokenizer;

// Re-export key types for library consumers
pub use classes::TokenClass;
pub use keywords::{KeywordMapper, KeywordMapperBuilder};
pub use rules::{HighlightRules, Rule, RuleAction, RulesError, StateDef, START_STATE};
pub use tokenizer::{LineTokens, Token, Tokenizer};
