//! Lean highlight rule table for the hilite tokenizer engine
//!
//! Supplies the rule table only; the engine that walks it lives in
//! `hilite_core`. Hosts register [`rules::highlight_rules`] (or the shared
//! compiled [`rules::tokenizer`]) under [`rules::LANGUAGE`] and drive it
//! line by line.

// Internal modules
pub mod keywords;
pub mod rules;

// Re-export key items for library consumers
pub use keywords::classify_identifier;
pub use rules::{highlight_rules, tokenizer, FILE_EXTENSIONS, LANGUAGE};
