//! Keyword classification over identifier-shaped words
//!
//! A rule table classifies most identifiers through a single pattern; the
//! matched text is then looked up in a word → class map built once from the
//! language's declared word groups. Lookup is case-sensitive and whole-token
//! (the identifier pattern already delimits token boundaries).
use crate::classes::TokenClass;
use std::collections::HashMap;

/// Builder declaring word groups in classification order.
///
/// Groups are declared in a fixed order; if a word appears in more than one
/// group, the first declaration wins.
#[derive(Debug)]
pub struct KeywordMapperBuilder {
    map: HashMap<&'static str, TokenClass>,
    default: TokenClass,
}

impl KeywordMapperBuilder {
    /// Create a builder with the fallback class for unlisted words
    pub fn new(default: TokenClass) -> Self {
        Self {
            map: HashMap::new(),
            default,
        }
    }

    /// Declare a word group under a classification
    pub fn map_words(mut self, class: TokenClass, words: &[&'static str]) -> Self {
        for word in words {
            self.map.entry(word).or_insert(class);
        }
        self
    }

    /// Build the immutable mapper
    pub fn build(self) -> KeywordMapper {
        KeywordMapper {
            map: self.map,
            default: self.default,
        }
    }
}

/// Immutable word → classification map with a defined default.
///
/// Classification is a total function over strings: no side effects, no
/// errors, O(1) lookup.
#[derive(Debug)]
pub struct KeywordMapper {
    map: HashMap<&'static str, TokenClass>,
    default: TokenClass,
}

impl KeywordMapper {
    /// Classify a matched word, falling back to the default class
    pub fn classify(&self, word: &str) -> TokenClass {
        self.map.get(word).copied().unwrap_or(self.default)
    }

    /// Get the fallback class
    pub fn default_class(&self) -> TokenClass {
        self.default
    }

    /// Number of distinct mapped words
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if no words are mapped
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_with_default() {
        let mapper = KeywordMapperBuilder::new(TokenClass::Identifier)
            .map_words(TokenClass::KeywordControl, &["if", "then", "else"])
            .map_words(TokenClass::ConstantLanguage, &["true", "false"])
            .build();

        assert_eq!(mapper.classify("if"), TokenClass::KeywordControl);
        assert_eq!(mapper.classify("true"), TokenClass::ConstantLanguage);
        assert_eq!(mapper.classify("banana"), TokenClass::Identifier);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mapper = KeywordMapperBuilder::new(TokenClass::Identifier)
            .map_words(TokenClass::KeywordControl, &["theorem"])
            .build();

        assert_eq!(mapper.classify("theorem"), TokenClass::KeywordControl);
        assert_eq!(mapper.classify("Theorem"), TokenClass::Identifier);
    }

    #[test]
    fn test_first_group_wins_on_overlap() {
        let mapper = KeywordMapperBuilder::new(TokenClass::Identifier)
            .map_words(TokenClass::KeywordControl, &["end"])
            .map_words(TokenClass::StorageType, &["end"])
            .build();

        assert_eq!(mapper.classify("end"), TokenClass::KeywordControl);
        assert_eq!(mapper.len(), 1);
    }

    #[test]
    fn test_empty_group_is_allowed() {
        let mapper = KeywordMapperBuilder::new(TokenClass::Identifier)
            .map_words(TokenClass::KeywordOperator, &[])
            .build();

        assert!(mapper.is_empty());
        assert_eq!(mapper.classify("and"), TokenClass::Identifier);
    }
}
