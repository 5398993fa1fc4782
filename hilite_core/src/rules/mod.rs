//! Highlight rule table model
//!
//! A rule table is a named, ordered set of states; each state is an ordered
//! list of pattern rules tried first-match-wins by the tokenizer engine. The
//! table is plain declarative data: a language crate builds one with
//! [`HighlightRules`], optionally embeds shared sub-tables, and hands it to
//! the engine via [`HighlightRules::compile`]. Tables never override engine
//! behavior, they only supply data.

pub mod doc_comment;

use crate::classes::TokenClass;
use crate::tokenizer::Tokenizer;

/// Name of the designated initial state of every rule table.
pub const START_STATE: &str = "start";

/// Classifier signature for rules that classify by matched text
pub type ClassifierFn = fn(&str) -> TokenClass;

/// How a rule labels the span it matched
#[derive(Debug, Clone, Copy)]
pub enum RuleAction {
    /// Always emit the same classification
    Class(TokenClass),
    /// Classify from the matched text (keyword selector lookup)
    Classify(ClassifierFn),
}

/// A single pattern rule: classification action, matching pattern, and an
/// optional transition to another state.
///
/// Patterns are regular expressions matched at the current scan position.
/// They must not contain capturing groups; use `(?:...)` so rules compose
/// when merged into other tables. The optional `followed_by` pattern is a
/// zero-width constraint on the text immediately after the match, checked
/// without consuming it.
#[derive(Debug, Clone)]
pub struct Rule {
    pub action: RuleAction,
    pub pattern: String,
    pub next: Option<String>,
    pub followed_by: Option<String>,
}

impl Rule {
    /// Create a rule with a fixed classification
    pub fn new(class: TokenClass, pattern: impl Into<String>) -> Self {
        Self {
            action: RuleAction::Class(class),
            pattern: pattern.into(),
            next: None,
            followed_by: None,
        }
    }

    /// Create a rule classified from the matched text
    pub fn classify(classifier: ClassifierFn, pattern: impl Into<String>) -> Self {
        Self {
            action: RuleAction::Classify(classifier),
            pattern: pattern.into(),
            next: None,
            followed_by: None,
        }
    }

    /// Transition to the named state after this rule matches
    pub fn next(mut self, state: &str) -> Self {
        self.next = Some(state.to_string());
        self
    }

    /// Require the match to be followed by this pattern (not consumed)
    pub fn followed_by(mut self, pattern: impl Into<String>) -> Self {
        self.followed_by = Some(pattern.into());
        self
    }
}

/// A named scanning mode: an ordered rule list plus the class given to
/// input no rule matches.
#[derive(Debug, Clone, Default)]
pub struct StateDef {
    pub rules: Vec<Rule>,
    pub default_class: Option<TokenClass>,
}

impl StateDef {
    /// Create a state from its ordered rule list
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            default_class: None,
        }
    }

    /// Set the class for unmatched input (engine default is `text`)
    pub fn with_default(mut self, class: TokenClass) -> Self {
        self.default_class = Some(class);
        self
    }
}

/// An ordered map of named states forming one language's rule table.
///
/// Built once at initialization and immutable afterwards; the compiled form
/// is shared read-only by every engine invocation.
#[derive(Debug, Clone, Default)]
pub struct HighlightRules {
    states: Vec<(String, StateDef)>,
}

impl HighlightRules {
    /// Create an empty table
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Add or replace a named state
    pub fn add_state(&mut self, name: &str, state: StateDef) -> &mut Self {
        if let Some(entry) = self.states.iter_mut().find(|(n, _)| n == name) {
            entry.1 = state;
        } else {
            self.states.push((name.to_string(), state));
        }
        self
    }

    /// Look up a state by name
    pub fn state(&self, name: &str) -> Option<&StateDef> {
        self.states
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    /// Iterate states in declaration order
    pub fn states(&self) -> impl Iterator<Item = (&str, &StateDef)> {
        self.states.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Names of all declared states, in declaration order
    pub fn state_names(&self) -> Vec<&str> {
        self.states.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Merge a foreign table into this one under a namespace prefix.
    ///
    /// Every foreign state `S` is copied in as `{prefix}{S}` with its
    /// internal transitions remapped under the prefix. The given escape
    /// rules are prepended to each copied state; their `next` targets are
    /// left untouched so they wire the sub-grammar's exits back into this
    /// table (typically to `start`).
    pub fn embed(&mut self, foreign: &HighlightRules, prefix: &str, escape_rules: &[Rule]) {
        for (name, def) in &foreign.states {
            let mut rules = Vec::with_capacity(escape_rules.len() + def.rules.len());
            rules.extend(escape_rules.iter().cloned());
            for rule in &def.rules {
                let mut rule = rule.clone();
                if let Some(next) = rule.next.take() {
                    rule.next = Some(format!("{prefix}{next}"));
                }
                rules.push(rule);
            }
            let state = StateDef {
                rules,
                default_class: def.default_class,
            };
            self.add_state(&format!("{prefix}{name}"), state);
        }
    }

    /// Validate the table without keeping the compiled form
    pub fn validate(&self) -> Result<(), RulesError> {
        self.compile().map(|_| ())
    }

    /// Compile the table for the tokenizer engine
    pub fn compile(&self) -> Result<Tokenizer, RulesError> {
        Tokenizer::compile(self)
    }
}

/// Join literal alternatives into one alternation pattern, escaping regex
/// metacharacters.
///
/// Declared order is preserved; the engine matches the first alternative
/// that succeeds, so earlier entries shadow later prefixes.
pub fn literal_alternation(alternatives: &[&str]) -> String {
    alternatives
        .iter()
        .map(|alt| regex::escape(alt))
        .collect::<Vec<_>>()
        .join("|")
}

/// Authoring defects detected when compiling a rule table.
///
/// These are build-time errors in the table itself; tokenization of source
/// text is total and never fails.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("rule table has no 'start' state")]
    MissingStartState,

    #[error("state '{state}' rule {index} transitions to undefined state '{next}'")]
    UndefinedNextState {
        state: String,
        index: usize,
        next: String,
    },

    #[error("state '{state}' rule {index} pattern `{pattern}` has a capturing group; use (?:...) instead")]
    CapturingGroup {
        state: String,
        index: usize,
        pattern: String,
    },

    #[error("state '{state}' rule {index} pattern `{pattern}` failed to compile: {source}")]
    BadPattern {
        state: String,
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
