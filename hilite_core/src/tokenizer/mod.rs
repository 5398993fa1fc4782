//! Rule-dispatch tokenizer engine
//!
//! Consumes a compiled rule table line by line. For each line the engine
//! tries the current state's rules in declared order, emits a token for the
//! first pattern matching at the scan position, advances past the match, and
//! follows the rule's state transition if it names one. Input no rule
//! matches is consumed one character at a time under the state's default
//! class, so tokenization always terminates and never fails.

use crate::classes::TokenClass;
use crate::rules::{HighlightRules, RuleAction, RulesError, START_STATE};
use log::{debug, trace};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A classified span of one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Classification for downstream styling
    pub class: TokenClass,
    /// The matched text
    pub text: String,
    /// Byte offset of the span within its line
    pub start: usize,
}

impl Token {
    /// Byte offset one past the end of the span
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Tokens for one line plus the state the next line starts in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTokens {
    pub tokens: Vec<Token>,
    pub end_state: String,
}

/// A rule with its patterns compiled and anchored at the scan position
#[derive(Debug)]
struct CompiledRule {
    regex: Regex,
    followed_by: Option<Regex>,
    action: RuleAction,
    next: Option<String>,
}

#[derive(Debug)]
struct CompiledState {
    rules: Vec<CompiledRule>,
    default_class: TokenClass,
}

/// Compiled, immutable form of a rule table.
///
/// Holds no scan position itself; each [`Tokenizer::tokenize_line`] call
/// carries its own cursor, so one compiled table may be shared read-only
/// across any number of documents.
#[derive(Debug)]
pub struct Tokenizer {
    states: HashMap<String, CompiledState>,
}

impl Tokenizer {
    /// Compile a rule table, validating the authoring invariants: patterns
    /// must compile, must contain no capturing groups, every transition
    /// must name a defined state, and `start` must exist.
    pub fn compile(table: &HighlightRules) -> Result<Self, RulesError> {
        if table.state(START_STATE).is_none() {
            return Err(RulesError::MissingStartState);
        }

        let mut states = HashMap::new();
        for (name, def) in table.states() {
            let mut rules = Vec::with_capacity(def.rules.len());
            for (index, rule) in def.rules.iter().enumerate() {
                if let Some(next) = &rule.next {
                    if table.state(next).is_none() {
                        return Err(RulesError::UndefinedNextState {
                            state: name.to_string(),
                            index,
                            next: next.clone(),
                        });
                    }
                }
                let regex = compile_pattern(name, index, &rule.pattern)?;
                let followed_by = rule
                    .followed_by
                    .as_deref()
                    .map(|pattern| compile_pattern(name, index, pattern))
                    .transpose()?;
                rules.push(CompiledRule {
                    regex,
                    followed_by,
                    action: rule.action,
                    next: rule.next.clone(),
                });
            }
            states.insert(
                name.to_string(),
                CompiledState {
                    rules,
                    default_class: def.default_class.unwrap_or(TokenClass::Text),
                },
            );
        }

        debug!("compiled highlight rule table with {} states", states.len());
        Ok(Self { states })
    }

    /// Check whether a state is defined in this table
    pub fn has_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Tokenize one line starting from the given state.
    ///
    /// An unknown incoming state falls back to `start`, matching how host
    /// engines recover when a document's cached state is stale.
    pub fn tokenize_line(&self, line: &str, state: &str) -> LineTokens {
        let mut current = if self.states.contains_key(state) {
            state.to_string()
        } else {
            START_STATE.to_string()
        };

        let mut tokens: Vec<Token> = Vec::new();
        let mut pos = 0;
        while pos < line.len() {
            let state_def = &self.states[&current];
            let rest = &line[pos..];

            let mut advanced = None;
            for rule in &state_def.rules {
                let m = match rule.regex.find(rest) {
                    Some(m) => m,
                    None => continue,
                };
                // Zero-width matches cannot advance the scan position.
                if m.end() == 0 {
                    continue;
                }
                if let Some(guard) = &rule.followed_by {
                    if !guard.is_match(&rest[m.end()..]) {
                        continue;
                    }
                }

                let class = match rule.action {
                    RuleAction::Class(class) => class,
                    RuleAction::Classify(classify) => classify(m.as_str()),
                };
                push_token(&mut tokens, class, m.as_str(), pos);
                if let Some(next) = &rule.next {
                    trace!("state '{current}' -> '{next}' at byte {pos}");
                    current = next.clone();
                }
                advanced = Some(m.end());
                break;
            }

            match advanced {
                Some(len) => pos += len,
                None => {
                    // No rule matched: consume one character under the
                    // state's default class.
                    let len = rest.chars().next().map_or(1, char::len_utf8);
                    push_token(&mut tokens, state_def.default_class, &rest[..len], pos);
                    pos += len;
                }
            }
        }

        LineTokens {
            tokens,
            end_state: current,
        }
    }

    /// Tokenize multi-line text, threading each line's end state into the
    /// next line.
    pub fn tokenize(&self, text: &str) -> Vec<LineTokens> {
        let mut state = START_STATE.to_string();
        text.lines()
            .map(|line| {
                let result = self.tokenize_line(line, &state);
                state.clone_from(&result.end_state);
                result
            })
            .collect()
    }
}

/// Compile a pattern anchored at the scan position, rejecting capturing
/// groups
fn compile_pattern(state: &str, index: usize, pattern: &str) -> Result<Regex, RulesError> {
    let regex =
        Regex::new(&format!("^(?:{pattern})")).map_err(|source| RulesError::BadPattern {
            state: state.to_string(),
            index,
            pattern: pattern.to_string(),
            source,
        })?;
    // Group 0 is the implicit whole-match group.
    if regex.captures_len() > 1 {
        return Err(RulesError::CapturingGroup {
            state: state.to_string(),
            index,
            pattern: pattern.to_string(),
        });
    }
    Ok(regex)
}

/// Append a token, merging adjacent spans of the same class
fn push_token(tokens: &mut Vec<Token>, class: TokenClass, text: &str, start: usize) {
    if let Some(last) = tokens.last_mut() {
        if last.class == class && last.end() == start {
            last.text.push_str(text);
            return;
        }
    }
    tokens.push(Token {
        class,
        text: text.to_string(),
        start,
    });
}
