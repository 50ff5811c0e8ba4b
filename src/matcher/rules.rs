//! Rule-table pattern matcher.
//!
//! A reference [`PatternMatcher`] built from an ordered table of compiled
//! regular expressions. Field rules (`equals`, `greater than`, `less
//! than`, `between .. and ..`) populate the `where` mapping; graph rules
//! (`related to`, `connected to`, `linked to`) populate `connected`. Text
//! that matches no rule still yields a usable draft: the raw query as a
//! `like` clause with the default result limit.

use regex::Regex;
use serde_json::Value;

use crate::error::{Result, YariError};
use crate::matcher::pattern::PatternMatcher;
use crate::query::structured::{
    FieldConstraints, FieldPredicate, GraphConnection, StructuredQuery,
};
use crate::vector::Vector;

/// Default result limit attached to every draft.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// What a matched rule contributes to the draft.
#[derive(Debug, Clone, Copy)]
enum RuleAction {
    Equals,
    Greater,
    Less,
    Between,
    /// Graph connection with the given relationship keyword.
    Connect(&'static str),
}

#[derive(Debug)]
struct MatchRule {
    pattern: Regex,
    action: RuleAction,
}

/// A pattern matcher driven by a fixed rule table.
///
/// The table is compiled once at construction; matching is a pure function
/// thereafter.
#[derive(Debug)]
pub struct RulePatternMatcher {
    rules: Vec<MatchRule>,
    default_limit: usize,
}

impl RulePatternMatcher {
    /// Create a matcher with the built-in rule table and default limit.
    pub fn new() -> Result<Self> {
        Self::with_limit(DEFAULT_RESULT_LIMIT)
    }

    /// Create a matcher with a custom default result limit.
    pub fn with_limit(default_limit: usize) -> Result<Self> {
        let rules = vec![
            compile(r"(?i)\b(\w+)\s+equals\s+(\S+)", RuleAction::Equals)?,
            compile(r"(?i)\b(\w+)\s+greater\s+than\s+(\S+)", RuleAction::Greater)?,
            compile(r"(?i)\b(\w+)\s+less\s+than\s+(\S+)", RuleAction::Less)?,
            compile(
                r"(?i)\b(\w+)\s+between\s+(\S+)\s+and\s+(\S+)",
                RuleAction::Between,
            )?,
            compile(r"(?i)\brelated\s+to\s+(.+)", RuleAction::Connect("related"))?,
            compile(
                r"(?i)\bconnected\s+(?:to|with)\s+(.+)",
                RuleAction::Connect("connected"),
            )?,
            compile(
                r"(?i)\blinked\s+(?:to|with)\s+(.+)",
                RuleAction::Connect("linked"),
            )?,
        ];

        Ok(Self {
            rules,
            default_limit,
        })
    }
}

fn compile(pattern: &str, action: RuleAction) -> Result<MatchRule> {
    let pattern = Regex::new(pattern).map_err(|e| YariError::pattern(e.to_string()))?;
    Ok(MatchRule { pattern, action })
}

/// Parse a raw token as a JSON scalar, falling back to a plain string.
fn parse_scalar(raw: &str) -> Value {
    let trimmed = raw.trim_matches(|c: char| matches!(c, '"' | '\'' | ',' | '.' | '?' | '!'));
    serde_json::from_str::<Value>(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string()))
}

/// Trim trailing punctuation from a captured connection target.
fn trim_target(raw: &str) -> String {
    raw.trim()
        .trim_end_matches(|c: char| matches!(c, '.' | '?' | '!' | ','))
        .to_string()
}

impl PatternMatcher for RulePatternMatcher {
    fn match_query(&self, query: &str, embedding: Option<&Vector>) -> Result<StructuredQuery> {
        let mut draft = StructuredQuery::new()
            .with_like(query)
            .with_limit(self.default_limit);

        if let Some(vector) = embedding {
            draft.vector = Some(vector.clone());
        }

        let mut constraints = FieldConstraints::default();

        for rule in &self.rules {
            match rule.action {
                RuleAction::Equals | RuleAction::Greater | RuleAction::Less => {
                    for caps in rule.pattern.captures_iter(query) {
                        let field = caps[1].to_lowercase();
                        let value = parse_scalar(&caps[2]);
                        let predicate = match rule.action {
                            RuleAction::Equals => FieldPredicate::Equals(value),
                            RuleAction::Greater => FieldPredicate::Greater(value),
                            _ => FieldPredicate::Less(value),
                        };
                        constraints.insert(field, predicate);
                    }
                }
                RuleAction::Between => {
                    for caps in rule.pattern.captures_iter(query) {
                        let field = caps[1].to_lowercase();
                        let low = parse_scalar(&caps[2]);
                        let high = parse_scalar(&caps[3]);
                        constraints.insert(field, FieldPredicate::Between(low, high));
                    }
                }
                RuleAction::Connect(relationship) => {
                    if draft.connected.is_none() {
                        if let Some(caps) = rule.pattern.captures(query) {
                            draft.connected = Some(
                                GraphConnection::new(relationship).with_target(trim_target(&caps[1])),
                            );
                        }
                    }
                }
            }
        }

        if !constraints.is_empty() {
            draft.where_clause = Some(constraints);
        }

        Ok(draft)
    }

    fn name(&self) -> &str {
        "rules"
    }
}
