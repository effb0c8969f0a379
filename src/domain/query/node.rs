//! Parsed search expression tree

use serde::{Deserialize, Serialize};

/// A single `key:value` or bare-word term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub value: String,
}

impl SearchTerm {
    pub fn keyed(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: value.into(),
        }
    }

    pub fn bare(value: impl Into<String>) -> Self {
        Self {
            key: None,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchNode {
    Term(SearchTerm),
    Not(Box<SearchNode>),
    And(Vec<SearchNode>),
    Or(Vec<SearchNode>),
}

impl SearchNode {
    /// Evaluates the expression with the given term predicate
    pub fn evaluate<F>(&self, matches_term: &F) -> bool
    where
        F: Fn(&SearchTerm) -> bool,
    {
        match self {
            Self::Term(term) => matches_term(term),
            Self::Not(inner) => !inner.evaluate(matches_term),
            Self::And(children) => children.iter().all(|c| c.evaluate(matches_term)),
            Self::Or(children) => children.iter().any(|c| c.evaluate(matches_term)),
        }
    }
}
