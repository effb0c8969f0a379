//! Search query grammar
//!
//! ```text
//! query   := and ( "OR" and )*
//! and     := unary ( ["AND"] unary )*
//! unary   := "-" unary | "(" query ")" | term
//! term    := word | key ":" word
//! word    := bare-chars | '"' any-chars '"'
//! ```

use std::fmt::Debug;
use std::iter::Peekable;
use std::vec::IntoIter;

use thiserror::Error;

use super::{SearchNode, SearchTerm};

/// Deepest allowed nesting of negations and parenthesized groups
pub const MAX_DEPTH: usize = 64;

/// Longest accepted query, in characters
pub const MAX_INPUT_LENGTH: usize = 2048;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryParseError {
    #[error("query is empty")]
    Empty,

    #[error("unterminated quote")]
    UnterminatedQuote,

    #[error("unbalanced parentheses")]
    UnbalancedParens,

    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),

    #[error("invalid term '{0}'")]
    InvalidTerm(String),

    #[error("query nests deeper than {} levels", MAX_DEPTH)]
    TooDeep,

    #[error("query is longer than {} characters", MAX_INPUT_LENGTH)]
    TooLong,
}

/// Turns free-text search input into an expression tree
pub trait QueryParser: Send + Sync + Debug {
    fn parse(&self, input: &str) -> Result<SearchNode, QueryParseError>;
}

/// Parser for the default search grammar
#[derive(Debug, Clone, Default)]
pub struct SimpleQueryParser;

impl SimpleQueryParser {
    pub fn new() -> Self {
        Self
    }
}

impl QueryParser for SimpleQueryParser {
    fn parse(&self, input: &str) -> Result<SearchNode, QueryParseError> {
        if input.chars().count() > MAX_INPUT_LENGTH {
            return Err(QueryParseError::TooLong);
        }

        let tokens = tokenize(input)?;

        if tokens.is_empty() {
            return Err(QueryParseError::Empty);
        }

        let mut tokens = tokens.into_iter().peekable();
        let node = parse_or(&mut tokens, 0)?;

        match tokens.next() {
            None => Ok(node),
            Some(Token::RParen) => Err(QueryParseError::UnbalancedParens),
            Some(other) => Err(QueryParseError::UnexpectedToken(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    LParen,
    RParen,
    Minus,
    Or,
    And,
    Word { text: String, quoted: bool },
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Minus => write!(f, "-"),
            Self::Or => write!(f, "OR"),
            Self::And => write!(f, "AND"),
            Self::Word { text, .. } => write!(f, "{}", text),
        }
    }
}

type Tokens = Peekable<IntoIter<Token>>;

fn tokenize(input: &str) -> Result<Vec<Token>, QueryParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            _ => {
                let mut text = String::new();
                let mut quoted = false;

                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() || c == '(' || c == ')' {
                        break;
                    }
                    chars.next();

                    if c == '"' {
                        quoted = true;
                        loop {
                            match chars.next() {
                                Some('"') => break,
                                Some(inner) => text.push(inner),
                                None => return Err(QueryParseError::UnterminatedQuote),
                            }
                        }
                    } else {
                        text.push(c);
                    }
                }

                let token = match (text.as_str(), quoted) {
                    ("OR", false) => Token::Or,
                    ("AND", false) => Token::And,
                    _ => Token::Word { text, quoted },
                };
                tokens.push(token);
            }
        }
    }

    Ok(tokens)
}

fn parse_or(tokens: &mut Tokens, depth: usize) -> Result<SearchNode, QueryParseError> {
    let mut children = vec![parse_and(tokens, depth)?];

    while tokens.peek() == Some(&Token::Or) {
        tokens.next();
        children.push(parse_and(tokens, depth)?);
    }

    Ok(collapse(children, SearchNode::Or))
}

fn parse_and(tokens: &mut Tokens, depth: usize) -> Result<SearchNode, QueryParseError> {
    let mut children = vec![parse_unary(tokens, depth)?];

    loop {
        match tokens.peek() {
            None | Some(Token::Or) | Some(Token::RParen) => break,
            Some(Token::And) => {
                tokens.next();
            }
            Some(_) => {}
        }
        children.push(parse_unary(tokens, depth)?);
    }

    Ok(collapse(children, SearchNode::And))
}

fn parse_unary(tokens: &mut Tokens, depth: usize) -> Result<SearchNode, QueryParseError> {
    match tokens.next() {
        Some(Token::Minus) => {
            let inner = parse_unary(tokens, descend(depth)?)?;
            Ok(SearchNode::Not(Box::new(inner)))
        }
        Some(Token::LParen) => {
            let inner = parse_or(tokens, descend(depth)?)?;

            match tokens.next() {
                Some(Token::RParen) => Ok(inner),
                _ => Err(QueryParseError::UnbalancedParens),
            }
        }
        Some(Token::Word { text, quoted }) => parse_term(text, quoted).map(SearchNode::Term),
        Some(Token::RParen) => Err(QueryParseError::UnbalancedParens),
        Some(other) => Err(QueryParseError::UnexpectedToken(other.to_string())),
        None => Err(QueryParseError::UnexpectedToken("end of query".to_string())),
    }
}

fn descend(depth: usize) -> Result<usize, QueryParseError> {
    if depth >= MAX_DEPTH {
        return Err(QueryParseError::TooDeep);
    }
    Ok(depth + 1)
}

fn parse_term(text: String, quoted: bool) -> Result<SearchTerm, QueryParseError> {
    if quoted && !text.contains(':') {
        return Ok(SearchTerm::bare(text));
    }

    match text.split_once(':') {
        None => Ok(SearchTerm::bare(text)),
        Some((key, value)) => {
            let valid_key = !key.is_empty()
                && key
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_');

            if !valid_key || value.is_empty() {
                return Err(QueryParseError::InvalidTerm(text));
            }

            Ok(SearchTerm::keyed(key, value))
        }
    }
}

fn collapse(mut children: Vec<SearchNode>, wrap: fn(Vec<SearchNode>) -> SearchNode) -> SearchNode {
    if children.len() == 1 {
        children.remove(0)
    } else {
        wrap(children)
    }
}
