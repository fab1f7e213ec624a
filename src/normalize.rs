//! Token stream to typed query conversion.
//!
//! The parser hands back a flat token stream with the `&&` delimiters already
//! dropped, so a compound query is recovered here purely by position: the
//! stream is split into consecutive `(field, operator, value)` triples in
//! their original order. Value coercion also happens here and nowhere else:
//! an all-digit token becomes an integer, anything else a title-cased string.

use crate::{
    ast::{Clause, Control, Field, Input, Token},
    value::{title_case, Value},
};

/// Errors produced while grouping tokens into typed clauses.
///
/// A correctly restrictive grammar never produces these; they defend against
/// a token stream that did not come from [`crate::parser::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedQueryError {
    /// Stream length is zero or not a multiple of three
    WrongShape(usize),
    /// A triple's first token is not a field keyword
    NotAField(String),
    /// A triple's second token is not an operator
    NotAnOperator(String),
    /// A triple's third token is not a literal
    NotALiteral(String),
    /// An integer literal out of range
    IntegerOverflow(String),
}

impl std::fmt::Display for MalformedQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedQueryError::WrongShape(len) => {
                write!(f, "token stream of length {} does not form clauses", len)
            }
            MalformedQueryError::NotAField(tok) => {
                write!(f, "expected a field keyword, found {}", tok)
            }
            MalformedQueryError::NotAnOperator(tok) => {
                write!(f, "expected an operator, found {}", tok)
            }
            MalformedQueryError::NotALiteral(tok) => {
                write!(f, "expected a literal value, found {}", tok)
            }
            MalformedQueryError::IntegerOverflow(digits) => {
                write!(f, "integer literal '{}' is out of range", digits)
            }
        }
    }
}

impl std::error::Error for MalformedQueryError {}

/// Group a flat token stream into a typed [`Input`].
///
/// A lone `help` or `exit` short-circuits into a control signal before any
/// clause is built. Everything else must reduce to well-formed triples.
pub fn normalize(tokens: &[Token]) -> Result<Input, MalformedQueryError> {
    if let [Token::Word(word)] = tokens {
        match word.as_str() {
            "help" => return Ok(Input::Control(Control::Help)),
            "exit" => return Ok(Input::Control(Control::Exit)),
            _ => {}
        }
    }

    if tokens.is_empty() || tokens.len() % 3 != 0 {
        return Err(MalformedQueryError::WrongShape(tokens.len()));
    }

    let mut query = Vec::with_capacity(tokens.len() / 3);
    for triple in tokens.chunks_exact(3) {
        let field = match &triple[0] {
            Token::Word(word) => Field::from_keyword(word)
                .ok_or_else(|| MalformedQueryError::NotAField(triple[0].describe()))?,
            other => return Err(MalformedQueryError::NotAField(other.describe())),
        };

        let op = match &triple[1] {
            Token::Op(op) => *op,
            other => return Err(MalformedQueryError::NotAnOperator(other.describe())),
        };

        let value = match &triple[2] {
            Token::Number(digits) => Value::Integer(
                digits
                    .parse()
                    .map_err(|_| MalformedQueryError::IntegerOverflow(digits.clone()))?,
            ),
            Token::Word(text) | Token::Quoted(text) => Value::Text(title_case(text)),
            other => return Err(MalformedQueryError::NotALiteral(other.describe())),
        };

        query.push(Clause { field, op, value });
    }

    Ok(Input::Filters(query))
}
