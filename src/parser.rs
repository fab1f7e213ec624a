use crate::{
    ast::{Field, Op, Token},
    lexer::{LexError, Lexer},
};

/// Errors produced while matching a query line against the grammar.
///
/// Operator-class violations (`governor > 5`) are grammar errors, not
/// evaluation errors: the parser rejects them before a clause is ever built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Tokenization failed
    Lex(LexError),
    /// Empty input line
    Empty,
    /// A clause started with something that is not a field keyword
    UnknownKeyword(String),
    /// Expected a clause (after `&&`, or at the start of the line)
    ExpectedClause { found: String },
    /// Expected a comparison operator after a field keyword
    ExpectedOperator { field: Field, found: String },
    /// An ordering operator applied to a categorical field
    OperatorNotAllowed { field: Field, op: Op },
    /// A numeric field compared against something other than an integer
    ExpectedInteger { field: Field, found: String },
    /// A categorical field compared against something other than a string
    ExpectedString { field: Field, found: String },
    /// Input left over after a complete query or control word
    TrailingInput { found: String },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Lex(e) => write!(f, "{}", e),
            ParseError::Empty => write!(f, "empty query"),
            ParseError::UnknownKeyword(word) => {
                write!(f, "'{}' is not a known field keyword", word)
            }
            ParseError::ExpectedClause { found } => {
                write!(f, "expected a filter clause, found {}", found)
            }
            ParseError::ExpectedOperator { field, found } => {
                write!(f, "expected an operator after '{}', found {}", field, found)
            }
            ParseError::OperatorNotAllowed { field, op } => {
                write!(f, "operator '{}' is not valid for field '{}'", op, field)
            }
            ParseError::ExpectedInteger { field, found } => {
                write!(f, "field '{}' takes an integer value, found {}", field, found)
            }
            ParseError::ExpectedString { field, found } => {
                write!(f, "field '{}' takes a string value, found {}", field, found)
            }
            ParseError::TrailingInput { found } => {
                write!(f, "unexpected {} after the end of the query", found)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::Lex(e)
    }
}

pub struct Parser {
    lexer: Lexer,
    current_token: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(&self.current_token) == std::mem::discriminant(token)
    }

    /// Parse a complete input line into its flat token stream.
    ///
    /// The whole line must match, end to end. Filtering queries come back as
    /// one `(field, operator, value)` token run per clause with the `&&`
    /// delimiters dropped; the control words `help` and `exit` come back as
    /// a single-token stream.
    pub fn parse(&mut self) -> Result<Vec<Token>, ParseError> {
        if self.check(&Token::Eof) {
            return Err(ParseError::Empty);
        }

        // Control words stand alone with nothing trailing.
        if let Token::Word(word) = &self.current_token {
            if word == "help" || word == "exit" {
                let control = self.current_token.clone();
                self.advance()?;
                if !self.check(&Token::Eof) {
                    return Err(ParseError::TrailingInput {
                        found: self.current_token.describe(),
                    });
                }
                return Ok(vec![control]);
            }
        }

        let mut tokens = Vec::new();
        loop {
            self.parse_clause(&mut tokens)?;

            match &self.current_token {
                Token::AndAnd => self.advance()?,
                Token::Eof => break,
                other => {
                    return Err(ParseError::TrailingInput {
                        found: other.describe(),
                    })
                }
            }
        }

        Ok(tokens)
    }

    /// Parse one `field operator value` clause, pushing its three raw
    /// tokens onto `tokens`.
    fn parse_clause(&mut self, tokens: &mut Vec<Token>) -> Result<(), ParseError> {
        let field = match &self.current_token {
            Token::Word(word) => Field::from_keyword(word)
                .ok_or_else(|| ParseError::UnknownKeyword(word.clone()))?,
            other => {
                return Err(ParseError::ExpectedClause {
                    found: other.describe(),
                })
            }
        };
        tokens.push(self.current_token.clone());
        self.advance()?;

        let op = match &self.current_token {
            Token::Op(op) => *op,
            other => {
                return Err(ParseError::ExpectedOperator {
                    field,
                    found: other.describe(),
                })
            }
        };
        if !field.allows(op) {
            return Err(ParseError::OperatorNotAllowed { field, op });
        }
        tokens.push(self.current_token.clone());
        self.advance()?;

        match (&self.current_token, field.is_numeric()) {
            (Token::Number(_), true) => {}
            (Token::Word(_) | Token::Quoted(_), false) => {}
            (other, true) => {
                return Err(ParseError::ExpectedInteger {
                    field,
                    found: other.describe(),
                })
            }
            (other, false) => {
                return Err(ParseError::ExpectedString {
                    field,
                    found: other.describe(),
                })
            }
        }
        tokens.push(self.current_token.clone());
        self.advance()?;

        Ok(())
    }
}

/// Parse a raw input line into its flat token stream.
///
/// Convenience wrapper over [`Parser`]; stateless and deterministic.
pub fn parse(input: &str) -> Result<Vec<Token>, ParseError> {
    Parser::new(Lexer::new(input))?.parse()
}
