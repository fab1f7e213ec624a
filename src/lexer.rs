use crate::ast::{Op, Token};

/// Errors produced while tokenizing a query line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character outside the query vocabulary
    UnexpectedChar(char, usize),
    /// A quoted string with no closing quote
    UnterminatedString(usize),
    /// A lone `=`, `&`, or `!` that does not form a full operator
    IncompleteOperator(char, usize),
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexError::UnexpectedChar(ch, pos) => {
                write!(f, "unexpected character '{}' at position {}", ch, pos)
            }
            LexError::UnterminatedString(pos) => {
                write!(f, "unterminated string starting at position {}", pos)
            }
            LexError::IncompleteOperator(ch, pos) => write!(
                f,
                "incomplete operator '{}' at position {} (did you mean '{0}{0}' or '{0}='?)",
                ch, pos
            ),
        }
    }
}

impl std::error::Error for LexError {}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_quoted(&mut self, quote: char) -> Result<String, LexError> {
        let start = self.position;
        let mut result = String::new();
        self.advance(); // consume opening quote

        while let Some(ch) = self.current_char() {
            if ch == quote {
                self.advance();
                return Ok(result);
            }
            result.push(ch);
            self.advance();
        }

        Err(LexError::UnterminatedString(start))
    }

    fn read_number(&mut self) -> String {
        let mut number = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        number
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        match self.current_char() {
            None => Ok(Token::Eof),
            Some('&') => {
                if self.peek_char(1) == Some('&') {
                    self.advance();
                    self.advance();
                    Ok(Token::AndAnd)
                } else {
                    Err(LexError::IncompleteOperator('&', self.position))
                }
            }
            Some('=') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Ok(Token::Op(Op::Eq))
                } else {
                    Err(LexError::IncompleteOperator('=', self.position))
                }
            }
            Some('!') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Ok(Token::Op(Op::Ne))
                } else {
                    Err(LexError::IncompleteOperator('!', self.position))
                }
            }
            Some('<') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Ok(Token::Op(Op::Le))
                } else {
                    self.advance();
                    Ok(Token::Op(Op::Lt))
                }
            }
            Some('>') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Ok(Token::Op(Op::Ge))
                } else {
                    self.advance();
                    Ok(Token::Op(Op::Gt))
                }
            }
            Some('"') => Ok(Token::Quoted(self.read_quoted('"')?)),
            Some('\'') => Ok(Token::Quoted(self.read_quoted('\'')?)),
            Some(ch) if ch.is_ascii_digit() => Ok(Token::Number(self.read_number())),
            Some(ch) if ch.is_alphabetic() || ch == '_' => Ok(Token::Word(self.read_word())),
            Some(ch) => Err(LexError::UnexpectedChar(ch, self.position)),
        }
    }
}
