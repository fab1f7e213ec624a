use crate::ast::Op;

/// Lexical tokens of the query language.
///
/// The lexer is deliberately shallow: it classifies the surface form of each
/// token but never interprets it. A run of digits stays a digit string until
/// normalization, and a bare word is not yet a field keyword or a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Bare word: a field keyword, a control word, or an unquoted value
    ///
    /// # Examples
    /// ```text
    /// region
    /// num_counties
    /// northeast
    /// ```
    Word(String),

    /// Quoted string literal (single or double quotes), for values with
    /// embedded whitespace
    ///
    /// # Examples
    /// ```text
    /// 'phil scott'
    /// "boiled peanuts"
    /// ```
    Quoted(String),

    /// Integer literal, kept as the raw digit string
    ///
    /// # Examples
    /// ```text
    /// 30000000
    /// 14
    /// ```
    Number(String),

    /// Comparison operator (`==`, `!=`, `<`, `<=`, `>`, `>=`)
    Op(Op),

    /// Clause delimiter (`&&`)
    AndAnd,

    /// End of input
    Eof,
}

impl Token {
    /// The token's surface text, for error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Word(w) => format!("'{}'", w),
            Token::Quoted(s) => format!("'{}'", s),
            Token::Number(n) => format!("'{}'", n),
            Token::Op(op) => format!("'{}'", op.symbol()),
            Token::AndAnd => "'&&'".to_string(),
            Token::Eof => "end of input".to_string(),
        }
    }
}
