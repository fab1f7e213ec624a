pub mod ast;
pub mod evaluator;
pub mod lexer;
pub mod normalize;
pub mod output;
pub mod parser;
pub mod store;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{Clause, Control, Field, Input, Op, Query, Token};
pub use evaluator::Evaluator;
pub use lexer::{LexError, Lexer};
pub use normalize::{normalize, MalformedQueryError};
pub use output::format_results;
pub use parser::{parse, ParseError, Parser};
pub use store::{MemoryStore, Record, ResultSet, StateStore, StoreError};
pub use value::Value;
