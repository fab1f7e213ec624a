//! # State Query Language - Syntax Types
//!
//! This module defines the syntactic vocabulary of the state query language,
//! a small filter language for querying a collection of U.S. state records.
//!
//! ## Architecture Overview
//!
//! The module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[fields]** - The fixed field vocabulary and its operator classes
//! - **[operators]** - The six comparison operators
//! - **[query]** - Normalized queries: typed clauses and control words
//!
//! ## Query Shape
//!
//! Every filtering query is one or more clauses joined by `&&`:
//!
//! ```text
//! field operator value [&& field operator value]...
//! ```
//!
//! ### Clause forms
//!
//! - **Categorical** - `region == northeast`, `governor != 'phil scott'`
//!   (fields: state, region, capital, governor, popular_food, state_bird;
//!   operators: `==`, `!=` only)
//! - **Numeric** - `population > 30000000`, `num_counties <= 14`
//!   (fields: population, num_counties; all six comparison operators)
//!
//! ### Control words
//!
//! `help` and `exit`, each alone on a line, short-circuit before any clause
//! is built.
//!
//! ## Examples
//!
//! ```text
//! state == vermont
//! population >= 1000000 && region == west
//! capital == montpelier && governor == 'phil scott'
//! ```
pub mod fields;
pub mod operators;
pub mod query;
pub mod tokens;

pub use fields::Field;
pub use operators::Op;
pub use query::{Clause, Control, Input, Query};
pub use tokens::Token;
