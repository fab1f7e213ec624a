use crate::ast::{Field, Op};
use crate::value::Value;

/// One filter clause: `(field, operator, value)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub field: Field,
    pub op: Op,
    pub value: Value,
}

/// An ordered, non-empty sequence of clauses, AND-combined.
///
/// A single-clause query is a "simple query"; anything longer is a
/// "compound query". Clause order is the left-to-right order of the input
/// and is preserved through evaluation.
pub type Query = Vec<Clause>;

/// The two non-filtering control words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Help,
    Exit,
}

/// A fully normalized line of input: either a control word or a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Control(Control),
    Filters(Query),
}
