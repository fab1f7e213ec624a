/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Equal (`==`)
    Eq,
    /// Not equal (`!=`)
    Ne,
    /// Less than (`<`)
    Lt,
    /// Less than or equal (`<=`)
    Le,
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    Ge,
}

impl Op {
    /// The operator as it is written in a query.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Eq => "==",
            Op::Ne => "!=",
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Gt => ">",
            Op::Ge => ">=",
        }
    }

    /// Whether the operator is valid on a categorical field.
    ///
    /// Only equality and inequality make sense for string-valued fields;
    /// the orderings are reserved for numeric fields.
    pub fn is_categorical(&self) -> bool {
        matches!(self, Op::Eq | Op::Ne)
    }

    /// Apply the operator to two integers.
    pub fn compare_int(&self, left: i64, right: i64) -> bool {
        match self {
            Op::Eq => left == right,
            Op::Ne => left != right,
            Op::Lt => left < right,
            Op::Le => left <= right,
            Op::Gt => left > right,
            Op::Ge => left >= right,
        }
    }

    /// Apply the operator to two strings (equality class only).
    pub fn compare_str(&self, left: &str, right: &str) -> bool {
        match self {
            Op::Eq => left == right,
            Op::Ne => left != right,
            // Unreachable for well-formed clauses; orderings never pair
            // with string values.
            Op::Lt | Op::Le | Op::Gt | Op::Ge => false,
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
