/// A normalized literal value in a query clause.
///
/// Produced once during normalization and never re-interpreted downstream:
/// an all-digit token becomes an [`Value::Integer`], anything else becomes
/// [`Value::Text`] with proper-noun casing applied to match stored values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Integer literal (population counts, county counts)
    Integer(i64),
    /// Title-cased string literal (`"phil scott"` becomes `"Phil Scott"`)
    Text(String),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Integer(_) => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// Title-case a string: uppercase the first letter of each
/// whitespace-separated word, lowercase the rest.
///
/// Stored string attributes are title-cased, so query values must be
/// normalized the same way before a lookup (`northeast` -> `Northeast`,
/// `phil scott` -> `Phil Scott`).
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}
