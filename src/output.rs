//! Human-readable rendering of query results.
//!
//! The shape of the output is dispatched on the shape of the query that
//! produced it, in one place, keyed exclusively off the clause's field name
//! (never a positional index into the record):
//!
//! - `state ==` prints the full profile of the matching record;
//! - a single numeric clause lists each match with its value;
//! - a single categorical clause gets a field-specific lead-in sentence;
//! - a compound query gets a generic "all conditions" lead-in.
//!
//! An empty result set renders as a fixed no-results line, never an error.

use crate::ast::{Clause, Field, Op, Query};
use crate::store::{Record, ResultSet};
use crate::value::Value;

/// Render a result set for the query that produced it.
pub fn format_results(records: &ResultSet, query: &Query) -> String {
    let Some(first) = query.first() else {
        return String::new();
    };
    if records.is_empty() {
        return "No matching records.".to_string();
    }

    if query.len() > 1 {
        return format!(
            "States satisfying all conditions: {}",
            joined_names(records)
        );
    }

    match first.field {
        Field::State => profiles(records),
        Field::Population | Field::NumCounties => numeric_listing(records, first),
        _ => format!("{} {}", lead_in(first), joined_names(records)),
    }
}

/// The field-specific lead-in sentence for a single categorical clause.
fn lead_in(clause: &Clause) -> String {
    let value = &clause.value;
    let negated = clause.op == Op::Ne;
    match (clause.field, negated) {
        (Field::Region, false) => format!("States in the {} region:", value),
        (Field::Region, true) => format!("States outside the {} region:", value),
        (Field::Capital, false) => format!("States whose capital is {}:", value),
        (Field::Capital, true) => format!("States whose capital is not {}:", value),
        (Field::Governor, false) => format!("States governed by {}:", value),
        (Field::Governor, true) => format!("States not governed by {}:", value),
        (Field::PopularFood, false) => {
            format!("States where {} is the popular dish:", value)
        }
        (Field::PopularFood, true) => {
            format!("States where {} is not the popular dish:", value)
        }
        (Field::StateBird, false) => format!("States whose state bird is {}:", value),
        (Field::StateBird, true) => format!("States whose state bird is not {}:", value),
        // State and the numeric fields are dispatched before lead_in.
        (Field::State | Field::Population | Field::NumCounties, _) => {
            "States matching the query:".to_string()
        }
    }
}

/// Full profile blocks for `state ==` queries, one per matching record.
fn profiles(records: &ResultSet) -> String {
    let mut sorted: Vec<&Record> = records.values().collect();
    sorted.sort_by_key(|r| string_attr(r, "state"));

    let blocks: Vec<String> = sorted.into_iter().map(profile).collect();
    blocks.join("\n\n")
}

fn profile(record: &Record) -> String {
    let mut out = string_attr(record, "state");
    out.push('\n');
    out.push_str(&format!("  Region:      {}\n", string_attr(record, "region")));
    out.push_str(&format!("  Capital:     {}\n", string_attr(record, "capital")));
    out.push_str(&format!("  Governor:    {}\n", string_attr(record, "governor")));
    out.push_str(&format!(
        "  Population:  {}\n",
        with_thousands(int_attr(record, "population"))
    ));
    out.push_str(&format!(
        "  Counties:    {}",
        int_attr(record, "num_counties")
    ));
    // At most one of these two optional attributes is on record.
    if let Some(food) = record.get("popular_food").and_then(|v| v.as_str()) {
        out.push_str(&format!("\n  Known for:   {}", food));
    }
    if let Some(bird) = record.get("state_bird").and_then(|v| v.as_str()) {
        out.push_str(&format!("\n  State bird:  {}", bird));
    }
    out
}

/// Listing for a single numeric clause: the comparison echoed in the
/// lead-in, then each match as `Name (value)`.
fn numeric_listing(records: &ResultSet, clause: &Clause) -> String {
    let threshold = match &clause.value {
        Value::Integer(n) => with_thousands(*n),
        Value::Text(s) => s.clone(),
    };

    let mut rows: Vec<(String, i64)> = records
        .values()
        .map(|r| (string_attr(r, "state"), int_attr(r, clause.field.keyword())))
        .collect();
    rows.sort();

    let listing: Vec<String> = rows
        .into_iter()
        .map(|(name, n)| format!("{} ({})", name, with_thousands(n)))
        .collect();

    format!(
        "States with {} {} {}: {}",
        clause.field,
        clause.op,
        threshold,
        listing.join(", ")
    )
}

fn joined_names(records: &ResultSet) -> String {
    let mut names: Vec<String> = records.values().map(|r| string_attr(r, "state")).collect();
    names.sort();
    names.join(", ")
}

fn string_attr(record: &Record, name: &str) -> String {
    record
        .get(name)
        .and_then(|v| v.as_str())
        .unwrap_or("(unknown)")
        .to_string()
}

fn int_attr(record: &Record, name: &str) -> i64 {
    record.get(name).and_then(|v| v.as_i64()).unwrap_or(0)
}

/// Render an integer with thousands separators (`30000000` -> `30,000,000`).
pub fn with_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(with_thousands(0), "0");
        assert_eq!(with_thousands(643), "643");
        assert_eq!(with_thousands(1000), "1,000");
        assert_eq!(with_thousands(643077), "643,077");
        assert_eq!(with_thousands(30000000), "30,000,000");
        assert_eq!(with_thousands(-29145505), "-29,145,505");
    }
}
