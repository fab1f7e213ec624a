//! One-shot query execution for scripting.

use std::path::Path;

use super::{help, CliError};
use crate::{
    ast::{Control, Input},
    evaluator::Evaluator,
    normalize::normalize,
    output::format_results,
    parser::parse,
    store::MemoryStore,
};

/// Evaluate a single query string and return the formatted result.
///
/// `help` returns the reference screen; `exit` is rejected since there is
/// no session to leave. Parse and store failures surface as errors (the
/// binary maps them to a non-zero exit status).
pub fn execute_query(query: &str, data: Option<&Path>) -> Result<String, CliError> {
    let tokens = parse(query)?;
    match normalize(&tokens)? {
        Input::Control(Control::Help) => Ok(help::help_screen().to_string()),
        Input::Control(Control::Exit) => Err(CliError::NotAQuery("exit")),
        Input::Filters(query) => {
            let store = match data {
                Some(path) => MemoryStore::from_path(path)?,
                None => MemoryStore::seeded()?,
            };
            let results = Evaluator::new(store).evaluate(&query)?;
            Ok(format_results(&results, &query))
        }
    }
}
