// tests/integration_tests.rs
//
// End-to-end runs over the embedded fifty-state dataset: raw text through
// the parser, normalizer, evaluator, and formatter, plus the interactive
// shell driven over in-memory pipes.

use stateql::ast::Input;
use stateql::cli::{execute_query, import_dataset, Repl};
use stateql::evaluator::Evaluator;
use stateql::normalize::normalize;
use stateql::output::format_results;
use stateql::parser::parse;
use stateql::store::MemoryStore;

fn run(query: &str) -> String {
    execute_query(query, None).unwrap()
}

// ============================================================================
// Full pipeline
// ============================================================================

#[test]
fn test_region_query_lists_states() {
    let output = run("region == northeast");
    assert!(output.starts_with("States in the Northeast region:"));
    assert!(output.contains("Vermont"));
    assert!(output.contains("Maine"));
    assert!(!output.contains("Texas"));
}

#[test]
fn test_state_query_prints_full_profile() {
    let output = run("state == vermont");
    assert!(output.starts_with("Vermont"));
    assert!(output.contains("Region:      Northeast"));
    assert!(output.contains("Capital:     Montpelier"));
    assert!(output.contains("Governor:    Phil Scott"));
    assert!(output.contains("Population:  643,077"));
    assert!(output.contains("Counties:    14"));
    assert!(output.contains("State bird:  Hermit Thrush"));
    assert!(!output.contains("Known for:"));
}

#[test]
fn test_profile_shows_food_when_present() {
    let output = run("state == texas");
    assert!(output.contains("Known for:   Brisket"));
    assert!(!output.contains("State bird:"));
}

#[test]
fn test_numeric_query_renders_thousands_separators() {
    let output = run("population > 30000000");
    assert!(output.starts_with("States with population > 30,000,000:"));
    assert!(output.contains("California (39,538,223)"));
    assert!(!output.contains("Texas"));
}

#[test]
fn test_num_counties_query() {
    let output = run("num_counties > 150");
    assert!(output.contains("Georgia (159)"));
    assert!(output.contains("Texas (254)"));
}

#[test]
fn test_governor_query_title_cases_the_value() {
    let output = run("governor == 'phil scott'");
    assert_eq!(output, "States governed by Phil Scott: Vermont");
}

#[test]
fn test_compound_query_intersects() {
    let output = run("region == northeast && population > 10000000");
    assert!(output.starts_with("States satisfying all conditions:"));
    assert!(output.contains("New York"));
    assert!(output.contains("Pennsylvania"));
    assert!(!output.contains("Vermont"));
}

#[test]
fn test_compound_matches_manual_intersection() {
    let store = MemoryStore::seeded().unwrap();
    let evaluator = Evaluator::new(store);

    let both = match normalize(&parse("region == northeast && population > 250000").unwrap())
        .unwrap()
    {
        Input::Filters(q) => q,
        other => panic!("expected filters, got {:?}", other),
    };
    let left = vec![both[0].clone()];
    let right = vec![both[1].clone()];

    let combined = evaluator.evaluate(&both).unwrap();
    let left_set = evaluator.evaluate(&left).unwrap();
    let right_set = evaluator.evaluate(&right).unwrap();

    for key in combined.keys() {
        assert!(left_set.contains_key(key) && right_set.contains_key(key));
    }
    for key in left_set.keys() {
        assert_eq!(
            combined.contains_key(key),
            right_set.contains_key(key),
        );
    }
}

#[test]
fn test_no_results_is_not_an_error() {
    let output = run("governor == 'nobody real'");
    assert_eq!(output, "No matching records.");
}

#[test]
fn test_absent_optional_field_excluded_from_not_equal() {
    // Only states with a bird on record can satisfy a state_bird clause.
    let output = run("state_bird != 'hermit thrush'");
    assert!(output.contains("Arizona"));
    assert!(!output.contains("Vermont"));
    // Texas has a food instead of a bird.
    assert!(!output.contains("Texas"));
}

#[test]
fn test_formatter_output_is_sorted() {
    let store = MemoryStore::seeded().unwrap();
    let evaluator = Evaluator::new(store);
    let query = match normalize(&parse("region == southwest").unwrap()).unwrap() {
        Input::Filters(q) => q,
        other => panic!("expected filters, got {:?}", other),
    };
    let results = evaluator.evaluate(&query).unwrap();
    let output = format_results(&results, &query);
    assert_eq!(
        output,
        "States in the Southwest region: Arizona, New Mexico, Oklahoma, Texas"
    );
}

// ============================================================================
// Interactive shell
// ============================================================================

fn run_session(lines: &str) -> String {
    let mut input = std::io::Cursor::new(lines.as_bytes().to_vec());
    let mut output = Vec::new();
    let mut repl = Repl::new(None);
    repl.run_loop(&mut input, &mut output, false).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_help_prints_reference_tables_without_touching_the_store() {
    // A dataset path that cannot be read only matters if a lookup happens.
    let mut input = std::io::Cursor::new(b"help\nexit\ny\n".to_vec());
    let mut output = Vec::new();
    let mut repl = Repl::new(Some("/nonexistent/us_states.json".into()));
    repl.run_loop(&mut input, &mut output, false).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Keywords"));
    assert!(output.contains("Logic Operators"));
    assert!(output.contains("Thank you for using the State Query System."));
}

#[test]
fn test_exit_confirmed_terminates_with_farewell() {
    let output = run_session("exit\ny\n");
    assert!(output.contains("Are you sure you want to exit? (y/n)"));
    assert!(output.ends_with("Thank you for using the State Query System.\n"));
}

#[test]
fn test_exit_declined_returns_to_prompt() {
    let output = run_session("exit\nn\nregion == northeast\nexit\ny\n");
    assert!(output.contains("States in the Northeast region:"));
}

#[test]
fn test_exit_confirmation_reprompts_on_invalid_answer() {
    let output = run_session("exit\nmaybe\ny\n");
    assert!(output.contains("Invalid option."));
    assert!(output.contains("Thank you for using the State Query System."));
}

#[test]
fn test_malformed_input_prints_fixed_message_and_continues() {
    let output = run_session("governor == \nregion == northeast\nexit\ny\n");
    assert!(output.contains(
        "Error. Could not parse input.\nType 'help' to see how to properly format a query."
    ));
    assert!(output.contains("States in the Northeast region:"));
}

#[test]
fn test_empty_line_prints_fixed_message_and_continues() {
    let output = run_session("\nregion == northeast\nexit\ny\n");
    assert!(output.contains(
        "Error. Could not parse input.\nType 'help' to see how to properly format a query."
    ));
    assert!(output.contains("States in the Northeast region:"));
}

#[test]
fn test_unreadable_store_prints_fixed_message_and_continues() {
    let mut input = std::io::Cursor::new(b"region == northeast\nexit\ny\n".to_vec());
    let mut output = Vec::new();
    let mut repl = Repl::new(Some("/nonexistent/us_states.json".into()));
    repl.run_loop(&mut input, &mut output, false).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Error. Could not retrieve records from the database."));
    assert!(output.contains("Thank you for using the State Query System."));
}

#[test]
fn test_eof_behaves_like_confirmed_exit() {
    let output = run_session("region == northeast\n");
    assert!(output.contains("States in the Northeast region:"));
    assert!(output.contains("Thank you for using the State Query System."));
}

// ============================================================================
// One-shot runner and import
// ============================================================================

#[test]
fn test_one_shot_rejects_exit() {
    assert!(execute_query("exit", None).is_err());
}

#[test]
fn test_one_shot_help_returns_reference() {
    let output = execute_query("help", None).unwrap();
    assert!(output.contains("Logic Operators"));
}

#[test]
fn test_one_shot_parse_failure_is_an_error() {
    assert!(execute_query("governor > 5", None).is_err());
}

#[test]
fn test_import_upserts_by_uuid() {
    let dir = std::env::temp_dir();
    let store_path = dir.join("stateql_import_store.json");
    let source_path = dir.join("stateql_import_source.json");
    let _ = std::fs::remove_file(&store_path);

    std::fs::write(
        &source_path,
        r#"[{"uuid": "vt", "state": "Vermont", "capital": "Montpelier",
            "region": "Northeast", "governor": "Phil Scott",
            "population": 643077, "num_counties": 14}]"#,
    )
    .unwrap();

    let first = import_dataset(&source_path, &store_path).unwrap();
    assert_eq!(first.imported, 1);
    assert_eq!(first.total, 1);

    // Re-importing the same uuid replaces, never appends.
    std::fs::write(
        &source_path,
        r#"[{"uuid": "vt", "state": "Vermont", "capital": "Montpelier",
            "region": "Northeast", "governor": "Phil Scott",
            "population": 650000, "num_counties": 14}]"#,
    )
    .unwrap();
    let second = import_dataset(&source_path, &store_path).unwrap();
    assert_eq!(second.imported, 1);
    assert_eq!(second.total, 1);

    let merged = MemoryStore::from_path(&store_path).unwrap();
    assert_eq!(merged.len(), 1);

    let _ = std::fs::remove_file(&store_path);
    let _ = std::fs::remove_file(&source_path);
}

#[test]
fn test_seed_dataset_is_complete() {
    let store = MemoryStore::seeded().unwrap();
    assert_eq!(store.len(), 50);
}
