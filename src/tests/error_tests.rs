//! Tests for the error taxonomy.

use crate::engine::automaton::AutomatonError;
use crate::engine::scanners::ScanError;
use crate::error::config::ConfigError;
use crate::error::HuliError;

#[test]
fn test_configuration_error_display() {
    let err = ConfigError::UnknownAlgorithm("fastest".to_string());
    assert_eq!(err.to_string(), "Unknown algorithm: fastest");

    let err = ConfigError::UnknownDirection("backwards".to_string());
    assert_eq!(err.to_string(), "Unknown direction: backwards");
}

#[test]
fn test_degenerate_input_error_display() {
    assert_eq!(ScanError::EmptyPattern.to_string(), "Pattern cannot be empty");
    assert_eq!(
        AutomatonError::EmptyPattern(2).to_string(),
        "Pattern at index 2 is empty"
    );
}

#[test]
fn test_crate_error_wraps_component_errors() {
    let err: HuliError = ConfigError::UnknownAlgorithm("x".to_string()).into();
    assert!(matches!(err, HuliError::Config(_)));
    assert!(err.to_string().starts_with("Configuration error:"));

    let err: HuliError = ScanError::EmptyPattern.into();
    assert!(matches!(err, HuliError::Scan(_)));
    assert!(err.to_string().starts_with("Degenerate input:"));

    let err: HuliError = AutomatonError::EmptyPattern(0).into();
    assert!(matches!(err, HuliError::Automaton(_)));
    assert!(err.to_string().starts_with("Degenerate input:"));
}

#[test]
fn test_no_match_is_not_an_error() {
    // A pattern with zero occurrences is an ordinary outcome; only the
    // shape of the result distinguishes it.
    let outcome = crate::engine::SearchCoordinator::new()
        .search("text", &["absent"])
        .unwrap();
    assert!(outcome.is_no_match());
}
