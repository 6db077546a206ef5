//! Unit tests for domain errors

use cis_domain::error::Error;

#[test]
fn test_not_found_message() {
    let err = Error::not_found("connector 12");
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Not found: connector 12");
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json { .. }));
    assert!(!err.is_not_found());
}

#[test]
fn test_configuration_with_source_keeps_source() {
    let io = std::io::Error::other("disk gone");
    let err = Error::configuration_with_source("cannot read config", io);
    assert_eq!(err.to_string(), "Configuration error: cannot read config");
    assert!(std::error::Error::source(&err).is_some());
}
