//! Tests for error types

use trueno_scientist::Error;

#[test]
fn test_invalid_experiment_error() {
    let error = Error::InvalidExperiment("'exp' has no candidate operation".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid experiment"));
    assert!(error_str.contains("no candidate operation"));
    assert!(!error_str.contains('\n'));
}

#[test]
fn test_config_error() {
    let error = Error::Config("unknown variant `sideways`".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid runner configuration"));
    assert!(error_str.contains("sideways"));
}

#[test]
fn test_publish_failed_error() {
    let error = Error::PublishFailed {
        experiment: "exp-42".to_string(),
        reason: "sink offline".to_string(),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("Publish failed"));
    assert!(error_str.contains("exp-42"));
    assert!(error_str.contains("sink offline"));
}

#[test]
fn test_logging_error() {
    let error = Error::Logging("subscriber already set".to_string());
    assert!(format!("{error}").contains("Logging initialization failed"));
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_error.into();
    assert!(matches!(error, Error::Config(_)));
}

#[test]
fn test_blank_name_error_does_not_mention_operations() {
    let error = Error::InvalidExperiment("experiment name must not be blank".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid experiment: experiment name must not be blank"
    );
}

#[test]
fn test_error_debug() {
    let error = Error::Logging("dbg".to_string());
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("Logging"));
}

#[test]
fn test_result_type_alias() {
    #[allow(clippy::unnecessary_wraps)]
    fn returns_result() -> trueno_scientist::Result<i32> {
        Ok(42)
    }

    let result = returns_result();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 42);
}

#[test]
fn test_result_type_alias_error() {
    fn returns_error() -> trueno_scientist::Result<i32> {
        Err(Error::Config("test error".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());
}
