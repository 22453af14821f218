//! Tests for queue option loading and validation

use prometheus_queue::config::QueueOptions;

#[test]
fn test_options_validation() {
    assert!(QueueOptions::new().validate().is_ok());
    assert!(QueueOptions::new().with_capacity(10).validate().is_ok());
    assert!(QueueOptions::new().with_capacity(0).validate().is_err());
}

#[test]
fn test_options_from_json() {
    let options = QueueOptions::from_json_str(r#"{ "capacity": 16 }"#).unwrap();
    assert_eq!(options.capacity, Some(16));
}

#[test]
fn test_options_from_json_without_capacity() {
    let options = QueueOptions::from_json_str("{}").unwrap();
    assert_eq!(options.capacity, None);

    let options = QueueOptions::from_json_str(r#"{ "capacity": null }"#).unwrap();
    assert_eq!(options.capacity, None);
}

#[test]
fn test_options_from_json_rejects_zero_capacity() {
    let err = QueueOptions::from_json_str(r#"{ "capacity": 0 }"#).unwrap_err();
    assert!(err.contains("greater than 0"));
}

#[test]
fn test_options_from_json_parse_error() {
    let err = QueueOptions::from_json_str(r#"{ "capacity": "many" }"#).unwrap_err();
    assert!(err.starts_with("parse error"));
}

#[test]
fn test_options_roundtrip_through_json() {
    let options = QueueOptions::new().with_capacity(3);
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(json, r#"{"capacity":3}"#);
}

// Each env test uses its own variable so parallel tests do not interfere.

#[test]
fn test_options_from_env_unset() {
    let options = QueueOptions::from_env_var("PROMETHEUS_QUEUE_TEST_UNSET").unwrap();
    assert_eq!(options.capacity, None);
}

#[test]
fn test_options_from_env_set() {
    std::env::set_var("PROMETHEUS_QUEUE_TEST_SET", " 42 ");
    let options = QueueOptions::from_env_var("PROMETHEUS_QUEUE_TEST_SET").unwrap();
    assert_eq!(options.capacity, Some(42));
}

#[test]
fn test_options_from_env_invalid() {
    std::env::set_var("PROMETHEUS_QUEUE_TEST_INVALID", "lots");
    let err = QueueOptions::from_env_var("PROMETHEUS_QUEUE_TEST_INVALID").unwrap_err();
    assert!(format!("{err:#}").contains("PROMETHEUS_QUEUE_TEST_INVALID"));

    std::env::set_var("PROMETHEUS_QUEUE_TEST_ZERO", "0");
    assert!(QueueOptions::from_env_var("PROMETHEUS_QUEUE_TEST_ZERO").is_err());
}
