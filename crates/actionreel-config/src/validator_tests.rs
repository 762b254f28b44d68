use super::*;

#[test]
fn test_validate_default_config() {
    let config = Config::default();
    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_empty_overlay_prefix() {
    let mut config = Config::default();
    config.recorder.overlay_prefix.clear();

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "recorder.overlay_prefix"));
}

#[test]
fn test_validate_zero_debounce_warning() {
    let mut config = Config::default();
    config.recorder.fill_debounce_ms = 0;

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "recorder.fill_debounce_ms"));
}

#[test]
fn test_validate_zero_timeout() {
    let mut config = Config::default();
    config.bridge.timeout_ms = 0;

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.errors.iter().any(|e| e.path == "bridge.timeout_ms"));
}

#[test]
fn test_validate_unknown_strictness() {
    let mut config = Config::default();
    config.codegen.strictness = "lenient".to_string();

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(!result.is_valid());
    let err = result
        .errors
        .iter()
        .find(|e| e.path == "codegen.strictness")
        .unwrap();
    assert!(err.message.contains("lenient"));
}

#[test]
fn test_validate_unknown_backend_warning() {
    let mut config = Config::default();
    config.storage.backend = "redis".to_string();

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "storage.backend"));
}

#[test]
fn test_validate_file_backend_without_dir() {
    let mut config = Config::default();
    config.storage.cache_dir.clear();

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.errors.iter().any(|e| e.path == "storage.cache_dir"));
}

#[test]
fn test_validate_quota_on_file_backend() {
    let mut config = Config::default();
    config.storage.quota_bytes = Some(1024);

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.warnings.iter().any(|w| w.path == "storage.quota_bytes"));
}

#[test]
fn test_validation_result_default() {
    let result = ValidationResult::default();
    assert!(result.is_valid());
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validation_error_new() {
    let err = ValidationError::new("bridge.timeout_ms", "must be positive");
    assert_eq!(err.path, "bridge.timeout_ms");
    assert_eq!(err.message, "must be positive");
}
