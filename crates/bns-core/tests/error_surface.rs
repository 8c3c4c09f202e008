use bns_core::errors::{BnsError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("index", "3")
        .with_context("reason", "example")
}

#[test]
fn resolution_error_surface() {
    let err = BnsError::InvalidResolution(sample_info("negative-resolution", "n_plus below zero"));
    assert_eq!(err.info().code, "negative-resolution");
    assert!(err.info().context.contains_key("index"));
}

#[test]
fn digit_index_error_surface() {
    let err = BnsError::InvalidDigitIndex(sample_info("digit-index-range", "index out of range"));
    assert_eq!(err.info().code, "digit-index-range");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn unknown_digit_error_surface() {
    let err = BnsError::UnknownDigitIndex(sample_info("unknown-digit", "no such digit"));
    assert_eq!(err.info().code, "unknown-digit");
}

#[test]
fn unknown_label_error_surface() {
    let err = BnsError::UnknownLabel(sample_info("unknown-label", "no such basis function"));
    assert_eq!(err.info().code, "unknown-label");
}

#[test]
fn serde_error_surface() {
    let err = BnsError::Serde(sample_info("serialize", "payload rejected"));
    assert_eq!(err.info().code, "serialize");
}

#[test]
fn display_includes_context_and_hint() {
    let err = BnsError::UnknownLabel(
        ErrorInfo::new("unknown-label", "no such basis function")
            .with_context("label", "[0, 1]")
            .with_hint("labels canonicalize to ascending index order"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("unknown-label"));
    assert!(rendered.contains("label=[0, 1]"));
    assert!(rendered.contains("hint: labels canonicalize"));
}

#[test]
fn error_json_roundtrip() {
    let err = BnsError::InvalidDigitIndex(sample_info("digit-index-range", "index out of range"));
    let json = serde_json::to_string(&err).unwrap();
    let restored: BnsError = serde_json::from_str(&json).unwrap();
    assert_eq!(err, restored);
}
