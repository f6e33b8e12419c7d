//! Error case tests
//!
//! CliError display and conversions

use iem_reco::error::CliError;

/// Recommendation errors pass through with the exact user-facing text
#[test]
fn test_common_error_is_transparent() {
    let err: CliError = iem_reco_common::Error::Validation.into();
    assert!(matches!(err, CliError::Recommend(_)));
    assert_eq!(err.to_string(), "All fields are required");

    let err: CliError = iem_reco_common::Error::application(Some("X".into())).into();
    assert_eq!(err.to_string(), "X");
}

#[test]
fn test_error_display() {
    let errors = vec![
        CliError::Config("home directory not found".to_string()),
        CliError::InvalidServerUrl("ftp://x".to_string()),
        iem_reco_common::Error::transport("timeout").into(),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty message: {:?}", err);
    }
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: CliError = io_err.into();

    assert!(matches!(err, CliError::Io(_)));
    assert!(err.to_string().contains("file not found"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: CliError = json_err.into();

    assert!(matches!(err, CliError::JsonParse(_)));
}
