//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone,
//! std::error::Error) plus the wsi_err!/wsi_bail! macros.

use crate::error::{Error, Result};
use serial_test::serial;

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("Surface query failed".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Backend error"));
    assert!(display.contains("Surface query failed"));
}

#[test]
fn test_out_of_memory_display() {
    let err = Error::OutOfMemory;
    let display = format!("{}", err);
    assert_eq!(display, "Out of GPU memory");
}

#[test]
fn test_invalid_resource_display() {
    let err = Error::InvalidResource("Shader file not found".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid resource"));
    assert!(display.contains("Shader file not found"));
}

#[test]
fn test_initialization_failed_display() {
    let err = Error::InitializationFailed("Window creation failed".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Initialization failed"));
    assert!(display.contains("Window creation failed"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::OutOfMemory;
    // Verify Error implements std::error::Error trait
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let err1 = Error::BackendError("test".to_string());
    assert!(format!("{:?}", err1).contains("BackendError"));

    let err2 = Error::OutOfMemory;
    assert!(format!("{:?}", err2).contains("OutOfMemory"));

    let err3 = Error::InvalidResource("resource".to_string());
    assert!(format!("{:?}", err3).contains("InvalidResource"));

    let err4 = Error::InitializationFailed("init".to_string());
    assert!(format!("{:?}", err4).contains("InitializationFailed"));
}

#[test]
fn test_error_clone() {
    let err1 = Error::BackendError("test".to_string());
    let err2 = err1.clone();
    assert_eq!(format!("{}", err1), format!("{}", err2));

    let err3 = Error::InitializationFailed("init".to_string());
    let err4 = err3.clone();
    assert_eq!(format!("{}", err3), format!("{}", err4));
}

// ============================================================================
// RESULT TYPE TESTS
// ============================================================================

#[test]
fn test_result_type_ok() {
    fn returns_ok() -> Result<i32> {
        Ok(42)
    }
    assert_eq!(returns_ok().unwrap(), 42);
}

#[test]
fn test_result_type_err() {
    fn returns_err() -> Result<i32> {
        Err(Error::OutOfMemory)
    }
    assert!(returns_err().is_err());
}

// ============================================================================
// MACRO TESTS
// ============================================================================

#[test]
#[serial]
fn test_wsi_err_builds_backend_error() {
    let err = crate::wsi_err!("aurora::test", "call failed with code {}", 7);
    match err {
        Error::BackendError(msg) => assert_eq!(msg, "call failed with code 7"),
        other => panic!("expected BackendError, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_wsi_bail_returns_early() {
    fn fails() -> Result<()> {
        crate::wsi_bail!("aurora::test", "bailing out");
    }
    match fails() {
        Err(Error::BackendError(msg)) => assert_eq!(msg, "bailing out"),
        other => panic!("expected BackendError, got {:?}", other),
    }
}
