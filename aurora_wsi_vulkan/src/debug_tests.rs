//! Unit tests for debug.rs
//!
//! The callback and its filters run without a Vulkan instance: the callback
//! data struct is plain data. Tests touching the global config/stats are
//! serialized.

use super::*;
use serial_test::serial;

// ============================================================================
// FILTER TESTS
// ============================================================================

#[test]
fn test_severity_passes_errors_only() {
    assert!(severity_passes(
        DebugSeverity::ErrorsOnly,
        vk::DebugUtilsMessageSeverityFlagsEXT::ERROR
    ));
    assert!(!severity_passes(
        DebugSeverity::ErrorsOnly,
        vk::DebugUtilsMessageSeverityFlagsEXT::WARNING
    ));
    assert!(!severity_passes(
        DebugSeverity::ErrorsOnly,
        vk::DebugUtilsMessageSeverityFlagsEXT::VERBOSE
    ));
}

#[test]
fn test_severity_passes_errors_and_warnings() {
    assert!(severity_passes(
        DebugSeverity::ErrorsAndWarnings,
        vk::DebugUtilsMessageSeverityFlagsEXT::ERROR
    ));
    assert!(severity_passes(
        DebugSeverity::ErrorsAndWarnings,
        vk::DebugUtilsMessageSeverityFlagsEXT::WARNING
    ));
    assert!(!severity_passes(
        DebugSeverity::ErrorsAndWarnings,
        vk::DebugUtilsMessageSeverityFlagsEXT::INFO
    ));
}

#[test]
fn test_severity_passes_all() {
    for severity in [
        vk::DebugUtilsMessageSeverityFlagsEXT::ERROR,
        vk::DebugUtilsMessageSeverityFlagsEXT::WARNING,
        vk::DebugUtilsMessageSeverityFlagsEXT::INFO,
        vk::DebugUtilsMessageSeverityFlagsEXT::VERBOSE,
    ] {
        assert!(severity_passes(DebugSeverity::All, severity));
    }
}

#[test]
fn test_category_filter_defaults() {
    let filter = MessageFilter::default();
    assert!(category_passes(
        &filter,
        vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION
    ));
    assert!(category_passes(
        &filter,
        vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE
    ));
    // General chatter is off by default
    assert!(!category_passes(
        &filter,
        vk::DebugUtilsMessageTypeFlagsEXT::GENERAL
    ));
}

#[test]
fn test_severity_flags_requested_from_messenger() {
    assert_eq!(
        severity_flags(DebugSeverity::ErrorsOnly),
        vk::DebugUtilsMessageSeverityFlagsEXT::ERROR
    );
    assert!(severity_flags(DebugSeverity::ErrorsAndWarnings)
        .contains(vk::DebugUtilsMessageSeverityFlagsEXT::WARNING));
    assert!(severity_flags(DebugSeverity::All)
        .contains(vk::DebugUtilsMessageSeverityFlagsEXT::VERBOSE));
}

// ============================================================================
// STATS TESTS
// ============================================================================

#[test]
fn test_validation_stats_total() {
    let stats = ValidationStats {
        errors: 1,
        warnings: 2,
        info: 3,
        verbose: 4,
    };
    assert_eq!(stats.total(), 10);
}

fn fire_callback(severity: vk::DebugUtilsMessageSeverityFlagsEXT) {
    let data = vk::DebugUtilsMessengerCallbackDataEXT::default();
    unsafe {
        vulkan_debug_callback(
            severity,
            vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION,
            &data,
            std::ptr::null_mut(),
        );
    }
}

#[test]
#[serial]
fn test_callback_counts_by_severity() {
    init_debug_config(DebugConfig {
        severity: DebugSeverity::All,
        ..DebugConfig::default()
    });

    fire_callback(vk::DebugUtilsMessageSeverityFlagsEXT::ERROR);
    fire_callback(vk::DebugUtilsMessageSeverityFlagsEXT::WARNING);
    fire_callback(vk::DebugUtilsMessageSeverityFlagsEXT::WARNING);
    fire_callback(vk::DebugUtilsMessageSeverityFlagsEXT::INFO);

    let stats = validation_stats();
    assert_eq!(stats.errors, 1);
    assert_eq!(stats.warnings, 2);
    assert_eq!(stats.info, 1);
    assert_eq!(stats.verbose, 0);
}

#[test]
#[serial]
fn test_filtered_messages_are_not_counted() {
    init_debug_config(DebugConfig {
        severity: DebugSeverity::ErrorsOnly,
        ..DebugConfig::default()
    });

    fire_callback(vk::DebugUtilsMessageSeverityFlagsEXT::WARNING);
    fire_callback(vk::DebugUtilsMessageSeverityFlagsEXT::INFO);

    assert_eq!(validation_stats().total(), 0);

    fire_callback(vk::DebugUtilsMessageSeverityFlagsEXT::ERROR);
    assert_eq!(validation_stats().errors, 1);
}

#[test]
#[serial]
fn test_init_resets_stats() {
    init_debug_config(DebugConfig {
        severity: DebugSeverity::All,
        ..DebugConfig::default()
    });
    fire_callback(vk::DebugUtilsMessageSeverityFlagsEXT::ERROR);
    assert!(validation_stats().total() > 0);

    init_debug_config(DebugConfig::default());
    assert_eq!(validation_stats().total(), 0);
}
