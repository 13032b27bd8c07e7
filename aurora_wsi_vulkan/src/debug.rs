/// Vulkan Debug Messenger - Handles validation layer messages with colored output
///
/// This module provides a debug messenger callback for Vulkan validation layers
/// with severity/category filtering, colored console output, optional file
/// logging, duplicate-message grouping, and message statistics.

use ash::vk;
use colored::*;
use std::collections::HashMap;
use std::ffi::CStr;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

/// Which validation severities are surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugSeverity {
    /// Only errors
    ErrorsOnly,
    /// Errors and warnings
    ErrorsAndWarnings,
    /// Everything, including info and verbose output
    All,
}

/// Where validation messages go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugOutput {
    /// Standard error
    Console,
    /// Append to the given file
    File(String),
    /// Both console and file
    Both(String),
}

/// Which validation message categories are surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageFilter {
    pub show_validation: bool,
    pub show_performance: bool,
    pub show_general: bool,
}

impl Default for MessageFilter {
    fn default() -> Self {
        Self {
            show_validation: true,
            show_performance: true,
            show_general: false,
        }
    }
}

/// Counts of validation messages seen since the config was installed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationStats {
    pub errors: u32,
    pub warnings: u32,
    pub info: u32,
    pub verbose: u32,
}

impl ValidationStats {
    pub fn total(&self) -> u32 {
        self.errors + self.warnings + self.info + self.verbose
    }
}

/// Debug configuration for the callback
#[derive(Debug, Clone)]
pub struct DebugConfig {
    pub severity: DebugSeverity,
    pub output: DebugOutput,
    pub message_filter: MessageFilter,
    /// Abort the process on the first validation error (for debugger runs)
    pub break_on_error: bool,
    pub enable_stats: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            severity: DebugSeverity::ErrorsAndWarnings,
            output: DebugOutput::Console,
            message_filter: MessageFilter::default(),
            break_on_error: false,
            enable_stats: true,
        }
    }
}

// ===== GLOBAL CALLBACK STATE =====

/// Active debug configuration (shared with the callback)
static DEBUG_CONFIG: Mutex<Option<DebugConfig>> = Mutex::new(None);

/// Message counters (atomic: the callback may fire from driver threads)
static ERRORS: AtomicU32 = AtomicU32::new(0);
static WARNINGS: AtomicU32 = AtomicU32::new(0);
static INFO: AtomicU32 = AtomicU32::new(0);
static VERBOSE: AtomicU32 = AtomicU32::new(0);

/// Occurrence counts per distinct message, for duplicate grouping
static MESSAGE_COUNTS: Mutex<Option<HashMap<String, u32>>> = Mutex::new(None);

/// Install the debug configuration and reset statistics
pub fn init_debug_config(config: DebugConfig) {
    ERRORS.store(0, Ordering::Relaxed);
    WARNINGS.store(0, Ordering::Relaxed);
    INFO.store(0, Ordering::Relaxed);
    VERBOSE.store(0, Ordering::Relaxed);

    *MESSAGE_COUNTS.lock().unwrap() = Some(HashMap::new());
    *DEBUG_CONFIG.lock().unwrap() = Some(config);
}

/// Current validation statistics
pub fn validation_stats() -> ValidationStats {
    ValidationStats {
        errors: ERRORS.load(Ordering::Relaxed),
        warnings: WARNINGS.load(Ordering::Relaxed),
        info: INFO.load(Ordering::Relaxed),
        verbose: VERBOSE.load(Ordering::Relaxed),
    }
}

/// Print a summary of the validation messages seen so far
pub fn print_validation_stats_report() {
    let stats = validation_stats();

    if stats.total() == 0 {
        println!("\n{}", "No validation messages".green().bold());
        return;
    }

    println!("\n{}", "=== Validation Report ===".bright_blue().bold());
    if stats.errors > 0 {
        println!("  {} {}", "Errors:".red().bold(), stats.errors);
    }
    if stats.warnings > 0 {
        println!("  {} {}", "Warnings:".yellow().bold(), stats.warnings);
    }
    if stats.info > 0 {
        println!("  {} {}", "Info:".cyan(), stats.info);
    }
    if stats.verbose > 0 {
        println!("  {} {}", "Verbose:".bright_black(), stats.verbose);
    }
    println!("  {} {}", "Total:".white().bold(), stats.total());

    let counts_guard = MESSAGE_COUNTS.lock().unwrap();
    if let Some(counts) = counts_guard.as_ref() {
        let duplicates = counts.values().filter(|&&count| count > 1).count();
        if duplicates > 0 {
            println!("  {} message(s) appeared more than once", duplicates);
        }
    }
    println!("{}\n", "=========================".bright_blue().bold());
}

/// Vulkan debug messenger callback
///
/// Called by the validation layers when they detect issues; filters by the
/// installed config, then formats and routes the message.
pub(crate) unsafe extern "system" fn vulkan_debug_callback(
    message_severity: vk::DebugUtilsMessageSeverityFlagsEXT,
    message_type: vk::DebugUtilsMessageTypeFlagsEXT,
    p_callback_data: *const vk::DebugUtilsMessengerCallbackDataEXT,
    _user_data: *mut std::os::raw::c_void,
) -> vk::Bool32 {
    let callback_data = *p_callback_data;
    let message_id = if callback_data.p_message_id_name.is_null() {
        "Unknown"
    } else {
        CStr::from_ptr(callback_data.p_message_id_name)
            .to_str()
            .unwrap_or("Invalid UTF-8")
    };
    let message = if callback_data.p_message.is_null() {
        "No message"
    } else {
        CStr::from_ptr(callback_data.p_message)
            .to_str()
            .unwrap_or("Invalid UTF-8")
    };

    let config = match DEBUG_CONFIG.lock().unwrap().as_ref() {
        Some(config) => config.clone(),
        None => return vk::FALSE, // No config installed, ignore
    };

    if !severity_passes(config.severity, message_severity)
        || !category_passes(&config.message_filter, message_type)
    {
        return vk::FALSE;
    }

    // Count and color by severity
    let severity_label = if message_severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::ERROR)
    {
        if config.enable_stats {
            ERRORS.fetch_add(1, Ordering::Relaxed);
        }
        "ERROR".red().bold()
    } else if message_severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::WARNING) {
        if config.enable_stats {
            WARNINGS.fetch_add(1, Ordering::Relaxed);
        }
        "WARNING".yellow().bold()
    } else if message_severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::INFO) {
        if config.enable_stats {
            INFO.fetch_add(1, Ordering::Relaxed);
        }
        "INFO".cyan()
    } else {
        if config.enable_stats {
            VERBOSE.fetch_add(1, Ordering::Relaxed);
        }
        "VERBOSE".bright_black()
    };

    let type_label = if message_type.contains(vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION) {
        "Validation"
    } else if message_type.contains(vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE) {
        "Performance"
    } else {
        "General"
    };

    // Group duplicates
    let occurrence = if config.enable_stats {
        let mut counts_guard = MESSAGE_COUNTS.lock().unwrap();
        let counts = counts_guard.get_or_insert_with(HashMap::new);
        let count = counts.entry(message.to_string()).or_insert(0);
        *count += 1;
        *count
    } else {
        1
    };
    let repeat_marker = if occurrence > 1 {
        format!(" [x{}]", occurrence)
    } else {
        String::new()
    };

    let console_line = format!(
        "{} {} [{}]{} {}: {}",
        "[VULKAN]".bright_blue().bold(),
        severity_label,
        type_label.bright_black(),
        repeat_marker.yellow(),
        message_id.white(),
        message
    );
    let file_line = format!(
        "[VULKAN] [{}]{} {}: {}",
        type_label, repeat_marker, message_id, message
    );

    match &config.output {
        DebugOutput::Console => eprintln!("{}", console_line),
        DebugOutput::File(path) => write_to_file(path, &file_line),
        DebugOutput::Both(path) => {
            eprintln!("{}", console_line);
            write_to_file(path, &file_line);
        }
    }

    // Abort for debugger attachment if configured
    if config.break_on_error
        && message_severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::ERROR)
    {
        eprintln!(
            "{}\n  {} [{}]\n  {}",
            "BREAK ON VALIDATION ERROR - aborting".red().bold(),
            message_id.yellow(),
            type_label.cyan(),
            message
        );
        std::process::abort();
    }

    vk::FALSE // Don't abort Vulkan execution
}

fn severity_passes(
    configured: DebugSeverity,
    severity: vk::DebugUtilsMessageSeverityFlagsEXT,
) -> bool {
    match configured {
        DebugSeverity::ErrorsOnly => {
            severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::ERROR)
        }
        DebugSeverity::ErrorsAndWarnings => {
            severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::ERROR)
                || severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::WARNING)
        }
        DebugSeverity::All => true,
    }
}

fn category_passes(filter: &MessageFilter, message_type: vk::DebugUtilsMessageTypeFlagsEXT) -> bool {
    if message_type.contains(vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION) {
        filter.show_validation
    } else if message_type.contains(vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE) {
        filter.show_performance
    } else {
        filter.show_general
    }
}

/// Severity flags to request from the messenger for a configured severity
pub(crate) fn severity_flags(configured: DebugSeverity) -> vk::DebugUtilsMessageSeverityFlagsEXT {
    match configured {
        DebugSeverity::ErrorsOnly => vk::DebugUtilsMessageSeverityFlagsEXT::ERROR,
        DebugSeverity::ErrorsAndWarnings => {
            vk::DebugUtilsMessageSeverityFlagsEXT::ERROR
                | vk::DebugUtilsMessageSeverityFlagsEXT::WARNING
        }
        DebugSeverity::All => {
            vk::DebugUtilsMessageSeverityFlagsEXT::ERROR
                | vk::DebugUtilsMessageSeverityFlagsEXT::WARNING
                | vk::DebugUtilsMessageSeverityFlagsEXT::INFO
                | vk::DebugUtilsMessageSeverityFlagsEXT::VERBOSE
        }
    }
}

/// Append a message to the log file
fn write_to_file(path: &str, message: &str) {
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{}", message);
    }
}

#[cfg(test)]
#[path = "debug_tests.rs"]
mod tests;
