//! Error types for the Aurora WSI layer
//!
//! This module defines the error types used throughout the window and Vulkan
//! helper crates, plus the construct-and-log macros used at error sites.

use std::fmt;

/// Result type for Aurora WSI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Aurora WSI errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (Vulkan call failure, platform call failure)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (shader file, attachment index, etc.)
    InvalidResource(String),

    /// Initialization failed (window, instance, device)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build a [`Error::BackendError`], logging it at ERROR severity first.
///
/// Evaluates to the error value, for use inside `map_err`/`ok_or_else`:
///
/// ```no_run
/// # use aurora_wsi::wsi_err;
/// # let result: Result<(), i32> = Ok(());
/// result.map_err(|e| wsi_err!("aurora::vulkan", "Queue submit failed: {:?}", e))?;
/// # Ok::<(), aurora_wsi::Error>(())
/// ```
#[macro_export]
macro_rules! wsi_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::wsi_error!($source, "{}", message);
        $crate::aurora::Error::BackendError(message)
    }};
}

/// Log an error and return it from the enclosing function.
#[macro_export]
macro_rules! wsi_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::wsi_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
