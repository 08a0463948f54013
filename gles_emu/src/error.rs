//! Error types for the GLES emulation layer
//!
//! Two families of errors live here:
//! - `Error`: failures of the driver itself or of the backend device
//!   (initialization, lost device, exhausted GPU memory). These travel
//!   through `Result` like any other Rust error.
//! - `GlError`: the error kinds the emulated API exposes to client code.
//!   They are never returned; they are recorded in the context's error
//!   state and read back with `Context::get_error()`.

use std::fmt;
use crate::gl::{
    GLenum, GL_INVALID_ENUM, GL_INVALID_OPERATION, GL_INVALID_VALUE, GL_OUT_OF_MEMORY,
};

/// Result type for driver operations
pub type Result<T> = std::result::Result<T, Error>;

/// Driver and backend errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (Vulkan, mock device, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (unknown handle, object in the wrong state, etc.)
    InvalidResource(String),

    /// Initialization failed (driver, device, context)
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

/// Error kinds visible to client code through `glGetError`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlError {
    /// Wrong target, format or parameter name
    InvalidEnum,
    /// Out-of-range count or dimensions
    InvalidValue,
    /// The call needs a bound object and none is bound
    InvalidOperation,
    /// Backing-store allocation failed
    OutOfMemory,
}

impl GlError {
    /// GL enumerant reported by `glGetError`
    pub fn code(self) -> GLenum {
        match self {
            GlError::InvalidEnum => GL_INVALID_ENUM,
            GlError::InvalidValue => GL_INVALID_VALUE,
            GlError::InvalidOperation => GL_INVALID_OPERATION,
            GlError::OutOfMemory => GL_OUT_OF_MEMORY,
        }
    }
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GlError::InvalidEnum => "GL_INVALID_ENUM",
            GlError::InvalidValue => "GL_INVALID_VALUE",
            GlError::InvalidOperation => "GL_INVALID_OPERATION",
            GlError::OutOfMemory => "GL_OUT_OF_MEMORY",
        };
        write!(f, "{} (0x{:04X})", name, self.code())
    }
}

// ===== ERROR MACROS =====

/// Log an error and build an `Error::BackendError` from the same message
///
/// # Example
///
/// ```no_run
/// # use gles_emu::driver_err;
/// let err = driver_err!("gles::vulkan", "Failed to create image: {}", "VK_ERROR_DEVICE_LOST");
/// ```
#[macro_export]
macro_rules! driver_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::driver_error!($source, "{}", message);
        $crate::gles::Error::BackendError(message)
    }};
}

/// Log an error and return `Err(Error::BackendError)` from the current function
///
/// # Example
///
/// ```no_run
/// # use gles_emu::driver_bail;
/// fn check(size: u32) -> gles_emu::gles::Result<()> {
///     if size == 0 {
///         driver_bail!("gles::Context", "Invalid size {}", size);
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! driver_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::driver_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
