use crate::error::GlError;
use crate::gl::{GLenum, GL_NO_ERROR};

/// Pending GL error of a context
///
/// GL keeps the first error raised since the last `glGetError`; later
/// errors are dropped until the flag is read.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorState {
    pending: Option<GlError>,
}

impl ErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error raised by an entry point
    pub fn record(&mut self, error: GlError) {
        crate::driver_warn!("gles::Context", "{}", error);
        if self.pending.is_none() {
            self.pending = Some(error);
        }
    }

    /// Pending error without clearing it
    pub fn peek(&self) -> Option<GlError> {
        self.pending
    }

    /// Return the pending error code and clear it
    pub fn take(&mut self) -> GLenum {
        self.pending.take().map_or(GL_NO_ERROR, GlError::code)
    }
}
