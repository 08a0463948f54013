/*!
# GLES emu

Core of an OpenGL ES 2.0 compatibility layer running on an explicit GPU API.

This crate holds the backend-agnostic part of the render-target subsystem:
renderbuffer and framebuffer objects, their handle tables, the context-scoped
binding and error state, and the synchronization rules that decide when the
GPU must be drained before a resource is mutated. Backends (Vulkan, ...)
plug in through the `Device` trait.

## Architecture

- **Driver**: process-wide singleton holding the backend device and the logger
- **Context**: GL entry points (`glBindRenderbuffer`, `glRenderbufferStorage`, ...)
- **ResourceManager**: per-context handle tables for renderbuffers and framebuffers
- **Device**: backend trait (`finish`, `create_image`)
- **PixelFormat**: format classification and per-channel bit widths
*/

// Internal modules
mod error;
mod driver;
pub mod log;
pub mod gl;
pub mod format;
pub mod utils;
pub mod device;
pub mod resource;
pub mod state;
pub mod context;

// Main gles namespace module
pub mod gles {
    // Error types
    pub use crate::error::{Error, Result, GlError};

    // Driver singleton
    pub use crate::driver::Driver;

    // Context and its configuration
    pub use crate::context::{Context, ContextConfig};

    // Backend seam
    pub use crate::device::Device;

    // Logging sub-module (types only, macros are exported at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Device sub-module
    pub mod device {
        pub use crate::device::*;
    }

    // Format sub-module
    pub mod format {
        pub use crate::format::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // State sub-module
    pub mod state {
        pub use crate::state::*;
    }
}
