/// Context - context-scoped GL state and the render-target entry points
///
/// Everything the GL API calls "current" (bound renderbuffer, bound
/// framebuffer, pending error) is a field here, so independent contexts
/// never observe each other. Entry points live in `context_renderbuffer.rs`
/// and `context_framebuffer.rs`.

use std::sync::{Arc, Mutex};
use crate::device::Device;
use crate::error::{Error, GlError, Result};
use crate::gl::{GLenum, GLuint};
use crate::resource::{Framebuffer, ResourceManager};
use crate::state::{ActiveObjectsState, ErrorState};

/// Context configuration
#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// Name used in log messages
    pub name: String,
    /// Largest width or height accepted by `glRenderbufferStorage`
    pub max_renderbuffer_size: u32,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            name: "GLES Context".to_string(),
            max_renderbuffer_size: 4096,
        }
    }
}

/// A GLES rendering context
pub struct Context {
    pub(super) config: ContextConfig,
    pub(super) device: Arc<Mutex<dyn Device>>,
    pub(super) resources: ResourceManager,
    pub(super) active_objects: ActiveObjectsState,
    pub(super) errors: ErrorState,
    /// Framebuffer 0; exempt from deletion and from draw synchronization
    pub(super) system_framebuffer: Framebuffer,
}

impl Context {
    /// Create a context rendering through `device`
    ///
    /// # Errors
    ///
    /// `Error::InitializationFailed` if `config.max_renderbuffer_size` is 0.
    pub fn new(device: Arc<Mutex<dyn Device>>, config: ContextConfig) -> Result<Self> {
        if config.max_renderbuffer_size == 0 {
            let message = format!("{}: max_renderbuffer_size must be non-zero", config.name);
            crate::driver_error!("gles::Context", "{}", message);
            return Err(Error::InitializationFailed(message));
        }

        crate::driver_info!(
            "gles::Context",
            "Context '{}' created (max renderbuffer size {})",
            config.name, config.max_renderbuffer_size
        );

        Ok(Self {
            config,
            device,
            resources: ResourceManager::new(),
            active_objects: ActiveObjectsState::new(),
            errors: ErrorState::new(),
            system_framebuffer: Framebuffer::new(),
        })
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    pub fn max_renderbuffer_size(&self) -> u32 {
        self.config.max_renderbuffer_size
    }

    /// Device this context renders through
    pub fn device(&self) -> &Arc<Mutex<dyn Device>> {
        &self.device
    }

    /// Object registry of this context
    pub fn resources(&self) -> &ResourceManager {
        &self.resources
    }

    // ===== ERRORS =====

    /// glGetError: first error recorded since the last call, then cleared
    pub fn get_error(&mut self) -> GLenum {
        self.errors.take()
    }

    pub(super) fn record_error(&mut self, error: GlError) {
        self.errors.record(error);
    }

    // ===== SYNCHRONIZATION =====

    /// glFinish: block until the device has completed all submitted work
    pub fn finish(&mut self) -> Result<()> {
        crate::driver_trace!("gles::Context", "glFinish()");
        self.drain()
    }

    /// Wait for the GPU before mutating a resource it may still be using
    pub(super) fn drain(&self) -> Result<()> {
        let mut device = self.device.lock()
            .map_err(|_| crate::driver_err!("gles::Context", "Device lock poisoned"))?;
        device.finish()?;
        crate::driver_debug!("gles::Context", "[{}] Drained GPU work", self.config.name);
        Ok(())
    }

    // ===== BINDINGS =====

    /// Renderbuffer bound to `GL_RENDERBUFFER` (0 if none)
    pub fn active_renderbuffer(&self) -> GLuint {
        self.active_objects.active_renderbuffer()
    }

    /// Framebuffer bound to `GL_FRAMEBUFFER` (0 for the system framebuffer)
    pub fn active_framebuffer(&self) -> GLuint {
        self.active_objects.active_framebuffer()
    }

    /// Framebuffer `name`, 0 being the system framebuffer
    ///
    /// Used by draw recording to toggle the draw state.
    pub fn framebuffer_mut(&mut self, name: GLuint) -> Option<&mut Framebuffer> {
        if name == 0 {
            Some(&mut self.system_framebuffer)
        } else {
            self.resources.framebuffer_mut(name)
        }
    }

    pub fn framebuffer(&self, name: GLuint) -> Option<&Framebuffer> {
        if name == 0 {
            Some(&self.system_framebuffer)
        } else {
            self.resources.framebuffer(name)
        }
    }

    /// Current draw framebuffer
    pub fn current_framebuffer(&self) -> &Framebuffer {
        let name = self.active_objects.active_framebuffer();
        self.resources.framebuffer(name).unwrap_or(&self.system_framebuffer)
    }

    pub fn current_framebuffer_mut(&mut self) -> &mut Framebuffer {
        let name = self.active_objects.active_framebuffer();
        match self.resources.framebuffer_mut(name) {
            Some(framebuffer) => framebuffer,
            None => &mut self.system_framebuffer,
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
