/// Renderbuffer entry points
///
/// Every entry point validates in a fixed order and records at most one GL
/// error. Entry points that can drain the GPU return `Result`; an `Err`
/// there means the device is lost, not that a GL error occurred.

use crate::error::{GlError, Result};
use crate::format::InternalFormat;
use crate::gl::{GLenum, GLint, GLsizei, GLuint, GL_RENDERBUFFER};
use crate::resource::AttachmentSlot;
use super::context::Context;

impl Context {
    /// glBindRenderbuffer
    pub fn bind_renderbuffer(&mut self, target: GLenum, renderbuffer: GLuint) {
        crate::driver_trace!(
            "gles::Context",
            "glBindRenderbuffer(0x{:04X}, {})", target, renderbuffer
        );

        if target != GL_RENDERBUFFER {
            self.record_error(GlError::InvalidEnum);
            return;
        }

        if renderbuffer == 0 {
            self.active_objects.set_active_renderbuffer(0);
            return;
        }

        let device = self.device.clone();
        let first_bind = self.resources.get_or_create_renderbuffer(renderbuffer).bind(device);

        if first_bind {
            // Framebuffers may have referenced this name before it existed
            let notified = self.resources.notify_renderbuffer_users(renderbuffer);
            crate::driver_debug!(
                "gles::Context",
                "Renderbuffer {} initialized, {} framebuffer(s) notified",
                renderbuffer, notified
            );
        }

        self.active_objects.set_active_renderbuffer(renderbuffer);
    }

    /// glDeleteRenderbuffers
    ///
    /// Only the first `n` names of `renderbuffers` are processed, each one
    /// completely before the next.
    pub fn delete_renderbuffers(&mut self, n: GLsizei, renderbuffers: Option<&[GLuint]>) -> Result<()> {
        crate::driver_trace!("gles::Context", "glDeleteRenderbuffers({}, {:?})", n, renderbuffers);

        if n < 0 {
            self.record_error(GlError::InvalidValue);
            return Ok(());
        }

        let Some(renderbuffers) = renderbuffers else {
            return Ok(());
        };

        for &name in renderbuffers.iter().take(n as usize) {
            if !self.resources.renderbuffer_exists(name) {
                continue;
            }

            self.release_from_current_framebuffer(name)?;

            if self.active_objects.is_active_renderbuffer(name) {
                self.active_objects.set_active_renderbuffer(0);
            }

            self.resources.deallocate_renderbuffer(name);
            crate::driver_debug!("gles::Context", "Renderbuffer {} deleted", name);
        }

        Ok(())
    }

    /// glGenRenderbuffers
    ///
    /// Writes at most `min(n, renderbuffers.len())` names.
    pub fn gen_renderbuffers(&mut self, n: GLsizei, renderbuffers: Option<&mut [GLuint]>) {
        crate::driver_trace!("gles::Context", "glGenRenderbuffers({})", n);

        if n < 0 {
            self.record_error(GlError::InvalidValue);
            return;
        }

        let Some(renderbuffers) = renderbuffers else {
            return;
        };

        for slot in renderbuffers.iter_mut().take(n as usize) {
            match self.resources.allocate_renderbuffer() {
                Some(name) => *slot = name,
                None => {
                    self.record_error(GlError::OutOfMemory);
                    return;
                }
            }
        }
    }

    /// glGetRenderbufferParameteriv, returning the value instead of writing it
    ///
    /// `None` when a GL error was recorded.
    pub fn get_renderbuffer_parameter(&mut self, target: GLenum, pname: GLenum) -> Option<GLint> {
        crate::driver_trace!(
            "gles::Context",
            "glGetRenderbufferParameteriv(0x{:04X}, 0x{:04X})", target, pname
        );

        if target != GL_RENDERBUFFER {
            self.record_error(GlError::InvalidEnum);
            return None;
        }

        let name = self.active_objects.active_renderbuffer();
        let Some(renderbuffer) = self.resources.renderbuffer(name) else {
            self.record_error(GlError::InvalidOperation);
            return None;
        };

        let value = renderbuffer.parameter(pname);
        if value.is_none() {
            self.record_error(GlError::InvalidEnum);
        }
        value
    }

    /// glGetRenderbufferParameteriv; `params` is left untouched on error
    pub fn get_renderbuffer_parameteriv(&mut self, target: GLenum, pname: GLenum, params: &mut GLint) {
        if let Some(value) = self.get_renderbuffer_parameter(target, pname) {
            *params = value;
        }
    }

    /// glIsRenderbuffer
    pub fn is_renderbuffer(&self, renderbuffer: GLuint) -> bool {
        crate::driver_trace!("gles::Context", "glIsRenderbuffer({})", renderbuffer);
        self.resources.renderbuffer_exists(renderbuffer)
    }

    /// glRenderbufferStorage
    ///
    /// Validation order: target, size range, format, bound object. A
    /// backing-store failure is reported as `GL_OUT_OF_MEMORY`.
    pub fn renderbuffer_storage(
        &mut self,
        target: GLenum,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) -> Result<()> {
        crate::driver_trace!(
            "gles::Context",
            "glRenderbufferStorage(0x{:04X}, 0x{:04X}, {}, {})",
            target, internalformat, width, height
        );

        if target != GL_RENDERBUFFER {
            self.record_error(GlError::InvalidEnum);
            return Ok(());
        }

        let max = i64::from(self.config.max_renderbuffer_size);
        if width < 0 || height < 0 || i64::from(width) > max || i64::from(height) > max {
            self.record_error(GlError::InvalidValue);
            return Ok(());
        }

        let Some(format) = InternalFormat::from_gl(internalformat) else {
            self.record_error(GlError::InvalidEnum);
            return Ok(());
        };

        let name = self.active_objects.active_renderbuffer();
        if !self.resources.renderbuffer_exists(name) {
            self.record_error(GlError::InvalidOperation);
            return Ok(());
        }

        // Storage is replaced destructively; in-flight draws must not see it
        let current = self.current_framebuffer();
        if self.active_objects.active_framebuffer() != 0
            && current.is_drawing()
            && current.references_renderbuffer(name)
        {
            self.drain()?;
        }

        let Some(renderbuffer) = self.resources.renderbuffer_mut(name) else {
            return Ok(());
        };
        if let Err(e) = renderbuffer.allocate(width as u32, height as u32, format) {
            crate::driver_error!(
                "gles::Context",
                "Renderbuffer {} storage {}x{} {:?} failed: {}",
                name, width, height, format, e
            );
            self.record_error(GlError::OutOfMemory);
        }

        Ok(())
    }

    /// Drain if needed, then detach renderbuffer `name` from the current draw framebuffer
    ///
    /// Other framebuffers keep their (now stale) references.
    fn release_from_current_framebuffer(&mut self, name: GLuint) -> Result<()> {
        let framebuffer_name = self.active_objects.active_framebuffer();
        if framebuffer_name == 0 {
            return Ok(());
        }

        let Some(framebuffer) = self.resources.framebuffer(framebuffer_name) else {
            return Ok(());
        };

        let slots: Vec<AttachmentSlot> = framebuffer.renderbuffer_slots(name).collect();
        if slots.is_empty() {
            return Ok(());
        }

        if framebuffer.is_drawing() {
            if slots.contains(&AttachmentSlot::Color) {
                if let Some(framebuffer) = self.resources.framebuffer_mut(framebuffer_name) {
                    framebuffer.mark_pending_delete();
                }
            }
            self.drain()?;
        }

        if let Some(framebuffer) = self.resources.framebuffer_mut(framebuffer_name) {
            for slot in slots {
                framebuffer.detach(slot);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "context_renderbuffer_tests.rs"]
mod tests;
