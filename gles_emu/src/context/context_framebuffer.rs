/// Framebuffer entry points

use crate::error::{GlError, Result};
use crate::gl::{
    GLenum, GLsizei, GLuint, GL_FRAMEBUFFER, GL_FRAMEBUFFER_COMPLETE,
    GL_FRAMEBUFFER_INCOMPLETE_ATTACHMENT, GL_FRAMEBUFFER_INCOMPLETE_DIMENSIONS,
    GL_FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT, GL_RENDERBUFFER,
};
use crate::resource::{AttachmentKind, AttachmentSlot};
use super::context::Context;

impl Context {
    /// glGenFramebuffers
    pub fn gen_framebuffers(&mut self, n: GLsizei, framebuffers: Option<&mut [GLuint]>) {
        crate::driver_trace!("gles::Context", "glGenFramebuffers({})", n);

        if n < 0 {
            self.record_error(GlError::InvalidValue);
            return;
        }

        let Some(framebuffers) = framebuffers else {
            return;
        };

        for slot in framebuffers.iter_mut().take(n as usize) {
            match self.resources.allocate_framebuffer() {
                Some(name) => *slot = name,
                None => {
                    self.record_error(GlError::OutOfMemory);
                    return;
                }
            }
        }
    }

    /// glIsFramebuffer
    pub fn is_framebuffer(&self, framebuffer: GLuint) -> bool {
        crate::driver_trace!("gles::Context", "glIsFramebuffer({})", framebuffer);
        self.resources.framebuffer_exists(framebuffer)
    }

    /// glBindFramebuffer; 0 selects the system framebuffer
    pub fn bind_framebuffer(&mut self, target: GLenum, framebuffer: GLuint) {
        crate::driver_trace!(
            "gles::Context",
            "glBindFramebuffer(0x{:04X}, {})", target, framebuffer
        );

        if target != GL_FRAMEBUFFER {
            self.record_error(GlError::InvalidEnum);
            return;
        }

        if framebuffer != 0 {
            self.resources.get_or_create_framebuffer(framebuffer);
        }
        self.active_objects.set_active_framebuffer(framebuffer);
    }

    /// glDeleteFramebuffers
    ///
    /// Deleting the current framebuffer waits for its in-flight draws and
    /// reverts the binding to the system framebuffer.
    pub fn delete_framebuffers(&mut self, n: GLsizei, framebuffers: Option<&[GLuint]>) -> Result<()> {
        crate::driver_trace!("gles::Context", "glDeleteFramebuffers({}, {:?})", n, framebuffers);

        if n < 0 {
            self.record_error(GlError::InvalidValue);
            return Ok(());
        }

        let Some(framebuffers) = framebuffers else {
            return Ok(());
        };

        for &name in framebuffers.iter().take(n as usize) {
            let Some(framebuffer) = self.resources.framebuffer(name) else {
                continue;
            };

            if self.active_objects.is_active_framebuffer(name) {
                if framebuffer.is_drawing() {
                    self.drain()?;
                }
                self.active_objects.set_active_framebuffer(0);
            }

            self.resources.deallocate_framebuffer(name);
            crate::driver_debug!("gles::Context", "Framebuffer {} deleted", name);
        }

        Ok(())
    }

    /// glFramebufferRenderbuffer
    ///
    /// `renderbuffer == 0` detaches the slot. Replacing an occupied slot of
    /// a drawing framebuffer waits for the GPU first.
    pub fn framebuffer_renderbuffer(
        &mut self,
        target: GLenum,
        attachment: GLenum,
        renderbuffertarget: GLenum,
        renderbuffer: GLuint,
    ) -> Result<()> {
        crate::driver_trace!(
            "gles::Context",
            "glFramebufferRenderbuffer(0x{:04X}, 0x{:04X}, 0x{:04X}, {})",
            target, attachment, renderbuffertarget, renderbuffer
        );

        if target != GL_FRAMEBUFFER {
            self.record_error(GlError::InvalidEnum);
            return Ok(());
        }

        let Some(slot) = AttachmentSlot::from_gl(attachment) else {
            self.record_error(GlError::InvalidEnum);
            return Ok(());
        };

        if renderbuffertarget != GL_RENDERBUFFER {
            self.record_error(GlError::InvalidEnum);
            return Ok(());
        }

        let framebuffer_name = self.active_objects.active_framebuffer();
        if framebuffer_name == 0 {
            self.record_error(GlError::InvalidOperation);
            return Ok(());
        }

        if renderbuffer != 0 && !self.resources.renderbuffer_exists(renderbuffer) {
            self.record_error(GlError::InvalidOperation);
            return Ok(());
        }

        let Some(framebuffer) = self.resources.framebuffer(framebuffer_name) else {
            self.record_error(GlError::InvalidOperation);
            return Ok(());
        };

        let previous = framebuffer.attachment(slot);
        let unchanged = framebuffer.attachment_is_renderbuffer(slot, renderbuffer)
            || (renderbuffer == 0 && previous.is_none());
        if !unchanged && !previous.is_none() && framebuffer.is_drawing() {
            self.drain()?;
        }

        if let Some(framebuffer) = self.resources.framebuffer_mut(framebuffer_name) {
            framebuffer.set_attachment(slot, AttachmentKind::Renderbuffer, renderbuffer);
            framebuffer.notify_updated();
        }

        Ok(())
    }

    /// glCheckFramebufferStatus
    ///
    /// Texture attachments are validated by their owner and count as complete here.
    pub fn check_framebuffer_status(&mut self, target: GLenum) -> GLenum {
        crate::driver_trace!("gles::Context", "glCheckFramebufferStatus(0x{:04X})", target);

        if target != GL_FRAMEBUFFER {
            self.record_error(GlError::InvalidEnum);
            return 0;
        }

        let framebuffer_name = self.active_objects.active_framebuffer();
        if framebuffer_name == 0 {
            return GL_FRAMEBUFFER_COMPLETE;
        }

        let Some(framebuffer) = self.resources.framebuffer(framebuffer_name) else {
            return GL_FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT;
        };

        if !framebuffer.has_attachments() {
            return GL_FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT;
        }

        let mut size: Option<(u32, u32)> = None;
        let mut mismatched = false;

        for slot in AttachmentSlot::ALL {
            let attachment = framebuffer.attachment(slot);
            if attachment.kind != AttachmentKind::Renderbuffer || attachment.is_none() {
                continue;
            }

            let Some(renderbuffer) = self.resources.renderbuffer(attachment.name) else {
                return GL_FRAMEBUFFER_INCOMPLETE_ATTACHMENT;
            };

            let (width, height) = (renderbuffer.width(), renderbuffer.height());
            // A failed re-allocation keeps the old size but drops the image
            if !renderbuffer.has_backing() || width == 0 || height == 0 {
                return GL_FRAMEBUFFER_INCOMPLETE_ATTACHMENT;
            }

            let format = renderbuffer.internal_format().pixel_format();
            let renderable = match slot {
                AttachmentSlot::Color => format.is_color(),
                AttachmentSlot::Depth => format.is_depth(),
                AttachmentSlot::Stencil => format.is_stencil(),
            };
            if !renderable {
                return GL_FRAMEBUFFER_INCOMPLETE_ATTACHMENT;
            }

            match size {
                None => size = Some((width, height)),
                Some(first) => mismatched |= first != (width, height),
            }
        }

        if mismatched {
            GL_FRAMEBUFFER_INCOMPLETE_DIMENSIONS
        } else {
            GL_FRAMEBUFFER_COMPLETE
        }
    }
}

#[cfg(test)]
#[path = "context_framebuffer_tests.rs"]
mod tests;
