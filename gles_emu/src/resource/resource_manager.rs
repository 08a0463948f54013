use crate::gl::GLuint;
use crate::utils::HandleTable;
use super::framebuffer::Framebuffer;
use super::renderbuffer::Renderbuffer;

/// Per-context object registry.
///
/// Owns every renderbuffer and framebuffer of one context, keyed by the
/// client-visible handle. Framebuffers are enumerable so that a renderbuffer
/// becoming real can be announced to whoever references it.
#[derive(Default)]
pub struct ResourceManager {
    renderbuffers: HandleTable<Renderbuffer>,
    framebuffers: HandleTable<Framebuffer>,
}

impl ResourceManager {
    /// Create a new empty resource manager
    pub fn new() -> Self {
        Self::default()
    }

    // ===== RENDERBUFFERS =====

    pub fn allocate_renderbuffer(&mut self) -> Option<GLuint> {
        self.renderbuffers.allocate()
    }

    pub fn renderbuffer_exists(&self, name: GLuint) -> bool {
        self.renderbuffers.contains(name)
    }

    pub fn renderbuffer(&self, name: GLuint) -> Option<&Renderbuffer> {
        self.renderbuffers.get(name)
    }

    pub fn renderbuffer_mut(&mut self, name: GLuint) -> Option<&mut Renderbuffer> {
        self.renderbuffers.get_mut(name)
    }

    /// Fetch or implicitly create the renderbuffer `name` (must be non-zero)
    pub fn get_or_create_renderbuffer(&mut self, name: GLuint) -> &mut Renderbuffer {
        self.renderbuffers.get_or_insert(name)
    }

    /// Remove the renderbuffer; its backing image is released when the returned value drops
    pub fn deallocate_renderbuffer(&mut self, name: GLuint) -> Option<Renderbuffer> {
        self.renderbuffers.remove(name)
    }

    pub fn renderbuffer_count(&self) -> usize {
        self.renderbuffers.len()
    }

    // ===== FRAMEBUFFERS =====

    pub fn allocate_framebuffer(&mut self) -> Option<GLuint> {
        self.framebuffers.allocate()
    }

    pub fn framebuffer_exists(&self, name: GLuint) -> bool {
        self.framebuffers.contains(name)
    }

    pub fn framebuffer(&self, name: GLuint) -> Option<&Framebuffer> {
        self.framebuffers.get(name)
    }

    pub fn framebuffer_mut(&mut self, name: GLuint) -> Option<&mut Framebuffer> {
        self.framebuffers.get_mut(name)
    }

    pub fn get_or_create_framebuffer(&mut self, name: GLuint) -> &mut Framebuffer {
        self.framebuffers.get_or_insert(name)
    }

    pub fn deallocate_framebuffer(&mut self, name: GLuint) -> Option<Framebuffer> {
        self.framebuffers.remove(name)
    }

    pub fn framebuffer_count(&self) -> usize {
        self.framebuffers.len()
    }

    /// Every live framebuffer, in unspecified order
    pub fn framebuffers_mut(&mut self) -> impl Iterator<Item = (GLuint, &mut Framebuffer)> {
        self.framebuffers.iter_mut()
    }

    /// Flag every framebuffer referencing renderbuffer `name`; returns how many were flagged
    pub fn notify_renderbuffer_users(&mut self, name: GLuint) -> usize {
        let mut notified = 0;
        for (_, framebuffer) in self.framebuffers_mut() {
            if framebuffer.references_renderbuffer(name) {
                framebuffer.notify_updated();
                notified += 1;
            }
        }
        notified
    }
}

#[cfg(test)]
#[path = "resource_manager_tests.rs"]
mod tests;
