/// Framebuffer object - three attachment slots plus draw bookkeeping

use crate::gl::{
    GLenum, GLuint, GL_COLOR_ATTACHMENT0, GL_DEPTH_ATTACHMENT, GL_STENCIL_ATTACHMENT,
};

/// Kind of object attached to a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachmentKind {
    #[default]
    None,
    Renderbuffer,
    Texture,
}

/// Attachment point of a framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentSlot {
    Color,
    Depth,
    Stencil,
}

impl AttachmentSlot {
    pub const ALL: [AttachmentSlot; 3] = [
        AttachmentSlot::Color,
        AttachmentSlot::Depth,
        AttachmentSlot::Stencil,
    ];

    /// Parse a `GL_*_ATTACHMENT` enumerant
    pub fn from_gl(value: GLenum) -> Option<Self> {
        match value {
            GL_COLOR_ATTACHMENT0 => Some(AttachmentSlot::Color),
            GL_DEPTH_ATTACHMENT => Some(AttachmentSlot::Depth),
            GL_STENCIL_ATTACHMENT => Some(AttachmentSlot::Stencil),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            AttachmentSlot::Color => 0,
            AttachmentSlot::Depth => 1,
            AttachmentSlot::Stencil => 2,
        }
    }
}

/// Content of one attachment slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attachment {
    pub kind: AttachmentKind,
    pub name: GLuint,
}

impl Attachment {
    /// Nothing attached; a zero name always means this
    pub const NONE: Attachment = Attachment { kind: AttachmentKind::None, name: 0 };

    pub fn is_none(&self) -> bool {
        self.kind == AttachmentKind::None || self.name == 0
    }
}

/// Framebuffer object
///
/// Renderbuffers are referenced by name only, so deleting a renderbuffer
/// never touches framebuffer ownership.
#[derive(Debug, Default)]
pub struct Framebuffer {
    attachments: [Attachment; 3],
    drawing: bool,
    pending_delete: bool,
    updated: bool,
}

impl Framebuffer {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== ATTACHMENTS =====

    pub fn attachment(&self, slot: AttachmentSlot) -> Attachment {
        self.attachments[slot.index()]
    }

    /// Attach `name` of `kind`; a zero name or `AttachmentKind::None` clears the slot
    pub fn set_attachment(&mut self, slot: AttachmentSlot, kind: AttachmentKind, name: GLuint) {
        self.attachments[slot.index()] = if name == 0 || kind == AttachmentKind::None {
            Attachment::NONE
        } else {
            Attachment { kind, name }
        };
    }

    pub fn detach(&mut self, slot: AttachmentSlot) {
        self.attachments[slot.index()] = Attachment::NONE;
    }

    /// Slot currently points at the renderbuffer `name`
    pub fn attachment_is_renderbuffer(&self, slot: AttachmentSlot, name: GLuint) -> bool {
        let attachment = self.attachment(slot);
        name != 0 && attachment.kind == AttachmentKind::Renderbuffer && attachment.name == name
    }

    /// Slots holding the renderbuffer `name`, in color, depth, stencil order
    pub fn renderbuffer_slots(&self, name: GLuint) -> impl Iterator<Item = AttachmentSlot> + '_ {
        AttachmentSlot::ALL
            .into_iter()
            .filter(move |slot| self.attachment_is_renderbuffer(*slot, name))
    }

    /// Any slot holds the renderbuffer `name`
    pub fn references_renderbuffer(&self, name: GLuint) -> bool {
        self.renderbuffer_slots(name).next().is_some()
    }

    pub fn has_attachments(&self) -> bool {
        self.attachments.iter().any(|a| !a.is_none())
    }

    // ===== FLAGS =====

    /// Attachments changed; pipelines built against this framebuffer must be rebuilt
    pub fn notify_updated(&mut self) {
        self.updated = true;
    }

    pub fn is_updated(&self) -> bool {
        self.updated
    }

    /// Consumed by the pipeline-recompilation collaborator
    pub fn clear_updated(&mut self) {
        self.updated = false;
    }

    pub fn mark_pending_delete(&mut self) {
        self.pending_delete = true;
    }

    pub fn is_pending_delete(&self) -> bool {
        self.pending_delete
    }

    /// Draw commands referencing this framebuffer may be in flight
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn set_drawing(&mut self, drawing: bool) {
        self.drawing = drawing;
    }
}

#[cfg(test)]
#[path = "framebuffer_tests.rs"]
mod tests;
