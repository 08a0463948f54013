//! Resource module
//!
//! GL objects owned by a context: renderbuffers, framebuffers and the
//! registry that maps client handles to them.

mod resource_manager;
pub mod renderbuffer;
pub mod framebuffer;

pub use resource_manager::ResourceManager;
pub use renderbuffer::{Renderbuffer, TargetKind};
pub use framebuffer::{Attachment, AttachmentKind, AttachmentSlot, Framebuffer};
