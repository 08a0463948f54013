/// Context module - GL entry points of one rendering context

pub mod context;
mod context_renderbuffer;
mod context_framebuffer;

pub use context::*;
