/// Renderbuffer internal formats accepted by glRenderbufferStorage

use crate::gl::{
    GLenum, GL_DEPTH_COMPONENT16, GL_RGB565, GL_RGB5_A1, GL_RGBA4, GL_STENCIL_INDEX8,
    GL_RENDERBUFFER_ALPHA_SIZE, GL_RENDERBUFFER_BLUE_SIZE, GL_RENDERBUFFER_DEPTH_SIZE,
    GL_RENDERBUFFER_GREEN_SIZE, GL_RENDERBUFFER_RED_SIZE, GL_RENDERBUFFER_STENCIL_SIZE,
};
use super::pixel_format::{Channels, PixelFormat};

/// The five legal renderbuffer storage formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InternalFormat {
    /// 4-4-4-4 RGBA, also the value reported for never-allocated renderbuffers
    #[default]
    Rgba4,
    Rgb565,
    Rgb5A1,
    DepthComponent16,
    StencilIndex8,
}

impl InternalFormat {
    /// Parse a client enumerant; `None` for anything outside the legal set
    pub fn from_gl(value: GLenum) -> Option<Self> {
        match value {
            GL_RGBA4 => Some(InternalFormat::Rgba4),
            GL_RGB565 => Some(InternalFormat::Rgb565),
            GL_RGB5_A1 => Some(InternalFormat::Rgb5A1),
            GL_DEPTH_COMPONENT16 => Some(InternalFormat::DepthComponent16),
            GL_STENCIL_INDEX8 => Some(InternalFormat::StencilIndex8),
            _ => None,
        }
    }

    pub fn gl(self) -> GLenum {
        match self {
            InternalFormat::Rgba4 => GL_RGBA4,
            InternalFormat::Rgb565 => GL_RGB565,
            InternalFormat::Rgb5A1 => GL_RGB5_A1,
            InternalFormat::DepthComponent16 => GL_DEPTH_COMPONENT16,
            InternalFormat::StencilIndex8 => GL_STENCIL_INDEX8,
        }
    }

    /// Backend format used for the backing image
    pub fn pixel_format(self) -> PixelFormat {
        match self {
            InternalFormat::Rgba4 => PixelFormat::R4G4B4A4_UNORM_PACK16,
            InternalFormat::Rgb565 => PixelFormat::R5G6B5_UNORM_PACK16,
            InternalFormat::Rgb5A1 => PixelFormat::R5G5B5A1_UNORM_PACK16,
            InternalFormat::DepthComponent16 => PixelFormat::D16_UNORM,
            InternalFormat::StencilIndex8 => PixelFormat::S8_UINT,
        }
    }
}

/// Channel queried by one of the six `GL_RENDERBUFFER_*_SIZE` parameters
pub fn channel_for_parameter(pname: GLenum) -> Option<Channels> {
    match pname {
        GL_RENDERBUFFER_RED_SIZE => Some(Channels::RED),
        GL_RENDERBUFFER_GREEN_SIZE => Some(Channels::GREEN),
        GL_RENDERBUFFER_BLUE_SIZE => Some(Channels::BLUE),
        GL_RENDERBUFFER_ALPHA_SIZE => Some(Channels::ALPHA),
        GL_RENDERBUFFER_DEPTH_SIZE => Some(Channels::DEPTH),
        GL_RENDERBUFFER_STENCIL_SIZE => Some(Channels::STENCIL),
        _ => None,
    }
}
