/// Image trait, image descriptor, and image info

use crate::format::PixelFormat;

/// How a backing image is attached when drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageUsage {
    /// Color attachment
    ColorAttachment,
    /// Depth and/or stencil attachment
    DepthStencilAttachment,
}

impl ImageUsage {
    /// Usage implied by the format class
    pub fn for_format(format: PixelFormat) -> Self {
        if format.is_depth_stencil() {
            ImageUsage::DepthStencilAttachment
        } else {
            ImageUsage::ColorAttachment
        }
    }
}

// ===== IMAGE DESC =====

/// Descriptor for creating a backing image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDesc {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: PixelFormat,
    /// Attachment usage
    pub usage: ImageUsage,
}

impl ImageDesc {
    /// Descriptor for a 2D attachment image, usage derived from the format
    pub fn attachment(width: u32, height: u32, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            format,
            usage: ImageUsage::for_format(format),
        }
    }
}

// ===== IMAGE INFO =====

/// Read-only properties of a created image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub usage: ImageUsage,
}

impl From<&ImageDesc> for ImageInfo {
    fn from(desc: &ImageDesc) -> Self {
        Self {
            width: desc.width,
            height: desc.height,
            format: desc.format,
            usage: desc.usage,
        }
    }
}

// ===== IMAGE TRAIT =====

/// Backing image of a renderbuffer
///
/// Implemented by backend-specific image types (e.g., VulkanImage).
/// The GPU resources are released when the image is dropped.
pub trait Image: Send + Sync {
    /// Get the read-only properties of this image
    fn info(&self) -> &ImageInfo;
}
