/// Renderbuffer object - one renderable image with lazily created backing

use std::sync::{Arc, Mutex};
use crate::device::{Device, Image, ImageDesc};
use crate::error::{Error, Result};
use crate::format::{channel_for_parameter, InternalFormat};
use crate::gl::{
    GLenum, GLint, GL_RENDERBUFFER_HEIGHT, GL_RENDERBUFFER_INTERNAL_FORMAT, GL_RENDERBUFFER_WIDTH,
};

/// Target a renderbuffer has been bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Allocated (generated or referenced) but never bound
    Unset,
    /// Bound at least once to `GL_RENDERBUFFER`
    Renderbuffer,
}

enum RenderbufferState {
    Uninitialized,
    // Fields drop in order: the image must go before its device.
    Bound {
        image: Option<Box<dyn Image>>,
        device: Arc<Mutex<dyn Device>>,
    },
}

/// Renderbuffer object
///
/// A freshly generated renderbuffer holds no backend resources. The first
/// bind attaches the device; every successful `allocate` replaces the
/// backing image.
pub struct Renderbuffer {
    state: RenderbufferState,
    width: u32,
    height: u32,
    format: InternalFormat,
    storage_specified: bool,
}

impl Default for Renderbuffer {
    fn default() -> Self {
        Self {
            state: RenderbufferState::Uninitialized,
            width: 0,
            height: 0,
            format: InternalFormat::default(),
            storage_specified: false,
        }
    }
}

impl Renderbuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-time setup on first bind
    ///
    /// Only records the device. No backing image is created here; the
    /// first image comes from `allocate`.
    ///
    /// Returns `true` if this call performed the transition out of the
    /// unset state, `false` if the renderbuffer was already bound.
    pub fn bind(&mut self, device: Arc<Mutex<dyn Device>>) -> bool {
        match self.state {
            RenderbufferState::Bound { .. } => false,
            RenderbufferState::Uninitialized => {
                self.state = RenderbufferState::Bound { device, image: None };
                true
            }
        }
    }

    pub fn target(&self) -> TargetKind {
        match self.state {
            RenderbufferState::Uninitialized => TargetKind::Unset,
            RenderbufferState::Bound { .. } => TargetKind::Renderbuffer,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn internal_format(&self) -> InternalFormat {
        self.format
    }

    /// A backend image currently exists for (format, width, height)
    pub fn has_backing(&self) -> bool {
        matches!(self.state, RenderbufferState::Bound { image: Some(_), .. })
    }

    /// A storage call has succeeded at least once
    pub fn has_storage(&self) -> bool {
        self.storage_specified
    }

    /// Backing image, if any
    pub fn image(&self) -> Option<&dyn Image> {
        match &self.state {
            RenderbufferState::Bound { image: Some(image), .. } => Some(image.as_ref()),
            _ => None,
        }
    }

    /// (Re)create the backing store
    ///
    /// The previous image is released before the new one is requested, so a
    /// failed call leaves the renderbuffer without backing while keeping its
    /// previous size and format. Zero-sized storage is legal and creates no
    /// image. No validation happens here; the caller checks ranges and formats.
    pub fn allocate(&mut self, width: u32, height: u32, format: InternalFormat) -> Result<()> {
        let RenderbufferState::Bound { device, image } = &mut self.state else {
            return Err(Error::InvalidResource(
                "Renderbuffer storage requested before the first bind".to_string(),
            ));
        };

        *image = None;

        if width > 0 && height > 0 {
            let desc = ImageDesc::attachment(width, height, format.pixel_format());
            let mut device = device.lock()
                .map_err(|_| Error::BackendError("Device lock poisoned".to_string()))?;
            *image = Some(device.create_image(&desc)?);
        }

        self.width = width;
        self.height = height;
        self.format = format;
        self.storage_specified = true;

        crate::driver_debug!(
            "gles::Renderbuffer",
            "Allocated {}x{} {:?} storage",
            width, height, format
        );
        Ok(())
    }

    /// Value of a `glGetRenderbufferParameteriv` query
    ///
    /// A never-bound renderbuffer reports the defaults (`GL_RGBA4` for the
    /// internal format, 0 otherwise) for any name. Once bound, `None` means
    /// the parameter name is not a renderbuffer parameter; channel sizes stay
    /// 0 until storage has been specified.
    pub fn parameter(&self, pname: GLenum) -> Option<GLint> {
        if self.target() == TargetKind::Unset {
            return Some(match pname {
                GL_RENDERBUFFER_INTERNAL_FORMAT => InternalFormat::default().gl() as GLint,
                _ => 0,
            });
        }

        match pname {
            GL_RENDERBUFFER_WIDTH => Some(self.width as GLint),
            GL_RENDERBUFFER_HEIGHT => Some(self.height as GLint),
            GL_RENDERBUFFER_INTERNAL_FORMAT => Some(self.format.gl() as GLint),
            _ => channel_for_parameter(pname).map(|channel| {
                if self.storage_specified {
                    self.format.pixel_format().storage_bits(channel).get(channel) as GLint
                } else {
                    0
                }
            }),
        }
    }
}

#[cfg(test)]
#[path = "renderbuffer_tests.rs"]
mod tests;
