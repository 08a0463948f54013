/// Device module - backend seam used by the render-target subsystem

pub mod device;
pub mod image;

#[cfg(test)]
pub mod mock_device;

pub use device::*;
pub use image::*;
