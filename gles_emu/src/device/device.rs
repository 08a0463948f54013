/// Device trait - the backend operations the GLES layer depends on

use crate::error::Result;
use super::image::{Image, ImageDesc};

/// Backend device shared by every context
///
/// Implemented by backend crates (e.g. `gles_emu_vulkan::VulkanDevice`) and
/// by test doubles. Contexts hold it as `Arc<Mutex<dyn Device>>` and lock it
/// for the duration of one backend operation.
pub trait Device: Send + Sync {
    /// Block until all previously submitted GPU work has completed
    ///
    /// This is the only synchronization barrier the render-target layer
    /// uses. An error means the device is lost and is propagated to the
    /// caller as a fatal condition.
    fn finish(&mut self) -> Result<()>;

    /// Create a backing image for a renderbuffer
    ///
    /// # Errors
    ///
    /// `Error::OutOfMemory` when the backend cannot allocate the storage,
    /// `Error::BackendError` for any other backend failure.
    fn create_image(&mut self, desc: &ImageDesc) -> Result<Box<dyn Image>>;
}
