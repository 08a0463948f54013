/// Mock Device for unit tests (no GPU required)
///
/// Counts drains and image creations so tests can check exactly when the
/// render-target layer synchronizes with the GPU.

use std::sync::{Arc, Mutex};
use crate::device::{Device, Image, ImageDesc, ImageInfo};
use crate::error::{Error, Result};

// ============================================================================
// Mock Image
// ============================================================================

#[derive(Debug)]
pub struct MockImage {
    pub info: ImageInfo,
    /// Set to true when the image is dropped
    pub released: Arc<Mutex<bool>>,
}

impl Image for MockImage {
    fn info(&self) -> &ImageInfo {
        &self.info
    }
}

impl Drop for MockImage {
    fn drop(&mut self) {
        *self.released.lock().unwrap() = true;
    }
}

// ============================================================================
// Mock Device
// ============================================================================

#[derive(Default)]
pub struct MockDevice {
    /// Number of finish() calls
    pub finish_count: u32,
    /// Descriptors passed to create_image(), in call order
    pub created_images: Vec<ImageDesc>,
    /// Release flags of the created images, in call order
    pub released_flags: Vec<Arc<Mutex<bool>>>,
    /// Make create_image() fail with OutOfMemory
    pub fail_allocations: bool,
    /// Make finish() fail with BackendError
    pub fail_finish: bool,
}

impl MockDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of create_image() calls
    pub fn create_count(&self) -> usize {
        self.created_images.len()
    }

    /// Whether the n-th created image has been dropped
    pub fn is_released(&self, index: usize) -> bool {
        *self.released_flags[index].lock().unwrap()
    }
}

impl Device for MockDevice {
    fn finish(&mut self) -> Result<()> {
        self.finish_count += 1;
        if self.fail_finish {
            return Err(Error::BackendError("mock device lost".to_string()));
        }
        Ok(())
    }

    fn create_image(&mut self, desc: &ImageDesc) -> Result<Box<dyn Image>> {
        self.created_images.push(desc.clone());
        if self.fail_allocations {
            return Err(Error::OutOfMemory);
        }
        let released = Arc::new(Mutex::new(false));
        self.released_flags.push(released.clone());
        Ok(Box::new(MockImage {
            info: ImageInfo::from(desc),
            released,
        }))
    }
}

/// Shared mock plus the same device seen through the trait object
pub fn shared_mock() -> (Arc<Mutex<MockDevice>>, Arc<Mutex<dyn Device>>) {
    let mock = Arc::new(Mutex::new(MockDevice::new()));
    let device: Arc<Mutex<dyn Device>> = mock.clone();
    (mock, device)
}

#[cfg(test)]
#[path = "mock_device_tests.rs"]
mod tests;
