/// Image - Vulkan implementation of the Image trait

use ash::vk;
use gles_emu::gles::device::{Image, ImageInfo};
use gpu_allocator::vulkan::Allocation;
use std::sync::Arc;
use crate::vulkan_context::GpuContext;

/// Backing image of one renderbuffer
pub struct VulkanImage {
    /// Vulkan image
    pub(crate) image: vk::Image,
    /// Vulkan image view
    pub(crate) view: vk::ImageView,
    /// GPU memory allocation
    pub(crate) allocation: Option<Allocation>,
    /// Format actually used, may differ from `info.format` after fallback
    pub(crate) vk_format: vk::Format,
    /// Shared device and allocator (for cleanup)
    pub(crate) gpu_context: Arc<GpuContext>,
    /// Read-only image properties
    pub(crate) info: ImageInfo,
}

impl VulkanImage {
    pub fn vk_image(&self) -> vk::Image {
        self.image
    }

    pub fn vk_view(&self) -> vk::ImageView {
        self.view
    }

    pub fn vk_format(&self) -> vk::Format {
        self.vk_format
    }
}

impl Image for VulkanImage {
    fn info(&self) -> &ImageInfo {
        &self.info
    }
}

impl Drop for VulkanImage {
    fn drop(&mut self) {
        unsafe {
            // Destroy image view
            self.gpu_context.device.destroy_image_view(self.view, None);

            // Free GPU memory
            if let Some(allocation) = self.allocation.take() {
                if let Ok(mut allocator) = self.gpu_context.allocator.lock() {
                    allocator.free(allocation).ok();
                }
            }

            // Destroy image
            self.gpu_context.device.destroy_image(self.image, None);
        }
    }
}
