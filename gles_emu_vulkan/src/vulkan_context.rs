/// GpuContext - Vulkan objects shared by the device and every image it creates
///
/// Images keep an `Arc<GpuContext>`, so the context outlives all of them and
/// is the one place where the allocator, device and instance are destroyed.

use ash::vk;
use gpu_allocator::vulkan::Allocator;
use std::mem::ManuallyDrop;
use std::sync::{Arc, Mutex};

pub struct GpuContext {
    /// Vulkan logical device
    pub device: ash::Device,

    /// GPU memory allocator
    /// Wrapped in ManuallyDrop so its memory blocks are freed before the device is destroyed
    pub allocator: ManuallyDrop<Arc<Mutex<Allocator>>>,

    /// Queue drained by `finish()`
    pub graphics_queue: vk::Queue,

    /// Needed by `get_physical_device_format_properties`
    pub physical_device: vk::PhysicalDevice,

    pub(crate) instance: ash::Instance,

    /// Keeps the Vulkan loader alive as long as the instance
    _entry: ash::Entry,

    /// Debug utils loader (validation builds only)
    pub(crate) debug_utils_loader: Option<ash::ext::debug_utils::Instance>,

    /// Debug messenger handle
    pub(crate) debug_messenger: Option<vk::DebugUtilsMessengerEXT>,
}

impl GpuContext {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        entry: ash::Entry,
        instance: ash::Instance,
        physical_device: vk::PhysicalDevice,
        device: ash::Device,
        allocator: Allocator,
        graphics_queue: vk::Queue,
        debug_utils_loader: Option<ash::ext::debug_utils::Instance>,
        debug_messenger: Option<vk::DebugUtilsMessengerEXT>,
    ) -> Self {
        Self {
            device,
            allocator: ManuallyDrop::new(Arc::new(Mutex::new(allocator))),
            graphics_queue,
            physical_device,
            instance,
            _entry: entry,
            debug_utils_loader,
            debug_messenger,
        }
    }

    /// Optimal-tiling features of a format on this physical device
    pub fn optimal_tiling_features(&self, format: vk::Format) -> vk::FormatFeatureFlags {
        unsafe {
            self.instance
                .get_physical_device_format_properties(self.physical_device, format)
                .optimal_tiling_features
        }
    }
}

impl Drop for GpuContext {
    fn drop(&mut self) {
        unsafe {
            self.device.device_wait_idle().ok();

            // 1. Free VkDeviceMemory pages BEFORE destroying the device
            ManuallyDrop::drop(&mut self.allocator);

            // 2. Destroy debug messenger BEFORE device and instance
            #[cfg(feature = "vulkan-validation")]
            crate::debug::cleanup_debug_config();

            if let (Some(debug_utils), Some(messenger)) = (
                &self.debug_utils_loader,
                &self.debug_messenger,
            ) {
                debug_utils.destroy_debug_utils_messenger(*messenger, None);
            }

            // 3. Destroy device and instance
            self.device.destroy_device(None);
            self.instance.destroy_instance(None);
        }
    }
}
