/// VulkanDevice - headless Vulkan implementation of the Device trait

use ash::vk;
use gles_emu::gles::device::{Device, Image, ImageDesc, ImageInfo};
use gles_emu::gles::{Error, Result};
use gles_emu::{driver_bail, driver_debug, driver_err, driver_error, driver_info, driver_warn};
use gpu_allocator::vulkan::{Allocator, AllocatorCreateDesc, AllocationCreateDesc, AllocationScheme};
use gpu_allocator::MemoryLocation;
use std::ffi::CString;
use std::sync::Arc;
use crate::vulkan_context::GpuContext;
use crate::vulkan_format::{aspect_mask, image_usage_to_vk, pixel_format_to_vk, select_format};
use crate::vulkan_image::VulkanImage;

/// Configuration for `VulkanDevice::new`
#[derive(Debug, Clone)]
pub struct VulkanDeviceConfig {
    /// Enable VK_LAYER_KHRONOS_validation and the debug messenger
    ///
    /// Only honored when the crate is built with the `vulkan-validation` feature.
    pub enable_validation: bool,
    /// Application name reported to the driver
    pub app_name: String,
}

impl Default for VulkanDeviceConfig {
    fn default() -> Self {
        Self {
            enable_validation: cfg!(debug_assertions),
            app_name: "GLES Application".to_string(),
        }
    }
}

/// Headless Vulkan device
///
/// Owns no surface or swapchain: it only creates attachment images and
/// drains the graphics queue.
pub struct VulkanDevice {
    gpu_context: Arc<GpuContext>,
}

impl VulkanDevice {
    /// Create the instance, pick a physical device and create the logical device
    ///
    /// # Errors
    ///
    /// `Error::InitializationFailed` when the Vulkan loader is missing, no
    /// device has a graphics queue, or any creation call fails.
    pub fn new(config: VulkanDeviceConfig) -> Result<Self> {
        unsafe {
            // Create Vulkan Entry
            let entry = ash::Entry::load()
                .map_err(|e| {
                    driver_error!("gles::vulkan", "Failed to load Vulkan library: {:?}", e);
                    Error::InitializationFailed(format!("Failed to load Vulkan library: {:?}", e))
                })?;

            let app_name = CString::new(config.app_name.as_str())
                .map_err(|e| {
                    driver_error!("gles::vulkan", "Invalid application name: {}", e);
                    Error::InitializationFailed(format!("Invalid application name: {}", e))
                })?;

            // Application Info
            let app_info = vk::ApplicationInfo::default()
                .application_name(&app_name)
                .application_version(vk::make_api_version(0, 1, 0, 0))
                .engine_name(c"gles_emu")
                .engine_version(vk::make_api_version(0, 0, 1, 0))
                .api_version(vk::API_VERSION_1_1);

            let enable_validation = config.enable_validation && cfg!(feature = "vulkan-validation");
            if config.enable_validation && !enable_validation {
                driver_warn!("gles::vulkan",
                    "Validation requested but the crate was built without the vulkan-validation feature");
            }

            let mut extension_names = Vec::new();
            if enable_validation {
                extension_names.push(ash::ext::debug_utils::NAME.as_ptr());
            }

            // Validation layers
            let layer_names = if enable_validation {
                vec![c"VK_LAYER_KHRONOS_validation".as_ptr()]
            } else {
                vec![]
            };

            let create_info = vk::InstanceCreateInfo::default()
                .application_info(&app_info)
                .enabled_layer_names(&layer_names)
                .enabled_extension_names(&extension_names);

            let instance = entry
                .create_instance(&create_info, None)
                .map_err(|e| {
                    driver_error!("gles::vulkan", "Failed to create Vulkan instance: {:?}", e);
                    Error::InitializationFailed(format!("Failed to create instance: {:?}", e))
                })?;

            let (debug_utils_loader, debug_messenger) =
                Self::create_debug_messenger(&entry, &instance, enable_validation)
                    .inspect_err(|_| instance.destroy_instance(None))?;

            // Pick the first physical device exposing a graphics queue
            let physical_devices = instance
                .enumerate_physical_devices()
                .map_err(|e| {
                    driver_error!("gles::vulkan", "Failed to enumerate physical devices: {:?}", e);
                    Error::InitializationFailed(format!("Failed to enumerate physical devices: {:?}", e))
                });

            let selected = physical_devices.and_then(|devices| {
                devices
                    .into_iter()
                    .find_map(|physical_device| {
                        instance
                            .get_physical_device_queue_family_properties(physical_device)
                            .iter()
                            .position(|qf| qf.queue_flags.contains(vk::QueueFlags::GRAPHICS))
                            .map(|index| (physical_device, index as u32))
                    })
                    .ok_or_else(|| {
                        driver_error!("gles::vulkan", "No Vulkan device with a graphics queue found");
                        Error::InitializationFailed("No Vulkan device with a graphics queue found".to_string())
                    })
            });

            let (physical_device, graphics_family_index) = match selected {
                Ok(selected) => selected,
                Err(e) => {
                    Self::destroy_instance(&instance, &debug_utils_loader, debug_messenger);
                    return Err(e);
                }
            };

            // Create Logical Device
            let queue_priorities = [1.0];
            let queue_create_infos = [
                vk::DeviceQueueCreateInfo::default()
                    .queue_family_index(graphics_family_index)
                    .queue_priorities(&queue_priorities),
            ];

            let device_create_info = vk::DeviceCreateInfo::default()
                .queue_create_infos(&queue_create_infos);

            let device = match instance.create_device(physical_device, &device_create_info, None) {
                Ok(device) => device,
                Err(e) => {
                    driver_error!("gles::vulkan", "Failed to create logical device: {:?}", e);
                    Self::destroy_instance(&instance, &debug_utils_loader, debug_messenger);
                    return Err(Error::InitializationFailed(format!("Failed to create device: {:?}", e)));
                }
            };

            let graphics_queue = device.get_device_queue(graphics_family_index, 0);

            // Create GPU allocator
            let allocator = match Allocator::new(&AllocatorCreateDesc {
                instance: instance.clone(),
                device: device.clone(),
                physical_device,
                debug_settings: Default::default(),
                buffer_device_address: false,
                allocation_sizes: Default::default(),
            }) {
                Ok(allocator) => allocator,
                Err(e) => {
                    driver_error!("gles::vulkan", "Failed to create GPU allocator: {:?}", e);
                    device.destroy_device(None);
                    Self::destroy_instance(&instance, &debug_utils_loader, debug_messenger);
                    return Err(Error::InitializationFailed(format!("Failed to create allocator: {:?}", e)));
                }
            };

            let properties = instance.get_physical_device_properties(physical_device);
            let device_name = properties
                .device_name_as_c_str()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|_| "<unknown>".to_string());
            driver_info!("gles::vulkan", "Vulkan device '{}' created (graphics queue family {})",
                device_name, graphics_family_index);

            // GpuContext owns allocator, device, messenger and instance destruction
            let gpu_context = Arc::new(GpuContext::new(
                entry,
                instance,
                physical_device,
                device,
                allocator,
                graphics_queue,
                debug_utils_loader,
                debug_messenger,
            ));

            Ok(Self { gpu_context })
        }
    }

    #[cfg(feature = "vulkan-validation")]
    unsafe fn create_debug_messenger(
        entry: &ash::Entry,
        instance: &ash::Instance,
        enable_validation: bool,
    ) -> Result<(Option<ash::ext::debug_utils::Instance>, Option<vk::DebugUtilsMessengerEXT>)> {
        if !enable_validation {
            return Ok((None, None));
        }

        let debug_utils = ash::ext::debug_utils::Instance::new(entry, instance);
        crate::debug::init_debug_config();

        let debug_info = vk::DebugUtilsMessengerCreateInfoEXT::default()
            .message_severity(
                vk::DebugUtilsMessageSeverityFlagsEXT::ERROR
                    | vk::DebugUtilsMessageSeverityFlagsEXT::WARNING
            )
            .message_type(
                vk::DebugUtilsMessageTypeFlagsEXT::GENERAL
                    | vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION
                    | vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE
            )
            .pfn_user_callback(Some(crate::debug::vulkan_debug_callback));

        let messenger = debug_utils
            .create_debug_utils_messenger(&debug_info, None)
            .map_err(|e| {
                crate::debug::cleanup_debug_config();
                driver_error!("gles::vulkan", "Failed to create debug messenger: {:?}", e);
                Error::InitializationFailed(format!("Failed to create debug messenger: {:?}", e))
            })?;

        Ok((Some(debug_utils), Some(messenger)))
    }

    #[cfg(not(feature = "vulkan-validation"))]
    unsafe fn create_debug_messenger(
        _entry: &ash::Entry,
        _instance: &ash::Instance,
        _enable_validation: bool,
    ) -> Result<(Option<ash::ext::debug_utils::Instance>, Option<vk::DebugUtilsMessengerEXT>)> {
        Ok((None, None))
    }

    /// Tear down a partially initialized instance
    unsafe fn destroy_instance(
        instance: &ash::Instance,
        debug_utils_loader: &Option<ash::ext::debug_utils::Instance>,
        debug_messenger: Option<vk::DebugUtilsMessengerEXT>,
    ) {
        if let (Some(debug_utils), Some(messenger)) = (debug_utils_loader, debug_messenger) {
            #[cfg(feature = "vulkan-validation")]
            crate::debug::cleanup_debug_config();
            debug_utils.destroy_debug_utils_messenger(messenger, None);
        }
        instance.destroy_instance(None);
    }
}

impl Device for VulkanDevice {
    fn finish(&mut self) -> Result<()> {
        unsafe {
            self.gpu_context.device
                .queue_wait_idle(self.gpu_context.graphics_queue)
                .map_err(|e| driver_err!("gles::vulkan", "vkQueueWaitIdle failed: {:?}", e))
        }
    }

    fn create_image(&mut self, desc: &ImageDesc) -> Result<Box<dyn Image>> {
        if desc.width == 0 || desc.height == 0 {
            driver_bail!("gles::vulkan", "create_image: zero-sized image {}x{}", desc.width, desc.height);
        }

        let ctx = &self.gpu_context;

        let format = select_format(desc.format, desc.usage, |candidate| ctx.optimal_tiling_features(candidate))
            .ok_or_else(|| driver_err!("gles::vulkan",
                "No attachment format supported for {:?} on this device", desc.format))?;

        if format != pixel_format_to_vk(desc.format) {
            driver_debug!("gles::vulkan", "{:?} not renderable, using {:?}", desc.format, format);
        }

        unsafe {
            let image_create_info = vk::ImageCreateInfo::default()
                .image_type(vk::ImageType::TYPE_2D)
                .format(format)
                .extent(vk::Extent3D {
                    width: desc.width,
                    height: desc.height,
                    depth: 1,
                })
                .mip_levels(1)
                .array_layers(1)
                .samples(vk::SampleCountFlags::TYPE_1)
                .tiling(vk::ImageTiling::OPTIMAL)
                .usage(image_usage_to_vk(desc.usage))
                .sharing_mode(vk::SharingMode::EXCLUSIVE)
                .initial_layout(vk::ImageLayout::UNDEFINED);

            let image = ctx.device.create_image(&image_create_info, None)
                .map_err(|e| match e {
                    vk::Result::ERROR_OUT_OF_DEVICE_MEMORY | vk::Result::ERROR_OUT_OF_HOST_MEMORY => {
                        driver_error!("gles::vulkan", "Out of memory creating {}x{} image: {:?}",
                            desc.width, desc.height, e);
                        Error::OutOfMemory
                    }
                    _ => driver_err!("gles::vulkan", "Failed to create image: {:?}", e),
                })?;

            // From here on, dropping `vulkan_image` releases whatever was created
            let mut vulkan_image = VulkanImage {
                image,
                view: vk::ImageView::null(),
                allocation: None,
                vk_format: format,
                gpu_context: Arc::clone(ctx),
                info: ImageInfo::from(desc),
            };

            // Allocate memory
            let requirements = ctx.device.get_image_memory_requirements(image);

            let allocation = ctx.allocator.lock()
                .map_err(|_| driver_err!("gles::vulkan", "GPU allocator lock poisoned"))?
                .allocate(&AllocationCreateDesc {
                    name: "renderbuffer",
                    requirements,
                    location: MemoryLocation::GpuOnly,
                    linear: false,
                    allocation_scheme: AllocationScheme::GpuAllocatorManaged,
                })
                .map_err(|e| {
                    let size_mb = requirements.size as f64 / (1024.0 * 1024.0);
                    driver_error!("gles::vulkan", "Out of GPU memory for {}x{} {:?} image ({:.2} MB): {}",
                        desc.width, desc.height, desc.format, size_mb, e);
                    Error::OutOfMemory
                })?;

            let (memory, offset) = (allocation.memory(), allocation.offset());
            vulkan_image.allocation = Some(allocation);

            // Bind memory
            ctx.device.bind_image_memory(image, memory, offset)
                .map_err(|e| driver_err!("gles::vulkan", "Failed to bind image memory: {:?}", e))?;

            // Create image view
            let view_create_info = vk::ImageViewCreateInfo::default()
                .image(image)
                .view_type(vk::ImageViewType::TYPE_2D)
                .format(format)
                .components(vk::ComponentMapping {
                    r: vk::ComponentSwizzle::IDENTITY,
                    g: vk::ComponentSwizzle::IDENTITY,
                    b: vk::ComponentSwizzle::IDENTITY,
                    a: vk::ComponentSwizzle::IDENTITY,
                })
                .subresource_range(vk::ImageSubresourceRange {
                    aspect_mask: aspect_mask(format),
                    base_mip_level: 0,
                    level_count: 1,
                    base_array_layer: 0,
                    layer_count: 1,
                });

            vulkan_image.view = ctx.device.create_image_view(&view_create_info, None)
                .map_err(|e| driver_err!("gles::vulkan", "Failed to create image view: {:?}", e))?;

            Ok(Box::new(vulkan_image))
        }
    }
}

#[cfg(test)]
#[path = "vulkan_device_tests.rs"]
mod tests;
