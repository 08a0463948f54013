/*!
# GLES emu - Vulkan backend

Vulkan implementation of the `gles_emu` `Device` trait.

This crate creates a headless Vulkan device with Ash and allocates
renderbuffer backing images with gpu-allocator. Formats the device cannot
render to are replaced by the closest wider attachment format.
*/

mod vulkan_context;
mod vulkan_device;
mod vulkan_format;
mod vulkan_image;
#[cfg(feature = "vulkan-validation")]
mod debug;

pub use vulkan_device::{VulkanDevice, VulkanDeviceConfig};
pub use vulkan_image::VulkanImage;
pub use vulkan_format::{
    aspect_mask, format_candidates, image_usage_to_vk, pixel_format_to_vk, required_format_features,
    select_format, vk_format_is_color, vk_format_is_depth, vk_format_is_depth_stencil,
    vk_format_is_stencil,
};

// Re-export debug utilities
#[cfg(feature = "vulkan-validation")]
pub use debug::{get_validation_stats, print_validation_stats_report, ValidationStats};
