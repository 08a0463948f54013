/// Format helpers - PixelFormat to vk::Format mapping and vk::Format classification

use ash::vk;
use gles_emu::gles::device::ImageUsage;
use gles_emu::gles::format::PixelFormat;

/// Map a pixel format to the Vulkan format with the same layout
pub fn pixel_format_to_vk(format: PixelFormat) -> vk::Format {
    match format {
        PixelFormat::Undefined => vk::Format::UNDEFINED,
        PixelFormat::R4G4B4A4_UNORM_PACK16 => vk::Format::R4G4B4A4_UNORM_PACK16,
        PixelFormat::R5G6B5_UNORM_PACK16 => vk::Format::R5G6B5_UNORM_PACK16,
        PixelFormat::R5G5B5A1_UNORM_PACK16 => vk::Format::R5G5B5A1_UNORM_PACK16,
        PixelFormat::R8G8B8A8_UNORM => vk::Format::R8G8B8A8_UNORM,
        PixelFormat::B8G8R8A8_UNORM => vk::Format::B8G8R8A8_UNORM,
        PixelFormat::D16_UNORM => vk::Format::D16_UNORM,
        PixelFormat::X8_D24_UNORM_PACK32 => vk::Format::X8_D24_UNORM_PACK32,
        PixelFormat::D32_SFLOAT => vk::Format::D32_SFLOAT,
        PixelFormat::S8_UINT => vk::Format::S8_UINT,
        PixelFormat::D16_UNORM_S8_UINT => vk::Format::D16_UNORM_S8_UINT,
        PixelFormat::D24_UNORM_S8_UINT => vk::Format::D24_UNORM_S8_UINT,
        PixelFormat::D32_SFLOAT_S8_UINT => vk::Format::D32_SFLOAT_S8_UINT,
    }
}

/// Vulkan formats to try, in order, for a pixel format
///
/// The first entry is always the exact mapping. The 16-bit color formats and
/// the stencil-only format are optional as attachments, so wider formats
/// with the same channels follow them.
pub fn format_candidates(format: PixelFormat) -> &'static [vk::Format] {
    match format {
        PixelFormat::Undefined => &[],
        PixelFormat::R4G4B4A4_UNORM_PACK16 => &[
            vk::Format::R4G4B4A4_UNORM_PACK16,
            vk::Format::B4G4R4A4_UNORM_PACK16,
            vk::Format::R8G8B8A8_UNORM,
        ],
        PixelFormat::R5G6B5_UNORM_PACK16 => &[
            vk::Format::R5G6B5_UNORM_PACK16,
            vk::Format::B5G6R5_UNORM_PACK16,
            vk::Format::R8G8B8A8_UNORM,
        ],
        PixelFormat::R5G5B5A1_UNORM_PACK16 => &[
            vk::Format::R5G5B5A1_UNORM_PACK16,
            vk::Format::A1R5G5B5_UNORM_PACK16,
            vk::Format::B5G5R5A1_UNORM_PACK16,
            vk::Format::R8G8B8A8_UNORM,
        ],
        PixelFormat::R8G8B8A8_UNORM => &[vk::Format::R8G8B8A8_UNORM, vk::Format::B8G8R8A8_UNORM],
        PixelFormat::B8G8R8A8_UNORM => &[vk::Format::B8G8R8A8_UNORM, vk::Format::R8G8B8A8_UNORM],
        PixelFormat::D16_UNORM => &[vk::Format::D16_UNORM, vk::Format::D32_SFLOAT],
        PixelFormat::X8_D24_UNORM_PACK32 => &[
            vk::Format::X8_D24_UNORM_PACK32,
            vk::Format::D32_SFLOAT,
        ],
        PixelFormat::D32_SFLOAT => &[vk::Format::D32_SFLOAT],
        PixelFormat::S8_UINT => &[
            vk::Format::S8_UINT,
            vk::Format::D24_UNORM_S8_UINT,
            vk::Format::D32_SFLOAT_S8_UINT,
            vk::Format::D16_UNORM_S8_UINT,
        ],
        PixelFormat::D16_UNORM_S8_UINT => &[
            vk::Format::D16_UNORM_S8_UINT,
            vk::Format::D24_UNORM_S8_UINT,
            vk::Format::D32_SFLOAT_S8_UINT,
        ],
        PixelFormat::D24_UNORM_S8_UINT => &[
            vk::Format::D24_UNORM_S8_UINT,
            vk::Format::D32_SFLOAT_S8_UINT,
        ],
        PixelFormat::D32_SFLOAT_S8_UINT => &[
            vk::Format::D32_SFLOAT_S8_UINT,
            vk::Format::D24_UNORM_S8_UINT,
        ],
    }
}

/// Format has depth and/or stencil data
pub fn vk_format_is_depth_stencil(format: vk::Format) -> bool {
    matches!(
        format,
        vk::Format::D16_UNORM
            | vk::Format::X8_D24_UNORM_PACK32
            | vk::Format::D32_SFLOAT
            | vk::Format::S8_UINT
            | vk::Format::D16_UNORM_S8_UINT
            | vk::Format::D24_UNORM_S8_UINT
            | vk::Format::D32_SFLOAT_S8_UINT
    )
}

/// Format has a depth component
pub fn vk_format_is_depth(format: vk::Format) -> bool {
    matches!(
        format,
        vk::Format::D16_UNORM
            | vk::Format::X8_D24_UNORM_PACK32
            | vk::Format::D32_SFLOAT
            | vk::Format::D16_UNORM_S8_UINT
            | vk::Format::D24_UNORM_S8_UINT
            | vk::Format::D32_SFLOAT_S8_UINT
    )
}

/// Format has a stencil component
pub fn vk_format_is_stencil(format: vk::Format) -> bool {
    matches!(
        format,
        vk::Format::S8_UINT
            | vk::Format::D16_UNORM_S8_UINT
            | vk::Format::D24_UNORM_S8_UINT
            | vk::Format::D32_SFLOAT_S8_UINT
    )
}

pub fn vk_format_is_color(format: vk::Format) -> bool {
    format != vk::Format::UNDEFINED && !vk_format_is_depth_stencil(format)
}

/// Aspects covered by a view of the whole image
pub fn aspect_mask(format: vk::Format) -> vk::ImageAspectFlags {
    if !vk_format_is_depth_stencil(format) {
        return vk::ImageAspectFlags::COLOR;
    }

    let mut aspect = vk::ImageAspectFlags::empty();
    if vk_format_is_depth(format) {
        aspect |= vk::ImageAspectFlags::DEPTH;
    }
    if vk_format_is_stencil(format) {
        aspect |= vk::ImageAspectFlags::STENCIL;
    }
    aspect
}

/// Image usage flags for a backing image
///
/// Transfer source is always set so the contents can be read back.
pub fn image_usage_to_vk(usage: ImageUsage) -> vk::ImageUsageFlags {
    match usage {
        ImageUsage::ColorAttachment => {
            vk::ImageUsageFlags::COLOR_ATTACHMENT
                | vk::ImageUsageFlags::SAMPLED
                | vk::ImageUsageFlags::TRANSFER_SRC
        }
        ImageUsage::DepthStencilAttachment => {
            vk::ImageUsageFlags::DEPTH_STENCIL_ATTACHMENT | vk::ImageUsageFlags::TRANSFER_SRC
        }
    }
}

/// Optimal-tiling features a candidate format must support
pub fn required_format_features(usage: ImageUsage) -> vk::FormatFeatureFlags {
    match usage {
        ImageUsage::ColorAttachment => vk::FormatFeatureFlags::COLOR_ATTACHMENT,
        ImageUsage::DepthStencilAttachment => vk::FormatFeatureFlags::DEPTH_STENCIL_ATTACHMENT,
    }
}

/// First candidate whose optimal-tiling features satisfy `usage`
///
/// `features_of` reports the optimal-tiling features of a format; the
/// device passes a closure over `get_physical_device_format_properties`.
pub fn select_format<F>(format: PixelFormat, usage: ImageUsage, features_of: F) -> Option<vk::Format>
where
    F: Fn(vk::Format) -> vk::FormatFeatureFlags,
{
    let required = required_format_features(usage);
    format_candidates(format)
        .iter()
        .copied()
        .find(|&candidate| features_of(candidate).contains(required))
}

#[cfg(test)]
#[path = "vulkan_format_tests.rs"]
mod tests;
