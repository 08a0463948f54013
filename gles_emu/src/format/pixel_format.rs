/// Backend pixel formats and their semantic traits

use bitflags::bitflags;

/// Pixel format of a backend image
///
/// Names follow the backend layout (component order and packing), so the
/// Vulkan crate maps them one to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum PixelFormat {
    Undefined,

    // Color formats
    R4G4B4A4_UNORM_PACK16,
    R5G6B5_UNORM_PACK16,
    R5G5B5A1_UNORM_PACK16,
    R8G8B8A8_UNORM,
    B8G8R8A8_UNORM,

    // Depth / stencil formats
    D16_UNORM,
    X8_D24_UNORM_PACK32,
    D32_SFLOAT,
    S8_UINT,
    D16_UNORM_S8_UINT,
    D24_UNORM_S8_UINT,
    D32_SFLOAT_S8_UINT,
}

impl PixelFormat {
    /// Every format of the enumeration
    pub const ALL: [PixelFormat; 13] = [
        PixelFormat::Undefined,
        PixelFormat::R4G4B4A4_UNORM_PACK16,
        PixelFormat::R5G6B5_UNORM_PACK16,
        PixelFormat::R5G5B5A1_UNORM_PACK16,
        PixelFormat::R8G8B8A8_UNORM,
        PixelFormat::B8G8R8A8_UNORM,
        PixelFormat::D16_UNORM,
        PixelFormat::X8_D24_UNORM_PACK32,
        PixelFormat::D32_SFLOAT,
        PixelFormat::S8_UINT,
        PixelFormat::D16_UNORM_S8_UINT,
        PixelFormat::D24_UNORM_S8_UINT,
        PixelFormat::D32_SFLOAT_S8_UINT,
    ];

    /// Format carries depth and/or stencil data
    pub fn is_depth_stencil(self) -> bool {
        match self {
            PixelFormat::D16_UNORM
            | PixelFormat::X8_D24_UNORM_PACK32
            | PixelFormat::D32_SFLOAT
            | PixelFormat::S8_UINT
            | PixelFormat::D16_UNORM_S8_UINT
            | PixelFormat::D24_UNORM_S8_UINT
            | PixelFormat::D32_SFLOAT_S8_UINT => true,
            PixelFormat::Undefined
            | PixelFormat::R4G4B4A4_UNORM_PACK16
            | PixelFormat::R5G6B5_UNORM_PACK16
            | PixelFormat::R5G5B5A1_UNORM_PACK16
            | PixelFormat::R8G8B8A8_UNORM
            | PixelFormat::B8G8R8A8_UNORM => false,
        }
    }

    /// Format has a depth component
    pub fn is_depth(self) -> bool {
        self.storage_bits(Channels::DEPTH).depth > 0
    }

    /// Format has a stencil component
    pub fn is_stencil(self) -> bool {
        self.storage_bits(Channels::STENCIL).stencil > 0
    }

    /// Format is a defined color format
    pub fn is_color(self) -> bool {
        self != PixelFormat::Undefined && !self.is_depth_stencil()
    }

    /// Bit width of the wanted channels; unwanted channels report 0
    ///
    /// Single classification entry point: callers pick the channel (or
    /// channels) they care about instead of consulting separate tables.
    pub fn storage_bits(self, wanted: Channels) -> ChannelBits {
        // (red, green, blue, alpha, depth, stencil)
        let (r, g, b, a, d, s) = match self {
            PixelFormat::Undefined => (0, 0, 0, 0, 0, 0),
            PixelFormat::R4G4B4A4_UNORM_PACK16 => (4, 4, 4, 4, 0, 0),
            PixelFormat::R5G6B5_UNORM_PACK16 => (5, 6, 5, 0, 0, 0),
            PixelFormat::R5G5B5A1_UNORM_PACK16 => (5, 5, 5, 1, 0, 0),
            PixelFormat::R8G8B8A8_UNORM => (8, 8, 8, 8, 0, 0),
            PixelFormat::B8G8R8A8_UNORM => (8, 8, 8, 8, 0, 0),
            PixelFormat::D16_UNORM => (0, 0, 0, 0, 16, 0),
            PixelFormat::X8_D24_UNORM_PACK32 => (0, 0, 0, 0, 24, 0),
            PixelFormat::D32_SFLOAT => (0, 0, 0, 0, 32, 0),
            PixelFormat::S8_UINT => (0, 0, 0, 0, 0, 8),
            PixelFormat::D16_UNORM_S8_UINT => (0, 0, 0, 0, 16, 8),
            PixelFormat::D24_UNORM_S8_UINT => (0, 0, 0, 0, 24, 8),
            PixelFormat::D32_SFLOAT_S8_UINT => (0, 0, 0, 0, 32, 8),
        };

        let pick = |channel: Channels, bits: u8| if wanted.contains(channel) { bits } else { 0 };

        ChannelBits {
            red: pick(Channels::RED, r),
            green: pick(Channels::GREEN, g),
            blue: pick(Channels::BLUE, b),
            alpha: pick(Channels::ALPHA, a),
            depth: pick(Channels::DEPTH, d),
            stencil: pick(Channels::STENCIL, s),
        }
    }
}

bitflags! {
    /// Set of channels a storage-bits query asks for
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Channels: u8 {
        const RED = 1 << 0;
        const GREEN = 1 << 1;
        const BLUE = 1 << 2;
        const ALPHA = 1 << 3;
        const DEPTH = 1 << 4;
        const STENCIL = 1 << 5;

        const RGBA = Self::RED.bits() | Self::GREEN.bits() | Self::BLUE.bits() | Self::ALPHA.bits();
    }
}

/// Per-channel bit widths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelBits {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
    pub depth: u8,
    pub stencil: u8,
}

impl ChannelBits {
    /// Sum of the bits of every channel in `channels`
    pub fn get(&self, channels: Channels) -> u32 {
        let mut total = 0u32;
        if channels.contains(Channels::RED) { total += self.red as u32; }
        if channels.contains(Channels::GREEN) { total += self.green as u32; }
        if channels.contains(Channels::BLUE) { total += self.blue as u32; }
        if channels.contains(Channels::ALPHA) { total += self.alpha as u32; }
        if channels.contains(Channels::DEPTH) { total += self.depth as u32; }
        if channels.contains(Channels::STENCIL) { total += self.stencil as u32; }
        total
    }
}
