use serde::{Deserialize, Serialize};

use crate::foundation::math::Channel;

/// Channel-layout metadata of an interleaved pixel format.
///
/// A pixel is a slice of exactly [`PixelLayout::CHANNELS`] values. The alpha
/// position is never written by color blending; the engine returns alpha
/// separately.
pub trait PixelLayout: Send + Sync + 'static {
    /// Storage type of each channel.
    type Channel: Channel;
    /// Number of channels per pixel, alpha included.
    const CHANNELS: usize;
    /// Index of the alpha channel.
    const ALPHA_POS: usize;
    /// Index of the red channel.
    const RED_POS: usize;
    /// Index of the green channel.
    const GREEN_POS: usize;
    /// Index of the blue channel.
    const BLUE_POS: usize;
}

macro_rules! layout {
    ($(#[$doc:meta])* $name:ident, $t:ty, r = $r:expr, g = $g:expr, b = $b:expr, a = $a:expr) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl PixelLayout for $name {
            type Channel = $t;
            const CHANNELS: usize = 4;
            const ALPHA_POS: usize = $a;
            const RED_POS: usize = $r;
            const GREEN_POS: usize = $g;
            const BLUE_POS: usize = $b;
        }
    };
}

layout!(
    /// 8-bit RGBA.
    Rgba8, u8, r = 0, g = 1, b = 2, a = 3
);
layout!(
    /// 8-bit BGRA, the usual in-memory order of 8-bit painting canvases.
    Bgra8, u8, r = 2, g = 1, b = 0, a = 3
);
layout!(
    /// 16-bit RGBA.
    Rgba16, u16, r = 0, g = 1, b = 2, a = 3
);
layout!(
    /// 32-bit float RGBA.
    RgbaF32, f32, r = 0, g = 1, b = 2, a = 3
);

/// Which channels of the destination a composite call may write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelFlags {
    /// Every color channel is writable.
    #[default]
    All,
    /// Only channels whose bit is set are writable (bit `i` = channel `i`).
    Selected(u64),
}

impl ChannelFlags {
    /// Maximum channel index a selection can address.
    pub const MAX_CHANNELS: usize = 64;

    /// Selection containing exactly the given channel indices. Indices past
    /// [`ChannelFlags::MAX_CHANNELS`] are ignored.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let bits = indices
            .into_iter()
            .filter(|&i| i < Self::MAX_CHANNELS)
            .fold(0u64, |acc, i| acc | (1u64 << i));
        Self::Selected(bits)
    }

    /// Whether channel `i` may be written.
    #[inline]
    pub fn allows(self, i: usize) -> bool {
        match self {
            Self::All => true,
            Self::Selected(bits) => i < Self::MAX_CHANNELS && bits & (1u64 << i) != 0,
        }
    }

    /// Whether the selection is the "all channels" shortcut.
    pub fn is_all(self) -> bool {
        matches!(self, Self::All)
    }

    /// Collapse to [`ChannelFlags::All`] when the selection is empty or covers
    /// every one of `channels` channels.
    pub fn normalized(self, channels: usize) -> Self {
        match self {
            Self::Selected(0) => Self::All,
            Self::Selected(_) if (0..channels).all(|i| self.allows(i)) => Self::All,
            other => other,
        }
    }
}

/// Source, destination and mask coverage plus the layer opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Alphas<T> {
    /// Source pixel alpha.
    pub src: T,
    /// Destination pixel alpha before compositing.
    pub dst: T,
    /// Selection/brush mask coverage.
    pub mask: T,
    /// Layer or stroke opacity.
    pub opacity: T,
}

impl<T: Channel> Alphas<T> {
    /// Alphas with a fully open mask and full opacity.
    pub fn new(src: T, dst: T) -> Self {
        Self {
            src,
            dst,
            mask: T::UNIT,
            opacity: T::UNIT,
        }
    }

    /// Replace the mask coverage.
    pub fn with_mask(mut self, mask: T) -> Self {
        self.mask = mask;
        self
    }

    /// Replace the opacity.
    pub fn with_opacity(mut self, opacity: T) -> Self {
        self.opacity = opacity;
        self
    }

    /// `src * mask * opacity`.
    #[inline]
    pub fn effective_src(&self) -> T {
        T::mul3(self.src, self.mask, self.opacity)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
