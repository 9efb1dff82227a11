//! Named blend modes and the serde-facing parameter block.
//!
//! [`BlendMode`] is the runtime entry point: each variant picks a family and a
//! stock function, so callers that only know a mode id at runtime still reach
//! the statically dispatched engine.

use std::fmt;
use std::str::FromStr;

use crate::blend::functions::{
    COLOR, GREATER, LINEAR_MIX, LUMINOSITY, SPECTRAL_MIX, addition_fn, darken_fn, difference_fn,
    lighten_fn, multiply_fn, normal_fn, screen_fn, subtract_fn,
};
use crate::composite::buffer::{BufferParams, Threading, composite_in_place};
use crate::composite::generic::{
    CompositeOp, GenericCopy, GenericHsl, GenericOver, GenericSc, GenericScAlpha,
};
use crate::foundation::core::{Alphas, ChannelFlags, PixelLayout};
use crate::foundation::error::{PigmixError, PigmixResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Compositing family a mode runs in.
pub enum Family {
    /// Per-channel blend with Porter-Duff alpha.
    Sc,
    /// Whole-pixel blend with Porter-Duff alpha.
    Hsl,
    /// Per-channel blend that also sees alpha.
    ScAlpha,
    /// Source-over weighted mix.
    Over,
    /// Weighted copy toward the source.
    Copy,
}

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
/// Stock compositing modes.
pub enum BlendMode {
    /// Source over destination.
    #[default]
    Normal,
    /// `src * dst`.
    Multiply,
    /// `src + dst - src * dst`.
    Screen,
    /// Per-channel minimum.
    Darken,
    /// Per-channel maximum.
    Lighten,
    /// `|src - dst|`.
    Difference,
    /// Saturating sum.
    Addition,
    /// `dst - src`, clamped at zero.
    Subtract,
    /// Source luma with destination hue and chroma.
    Luminosity,
    /// Source hue and chroma with destination luma.
    Color,
    /// Keeps the larger of the two alphas.
    Greater,
    /// Linear source-over mix.
    Over,
    /// Linear copy toward the source.
    Copy,
    /// Source-over as Kubelka-Munk paint mixing.
    SpectralMix,
    /// Copy toward the source as Kubelka-Munk paint mixing.
    SpectralCopy,
}

impl BlendMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Normal,
        Self::Multiply,
        Self::Screen,
        Self::Darken,
        Self::Lighten,
        Self::Difference,
        Self::Addition,
        Self::Subtract,
        Self::Luminosity,
        Self::Color,
        Self::Greater,
        Self::Over,
        Self::Copy,
        Self::SpectralMix,
        Self::SpectralCopy,
    ];

    /// Stable snake_case identifier, identical to the serde name.
    pub fn id(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Darken => "darken",
            Self::Lighten => "lighten",
            Self::Difference => "difference",
            Self::Addition => "addition",
            Self::Subtract => "subtract",
            Self::Luminosity => "luminosity",
            Self::Color => "color",
            Self::Greater => "greater",
            Self::Over => "over",
            Self::Copy => "copy",
            Self::SpectralMix => "spectral_mix",
            Self::SpectralCopy => "spectral_copy",
        }
    }

    /// Family the mode is composited in.
    pub fn family(self) -> Family {
        match self {
            Self::Normal
            | Self::Multiply
            | Self::Screen
            | Self::Darken
            | Self::Lighten
            | Self::Difference
            | Self::Addition
            | Self::Subtract => Family::Sc,
            Self::Luminosity | Self::Color => Family::Hsl,
            Self::Greater => Family::ScAlpha,
            Self::Over | Self::SpectralMix => Family::Over,
            Self::Copy | Self::SpectralCopy => Family::Copy,
        }
    }

    /// Composite one pixel with this mode. See [`CompositeOp::compose`].
    pub fn compose<L: PixelLayout>(
        self,
        src: &[L::Channel],
        dst: &mut [L::Channel],
        alphas: Alphas<L::Channel>,
        flags: ChannelFlags,
        alpha_locked: bool,
    ) -> L::Channel {
        macro_rules! run {
            ($op:expr) => {
                CompositeOp::<L>::compose(&$op, src, dst, alphas, flags, alpha_locked)
            };
        }
        macro_rules! sc {
            ($f:ident) => {
                run!(GenericSc::<_>::new($f::<L::Channel>()))
            };
        }

        match self {
            Self::Normal => sc!(normal_fn),
            Self::Multiply => sc!(multiply_fn),
            Self::Screen => sc!(screen_fn),
            Self::Darken => sc!(darken_fn),
            Self::Lighten => sc!(lighten_fn),
            Self::Difference => sc!(difference_fn),
            Self::Addition => sc!(addition_fn),
            Self::Subtract => sc!(subtract_fn),
            Self::Luminosity => run!(GenericHsl::new(LUMINOSITY)),
            Self::Color => run!(GenericHsl::new(COLOR)),
            Self::Greater => run!(GenericScAlpha::<_>::new(GREATER)),
            Self::Over => run!(GenericOver::new(LINEAR_MIX)),
            Self::Copy => run!(GenericCopy::new(LINEAR_MIX)),
            Self::SpectralMix => run!(GenericOver::new(SPECTRAL_MIX)),
            Self::SpectralCopy => run!(GenericCopy::new(SPECTRAL_MIX)),
        }
    }
}

impl<L: PixelLayout> CompositeOp<L> for BlendMode {
    fn compose(
        &self,
        src: &[L::Channel],
        dst: &mut [L::Channel],
        alphas: Alphas<L::Channel>,
        flags: ChannelFlags,
        alpha_locked: bool,
    ) -> L::Channel {
        BlendMode::compose::<L>(*self, src, dst, alphas, flags, alpha_locked)
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BlendMode {
    type Err = PigmixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| PigmixError::unknown_mode(s))
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
/// Compositing request as it arrives from configuration.
///
/// Every field is optional in JSON; missing ones take the [`Default`] values
/// (normal mode, full opacity, alpha unlocked, all channels, serial).
pub struct CompositeParams {
    /// Mode to composite with.
    pub mode: BlendMode,
    /// Layer opacity in `[0, 1]`.
    pub opacity: f32,
    /// Keep destination alpha unchanged.
    pub alpha_locked: bool,
    /// Writable channel indices; `None` means all.
    pub channels: Option<Vec<usize>>,
    /// Buffer traversal.
    pub threading: Threading,
}

impl Default for CompositeParams {
    fn default() -> Self {
        Self {
            mode: BlendMode::Normal,
            opacity: 1.0,
            alpha_locked: false,
            channels: None,
            threading: Threading::Serial,
        }
    }
}

impl CompositeParams {
    /// Parse parameters from JSON. Call [`CompositeParams::validate`] before use.
    #[tracing::instrument(skip(json), fields(len = json.len()))]
    pub fn from_json(json: &str) -> PigmixResult<Self> {
        let params: Self = serde_json::from_str(json)?;
        tracing::debug!(mode = %params.mode, opacity = params.opacity, "parsed composite params");
        Ok(params)
    }

    /// Check the parameters against a pixel layout with `channel_count` channels.
    pub fn validate(&self, channel_count: usize) -> PigmixResult<()> {
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(PigmixError::validation(
                "opacity must be finite and within [0, 1]",
            ));
        }
        if let Some(channels) = &self.channels {
            let limit = channel_count.min(ChannelFlags::MAX_CHANNELS);
            if let Some(bad) = channels.iter().find(|&&c| c >= limit) {
                tracing::warn!(channel = bad, channel_count, "channel index out of range");
                return Err(PigmixError::validation(format!(
                    "channel index {bad} out of range for {channel_count}-channel pixels"
                )));
            }
        }
        Ok(())
    }

    /// Channel selection described by `channels`.
    pub fn flags(&self) -> ChannelFlags {
        match &self.channels {
            Some(channels) => ChannelFlags::from_indices(channels.iter().copied()),
            None => ChannelFlags::All,
        }
    }

    /// Settings for [`composite_in_place`].
    pub fn buffer_params(&self) -> BufferParams {
        BufferParams {
            opacity: self.opacity,
            flags: self.flags(),
            alpha_locked: self.alpha_locked,
            threading: self.threading,
        }
    }

    /// Validate against `L` and composite `src` into `dst` with the configured mode.
    pub fn apply<L: PixelLayout>(
        &self,
        dst: &mut [L::Channel],
        src: &[L::Channel],
        mask: Option<&[L::Channel]>,
    ) -> PigmixResult<()> {
        self.validate(L::CHANNELS)?;
        composite_in_place::<L, BlendMode>(&self.mode, dst, src, mask, &self.buffer_params())
    }
}

#[cfg(test)]
#[path = "../tests/unit/modes.rs"]
mod tests;
