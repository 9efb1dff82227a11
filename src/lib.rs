//! pigmix is the pixel compositing core of a raster painting engine.
//!
//! It combines a source pixel into a destination pixel under coverage (source,
//! destination and mask alpha plus opacity), a channel selection and an
//! alpha-lock flag, with the color math supplied by a pluggable blend function.
//!
//! # Layers
//!
//! 1. **Channel algebra** ([`Channel`]): unit-range arithmetic over `u8`, `u16` and `f32`
//! 2. **Blend functions** ([`blend`]): four function shapes plus a stock library
//! 3. **Families** ([`composite::generic`]): SC, HSL, SC+Alpha, OVER and COPY alpha handling
//! 4. **Spectral mixing** ([`spectral`]): Kubelka-Munk paint mixing over 36-band reflectance
//! 5. **Drivers** ([`composite_in_place`], [`BlendMode`], [`CompositeParams`]): buffers and
//!    runtime mode selection
//!
//! Per-pixel code never allocates, never logs and never fails. Only the buffer
//! driver and parameter parsing return [`PigmixResult`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Composite function contracts, blending policies and stock functions.
pub mod blend;
/// Compositing families and the buffer driver.
pub mod composite;
/// Named blend modes and configuration.
pub mod modes;
/// Kubelka-Munk spectral paint mixing.
pub mod spectral;

pub use blend::contracts::{
    AlphaCompose, AlphaFn, ChannelCompose, ChannelFn, Clamped, PixelCompose, PixelFn, Rgb,
    WeightedCompose, WeightedFn,
};
pub use blend::policy::{AdditivePolicy, BlendingPolicy, SubtractivePolicy};
pub use composite::buffer::{BufferParams, CHUNK_PIXELS, Threading, composite_in_place};
pub use composite::generic::{
    CompositeOp, GenericCopy, GenericHsl, GenericOver, GenericSc, GenericScAlpha,
};
pub use foundation::core::{Alphas, Bgra8, ChannelFlags, PixelLayout, Rgba8, Rgba16, RgbaF32};
pub use foundation::error::{PigmixError, PigmixResult};
pub use foundation::math::{ALPHA_FUZZ, Channel};
pub use modes::{BlendMode, CompositeParams, Family};
pub use spectral::mix::{Spectrum, spectral_mix};
