//! The four shapes of pluggable blend function consumed by the composite engine.
//!
//! | contract            | consumed by        | sees                               |
//! |---------------------|--------------------|------------------------------------|
//! | [`ChannelCompose`]  | `GenericSc`        | one channel of each pixel          |
//! | [`PixelCompose`]    | `GenericHsl`       | both RGB triples, no alpha         |
//! | [`AlphaCompose`]    | `GenericScAlpha`   | one channel plus both alphas       |
//! | [`WeightedCompose`] | `GenericOver/Copy` | both RGB triples and a mix weight  |
//!
//! Plain functions plug in through the `*Fn` newtypes.

use crate::foundation::math::Channel;

/// Normalized RGB triple.
pub type Rgb = [f32; 3];

/// Separable per-channel blend function.
pub trait ChannelCompose<T: Channel>: Send + Sync {
    /// Combine one source and one destination channel value (both in additive space).
    fn compose_channel(&self, src: T, dst: T) -> T;

    /// Hook applied to the source value before [`ChannelCompose::compose_channel`].
    #[inline]
    fn clamp_source(&self, v: T) -> T {
        v
    }

    /// Hook applied to the destination value before [`ChannelCompose::compose_channel`].
    #[inline]
    fn clamp_destination(&self, v: T) -> T {
        v
    }
}

/// Non-separable blend function over the whole RGB triple.
pub trait PixelCompose: Send + Sync {
    /// Write the blended color into `dst`.
    fn compose_channels(&self, src: Rgb, dst: &mut Rgb);

    /// Hook applied to each normalized source channel before composing.
    #[inline]
    fn clamp_source(&self, v: f32) -> f32 {
        v
    }

    /// Hook applied to each normalized destination channel before composing.
    #[inline]
    fn clamp_destination(&self, v: f32) -> f32 {
        v
    }
}

/// Per-channel blend function that manages color and alpha jointly.
///
/// The function may rewrite `dst_alpha`; the engine only uses it as context
/// and never returns it.
pub trait AlphaCompose: Send + Sync {
    /// Blend `src` into `dst` given both coverages.
    fn compose(&self, src: f32, src_alpha: f32, dst: &mut f32, dst_alpha: &mut f32);
}

/// Whole-pixel mix with an explicit weight; `factor == 0` yields the source,
/// `factor == 1` keeps the destination.
pub trait WeightedCompose: Send + Sync {
    /// Write the mixed color into `dst`.
    fn compose(&self, src: Rgb, factor: f32, dst: &mut Rgb);
}

/// Adapts `fn(src, dst) -> value` into a [`ChannelCompose`].
#[derive(Clone, Copy, Debug)]
pub struct ChannelFn<T>(pub fn(T, T) -> T);

impl<T: Channel> ChannelCompose<T> for ChannelFn<T> {
    #[inline]
    fn compose_channel(&self, src: T, dst: T) -> T {
        (self.0)(src, dst)
    }
}

/// Adapts `fn(sr, sg, sb, &mut dr, &mut dg, &mut db)` into a [`PixelCompose`].
#[derive(Clone, Copy, Debug)]
pub struct PixelFn(pub fn(f32, f32, f32, &mut f32, &mut f32, &mut f32));

impl PixelCompose for PixelFn {
    #[inline]
    fn compose_channels(&self, src: Rgb, dst: &mut Rgb) {
        let [dr, dg, db] = dst;
        (self.0)(src[0], src[1], src[2], dr, dg, db);
    }
}

/// Adapts `fn(src, src_alpha, &mut dst, &mut dst_alpha)` into an [`AlphaCompose`].
#[derive(Clone, Copy, Debug)]
pub struct AlphaFn(pub fn(f32, f32, &mut f32, &mut f32));

impl AlphaCompose for AlphaFn {
    #[inline]
    fn compose(&self, src: f32, src_alpha: f32, dst: &mut f32, dst_alpha: &mut f32) {
        (self.0)(src, src_alpha, dst, dst_alpha);
    }
}

/// Adapts `fn(sr, sg, sb, factor, &mut dr, &mut dg, &mut db)` into a [`WeightedCompose`].
#[derive(Clone, Copy, Debug)]
pub struct WeightedFn(pub fn(f32, f32, f32, f32, &mut f32, &mut f32, &mut f32));

impl WeightedCompose for WeightedFn {
    #[inline]
    fn compose(&self, src: Rgb, factor: f32, dst: &mut Rgb) {
        let [dr, dg, db] = dst;
        (self.0)(src[0], src[1], src[2], factor, dr, dg, db);
    }
}

/// Pins the inputs of the wrapped function into the unit range before composing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Clamped<F>(pub F);

impl<T: Channel, F: ChannelCompose<T>> ChannelCompose<T> for Clamped<F> {
    #[inline]
    fn compose_channel(&self, src: T, dst: T) -> T {
        self.0.compose_channel(src, dst)
    }

    #[inline]
    fn clamp_source(&self, v: T) -> T {
        self.0.clamp_source(v).clamp_unit()
    }

    #[inline]
    fn clamp_destination(&self, v: T) -> T {
        self.0.clamp_destination(v).clamp_unit()
    }
}

impl<F: PixelCompose> PixelCompose for Clamped<F> {
    #[inline]
    fn compose_channels(&self, src: Rgb, dst: &mut Rgb) {
        self.0.compose_channels(src, dst);
    }

    #[inline]
    fn clamp_source(&self, v: f32) -> f32 {
        self.0.clamp_source(v).clamp(0.0, 1.0)
    }

    #[inline]
    fn clamp_destination(&self, v: f32) -> f32 {
        self.0.clamp_destination(v).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blend/contracts.rs"]
mod tests;
