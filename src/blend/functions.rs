//! Stock blend functions, one set per contract shape.

use crate::blend::contracts::{AlphaFn, ChannelFn, PixelFn, WeightedFn};
use crate::foundation::math::{ALPHA_FUZZ, Channel};
use crate::spectral::mix::spectral_mix;

/// Source replaces destination.
#[inline]
pub fn normal<T: Channel>(src: T, _dst: T) -> T {
    src
}

/// Product of both channels; darkens.
#[inline]
pub fn multiply<T: Channel>(src: T, dst: T) -> T {
    T::mul(src, dst)
}

/// Inverse product of the inverses; lightens.
#[inline]
pub fn screen<T: Channel>(src: T, dst: T) -> T {
    T::union(src, dst)
}

/// Smaller of both channels.
#[inline]
pub fn darken<T: Channel>(src: T, dst: T) -> T {
    if src < dst { src } else { dst }
}

/// Larger of both channels.
#[inline]
pub fn lighten<T: Channel>(src: T, dst: T) -> T {
    if src > dst { src } else { dst }
}

/// Absolute difference.
#[inline]
pub fn difference<T: Channel>(src: T, dst: T) -> T {
    T::from_f32((src.to_f32() - dst.to_f32()).abs())
}

/// Saturating add.
#[inline]
pub fn addition<T: Channel>(src: T, dst: T) -> T {
    T::from_f32((src.to_f32() + dst.to_f32()).min(1.0))
}

/// `dst - src`, floored at zero.
#[inline]
pub fn subtract<T: Channel>(src: T, dst: T) -> T {
    T::from_f32((dst.to_f32() - src.to_f32()).max(0.0))
}

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

#[inline]
fn luma(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// Shift `(r, g, b)` to luma `target`, pulling out-of-gamut results back toward gray.
fn set_luma(r: &mut f32, g: &mut f32, b: &mut f32, target: f32) {
    let d = target - luma(*r, *g, *b);
    *r += d;
    *g += d;
    *b += d;

    let l = luma(*r, *g, *b);
    let n = r.min(*g).min(*b);
    let x = r.max(*g).max(*b);

    if n < 0.0 && l - n > ALPHA_FUZZ {
        let s = l / (l - n);
        for c in [&mut *r, &mut *g, &mut *b] {
            *c = l + (*c - l) * s;
        }
    }
    if x > 1.0 && x - l > ALPHA_FUZZ {
        let s = (1.0 - l) / (x - l);
        for c in [&mut *r, &mut *g, &mut *b] {
            *c = l + (*c - l) * s;
        }
    }
}

/// Keep the destination's hue and chroma, take the source's luma.
pub fn luminosity(sr: f32, sg: f32, sb: f32, dr: &mut f32, dg: &mut f32, db: &mut f32) {
    set_luma(dr, dg, db, luma(sr, sg, sb));
}

/// Take the source's hue and chroma, keep the destination's luma.
pub fn color(sr: f32, sg: f32, sb: f32, dr: &mut f32, dg: &mut f32, db: &mut f32) {
    let target = luma(*dr, *dg, *db);
    let (mut r, mut g, mut b) = (sr, sg, sb);
    set_luma(&mut r, &mut g, &mut b, target);
    *dr = r;
    *dg = g;
    *db = b;
}

/// Paint only where the source is more opaque than the destination.
///
/// The new coverage is a sigmoid-weighted pick between both alphas that never
/// drops below the destination's; color moves toward the source by the share
/// of coverage the source added.
pub fn greater(src: f32, src_alpha: f32, dst: &mut f32, dst_alpha: &mut f32) {
    let da = *dst_alpha;
    if 1.0 - da <= ALPHA_FUZZ {
        return;
    }

    let w = 1.0 / (1.0 + (-40.0 * (da - src_alpha)).exp());
    let a = (da * w + src_alpha * (1.0 - w)).clamp(0.0, 1.0).max(da);
    if a <= ALPHA_FUZZ {
        return;
    }

    let gain = 1.0 - (1.0 - a) / (1.0 - da);
    let premul = *dst * da;
    *dst = ((premul + (src - premul) * gain) / a).clamp(0.0, 1.0);
    *dst_alpha = a;
}

/// Per-channel linear interpolation from source (`factor == 0`) to destination (`factor == 1`).
pub fn linear_mix(
    sr: f32,
    sg: f32,
    sb: f32,
    factor: f32,
    dr: &mut f32,
    dg: &mut f32,
    db: &mut f32,
) {
    *dr = sr + (*dr - sr) * factor;
    *dg = sg + (*dg - sg) * factor;
    *db = sb + (*db - sb) * factor;
}

/// [`normal`] as a [`ChannelFn`].
pub fn normal_fn<T: Channel>() -> ChannelFn<T> {
    ChannelFn(normal::<T>)
}

/// [`multiply`] as a [`ChannelFn`].
pub fn multiply_fn<T: Channel>() -> ChannelFn<T> {
    ChannelFn(multiply::<T>)
}

/// [`screen`] as a [`ChannelFn`].
pub fn screen_fn<T: Channel>() -> ChannelFn<T> {
    ChannelFn(screen::<T>)
}

/// [`darken`] as a [`ChannelFn`].
pub fn darken_fn<T: Channel>() -> ChannelFn<T> {
    ChannelFn(darken::<T>)
}

/// [`lighten`] as a [`ChannelFn`].
pub fn lighten_fn<T: Channel>() -> ChannelFn<T> {
    ChannelFn(lighten::<T>)
}

/// [`difference`] as a [`ChannelFn`].
pub fn difference_fn<T: Channel>() -> ChannelFn<T> {
    ChannelFn(difference::<T>)
}

/// [`addition`] as a [`ChannelFn`].
pub fn addition_fn<T: Channel>() -> ChannelFn<T> {
    ChannelFn(addition::<T>)
}

/// [`subtract`] as a [`ChannelFn`].
pub fn subtract_fn<T: Channel>() -> ChannelFn<T> {
    ChannelFn(subtract::<T>)
}

/// [`luminosity`] as a [`PixelFn`].
pub const LUMINOSITY: PixelFn = PixelFn(luminosity);
/// [`color`] as a [`PixelFn`].
pub const COLOR: PixelFn = PixelFn(color);
/// [`greater`] as an [`AlphaFn`].
pub const GREATER: AlphaFn = AlphaFn(greater);
/// [`linear_mix`] as a [`WeightedFn`].
pub const LINEAR_MIX: WeightedFn = WeightedFn(linear_mix);
/// [`spectral_mix`] as a [`WeightedFn`].
pub const SPECTRAL_MIX: WeightedFn = WeightedFn(spectral_mix);

#[cfg(test)]
#[path = "../../tests/unit/blend/functions.rs"]
mod tests;
