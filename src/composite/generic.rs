//! The five compositing families.
//!
//! Each family owns the alpha algebra and delegates the color math to a
//! plugged-in blend function. All of them:
//!
//! - fold mask and opacity into the source alpha once (`Alphas::effective_src`),
//! - compare alphas against zero/unit with [`Channel::is_zero_fuzzy`] / [`Channel::is_unit_fuzzy`],
//! - never write the alpha channel; the new destination alpha is returned.

use std::marker::PhantomData;

use crate::blend::contracts::{AlphaCompose, ChannelCompose, PixelCompose, Rgb, WeightedCompose};
use crate::blend::policy::{AdditivePolicy, BlendingPolicy};
use crate::foundation::core::{Alphas, ChannelFlags, PixelLayout};
use crate::foundation::math::Channel;

/// A compositing operation over pixels of layout `L`.
pub trait CompositeOp<L: PixelLayout>: Send + Sync {
    /// Blend `src` into the selected color channels of `dst` and return the
    /// new destination alpha. When `alpha_locked` is set the returned alpha is
    /// `alphas.dst` whenever the destination was not transparent.
    fn compose(
        &self,
        src: &[L::Channel],
        dst: &mut [L::Channel],
        alphas: Alphas<L::Channel>,
        flags: ChannelFlags,
        alpha_locked: bool,
    ) -> L::Channel;
}

#[inline]
fn color_channels<L: PixelLayout>(flags: ChannelFlags) -> impl Iterator<Item = usize> {
    (0..L::CHANNELS).filter(move |&i| i != L::ALPHA_POS && flags.allows(i))
}

#[inline]
fn rgb_positions<L: PixelLayout>() -> [usize; 3] {
    [L::RED_POS, L::GREEN_POS, L::BLUE_POS]
}

/// Separable-channel family: `compose_channel` runs once per selected channel
/// in the policy's additive space.
#[derive(Debug)]
pub struct GenericSc<F, B = AdditivePolicy> {
    func: F,
    policy: PhantomData<fn() -> B>,
}

impl<F, B> GenericSc<F, B> {
    /// Wrap a per-channel function.
    pub const fn new(func: F) -> Self {
        Self {
            func,
            policy: PhantomData,
        }
    }
}

impl<F: Clone, B> Clone for GenericSc<F, B> {
    fn clone(&self) -> Self {
        Self::new(self.func.clone())
    }
}

impl<F: Copy, B> Copy for GenericSc<F, B> {}

impl<F, B> GenericSc<F, B> {
    #[inline]
    fn additive_inputs<T>(&self, src: T, dst: T) -> (T, T)
    where
        T: Channel,
        F: ChannelCompose<T>,
        B: BlendingPolicy<T>,
    {
        (
            self.func.clamp_source(B::to_additive(src)),
            self.func.clamp_destination(B::to_additive(dst)),
        )
    }

    /// `dst = lerp(from, compose(s, d), weight)` over every selected color channel,
    /// where `from` is the destination (`lerp_from_src == false`) or the source.
    #[inline]
    fn lerp_composed<L>(
        &self,
        src: &[L::Channel],
        dst: &mut [L::Channel],
        weight: L::Channel,
        lerp_from_src: bool,
        flags: ChannelFlags,
    ) where
        L: PixelLayout,
        F: ChannelCompose<L::Channel>,
        B: BlendingPolicy<L::Channel>,
    {
        for i in color_channels::<L>(flags) {
            let (s, d) = self.additive_inputs(src[i], dst[i]);
            let from = if lerp_from_src { s } else { d };
            let composed = self.func.compose_channel(s, d);
            dst[i] = B::from_additive(L::Channel::lerp(from, composed, weight));
        }
    }
}

impl<L, F, B> CompositeOp<L> for GenericSc<F, B>
where
    L: PixelLayout,
    F: ChannelCompose<L::Channel>,
    B: BlendingPolicy<L::Channel>,
{
    fn compose(
        &self,
        src: &[L::Channel],
        dst: &mut [L::Channel],
        alphas: Alphas<L::Channel>,
        flags: ChannelFlags,
        alpha_locked: bool,
    ) -> L::Channel {
        debug_assert_eq!(src.len(), L::CHANNELS);
        debug_assert_eq!(dst.len(), L::CHANNELS);

        let src_alpha = alphas.effective_src();
        let dst_alpha = alphas.dst;

        if src_alpha.is_zero_fuzzy() {
            return dst_alpha;
        }

        if alpha_locked {
            if !dst_alpha.is_zero_fuzzy() {
                self.lerp_composed::<L>(src, dst, src_alpha, false, flags);
            }
            return dst_alpha;
        }

        if dst_alpha.is_zero_fuzzy() {
            for i in color_channels::<L>(flags) {
                dst[i] = B::from_additive(self.func.clamp_source(B::to_additive(src[i])));
            }
            return src_alpha;
        }

        if dst_alpha.is_unit_fuzzy() {
            self.lerp_composed::<L>(src, dst, src_alpha, false, flags);
            return L::Channel::UNIT;
        }

        if src_alpha.is_unit_fuzzy() {
            self.lerp_composed::<L>(src, dst, dst_alpha, true, flags);
            return L::Channel::UNIT;
        }

        let new_alpha = L::Channel::union(src_alpha, dst_alpha);
        if !new_alpha.is_zero_fuzzy() {
            for i in color_channels::<L>(flags) {
                let (s, d) = self.additive_inputs(src[i], dst[i]);
                let composed = self.func.compose_channel(s, d);
                let blended = L::Channel::blend(s, src_alpha, d, dst_alpha, composed);
                dst[i] = B::from_additive(L::Channel::div(blended, new_alpha));
            }
        }
        new_alpha
    }
}

/// Whole-pixel family for functions that need all three color channels at
/// once (hue/saturation/luminosity style blends).
#[derive(Clone, Copy, Debug)]
pub struct GenericHsl<F> {
    func: F,
}

impl<F> GenericHsl<F> {
    /// Wrap a whole-pixel function.
    pub const fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F: PixelCompose> GenericHsl<F> {
    fn composed<T: Channel>(&self, src: &[T], dst: &[T], rgb: [usize; 3]) -> Rgb {
        let s = rgb.map(|i| self.func.clamp_source(src[i].to_f32()));
        let mut d = rgb.map(|i| self.func.clamp_destination(dst[i].to_f32()));
        self.func.compose_channels(s, &mut d);
        d
    }
}

impl<L, F> CompositeOp<L> for GenericHsl<F>
where
    L: PixelLayout,
    F: PixelCompose,
{
    fn compose(
        &self,
        src: &[L::Channel],
        dst: &mut [L::Channel],
        alphas: Alphas<L::Channel>,
        flags: ChannelFlags,
        alpha_locked: bool,
    ) -> L::Channel {
        debug_assert_eq!(src.len(), L::CHANNELS);
        debug_assert_eq!(dst.len(), L::CHANNELS);

        let src_alpha = alphas.effective_src();
        let dst_alpha = alphas.dst;
        let rgb = rgb_positions::<L>();

        if alpha_locked {
            if !dst_alpha.is_zero_fuzzy() {
                let out = self.composed(src, dst, rgb);
                for (&i, v) in rgb.iter().zip(out) {
                    if flags.allows(i) {
                        dst[i] = L::Channel::lerp(dst[i], L::Channel::from_f32(v), src_alpha);
                    }
                }
            }
            return dst_alpha;
        }

        let new_alpha = L::Channel::union(src_alpha, dst_alpha);
        if !new_alpha.is_zero_fuzzy() {
            let out = self.composed(src, dst, rgb);
            for (&i, v) in rgb.iter().zip(out) {
                if flags.allows(i) {
                    let blended = L::Channel::blend(
                        src[i],
                        src_alpha,
                        dst[i],
                        dst_alpha,
                        L::Channel::from_f32(v),
                    );
                    dst[i] = L::Channel::div(blended, new_alpha);
                }
            }
        }
        new_alpha
    }
}

/// Separable family for functions that blend color and alpha together. The
/// function's alpha output is context only; the union alpha is returned.
#[derive(Debug)]
pub struct GenericScAlpha<F, B = AdditivePolicy> {
    func: F,
    policy: PhantomData<fn() -> B>,
}

impl<F, B> GenericScAlpha<F, B> {
    /// Wrap an alpha-aware per-channel function.
    pub const fn new(func: F) -> Self {
        Self {
            func,
            policy: PhantomData,
        }
    }
}

impl<F: Clone, B> Clone for GenericScAlpha<F, B> {
    fn clone(&self) -> Self {
        Self::new(self.func.clone())
    }
}

impl<F: Copy, B> Copy for GenericScAlpha<F, B> {}

impl<F: AlphaCompose, B> GenericScAlpha<F, B> {
    fn apply<L>(
        &self,
        src: &[L::Channel],
        dst: &mut [L::Channel],
        src_alpha: L::Channel,
        dst_alpha: L::Channel,
        flags: ChannelFlags,
    ) where
        L: PixelLayout,
        B: BlendingPolicy<L::Channel>,
    {
        let sa = src_alpha.to_f32();
        for i in color_channels::<L>(flags) {
            let mut value = B::to_additive(dst[i]).to_f32();
            let mut alpha = dst_alpha.to_f32();
            self.func
                .compose(B::to_additive(src[i]).to_f32(), sa, &mut value, &mut alpha);
            dst[i] = B::from_additive(L::Channel::from_f32(value));
        }
    }
}

impl<L, F, B> CompositeOp<L> for GenericScAlpha<F, B>
where
    L: PixelLayout,
    F: AlphaCompose,
    B: BlendingPolicy<L::Channel>,
{
    fn compose(
        &self,
        src: &[L::Channel],
        dst: &mut [L::Channel],
        alphas: Alphas<L::Channel>,
        flags: ChannelFlags,
        alpha_locked: bool,
    ) -> L::Channel {
        debug_assert_eq!(src.len(), L::CHANNELS);
        debug_assert_eq!(dst.len(), L::CHANNELS);

        let src_alpha = alphas.effective_src();
        let dst_alpha = alphas.dst;

        if alpha_locked {
            if !dst_alpha.is_zero_fuzzy() {
                self.apply::<L>(src, dst, src_alpha, dst_alpha, flags);
            }
            return dst_alpha;
        }

        let new_alpha = L::Channel::union(src_alpha, dst_alpha);
        if !new_alpha.is_zero_fuzzy() {
            self.apply::<L>(src, dst, src_alpha, dst_alpha, flags);
        }
        new_alpha
    }
}

fn copy_rgb<L: PixelLayout>(src: &[L::Channel], dst: &mut [L::Channel], flags: ChannelFlags) {
    for i in rgb_positions::<L>() {
        if flags.allows(i) {
            dst[i] = src[i];
        }
    }
}

fn mix_rgb<L: PixelLayout, F: WeightedCompose>(
    func: &F,
    src: &[L::Channel],
    dst: &mut [L::Channel],
    factor: f32,
    flags: ChannelFlags,
) {
    let rgb = rgb_positions::<L>();
    let s = rgb.map(|i| src[i].to_f32());
    let mut d = rgb.map(|i| dst[i].to_f32());
    func.compose(s, factor, &mut d);
    for (&i, v) in rgb.iter().zip(d) {
        if flags.allows(i) {
            dst[i] = L::Channel::from_f32(v);
        }
    }
}

/// Source-over family with a weighted mix function. The weight handed to the
/// function is `1 - srcA / newA`.
#[derive(Clone, Copy, Debug)]
pub struct GenericOver<F> {
    func: F,
}

impl<F> GenericOver<F> {
    /// Wrap a weighted mix function.
    pub const fn new(func: F) -> Self {
        Self { func }
    }
}

impl<L, F> CompositeOp<L> for GenericOver<F>
where
    L: PixelLayout,
    F: WeightedCompose,
{
    fn compose(
        &self,
        src: &[L::Channel],
        dst: &mut [L::Channel],
        alphas: Alphas<L::Channel>,
        flags: ChannelFlags,
        alpha_locked: bool,
    ) -> L::Channel {
        debug_assert_eq!(src.len(), L::CHANNELS);
        debug_assert_eq!(dst.len(), L::CHANNELS);

        let src_alpha = alphas.effective_src();
        let dst_alpha = alphas.dst;

        if src_alpha.is_zero_fuzzy() {
            return dst_alpha;
        }

        let new_alpha = if alpha_locked {
            dst_alpha
        } else {
            L::Channel::union(src_alpha, dst_alpha)
        };

        if dst_alpha.is_zero_fuzzy() {
            copy_rgb::<L>(src, dst, flags);
        } else {
            let factor = (src_alpha.to_f32() / new_alpha.to_f32()).clamp(0.0, 1.0);
            mix_rgb::<L, F>(&self.func, src, dst, 1.0 - factor, flags);
        }
        new_alpha
    }
}

/// Copy family: alpha moves toward the source alpha by `mask * opacity`
/// instead of a Porter-Duff union, and color is mixed with weight `1 - mask * opacity`.
#[derive(Clone, Copy, Debug)]
pub struct GenericCopy<F> {
    func: F,
}

impl<F> GenericCopy<F> {
    /// Wrap a weighted mix function.
    pub const fn new(func: F) -> Self {
        Self { func }
    }
}

impl<L, F> CompositeOp<L> for GenericCopy<F>
where
    L: PixelLayout,
    F: WeightedCompose,
{
    fn compose(
        &self,
        src: &[L::Channel],
        dst: &mut [L::Channel],
        alphas: Alphas<L::Channel>,
        flags: ChannelFlags,
        alpha_locked: bool,
    ) -> L::Channel {
        debug_assert_eq!(src.len(), L::CHANNELS);
        debug_assert_eq!(dst.len(), L::CHANNELS);

        let opacity = L::Channel::mul(alphas.mask, alphas.opacity);
        let dst_alpha = alphas.dst;

        if opacity.is_zero_fuzzy() {
            return dst_alpha;
        }

        let new_alpha = if alpha_locked {
            dst_alpha
        } else {
            L::Channel::lerp(dst_alpha, alphas.src, opacity)
        };

        if alphas.src.is_zero_fuzzy() {
            return new_alpha;
        }

        if dst_alpha.is_zero_fuzzy() {
            copy_rgb::<L>(src, dst, flags);
        } else {
            mix_rgb::<L, F>(&self.func, src, dst, 1.0 - opacity.to_f32(), flags);
        }
        new_alpha
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/generic.rs"]
mod tests;
