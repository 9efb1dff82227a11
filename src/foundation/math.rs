//! Channel arithmetic.
//!
//! Every channel storage type maps onto the normalized range `[0, 1]`, where
//! [`Channel::ZERO`] is fully transparent/black and [`Channel::UNIT`] is fully
//! opaque/full intensity. Integer channels use rounded fixed-point math so
//! that the compositing algebra stays exact at the range endpoints.

use std::fmt::Debug;

/// Tolerance used by every fuzzy zero/unit alpha comparison in the engine.
pub const ALPHA_FUZZ: f32 = 1e-6;

/// Storage type of a single pixel channel.
pub trait Channel: Copy + PartialEq + PartialOrd + Debug + Send + Sync + 'static {
    /// Value representing `0.0`.
    const ZERO: Self;
    /// Value representing `1.0`.
    const UNIT: Self;

    /// Scale into a normalized float.
    fn to_f32(self) -> f32;
    /// Scale a normalized float back into storage range. Integer types round and saturate.
    fn from_f32(v: f32) -> Self;

    /// `a * b`.
    fn mul(a: Self, b: Self) -> Self;
    /// `a * b * c`, rounded once.
    fn mul3(a: Self, b: Self, c: Self) -> Self;
    /// `a / b`. Integer types saturate at [`Channel::UNIT`].
    fn div(a: Self, b: Self) -> Self;
    /// `a + (b - a) * alpha`.
    fn lerp(a: Self, b: Self, alpha: Self) -> Self;
    /// `1 - a`.
    fn inv(a: Self) -> Self;
    /// Porter-Duff union: `a + b - a * b`.
    fn union(a: Self, b: Self) -> Self;
    /// Premultiplied blend of a composite result `cf` against both inputs:
    /// `(1 - sa) * da * dst + (1 - da) * sa * src + sa * da * cf`.
    fn blend(src: Self, src_alpha: Self, dst: Self, dst_alpha: Self, cf: Self) -> Self;
    /// Pin into `[ZERO, UNIT]`.
    fn clamp_unit(self) -> Self;

    /// `true` when the value is zero within [`ALPHA_FUZZ`].
    #[inline]
    fn is_zero_fuzzy(self) -> bool {
        self.to_f32().abs() <= ALPHA_FUZZ
    }

    /// `true` when the value is unit within [`ALPHA_FUZZ`].
    #[inline]
    fn is_unit_fuzzy(self) -> bool {
        (self.to_f32() - 1.0).abs() <= ALPHA_FUZZ
    }
}

macro_rules! impl_int_channel {
    ($t:ty, $wide:ty) => {
        impl Channel for $t {
            const ZERO: Self = 0;
            const UNIT: Self = <$t>::MAX;

            #[inline]
            fn to_f32(self) -> f32 {
                f32::from(self) / f32::from(<$t>::MAX)
            }

            #[inline]
            fn from_f32(v: f32) -> Self {
                (v * f32::from(<$t>::MAX))
                    .round()
                    .clamp(0.0, f32::from(<$t>::MAX)) as $t
            }

            #[inline]
            fn mul(a: Self, b: Self) -> Self {
                let max = <$wide>::from(<$t>::MAX);
                ((<$wide>::from(a) * <$wide>::from(b) + max / 2) / max) as $t
            }

            #[inline]
            fn mul3(a: Self, b: Self, c: Self) -> Self {
                let max = <$wide>::from(<$t>::MAX);
                let max2 = max * max;
                ((<$wide>::from(a) * <$wide>::from(b) * <$wide>::from(c) + max2 / 2) / max2) as $t
            }

            #[inline]
            fn div(a: Self, b: Self) -> Self {
                if b == 0 {
                    return <$t>::MAX;
                }
                let max = <$wide>::from(<$t>::MAX);
                let b = <$wide>::from(b);
                ((<$wide>::from(a) * max + b / 2) / b).min(max) as $t
            }

            #[inline]
            fn lerp(a: Self, b: Self, alpha: Self) -> Self {
                let max = i64::from(<$t>::MAX);
                let num = (i64::from(b) - i64::from(a)) * i64::from(alpha);
                let half = if num >= 0 { max / 2 } else { -(max / 2) };
                (i64::from(a) + (num + half) / max).clamp(0, max) as $t
            }

            #[inline]
            fn inv(a: Self) -> Self {
                <$t>::MAX - a
            }

            #[inline]
            fn union(a: Self, b: Self) -> Self {
                let sum = <$wide>::from(a) + <$wide>::from(b);
                (sum - <$wide>::from(Self::mul(a, b))) as $t
            }

            #[inline]
            fn blend(src: Self, src_alpha: Self, dst: Self, dst_alpha: Self, cf: Self) -> Self {
                let sum = <$wide>::from(Self::mul3(Self::inv(src_alpha), dst_alpha, dst))
                    + <$wide>::from(Self::mul3(Self::inv(dst_alpha), src_alpha, src))
                    + <$wide>::from(Self::mul3(src_alpha, dst_alpha, cf));
                sum.min(<$wide>::from(<$t>::MAX)) as $t
            }

            #[inline]
            fn clamp_unit(self) -> Self {
                self
            }
        }
    };
}

impl_int_channel!(u8, u32);
impl_int_channel!(u16, u64);

impl Channel for f32 {
    const ZERO: Self = 0.0;
    const UNIT: Self = 1.0;

    #[inline]
    fn to_f32(self) -> f32 {
        self
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        v
    }

    #[inline]
    fn mul(a: Self, b: Self) -> Self {
        a * b
    }

    #[inline]
    fn mul3(a: Self, b: Self, c: Self) -> Self {
        a * b * c
    }

    #[inline]
    fn div(a: Self, b: Self) -> Self {
        a / b
    }

    #[inline]
    fn lerp(a: Self, b: Self, alpha: Self) -> Self {
        a + (b - a) * alpha
    }

    #[inline]
    fn inv(a: Self) -> Self {
        1.0 - a
    }

    #[inline]
    fn union(a: Self, b: Self) -> Self {
        a + b - a * b
    }

    #[inline]
    fn blend(src: Self, src_alpha: Self, dst: Self, dst_alpha: Self, cf: Self) -> Self {
        (1.0 - src_alpha) * dst_alpha * dst
            + (1.0 - dst_alpha) * src_alpha * src
            + src_alpha * dst_alpha * cf
    }

    #[inline]
    fn clamp_unit(self) -> Self {
        self.clamp(0.0, 1.0)
    }
}

/// Round to three decimal places.
#[inline]
pub(crate) fn round3(v: f32) -> f32 {
    (v * 1000.0).round() / 1000.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
