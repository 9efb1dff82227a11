//! Reversible transforms into the space where per-channel blend math runs.

use crate::foundation::math::Channel;

/// Maps channel values to and from the additive working space.
///
/// `from_additive(to_additive(v)) == v` must hold for every value.
pub trait BlendingPolicy<T: Channel>: Send + Sync {
    /// Storage value to additive-space value.
    fn to_additive(v: T) -> T;
    /// Additive-space value back to storage.
    fn from_additive(v: T) -> T;
}

/// Channels are already additive (RGB-like color spaces).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdditivePolicy;

impl<T: Channel> BlendingPolicy<T> for AdditivePolicy {
    #[inline]
    fn to_additive(v: T) -> T {
        v
    }

    #[inline]
    fn from_additive(v: T) -> T {
        v
    }
}

/// Channels store ink amounts (CMYK-like color spaces); blending runs on the inverse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubtractivePolicy;

impl<T: Channel> BlendingPolicy<T> for SubtractivePolicy {
    #[inline]
    fn to_additive(v: T) -> T {
        T::inv(v)
    }

    #[inline]
    fn from_additive(v: T) -> T {
        T::inv(v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blend/policy.rs"]
mod tests;
