use rayon::prelude::*;

use crate::composite::generic::CompositeOp;
use crate::foundation::core::{Alphas, ChannelFlags, PixelLayout};
use crate::foundation::error::{PigmixError, PigmixResult};
use crate::foundation::math::Channel;

/// Pixels handed to one rayon task in [`Threading::Parallel`] mode.
pub const CHUNK_PIXELS: usize = 4096;

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// How [`composite_in_place`] walks the buffer.
pub enum Threading {
    /// One pass on the calling thread.
    #[default]
    Serial,
    /// Chunks of [`CHUNK_PIXELS`] pixels on rayon's global pool.
    Parallel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Per-call settings for [`composite_in_place`].
pub struct BufferParams {
    /// Layer opacity in `[0, 1]`.
    pub opacity: f32,
    /// Writable channels. Leaving the alpha position out of a selection also
    /// locks alpha.
    pub flags: ChannelFlags,
    /// Keep destination alpha unchanged.
    pub alpha_locked: bool,
    /// Serial or rayon-parallel traversal.
    pub threading: Threading,
}

impl Default for BufferParams {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            flags: ChannelFlags::All,
            alpha_locked: false,
            threading: Threading::Serial,
        }
    }
}

/// Composite `src` into `dst` pixel by pixel with `op`.
///
/// Both buffers are interleaved `L` pixels of equal length; `mask`, when
/// present, holds one coverage value per pixel. The returned alpha of each
/// `op.compose` call is written into the destination alpha channel.
///
/// An empty selection, or one naming every channel of `L`, behaves exactly
/// like [`ChannelFlags::All`]. With a partial selection a fully transparent
/// destination pixel is cleared to zero first, so channels outside the
/// selection never carry stale color under a new alpha.
#[tracing::instrument(skip(op, dst, src, mask), fields(len = dst.len()))]
pub fn composite_in_place<L, O>(
    op: &O,
    dst: &mut [L::Channel],
    src: &[L::Channel],
    mask: Option<&[L::Channel]>,
    params: &BufferParams,
) -> PigmixResult<()>
where
    L: PixelLayout,
    O: CompositeOp<L> + ?Sized,
{
    let stride = L::CHANNELS;
    if stride == 0 || L::ALPHA_POS >= stride {
        return Err(PigmixError::buffer("pixel layout has no valid alpha position"));
    }
    if dst.len() != src.len() || !dst.len().is_multiple_of(stride) {
        tracing::warn!(dst = dst.len(), src = src.len(), stride, "rejecting buffers");
        return Err(PigmixError::buffer(format!(
            "composite_in_place expects equal-length buffers of {stride}-channel pixels"
        )));
    }
    let pixels = dst.len() / stride;
    if let Some(mask) = mask
        && mask.len() != pixels
    {
        tracing::warn!(mask = mask.len(), pixels, "rejecting mask");
        return Err(PigmixError::buffer(format!(
            "mask has {} values for {pixels} pixels",
            mask.len()
        )));
    }
    if !params.opacity.is_finite() || !(0.0..=1.0).contains(&params.opacity) {
        return Err(PigmixError::validation("opacity must be finite and within [0, 1]"));
    }

    let flags = params.flags.normalized(stride);
    let span = Span {
        opacity: L::Channel::from_f32(params.opacity),
        flags,
        alpha_locked: params.alpha_locked || !flags.allows(L::ALPHA_POS),
    };

    match params.threading {
        Threading::Serial => span.run::<L, O>(op, dst, src, mask),
        Threading::Parallel => {
            let chunk = CHUNK_PIXELS * stride;
            dst.par_chunks_mut(chunk)
                .zip(src.par_chunks(chunk))
                .enumerate()
                .for_each(|(n, (d, s))| {
                    let first = n * CHUNK_PIXELS;
                    let mask = mask.map(|m| &m[first..first + d.len() / stride]);
                    span.run::<L, O>(op, d, s, mask);
                });
        }
    }
    Ok(())
}

#[derive(Clone, Copy)]
struct Span<T> {
    opacity: T,
    flags: ChannelFlags,
    alpha_locked: bool,
}

impl<T: Channel> Span<T> {
    fn run<L, O>(&self, op: &O, dst: &mut [T], src: &[T], mask: Option<&[T]>)
    where
        L: PixelLayout<Channel = T>,
        O: CompositeOp<L> + ?Sized,
    {
        let stride = L::CHANNELS;
        for (p, (d, s)) in dst
            .chunks_exact_mut(stride)
            .zip(src.chunks_exact(stride))
            .enumerate()
        {
            let dst_alpha = d[L::ALPHA_POS];
            if !self.flags.is_all() && dst_alpha.is_zero_fuzzy() {
                d.fill(T::ZERO);
            }

            let alphas = Alphas {
                src: s[L::ALPHA_POS],
                dst: dst_alpha,
                mask: mask.map_or(T::UNIT, |m| m[p]),
                opacity: self.opacity,
            };
            let new_alpha = op.compose(s, d, alphas, self.flags, self.alpha_locked);
            d[L::ALPHA_POS] = if self.alpha_locked { dst_alpha } else { new_alpha };
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/buffer.rs"]
mod tests;
