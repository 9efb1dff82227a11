//! Pixel compositing: the per-pixel family engine and a buffer driver on top of it.

/// Applying a [`generic::CompositeOp`] across whole pixel buffers.
pub mod buffer;
/// The five generic compositing families.
pub mod generic;
