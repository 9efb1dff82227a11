//! Shared primitives: channel arithmetic, pixel layouts, and the error taxonomy.

/// Pixel layouts, channel selection and the alpha triple.
pub mod core;
/// Crate error types.
pub mod error;
/// Channel arithmetic and fuzzy alpha comparisons.
pub mod math;
