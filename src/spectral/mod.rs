//! Kubelka-Munk spectral paint mixing.

/// Spectral upsampling, K/S mixing and downsampling.
pub mod mix;
/// Fixed basis spectra, observer tables and the XYZ to RGB matrix.
pub mod tables;
