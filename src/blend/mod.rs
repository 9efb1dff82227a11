//! Pluggable blend functions and the policies applied around them.

/// The four composite function shapes and their function-value adapters.
pub mod contracts;
/// Stock blend functions.
pub mod functions;
/// Additive-space transforms.
pub mod policy;
