//! Encoding Registry Module
//!
//! Maps encoding names to lazily constructed, cached encoding instances.
//! Construction recipes are contributed by registered provider modules;
//! consumers only ever ask for an encoding by name.

// Internal modules - all access should go through api module
pub(crate) mod discovery;
pub(crate) mod error;
pub(crate) mod registry;
pub(crate) mod traits;
pub(crate) mod types;

// Public API module - the only public interface for the encoding system
pub mod api;

#[cfg(test)]
mod tests;
