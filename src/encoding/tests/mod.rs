//! Test modules for the encoding registry
//!
//! Tests are organized by functional area: registry build and cache
//! behaviour, concurrent access, provider discovery, and the public API
//! surface backed by the global service.

mod utils;
