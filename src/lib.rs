pub mod core;
pub mod encoding;

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Parse the API version string from build script into u32
pub fn get_registry_api_version() -> u32 {
    REGISTRY_API_VERSION.parse().unwrap_or(20260815)
}
