//! camera-facing: pick a front or rear camera from a media-device enumeration
//!
//! Hosts such as browsers expose cameras as a flat list of device records
//! with free-text labels. This crate filters that list by the requested
//! facing mode and a camera-module substring, then applies a deterministic
//! tie-break to return exactly one device id.
//!
//! # Features
//! - `web`: enumerate through `navigator.mediaDevices` (runs on `wasm32` in a browser)
//! - `cli`: the `camera-facing` command line tool
//!
//! # Usage
//! ```rust
//! use camera_facing::{DeviceSelector, FacingMode, MediaDeviceInfo, StaticMediaDevices};
//!
//! let devices = StaticMediaDevices::new(vec![
//!     MediaDeviceInfo::video("camera2 1, facing front", "front"),
//!     MediaDeviceInfo::video("camera2 0, facing back", "back"),
//!     MediaDeviceInfo::audio("Default microphone", "mic"),
//! ]);
//! let selector = DeviceSelector::new(devices);
//!
//! let id = tokio_test::block_on(selector.resolve(&FacingMode::Environment)).unwrap();
//! assert_eq!(id, "back");
//! ```
pub mod chooser;
pub mod config;
pub mod errors;
pub mod pattern;
pub mod platform;
pub mod selector;
pub mod types;

// Re-exports for convenience
pub use chooser::{default_device_id_chooser, ChooserVariant, DefaultChooser, DeviceIdChooser};
pub use config::SelectorConfig;
pub use errors::SelectorError;
pub use pattern::facing_mode_pattern;
pub use platform::{MediaDevices, StaticMediaDevices};
pub use selector::{resolve_device_id, resolve_facing_device_id, DeviceSelector, DEFAULT_CAMERA_ID};
pub use types::{FacingMode, MediaDeviceInfo, MediaDeviceKind};

#[cfg(feature = "web")]
pub use platform::BrowserMediaDevices;

/// Initialize logging with the default `camera_facing=info` filter
pub fn init_logging() {
    init_logging_with_filter("camera_facing=info");
}

/// Initialize logging, using `filter` when `RUST_LOG` is unset
pub fn init_logging_with_filter(filter: &str) {
    let env = env_logger::Env::default().default_filter_or(filter);
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
