use thiserror::Error;

/// Errors produced while resolving a camera device id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Enumeration failed, the capability is missing, or no video inputs exist.
    #[error("No video input devices were found")]
    NoVideoInputDevices,
    /// The fallback rule needed a second video device that does not exist.
    #[error("Ambiguous selection: fallback needs a second video device, found {video_devices}")]
    AmbiguousSelection { video_devices: usize },
    /// Raised by `MediaDevices` implementations to describe why enumeration failed.
    #[error("Device enumeration error: {0}")]
    Enumeration(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
