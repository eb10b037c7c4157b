//! Sources of device enumerations.
//!
//! The selector only needs one thing from the host: the current list of media
//! devices. [`MediaDevices`] is that seam. [`StaticMediaDevices`] serves a
//! fixed snapshot (tests, CLI dumps) and, with the `web` feature,
//! [`web::BrowserMediaDevices`] asks `navigator.mediaDevices`.

use crate::errors::SelectorError;
use crate::types::MediaDeviceInfo;

mod fixed;
#[cfg(feature = "web")]
pub mod web;

pub use fixed::StaticMediaDevices;
#[cfg(feature = "web")]
pub use web::BrowserMediaDevices;

/// Host capability that lists available media devices.
///
/// Adapter for `MediaDevices.enumerateDevices()` or any equivalent.
#[allow(async_fn_in_trait)]
pub trait MediaDevices {
    /// # Errors
    ///
    /// With [`SelectorError::Enumeration`] if the host refused or failed to
    /// enumerate.
    async fn enumerate_devices(&self) -> Result<Vec<MediaDeviceInfo>, SelectorError>;
}

impl<M: MediaDevices + ?Sized> MediaDevices for &M {
    async fn enumerate_devices(&self) -> Result<Vec<MediaDeviceInfo>, SelectorError> {
        (**self).enumerate_devices().await
    }
}

/// `None` models a host without the enumeration capability at all.
impl<M: MediaDevices> MediaDevices for Option<M> {
    async fn enumerate_devices(&self) -> Result<Vec<MediaDeviceInfo>, SelectorError> {
        match self {
            Some(devices) => devices.enumerate_devices().await,
            None => Err(SelectorError::Enumeration(
                "media devices capability is not available".to_string(),
            )),
        }
    }
}
