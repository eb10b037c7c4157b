//! Resolve a camera device id for a facing mode.
//!
//! ```rust
//! use camera_facing::{resolve_facing_device_id, FacingMode, MediaDeviceInfo, StaticMediaDevices};
//!
//! let devices = StaticMediaDevices::new(vec![
//!     MediaDeviceInfo::video("camera2 1, facing front", "front-id"),
//!     MediaDeviceInfo::video("camera2 0, facing back", "back-id"),
//! ]);
//! let id = tokio_test::block_on(resolve_facing_device_id(&devices, &FacingMode::Environment));
//! assert_eq!(id.unwrap(), "back-id");
//! ```

use crate::chooser::{DefaultChooser, DeviceIdChooser};
use crate::config::SelectorConfig;
use crate::errors::SelectorError;
use crate::pattern::facing_mode_pattern;
use crate::platform::MediaDevices;
use crate::types::{FacingMode, MediaDeviceInfo};

/// Camera identifier substring used by Android's camera2 labels for the
/// primary module.
pub const DEFAULT_CAMERA_ID: &str = "camera2 0";

/// Enumerate `devices` and pick one video input for `facing_mode`.
///
/// Matched candidates are the video inputs whose label fits the facing
/// pattern and contains `camera_id`. `chooser` gets the matched candidates,
/// all video inputs and the facing mode, and its answer is returned as is.
///
/// # Errors
///
/// [`SelectorError::NoVideoInputDevices`] if enumeration fails or yields no
/// video inputs. Anything the chooser returns is propagated unchanged.
pub async fn resolve_device_id<M, C>(
    devices: &M,
    facing_mode: &FacingMode,
    chooser: &C,
    camera_id: &str,
) -> Result<String, SelectorError>
where
    M: MediaDevices + ?Sized,
    C: DeviceIdChooser + ?Sized,
{
    let devices = match devices.enumerate_devices().await {
        Ok(devices) => devices,
        Err(e) => {
            log::debug!("Device enumeration failed: {}", e);
            return Err(SelectorError::NoVideoInputDevices);
        }
    };
    log::trace!("Connected devices: {:?}", devices);

    let video_devices: Vec<MediaDeviceInfo> = devices
        .into_iter()
        .filter(|device| device.kind.is_video_input())
        .collect();
    log::trace!("Video input devices: {:?}", video_devices);

    if video_devices.is_empty() {
        return Err(SelectorError::NoVideoInputDevices);
    }

    let matched = matching_devices(&video_devices, facing_mode, camera_id);
    log::debug!(
        "Matched {} of {} video devices for facing mode '{}' and camera id '{}'",
        matched.len(),
        video_devices.len(),
        facing_mode,
        camera_id
    );

    let device_id = chooser.choose(&matched, &video_devices, facing_mode)?;
    log::debug!("Selected camera {} for facing mode '{}'", device_id, facing_mode);
    Ok(device_id)
}

/// [`resolve_device_id`] with the built-in chooser and [`DEFAULT_CAMERA_ID`].
pub async fn resolve_facing_device_id<M>(
    devices: &M,
    facing_mode: &FacingMode,
) -> Result<String, SelectorError>
where
    M: MediaDevices + ?Sized,
{
    resolve_device_id(devices, facing_mode, &DefaultChooser::default(), DEFAULT_CAMERA_ID).await
}

/// Video devices whose label fits the facing pattern and contains `camera_id`,
/// in enumeration order.
pub fn matching_devices(
    video_devices: &[MediaDeviceInfo],
    facing_mode: &FacingMode,
    camera_id: &str,
) -> Vec<MediaDeviceInfo> {
    let pattern = facing_mode_pattern(facing_mode);
    video_devices
        .iter()
        .filter(|device| pattern.is_match(&device.label) && device.label.contains(camera_id))
        .cloned()
        .collect()
}

/// Bundles a device source with a chooser and camera-id filter.
pub struct DeviceSelector<M, C = DefaultChooser> {
    devices: M,
    chooser: C,
    camera_id: String,
}

impl<M: MediaDevices> DeviceSelector<M, DefaultChooser> {
    pub fn new(devices: M) -> Self {
        Self {
            devices,
            chooser: DefaultChooser::default(),
            camera_id: DEFAULT_CAMERA_ID.to_string(),
        }
    }

    /// Build a selector from the `[selection]` section of a config.
    pub fn from_config(devices: M, config: &SelectorConfig) -> Self {
        Self {
            devices,
            chooser: DefaultChooser::new(config.selection.variant),
            camera_id: config.selection.camera_id.clone(),
        }
    }
}

impl<M: MediaDevices, C: DeviceIdChooser> DeviceSelector<M, C> {
    pub fn with_chooser<C2: DeviceIdChooser>(self, chooser: C2) -> DeviceSelector<M, C2> {
        DeviceSelector {
            devices: self.devices,
            chooser,
            camera_id: self.camera_id,
        }
    }

    pub fn with_camera_id(mut self, camera_id: impl Into<String>) -> Self {
        self.camera_id = camera_id.into();
        self
    }

    pub fn camera_id(&self) -> &str {
        &self.camera_id
    }

    pub fn chooser(&self) -> &C {
        &self.chooser
    }

    pub async fn resolve(&self, facing_mode: &FacingMode) -> Result<String, SelectorError> {
        resolve_device_id(&self.devices, facing_mode, &self.chooser, &self.camera_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chooser::ChooserVariant;
    use crate::platform::StaticMediaDevices;

    #[test]
    fn test_matching_requires_pattern_and_camera_id() {
        let video = vec![
            MediaDeviceInfo::video("camera2 0, facing back", "a"),
            MediaDeviceInfo::video("camera2 1, facing back", "b"),
            MediaDeviceInfo::video("camera2 0, facing front", "c"),
        ];

        let rear = matching_devices(&video, &FacingMode::Environment, DEFAULT_CAMERA_ID);
        assert_eq!(rear.iter().map(|d| d.device_id.as_str()).collect::<Vec<_>>(), ["a"]);

        let front = matching_devices(&video, &FacingMode::User, DEFAULT_CAMERA_ID);
        assert_eq!(front.iter().map(|d| d.device_id.as_str()).collect::<Vec<_>>(), ["c"]);

        let any_module = matching_devices(&video, &FacingMode::Environment, "");
        assert_eq!(any_module.len(), 2);
    }

    #[tokio::test]
    async fn test_selector_from_config() {
        let mut config = SelectorConfig::default();
        config.selection.camera_id = "camera2 1".to_string();
        config.selection.variant = ChooserVariant::RearOnly;

        let devices = StaticMediaDevices::new(vec![
            MediaDeviceInfo::video("camera2 0, facing back", "primary"),
            MediaDeviceInfo::video("camera2 1, facing back", "tele"),
        ]);
        let selector = DeviceSelector::from_config(devices, &config);

        assert_eq!(selector.camera_id(), "camera2 1");
        assert_eq!(selector.chooser().variant, ChooserVariant::RearOnly);
        assert_eq!(selector.resolve(&FacingMode::Environment).await.unwrap(), "tele");
    }

    #[tokio::test]
    async fn test_selector_with_custom_chooser() {
        let devices = StaticMediaDevices::new(vec![MediaDeviceInfo::video("Cam", "only")]);
        let selector = DeviceSelector::new(devices)
            .with_camera_id("")
            .with_chooser(|_: &[MediaDeviceInfo], _: &[MediaDeviceInfo], _: &FacingMode| {
                Ok::<_, SelectorError>("fixed".to_string())
            });

        assert_eq!(selector.resolve(&FacingMode::User).await.unwrap(), "fixed");
    }
}
