//! Tie-break strategies that turn a filtered device list into one device id.

use crate::errors::SelectorError;
use crate::pattern::{FRONT_FACING_PATTERN, REAR_FACING_PATTERN};
use crate::types::{FacingMode, MediaDeviceInfo};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Picks a device id once the selector has filtered the enumeration.
///
/// `matched` holds the video devices whose label fits the facing pattern and
/// the camera-id filter, `all` holds every video device; both keep the
/// enumeration order. Whatever the chooser returns is handed back to the
/// caller unchanged.
///
/// Closures with the same shape implement this trait:
///
/// ```rust
/// use camera_facing::{DeviceIdChooser, FacingMode, MediaDeviceInfo, SelectorError};
///
/// let last = |_: &[MediaDeviceInfo], all: &[MediaDeviceInfo], _: &FacingMode| {
///     all.last()
///         .map(|d| d.device_id.clone())
///         .ok_or(SelectorError::NoVideoInputDevices)
/// };
/// let devices = vec![MediaDeviceInfo::video("a", "1"), MediaDeviceInfo::video("b", "2")];
/// assert_eq!(last.choose(&[], &devices, &FacingMode::User).unwrap(), "2");
/// ```
pub trait DeviceIdChooser {
    fn choose(
        &self,
        matched: &[MediaDeviceInfo],
        all: &[MediaDeviceInfo],
        facing_mode: &FacingMode,
    ) -> Result<String, SelectorError>;
}

impl<F> DeviceIdChooser for F
where
    F: Fn(&[MediaDeviceInfo], &[MediaDeviceInfo], &FacingMode) -> Result<String, SelectorError>,
{
    fn choose(
        &self,
        matched: &[MediaDeviceInfo],
        all: &[MediaDeviceInfo],
        facing_mode: &FacingMode,
    ) -> Result<String, SelectorError> {
        self(matched, all, facing_mode)
    }
}

/// The two shipped flavours of the built-in heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChooserVariant {
    /// Rear-labelled matches first, then front-labelled matches.
    #[default]
    RearThenFront,
    /// Rear-labelled matches first, then the first match of any label.
    RearOnly,
}

impl ChooserVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChooserVariant::RearThenFront => "rear-then-front",
            ChooserVariant::RearOnly => "rear-only",
        }
    }
}

impl fmt::Display for ChooserVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChooserVariant {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rear-then-front" => Ok(ChooserVariant::RearThenFront),
            "rear-only" => Ok(ChooserVariant::RearOnly),
            other => Err(SelectorError::Config(format!(
                "Unknown chooser variant '{}' (expected rear-then-front or rear-only)",
                other
            ))),
        }
    }
}

/// Built-in priority heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultChooser {
    pub variant: ChooserVariant,
}

impl DefaultChooser {
    pub fn new(variant: ChooserVariant) -> Self {
        Self { variant }
    }
}

impl DeviceIdChooser for DefaultChooser {
    fn choose(
        &self,
        matched: &[MediaDeviceInfo],
        all: &[MediaDeviceInfo],
        facing_mode: &FacingMode,
    ) -> Result<String, SelectorError> {
        if let Some(device) = first_labelled(matched, |label| REAR_FACING_PATTERN.is_match(label)) {
            return Ok(device.device_id.clone());
        }

        if self.variant == ChooserVariant::RearThenFront {
            if let Some(device) =
                first_labelled(matched, |label| FRONT_FACING_PATTERN.is_match(label))
            {
                return Ok(device.device_id.clone());
            }
        }

        if let Some(device) = matched.first() {
            return Ok(device.device_id.clone());
        }

        let fallback = if all.len() == 1 || facing_mode.is_user() {
            all.first()
        } else {
            all.get(1)
        };

        fallback
            .map(|device| device.device_id.clone())
            .ok_or(SelectorError::AmbiguousSelection {
                video_devices: all.len(),
            })
    }
}

fn first_labelled(
    devices: &[MediaDeviceInfo],
    predicate: impl Fn(&str) -> bool,
) -> Option<&MediaDeviceInfo> {
    devices.iter().find(|device| predicate(&device.label))
}

/// The default heuristic as a plain function, for composing custom choosers.
pub fn default_device_id_chooser(
    matched: &[MediaDeviceInfo],
    all: &[MediaDeviceInfo],
    facing_mode: &FacingMode,
) -> Result<String, SelectorError> {
    DefaultChooser::default().choose(matched, all, facing_mode)
}
