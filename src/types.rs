//! Device records and facing modes as reported by the host platform.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Input/output modality of an enumerated media device.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaDeviceKind {
    VideoInput,
    AudioInput,
    AudioOutput,
    /// Any kind string this crate does not know about.
    Other(String),
}

impl MediaDeviceKind {
    pub fn as_str(&self) -> &str {
        match self {
            MediaDeviceKind::VideoInput => "videoinput",
            MediaDeviceKind::AudioInput => "audioinput",
            MediaDeviceKind::AudioOutput => "audiooutput",
            MediaDeviceKind::Other(kind) => kind,
        }
    }

    pub fn is_video_input(&self) -> bool {
        matches!(self, MediaDeviceKind::VideoInput)
    }
}

impl From<&str> for MediaDeviceKind {
    fn from(kind: &str) -> Self {
        match kind {
            "videoinput" => MediaDeviceKind::VideoInput,
            "audioinput" => MediaDeviceKind::AudioInput,
            "audiooutput" => MediaDeviceKind::AudioOutput,
            other => MediaDeviceKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for MediaDeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MediaDeviceKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MediaDeviceKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let kind = String::deserialize(deserializer)?;
        Ok(MediaDeviceKind::from(kind.as_str()))
    }
}

/// Snapshot of a single enumerated device.
///
/// Field names follow the browser's `MediaDeviceInfo` so that a JSON dump of
/// `navigator.mediaDevices.enumerateDevices()` deserializes directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDeviceInfo {
    pub kind: MediaDeviceKind,
    /// May be empty when the page has not been granted camera permission.
    #[serde(default)]
    pub label: String,
    pub device_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl MediaDeviceInfo {
    pub fn new(kind: MediaDeviceKind, label: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            device_id: device_id.into(),
            group_id: None,
        }
    }

    pub fn video(label: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self::new(MediaDeviceKind::VideoInput, label, device_id)
    }

    pub fn audio(label: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self::new(MediaDeviceKind::AudioInput, label, device_id)
    }
}

/// Requested camera orientation.
///
/// Values other than `user` and `environment` are kept verbatim; they count
/// as front-facing intent but do not trigger the `user` tie-break. There is
/// no default: an absent mode is `FacingMode::from("")`, which is not `User`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FacingMode {
    User,
    Environment,
    Other(String),
}

impl FacingMode {
    pub fn as_str(&self) -> &str {
        match self {
            FacingMode::User => "user",
            FacingMode::Environment => "environment",
            FacingMode::Other(mode) => mode,
        }
    }

    pub fn is_environment(&self) -> bool {
        matches!(self, FacingMode::Environment)
    }

    pub fn is_user(&self) -> bool {
        matches!(self, FacingMode::User)
    }
}

impl From<&str> for FacingMode {
    fn from(mode: &str) -> Self {
        match mode {
            "user" => FacingMode::User,
            "environment" => FacingMode::Environment,
            other => FacingMode::Other(other.to_string()),
        }
    }
}

impl From<String> for FacingMode {
    fn from(mode: String) -> Self {
        FacingMode::from(mode.as_str())
    }
}

impl fmt::Display for FacingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FacingMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FacingMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mode = String::deserialize(deserializer)?;
        Ok(FacingMode::from(mode))
    }
}
