use super::MediaDevices;
use crate::errors::SelectorError;
use crate::types::MediaDeviceInfo;
use std::fs;
use std::path::Path;

/// Fixed enumeration result, replayed on every call.
#[derive(Debug, Clone)]
pub struct StaticMediaDevices {
    result: Result<Vec<MediaDeviceInfo>, SelectorError>,
}

impl StaticMediaDevices {
    pub fn new(devices: Vec<MediaDeviceInfo>) -> Self {
        Self { result: Ok(devices) }
    }

    /// A source whose enumeration always fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            result: Err(SelectorError::Enumeration(reason.into())),
        }
    }

    /// Parse a JSON array of `MediaDeviceInfo` records, as printed by
    /// `JSON.stringify(await navigator.mediaDevices.enumerateDevices())`.
    pub fn from_json_str(json: &str) -> Result<Self, SelectorError> {
        let devices: Vec<MediaDeviceInfo> = serde_json::from_str(json).map_err(|e| {
            SelectorError::Enumeration(format!("Failed to parse device list: {}", e))
        })?;
        Ok(Self::new(devices))
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SelectorError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            SelectorError::Enumeration(format!("Failed to read device list {:?}: {}", path, e))
        })?;
        log::debug!("Loaded device list from {:?}", path);
        Self::from_json_str(&contents)
    }
}

impl MediaDevices for StaticMediaDevices {
    async fn enumerate_devices(&self) -> Result<Vec<MediaDeviceInfo>, SelectorError> {
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_static_devices_replay() {
        let source = StaticMediaDevices::new(vec![MediaDeviceInfo::video("Cam", "1")]);
        assert_eq!(source.enumerate_devices().await.unwrap().len(), 1);
        assert_eq!(source.enumerate_devices().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failing_source() {
        let source = StaticMediaDevices::failing("permission revoked");
        assert_eq!(
            source.enumerate_devices().await,
            Err(SelectorError::Enumeration("permission revoked".to_string()))
        );
    }

    #[tokio::test]
    async fn test_missing_capability() {
        let source: Option<StaticMediaDevices> = None;
        assert!(matches!(
            source.enumerate_devices().await,
            Err(SelectorError::Enumeration(_))
        ));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"kind":"videoinput","label":"Back","deviceId":"b"}}]"#).unwrap();

        let source = StaticMediaDevices::from_json_file(file.path()).unwrap();
        let devices = tokio_test::block_on(source.enumerate_devices()).unwrap();
        assert_eq!(devices[0].device_id, "b");
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            StaticMediaDevices::from_json_str("{not json"),
            Err(SelectorError::Enumeration(_))
        ));
        assert!(StaticMediaDevices::from_json_file("no_such_devices.json").is_err());
    }
}
