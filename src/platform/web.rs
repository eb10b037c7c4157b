//! [MediaDevices][1] backed device source.
//!
//! [1]: https://w3.org/TR/mediacapture-streams#mediadevices

use super::MediaDevices;
use crate::errors::SelectorError;
use crate::types::{MediaDeviceInfo, MediaDeviceKind};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Enumerates devices through `window.navigator.mediaDevices`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserMediaDevices;

impl BrowserMediaDevices {
    pub fn new() -> Self {
        Self
    }
}

impl MediaDevices for BrowserMediaDevices {
    /// Adapter for a [MediaDevices.enumerateDevices()][1] function.
    ///
    /// # Errors
    ///
    /// With [`SelectorError::Enumeration`] if there is no `window`, the
    /// navigator exposes no [MediaDevices][2], the call throws, or the
    /// returned promise rejects.
    ///
    /// [1]: https://tinyurl.com/w3-streams#dom-mediadevices-enumeratedevices
    /// [2]: https://w3.org/TR/mediacapture-streams#mediadevices
    async fn enumerate_devices(&self) -> Result<Vec<MediaDeviceInfo>, SelectorError> {
        let window = web_sys::window()
            .ok_or_else(|| SelectorError::Enumeration("no global window".to_string()))?;
        let media_devices = window
            .navigator()
            .media_devices()
            .map_err(|e| js_error("navigator.mediaDevices is unavailable", &e))?;
        let promise = media_devices
            .enumerate_devices()
            .map_err(|e| js_error("enumerateDevices() threw", &e))?;
        let infos = JsFuture::from(promise)
            .await
            .map_err(|e| js_error("enumerateDevices() rejected", &e))?;

        let devices = js_sys::Array::from(&infos)
            .iter()
            .filter_map(|value| value.dyn_into::<web_sys::MediaDeviceInfo>().ok())
            .map(|info| MediaDeviceInfo {
                kind: convert_kind(info.kind()),
                label: info.label(),
                device_id: info.device_id(),
                group_id: Some(info.group_id()),
            })
            .collect();

        Ok(devices)
    }
}

fn convert_kind(kind: web_sys::MediaDeviceKind) -> MediaDeviceKind {
    match kind {
        web_sys::MediaDeviceKind::Videoinput => MediaDeviceKind::VideoInput,
        web_sys::MediaDeviceKind::Audioinput => MediaDeviceKind::AudioInput,
        web_sys::MediaDeviceKind::Audiooutput => MediaDeviceKind::AudioOutput,
        other => MediaDeviceKind::Other(format!("{:?}", other)),
    }
}

fn js_error(context: &str, value: &JsValue) -> SelectorError {
    SelectorError::Enumeration(format!("{}: {:?}", context, value))
}
