#[cfg(test)]
mod error_tests {
    use camera_facing::errors::SelectorError;
    use std::error::Error;

    #[test]
    fn test_no_video_input_devices_display() {
        let error = SelectorError::NoVideoInputDevices;
        assert_eq!(error.to_string(), "No video input devices were found");
    }

    #[test]
    fn test_ambiguous_selection_display() {
        let error = SelectorError::AmbiguousSelection { video_devices: 1 };
        assert!(error.to_string().contains("Ambiguous selection"));
        assert!(error.to_string().contains("found 1"));
    }

    #[test]
    fn test_wrapped_message_errors() {
        let error = SelectorError::Enumeration("NotAllowedError".to_string());
        assert_eq!(error.to_string(), "Device enumeration error: NotAllowedError");

        let error = SelectorError::Config("bad level".to_string());
        assert_eq!(error.to_string(), "Configuration error: bad level");
    }

    #[test]
    fn test_selector_error_implements_error_trait() {
        let error = SelectorError::NoVideoInputDevices;
        let _error_trait: &dyn Error = &error;
        assert!(error.source().is_none());
    }

    #[test]
    fn test_selector_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<SelectorError>();

        let wrapped: anyhow::Error = SelectorError::NoVideoInputDevices.into();
        assert!(wrapped.downcast_ref::<SelectorError>().is_some());
    }
}
