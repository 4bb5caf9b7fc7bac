// src/platform/native.rs - Native platform implementations

use std::sync::Arc;

use crate::error::Result;
use crate::platform::{CameraProvider, PlatformCapabilities, PlatformProviders};

/// Creates native platform providers
pub fn create_providers() -> Result<PlatformProviders> {
    Ok(PlatformProviders {
        camera: Arc::new(NativeCamera),
    })
}

/// Detects native platform capabilities
pub fn detect_capabilities() -> PlatformCapabilities {
    PlatformCapabilities {
        has_camera: true,
        // Plane tracking needs a mobile AR runtime; desktop builds only get
        // the 2D overlay stand-in.
        has_ar_tracking: false,
        has_torch: false,
        has_vibration: false,
        platform_name: std::env::consts::OS.to_string(),
        platform_version: "1.0".to_string(),
    }
}

/// Platform initialization
pub async fn initialize() -> Result<()> {
    Ok(())
}

/// Platform cleanup
pub async fn cleanup() -> Result<()> {
    Ok(())
}

/// Desktop camera access. The OS gates capture-device access at stream-open
/// time, so there is no separate permission prompt to drive here.
#[derive(Debug)]
pub struct NativeCamera;

#[async_trait::async_trait]
impl CameraProvider for NativeCamera {
    async fn request_permission(&self) -> Result<bool> {
        tracing::debug!("native camera access delegated to the OS capture prompt");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_capabilities() {
        let caps = detect_capabilities();
        assert!(caps.has_camera);
        assert!(!caps.has_ar_tracking);
    }

    #[tokio::test]
    async fn test_native_camera_grants() {
        let camera = NativeCamera;
        assert!(camera.request_permission().await.unwrap());
    }
}
