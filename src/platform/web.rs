// src/platform/web.rs - Web platform implementations

use std::sync::Arc;

use crate::error::Result;
use crate::platform::{CameraProvider, PlatformCapabilities, PlatformProviders};

/// Creates web platform providers
pub fn create_providers() -> Result<PlatformProviders> {
    Ok(PlatformProviders {
        camera: Arc::new(WebCamera),
    })
}

/// Detects web platform capabilities
pub fn detect_capabilities() -> PlatformCapabilities {
    PlatformCapabilities {
        has_camera: true,
        has_ar_tracking: false,
        has_torch: false,
        has_vibration: false,
        platform_name: "web".to_string(),
        platform_version: user_agent().unwrap_or_else(|| "unknown".to_string()),
    }
}

fn user_agent() -> Option<String> {
    web_sys::window()?.navigator().user_agent().ok()
}

/// Platform initialization
pub async fn initialize() -> Result<()> {
    Ok(())
}

/// Platform cleanup
pub async fn cleanup() -> Result<()> {
    Ok(())
}

/// Browser camera access. The browser shows its own permission prompt when
/// the media stream is opened; this provider only reports that a camera
/// path exists.
#[derive(Debug)]
pub struct WebCamera;

#[async_trait::async_trait(?Send)]
impl CameraProvider for WebCamera {
    async fn request_permission(&self) -> Result<bool> {
        tracing::debug!("browser will prompt for camera access at stream open");
        Ok(true)
    }
}
