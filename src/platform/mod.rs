// src/platform/mod.rs - Core platform abstraction

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::Result;
use crate::manager::{
    ManagedState, Manager, ManagerState, ManagerStatus, PlatformRequirements, PlatformSync,
};

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Platform capabilities detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformCapabilities {
    pub has_camera: bool,
    pub has_ar_tracking: bool,
    pub has_torch: bool,
    pub has_vibration: bool,
    pub platform_name: String,
    pub platform_version: String,
}

impl Default for PlatformCapabilities {
    fn default() -> Self {
        Self {
            has_camera: false,
            has_ar_tracking: false,
            has_torch: false,
            has_vibration: false,
            platform_name: "unknown".to_string(),
            platform_version: "unknown".to_string(),
        }
    }
}

/// Camera access boundary.
///
/// `request_permission` may show the platform's prompt; the manager caches
/// the answer so the user is asked at most once per session.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait CameraProvider: PlatformSync + std::fmt::Debug {
    async fn request_permission(&self) -> Result<bool>;
}

/// Platform provider collection
pub struct PlatformProviders {
    pub camera: Arc<dyn CameraProvider>,
}

/// Main platform manager that coordinates all platform providers
pub struct PlatformManager {
    state: ManagedState,
    camera: Arc<dyn CameraProvider>,
    camera_grant: tokio::sync::Mutex<Option<bool>>,
    capabilities: PlatformCapabilities,
}

impl std::fmt::Debug for PlatformManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformManager")
            .field("capabilities", &self.capabilities)
            .finish()
    }
}

impl PlatformManager {
    /// Creates a new platform manager with platform-specific providers
    pub fn new() -> Result<Self> {
        let capabilities = Self::detect_capabilities();

        #[cfg(not(target_arch = "wasm32"))]
        let providers = native::create_providers()?;

        #[cfg(target_arch = "wasm32")]
        let providers = web::create_providers()?;

        Ok(Self::with_providers(providers, capabilities))
    }

    /// Creates a platform manager from explicit providers.
    pub fn with_providers(
        providers: PlatformProviders,
        capabilities: PlatformCapabilities,
    ) -> Self {
        Self {
            state: ManagedState::new(Uuid::new_v4(), "platform_manager"),
            camera: providers.camera,
            camera_grant: tokio::sync::Mutex::new(None),
            capabilities,
        }
    }

    /// Detects platform capabilities
    pub fn detect_capabilities() -> PlatformCapabilities {
        #[cfg(not(target_arch = "wasm32"))]
        return native::detect_capabilities();

        #[cfg(target_arch = "wasm32")]
        return web::detect_capabilities();
    }

    /// Returns platform capabilities
    pub fn capabilities(&self) -> &PlatformCapabilities {
        &self.capabilities
    }

    /// Requests camera access, prompting the user at most once. Must be
    /// called before any scan attempt; a denial must surface as a blocking
    /// message, never a silent failure.
    pub async fn request_camera_permission(&self) -> Result<bool> {
        let mut grant = self.camera_grant.lock().await;
        if let Some(granted) = *grant {
            return Ok(granted);
        }

        if !self.capabilities.has_camera {
            tracing::warn!("camera permission requested on a platform without a camera");
            *grant = Some(false);
            return Ok(false);
        }

        let granted = self.camera.request_permission().await?;
        tracing::info!(granted, "camera permission resolved");
        *grant = Some(granted);
        Ok(granted)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl Manager for PlatformManager {
    fn name(&self) -> &str {
        "platform_manager"
    }

    fn id(&self) -> Uuid {
        self.state.id()
    }

    async fn initialize(&mut self) -> Result<()> {
        self.state.set_state(ManagerState::Initializing).await;

        #[cfg(not(target_arch = "wasm32"))]
        native::initialize().await?;

        #[cfg(target_arch = "wasm32")]
        web::initialize().await?;

        self.state.set_state(ManagerState::Running).await;
        Ok(())
    }

    async fn shutdown(&mut self) -> Result<()> {
        self.state.set_state(ManagerState::ShuttingDown).await;

        #[cfg(not(target_arch = "wasm32"))]
        native::cleanup().await?;

        #[cfg(target_arch = "wasm32")]
        web::cleanup().await?;

        self.state.set_state(ManagerState::Shutdown).await;
        Ok(())
    }

    async fn status(&self) -> ManagerStatus {
        let mut status = self.state.status().await;
        status.add_metadata(
            "platform",
            serde_json::json!(self.capabilities.platform_name),
        );
        status.add_metadata(
            "capabilities",
            serde_json::to_value(&self.capabilities).unwrap_or_default(),
        );
        status
    }

    fn platform_requirements(&self) -> PlatformRequirements {
        PlatformRequirements {
            requires_camera: true,
            requires_network: false,
            requires_native_apis: false,
            minimum_permissions: vec!["camera".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug)]
    struct CountingCamera {
        granted: bool,
        calls: AtomicU32,
    }

    #[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
    #[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
    impl CameraProvider for CountingCamera {
        async fn request_permission(&self) -> Result<bool> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.granted)
        }
    }

    fn manager_with(granted: bool, has_camera: bool) -> (PlatformManager, Arc<CountingCamera>) {
        let camera = Arc::new(CountingCamera {
            granted,
            calls: AtomicU32::new(0),
        });
        let manager = PlatformManager::with_providers(
            PlatformProviders {
                camera: camera.clone(),
            },
            PlatformCapabilities {
                has_camera,
                platform_name: "test".to_string(),
                ..Default::default()
            },
        );
        (manager, camera)
    }

    #[tokio::test]
    async fn test_permission_prompt_happens_once() {
        let (manager, camera) = manager_with(true, true);

        assert!(manager.request_camera_permission().await.unwrap());
        assert!(manager.request_camera_permission().await.unwrap());
        assert_eq!(camera.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_denial_is_cached() {
        let (manager, camera) = manager_with(false, true);

        assert!(!manager.request_camera_permission().await.unwrap());
        assert!(!manager.request_camera_permission().await.unwrap());
        assert_eq!(camera.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_no_camera_short_circuits() {
        let (manager, camera) = manager_with(true, false);

        assert!(!manager.request_camera_permission().await.unwrap());
        assert_eq!(camera.calls.load(Ordering::SeqCst), 0);
    }
}
