// src/ar/mod.rs - AR state and scene description

//! AR-facing state: the selection binding shared between the scene and its
//! hosting screen, the session tracking state, and the pure scene
//! description consumed by renderers.

pub mod scene;
pub mod selection;
pub mod session;

pub use scene::{build_scene, Animation, Material, PropShape, SceneProp};
pub use selection::{PropAnimation, PropTag, Selection};
pub use session::{ArSession, TrackingState};
