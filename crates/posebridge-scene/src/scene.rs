//! In-memory scene holding cameras and the active camera.

use posebridge_core::{PoseBridgeError, Result};
use serde::{Deserialize, Serialize};

use crate::camera::SceneCamera;
use crate::host::SceneHost;
use crate::registry::Registry;

/// A scene of cameras with at most one active camera.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    registry: Registry,
    active_camera: Option<String>,
}

/// Serializable snapshot of a [`Scene`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneManifest {
    /// Cameras in registration order.
    pub cameras: Vec<SceneCamera>,
    /// Name of the active camera.
    pub active_camera: Option<String>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// The camera registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Gets a camera by name.
    pub fn camera(&self, name: &str) -> Option<&SceneCamera> {
        self.registry.get(name)
    }

    /// Gets a mutable camera by name.
    pub fn camera_mut(&mut self, name: &str) -> Option<&mut SceneCamera> {
        self.registry.get_mut(name)
    }

    /// Iterates over cameras in registration order.
    pub fn cameras(&self) -> impl Iterator<Item = &SceneCamera> {
        self.registry.iter()
    }

    /// Removes a camera. Clears the active camera if it was the one removed.
    pub fn remove_camera(&mut self, name: &str) -> Option<SceneCamera> {
        let removed = self.registry.remove(name)?;
        if self.active_camera.as_deref() == Some(name) {
            self.active_camera = None;
        }
        Some(removed)
    }

    /// Name of the active camera.
    pub fn active_camera_name(&self) -> Option<&str> {
        self.active_camera.as_deref()
    }

    /// The active camera.
    pub fn active_camera(&self) -> Option<&SceneCamera> {
        self.active_camera
            .as_deref()
            .and_then(|name| self.registry.get(name))
    }

    /// Takes a serializable snapshot.
    pub fn manifest(&self) -> SceneManifest {
        SceneManifest {
            cameras: self.registry.iter().cloned().collect(),
            active_camera: self.active_camera.clone(),
        }
    }

    /// Rebuilds a scene from a snapshot.
    pub fn from_manifest(manifest: SceneManifest) -> Result<Self> {
        let mut scene = Self::new();
        for camera in manifest.cameras {
            scene.add_camera(camera)?;
        }
        if let Some(name) = manifest.active_camera {
            scene.set_active_camera(&name)?;
        }
        Ok(scene)
    }
}

impl SceneHost for Scene {
    fn remove_all_cameras(&mut self) -> usize {
        let removed = self.registry.len();
        self.registry.clear();
        self.active_camera = None;
        removed
    }

    fn add_camera(&mut self, camera: SceneCamera) -> Result<()> {
        self.registry.register(camera)
    }

    fn set_active_camera(&mut self, name: &str) -> Result<()> {
        if !self.registry.contains(name) {
            return Err(PoseBridgeError::CameraNotFound(name.to_string()));
        }
        self.active_camera = Some(name.to_string());
        Ok(())
    }

    fn camera_count(&self) -> usize {
        self.registry.len()
    }
}
