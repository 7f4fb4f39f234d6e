//! Camera registry for managing the cameras of a scene.

use posebridge_core::{PoseBridgeError, Result};

use crate::camera::SceneCamera;

/// Registry for managing all cameras in a scene.
///
/// Cameras keep their registration order, so "the first camera" is well defined.
/// Names are unique.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    cameras: Vec<SceneCamera>,
}

impl Registry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a camera with the registry.
    ///
    /// Returns an error if a camera with the same name already exists.
    pub fn register(&mut self, camera: SceneCamera) -> Result<()> {
        if self.contains(camera.name()) {
            return Err(PoseBridgeError::CameraExists(camera.name().to_string()));
        }

        self.cameras.push(camera);
        Ok(())
    }

    /// Gets a reference to a camera by name.
    pub fn get(&self, name: &str) -> Option<&SceneCamera> {
        self.cameras.iter().find(|c| c.name() == name)
    }

    /// Gets a mutable reference to a camera by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut SceneCamera> {
        self.cameras.iter_mut().find(|c| c.name() == name)
    }

    /// Checks if a camera with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Removes a camera by name.
    pub fn remove(&mut self, name: &str) -> Option<SceneCamera> {
        let index = self.cameras.iter().position(|c| c.name() == name)?;
        Some(self.cameras.remove(index))
    }

    /// Removes all cameras from the registry.
    pub fn clear(&mut self) {
        self.cameras.clear();
    }

    /// Returns an iterator over all cameras in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneCamera> {
        self.cameras.iter()
    }

    /// Returns the first registered camera.
    pub fn first(&self) -> Option<&SceneCamera> {
        self.cameras.first()
    }

    /// Returns the total number of registered cameras.
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }
}
