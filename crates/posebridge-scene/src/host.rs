//! The interface an importer uses to populate a scene.
//!
//! A [`SceneHost`] is whatever owns the cameras: the in-memory [`crate::Scene`],
//! or an adapter around a 3D application's own scene graph.

use posebridge_core::Result;

use crate::camera::SceneCamera;

/// A scene that cameras can be added to.
pub trait SceneHost {
    /// Removes every camera, returning how many were removed.
    fn remove_all_cameras(&mut self) -> usize;

    /// Adds a camera.
    ///
    /// Fails if the host cannot accept it, for example because the name is taken.
    fn add_camera(&mut self, camera: SceneCamera) -> Result<()>;

    /// Makes the named camera the one the scene renders through.
    fn set_active_camera(&mut self, name: &str) -> Result<()>;

    /// Number of cameras currently in the scene.
    fn camera_count(&self) -> usize;
}
