//! Scene cameras created from converted poses.

use glam::{DVec3, DVec4};
use posebridge_core::PoseMatrix;
use serde::{Deserialize, Serialize};

use crate::background::BackgroundImage;

/// Lens parameters of a scene camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lens {
    /// Field of view in degrees.
    pub fov_degrees: f64,
}

impl Lens {
    /// Creates a lens with the given field of view.
    pub fn new(fov_degrees: f64) -> Self {
        Self { fov_degrees }
    }

    /// Field of view in radians.
    #[must_use]
    pub fn fov_radians(&self) -> f64 {
        self.fov_degrees.to_radians()
    }

    /// Focal length for a sensor of the given width, in the sensor's units.
    #[must_use]
    pub fn focal_length(&self, sensor_width: f64) -> f64 {
        sensor_width / (2.0 * (self.fov_radians() / 2.0).tan())
    }
}

impl Default for Lens {
    fn default() -> Self {
        Self::new(65.0)
    }
}

/// A camera object placed in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneCamera {
    name: String,
    matrix_world: PoseMatrix,
    lens: Lens,
    background: Option<BackgroundImage>,
    show_background_images: bool,
}

impl SceneCamera {
    /// Creates a camera at `matrix_world` with the given lens and no background.
    pub fn new(name: impl Into<String>, matrix_world: PoseMatrix, lens: Lens) -> Self {
        Self {
            name: name.into(),
            matrix_world,
            lens,
            background: None,
            show_background_images: false,
        }
    }

    /// Returns the name of this camera.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// World transform of the camera.
    #[must_use]
    pub fn matrix_world(&self) -> &PoseMatrix {
        &self.matrix_world
    }

    /// Replaces the world transform.
    pub fn set_matrix_world(&mut self, matrix_world: PoseMatrix) -> &mut Self {
        self.matrix_world = matrix_world;
        self
    }

    /// Lens parameters.
    #[must_use]
    pub fn lens(&self) -> &Lens {
        &self.lens
    }

    /// Replaces the lens parameters.
    pub fn set_lens(&mut self, lens: Lens) -> &mut Self {
        self.lens = lens;
        self
    }

    /// Camera position in world space.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        self.matrix_world.translation()
    }

    /// Viewing direction in world space (the camera's local −Z).
    #[must_use]
    pub fn look_dir(&self) -> DVec3 {
        self.local_axis(DVec3::NEG_Z)
    }

    /// Up direction in world space (the camera's local +Y).
    #[must_use]
    pub fn up_dir(&self) -> DVec3 {
        self.local_axis(DVec3::Y)
    }

    fn local_axis(&self, axis: DVec3) -> DVec3 {
        let world = self.matrix_world.to_dmat4() * DVec4::from((axis, 0.0));
        world.truncate().normalize_or_zero()
    }

    /// Attached background image, if any.
    #[must_use]
    pub fn background(&self) -> Option<&BackgroundImage> {
        self.background.as_ref()
    }

    /// Attaches a background image and turns background display on.
    pub fn attach_background(&mut self, background: BackgroundImage) -> &mut Self {
        self.background = Some(background);
        self.show_background_images = true;
        self
    }

    /// Whether background images are displayed.
    #[must_use]
    pub fn show_background_images(&self) -> bool {
        self.show_background_images
    }

    /// Sets whether background images are displayed.
    pub fn set_show_background_images(&mut self, show: bool) -> &mut Self {
        self.show_background_images = show;
        self
    }
}
