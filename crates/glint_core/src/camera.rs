//! Pinhole camera: maps pixel coordinates onto a virtual image plane.

use glint_math::{Point3, Vec3};
use serde::{Deserialize, Serialize};

/// Pinhole camera model.
///
/// The constructor fixes the camera geometry and derives an orthonormal
/// `(right, up, towards)` basis. Field of view and output resolution are
/// set separately by [`PinholeCamera::init_resolution`], so the same
/// geometry can be reused at different resolutions and angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "CameraParams", into = "CameraParams")]
pub struct PinholeCamera {
    position: Point3,
    towards: Vec3,
    up: Vec3,
    right: Vec3,
    distance_to_plane: f64,
    plane_center: Point3,

    // Set by init_resolution()
    resolution_x: u32,
    resolution_y: u32,
    plane_width: f64,
    pixel_width: f64,
}

/// Construction arguments, which is all a serialized camera carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct CameraParams {
    position: Point3,
    towards: Vec3,
    up: Vec3,
    distance_to_plane: f64,
}

impl From<CameraParams> for PinholeCamera {
    fn from(p: CameraParams) -> Self {
        PinholeCamera::new(p.position, p.towards, p.up, p.distance_to_plane)
    }
}

impl From<PinholeCamera> for CameraParams {
    fn from(camera: PinholeCamera) -> Self {
        CameraParams {
            position: camera.position,
            towards: camera.towards,
            up: camera.up,
            distance_to_plane: camera.distance_to_plane,
        }
    }
}

impl PinholeCamera {
    /// Create a camera at `position` looking along `towards`.
    ///
    /// `towards` and `up` need not be orthogonal or normalized; `up` is
    /// re-derived to be perpendicular to the viewing direction. If they are
    /// parallel an arbitrary perpendicular `right` vector is chosen.
    pub fn new(position: Point3, towards: Vec3, up: Vec3, distance_to_plane: f64) -> Self {
        let towards = towards.try_normalize().unwrap_or(-Vec3::Z);
        let right = towards
            .cross(up.normalize_or_zero())
            .try_normalize()
            .unwrap_or_else(|| towards.any_orthonormal_vector());
        let up = right.cross(towards);

        Self {
            position,
            towards,
            up,
            right,
            distance_to_plane,
            plane_center: position + towards * distance_to_plane,
            resolution_x: 0,
            resolution_y: 0,
            plane_width: 0.0,
            pixel_width: 0.0,
        }
    }

    /// Fix the output resolution and horizontal field of view (degrees).
    ///
    /// Must be called before any pixel transform.
    pub fn init_resolution(&mut self, height: u32, width: u32, view_angle: f64) {
        self.resolution_x = width;
        self.resolution_y = height;
        self.plane_width = 2.0 * self.distance_to_plane * (view_angle.to_radians() / 2.0).tan();
        self.pixel_width = self.plane_width / width as f64;
    }

    /// Point on the image plane for pixel `(x, y)`.
    ///
    /// Pixel (0, 0) is the top-left corner; x grows to the right and y
    /// grows downward.
    pub fn transform(&self, x: u32, y: u32) -> Point3 {
        self.plane_point(x as f64, y as f64)
    }

    /// Point on the image plane for sub-sample `(sub_x, sub_y)` of a
    /// `factor` x `factor` grid inside pixel `(x, y)`.
    ///
    /// Sub-sample centers are spread symmetrically around
    /// `transform(x, y)`; with `factor == 1` the two coincide.
    pub fn transform_subpixel(&self, x: u32, y: u32, sub_x: u32, sub_y: u32, factor: u32) -> Point3 {
        let factor = factor.max(1) as f64;
        let offset = |sub: u32| (sub as f64 + 0.5) / factor - 0.5;
        self.plane_point(x as f64 + offset(sub_x), y as f64 + offset(sub_y))
    }

    fn plane_point(&self, x: f64, y: f64) -> Point3 {
        let right_factor = (x - self.resolution_x as f64 / 2.0) * self.pixel_width;
        let up_factor = (self.resolution_y as f64 / 2.0 - y) * self.pixel_width;
        self.plane_center + self.right * right_factor + self.up * up_factor
    }

    pub fn position(&self) -> Point3 {
        self.position
    }

    pub fn towards(&self) -> Vec3 {
        self.towards
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn distance_to_plane(&self) -> f64 {
        self.distance_to_plane
    }

    pub fn plane_center(&self) -> Point3 {
        self.plane_center
    }

    /// Width of the image plane in world units (zero before init).
    pub fn plane_width(&self) -> f64 {
        self.plane_width
    }

    /// Width of one pixel in world units (zero before init).
    pub fn pixel_width(&self) -> f64 {
        self.pixel_width
    }
}
