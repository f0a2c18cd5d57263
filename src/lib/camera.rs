//! Pinhole camera mapping pixels to primary rays.

use crate::{
    matrix::{self, Mat4, Transform},
    ray::Ray,
    vector::Vec4,
};

#[derive(Clone, Debug, PartialEq)]
/// A camera looking down its local -Z axis, with a canvas one unit in front of it.
pub struct Camera {
    hsize: u32,
    vsize: u32,
    field_of_view: f64,
    transform: Transform,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl Camera {
    /// Create a camera rendering `hsize` by `vsize` pixels.
    ///
    /// `field_of_view` is the angle in radians spanned by the longest side of the canvas, and
    /// `view` the world-to-camera transform, usually obtained from
    /// [view_transform](crate::matrix::view_transform).
    pub fn new(
        hsize: u32,
        vsize: u32,
        field_of_view: f64,
        view: Mat4,
    ) -> Result<Self, matrix::Error> {
        let half_view = (field_of_view / 2.).tan();
        let aspect = hsize as f64 / vsize as f64;

        let (half_width, half_height) = if aspect >= 1. {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };

        Ok(Self {
            hsize,
            vsize,
            field_of_view,
            transform: Transform::new(view)?,
            half_width,
            half_height,
            pixel_size: half_width * 2. / hsize as f64,
        })
    }

    /// Get viewport size in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.hsize, self.vsize)
    }

    /// Field of view in radians.
    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    /// Size of a pixel on the canvas, in world units.
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// Half extents of the canvas.
    pub fn half_size(&self) -> (f64, f64) {
        (self.half_width, self.half_height)
    }

    /// World-to-camera transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Ray from the camera through the center of pixel `(px, py)`, the origin being the top left
    /// corner.
    pub fn ray_for_pixel(&self, px: u32, py: u32) -> Ray {
        let world_x = self.half_width - (px as f64 + 0.5) * self.pixel_size;
        let world_y = self.half_height - (py as f64 + 0.5) * self.pixel_size;

        let pixel = self.transform.to_local(Vec4::point(world_x, world_y, -1.));
        let origin = self.transform.to_local(Vec4::point(0., 0., 0.));
        let direction = pixel - origin;

        // Never zero: the canvas sits one unit away and the transform is invertible.
        Ray::from_unit(origin, direction / direction.len())
    }
}
