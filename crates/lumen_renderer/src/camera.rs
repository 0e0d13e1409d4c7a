//! Camera for ray generation.

use crate::{CameraError, Color, Ray};
use lumen_math::sampling::{random_in_unit_disk, sample_square};
use lumen_math::{Point3, Vec3, Vec3Ext};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Radiance returned for rays that leave the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Background {
    /// The same color in every direction.
    Solid { color: Color },
    /// Vertical blend from `bottom` (straight down) to `top` (straight up).
    Gradient { bottom: Color, top: Color },
}

impl Background {
    /// The classic white-to-sky-blue gradient.
    pub const SKY: Background = Background::Gradient {
        bottom: Color::ONE,
        top: Color::new(0.5, 0.7, 1.0),
    };

    /// Radiance seen along a ray that hit nothing.
    pub fn radiance(&self, ray: &Ray) -> Color {
        match *self {
            Background::Solid { color } => color,
            Background::Gradient { bottom, top } => {
                let unit_direction = ray.direction().unit();
                let a = 0.5 * (unit_direction.y + 1.0);
                bottom * (1.0 - a) + top * a
            }
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::SKY
    }
}

/// User-facing camera configuration.
///
/// Angles are in degrees. Call [`CameraSettings::build`] to validate the
/// settings and derive the viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,

    // Camera positioning
    pub look_from: Point3,
    pub look_at: Point3,
    pub vup: Vec3,

    // Lens settings
    pub vfov: f64,          // Vertical field of view in degrees
    pub defocus_angle: f64, // Variation angle of rays through each pixel
    pub focus_dist: f64,    // Distance from camera to plane of perfect focus

    pub background: Background,

    /// Base seed for the per-pixel random streams
    pub seed: u64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            image_width: 400,
            image_height: 225,
            samples_per_pixel: 10,
            max_depth: 50,
            look_from: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            vup: Vec3::Y,
            vfov: 90.0,
            defocus_angle: 0.0,
            focus_dist: 1.0,
            background: Background::SKY,
            seed: 0,
        }
    }
}

impl CameraSettings {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set image width and derive the height from an aspect ratio (at least 1).
    pub fn with_aspect_ratio(mut self, width: u32, aspect_ratio: f64) -> Self {
        self.image_width = width;
        self.image_height = ((width as f64 / aspect_ratio) as u32).max(1);
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples;
        self.max_depth = max_depth;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Point3, look_at: Point3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f64, defocus_angle: f64, focus_dist: f64) -> Self {
        self.vfov = vfov;
        self.defocus_angle = defocus_angle;
        self.focus_dist = focus_dist;
        self
    }

    /// Set background radiance.
    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// Set the base random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the settings and derive the camera frame and viewport.
    pub fn build(&self) -> Result<Camera, CameraError> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(CameraError::ZeroResolution {
                width: self.image_width,
                height: self.image_height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(CameraError::ZeroSamples);
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(CameraError::InvalidFieldOfView(self.vfov));
        }
        if !(self.focus_dist > 0.0 && self.focus_dist.is_finite()) {
            return Err(CameraError::InvalidFocusDistance(self.focus_dist));
        }

        let view = self.look_from - self.look_at;
        if !view.is_finite() || view.near_zero() {
            return Err(CameraError::DegenerateView);
        }

        // Camera basis vectors; w points from look_at back toward the eye
        let w = view.unit();
        let side = self.vup.cross(w);
        if !side.is_finite() || side.near_zero() {
            return Err(CameraError::DegenerateUp);
        }
        let u = side.unit();
        let v = w.cross(u);

        let center = self.look_from;

        // Viewport dimensions
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * self.focus_dist;
        let viewport_width = viewport_height * (self.image_width as f64 / self.image_height as f64);

        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;

        let pixel_delta_u = viewport_u / self.image_width as f64;
        let pixel_delta_v = viewport_v / self.image_height as f64;

        let viewport_upper_left = center - self.focus_dist * w - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        let defocus_radius = self.focus_dist * (self.defocus_angle / 2.0).to_radians().tan();

        log::debug!(
            "Camera {}x{} vfov={} viewport={:.3}x{:.3} defocus_radius={:.4}",
            self.image_width,
            self.image_height,
            self.vfov,
            viewport_width,
            viewport_height,
            defocus_radius
        );

        Ok(Camera {
            image_width: self.image_width,
            image_height: self.image_height,
            samples_per_pixel: self.samples_per_pixel,
            max_depth: self.max_depth,
            defocus_angle: self.defocus_angle,
            background: self.background,
            seed: self.seed,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
            u,
            v,
            w,
            defocus_disk_u: u * defocus_radius,
            defocus_disk_v: v * defocus_radius,
        })
    }
}

/// Camera for generating rays into the scene.
///
/// Built from [`CameraSettings`]; all derived state is fixed for the
/// camera's lifetime, so a camera can be shared across render workers.
#[derive(Debug, Clone)]
pub struct Camera {
    image_width: u32,
    image_height: u32,
    samples_per_pixel: u32,
    max_depth: u32,
    defocus_angle: f64,
    background: Background,
    seed: u64,

    center: Point3,
    pixel00_loc: Point3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
}

impl Camera {
    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Camera frame basis (u right, v up, w backward).
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }

    /// Location of the center of pixel (0, 0).
    pub fn pixel00_loc(&self) -> Point3 {
        self.pixel00_loc
    }

    /// Generate a ray for pixel (i, j) with random sampling.
    ///
    /// The sample point is jittered within the pixel for anti-aliasing and
    /// the origin is drawn from the defocus disk when depth of field is on.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let offset = sample_square(rng);

        let pixel_sample = self.pixel00_loc
            + ((i as f64) + offset.x) * self.pixel_delta_u
            + ((j as f64) + offset.y) * self.pixel_delta_v;

        let ray_origin = if self.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample(rng)
        };

        Ray::new(ray_origin, pixel_sample - ray_origin)
    }

    /// Sample a point on the defocus disk.
    fn defocus_disk_sample(&self, rng: &mut dyn RngCore) -> Point3 {
        let p = random_in_unit_disk(rng);
        self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
    }
}
