//! Material trait for surface scattering.

use crate::{hittable::HitRecord, Ray};
use lumen_math::sampling::random_unit_vector;
use lumen_math::{Vec3, Vec3Ext};
use rand::{Rng, RngCore};
use std::sync::Arc;

/// Color type alias (linear RGB, typically 0-1)
pub type Color = Vec3;

/// Result of a successful scatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterResult {
    /// Component-wise multiplier applied to the light carried back along `scattered`
    pub attenuation: Color,
    /// The outgoing ray
    pub scattered: Ray,
}

/// Trait for materials that describe how light interacts with surfaces.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns the attenuation and outgoing ray if the ray scatters,
    /// or None if the ray is absorbed.
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult>;
}

/// Lets several primitives share one material instance.
impl<M: Material + ?Sized> Material for Arc<M> {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        (**self).scatter(ray_in, rec, rng)
    }
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone, Copy)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }
}

impl Material for Lambertian {
    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        let mut scatter_direction = rec.normal + random_unit_vector(rng);

        // Catch degenerate scatter direction
        if scatter_direction.near_zero() {
            scatter_direction = rec.normal;
        }

        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, scatter_direction),
        })
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone, Copy)]
pub struct Metal {
    albedo: Color,
    fuzz: f64,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn new(albedo: Color, fuzz: f64) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    pub fn fuzz(&self) -> f64 {
        self.fuzz
    }
}

impl Material for Metal {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        let reflected = reflect(ray_in.direction(), rec.normal).unit();
        let scattered_dir = if self.fuzz > 0.0 {
            reflected + self.fuzz * random_unit_vector(rng)
        } else {
            reflected
        };

        // Fuzzed rays that end up below the surface are absorbed
        if scattered_dir.dot(rec.normal) > 0.0 {
            Some(ScatterResult {
                attenuation: self.albedo,
                scattered: Ray::new(rec.p, scattered_dir),
            })
        } else {
            None
        }
    }
}

/// Dielectric (glass) material.
#[derive(Debug, Clone, Copy)]
pub struct Dielectric {
    /// Refractive index relative to the enclosing medium
    refraction_index: f64,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `refraction_index`: 1.0 = air, 1.5 = glass, 2.4 = diamond.
    ///   Values below 1 model a bubble of a thinner medium.
    pub fn new(refraction_index: f64) -> Self {
        Self { refraction_index }
    }

    pub fn refraction_index(&self) -> f64 {
        self.refraction_index
    }

    /// Schlick's approximation for reflectance
    fn reflectance(cosine: f64, ri: f64) -> f64 {
        let r0 = ((1.0 - ri) / (1.0 + ri)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Dielectric {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        let ri = if rec.front_face {
            1.0 / self.refraction_index
        } else {
            self.refraction_index
        };

        let unit_direction = ray_in.direction().unit();
        let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        // Total internal reflection
        let cannot_refract = ri * sin_theta > 1.0;

        let direction = if cannot_refract || Self::reflectance(cos_theta, ri) > rng.gen::<f64>() {
            reflect(unit_direction, rec.normal)
        } else {
            refract(unit_direction, rec.normal, ri)
        };

        Some(ScatterResult {
            attenuation: Color::ONE,
            scattered: Ray::new(rec.p, direction),
        })
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with unit normal `n`.
///
/// `etai_over_etat` is the ratio of the refractive indices on the incoming
/// and outgoing sides.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f64) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(p: Vec3, normal: Vec3, front_face: bool) -> HitRecord<'static> {
        HitRecord {
            p,
            normal,
            front_face,
            t: 1.0,
            ..HitRecord::default()
        }
    }

    #[test]
    fn test_reflect() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(reflect(v, Vec3::Y), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_refract_index_one_is_straight() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..100 {
            let uv = random_unit_vector(&mut rng);
            let n = if uv.dot(Vec3::Y) < 0.0 { Vec3::Y } else { Vec3::NEG_Y };
            let out = refract(uv, n, 1.0);
            assert!((out - uv).length() < 1e-9, "{:?} bent into {:?}", uv, out);
        }
    }

    #[test]
    fn test_dielectric_index_one_passes_through() {
        // With index 1.0 Schlick reflectance is 0 at normal incidence, so
        // the ray always refracts straight through.
        let glass = Dielectric::new(1.0);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -2.0, 0.0));
        let rec = record(Vec3::ZERO, Vec3::Y, true);
        let mut rng = StdRng::seed_from_u64(4);

        for _ in 0..50 {
            let result = glass.scatter(&ray, &rec, &mut rng).unwrap();
            assert_eq!(result.attenuation, Color::ONE);
            assert!((result.scattered.direction() - Vec3::NEG_Y).length() < 1e-12);
            assert_eq!(result.scattered.origin(), rec.p);
        }
    }

    #[test]
    fn test_dielectric_total_internal_reflection() {
        // Leaving glass at a grazing angle: ri * sin(theta) > 1
        let glass = Dielectric::new(1.5);
        let d = Vec3::new(1.0, 0.2, 0.0).unit();
        let ray = Ray::new(Vec3::new(-1.0, -0.2, 0.0), d);
        // Back face hit, normal flipped against the ray
        let rec = record(Vec3::ZERO, Vec3::NEG_Y, false);
        let mut rng = StdRng::seed_from_u64(8);

        for _ in 0..20 {
            let result = glass.scatter(&ray, &rec, &mut rng).unwrap();
            let expected = reflect(d, Vec3::NEG_Y);
            assert!((result.scattered.direction() - expected).length() < 1e-12);
        }
    }

    #[test]
    fn test_metal_without_fuzz_is_specular() {
        let metal = Metal::new(Color::new(0.8, 0.6, 0.2), 0.0);
        let d = Vec3::new(1.0, -1.0, 0.5);
        let ray = Ray::new(Vec3::new(-1.0, 1.0, -0.5), d);
        let rec = record(Vec3::ZERO, Vec3::Y, true);
        // A mirror must not consume randomness
        let mut rng = StepRng::new(0, 0);

        let result = metal.scatter(&ray, &rec, &mut rng).unwrap();
        assert_eq!(result.attenuation, Color::new(0.8, 0.6, 0.2));
        let expected = reflect(d, Vec3::Y).unit();
        assert!((result.scattered.direction() - expected).length() < 1e-12);
        assert!((result.scattered.direction().unit() - reflect(d.unit(), Vec3::Y)).length() < 1e-12);
    }

    #[test]
    fn test_metal_fuzz_is_clamped() {
        assert_eq!(Metal::new(Color::ONE, 3.0).fuzz(), 1.0);
        assert_eq!(Metal::new(Color::ONE, -1.0).fuzz(), 0.0);
    }

    #[test]
    fn test_metal_absorbs_below_surface() {
        let metal = Metal::new(Color::ONE, 0.0);
        // Ray travelling along the normal's side reflects below the surface
        let ray = Ray::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y);
        let rec = record(Vec3::ZERO, Vec3::Y, true);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(metal.scatter(&ray, &rec, &mut rng).is_none());
    }

    #[test]
    fn test_lambertian_scatters_above_surface() {
        let albedo = Color::new(0.1, 0.2, 0.3);
        let diffuse = Lambertian::new(albedo);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        let rec = record(Vec3::new(0.0, 0.0, 0.0), Vec3::Y, true);
        let mut rng = StdRng::seed_from_u64(12);

        for _ in 0..200 {
            let result = diffuse.scatter(&ray, &rec, &mut rng).unwrap();
            assert_eq!(result.attenuation, albedo);
            assert!(result.scattered.direction().dot(rec.normal) >= 0.0);
            assert!(!result.scattered.direction().near_zero());
        }
    }

    #[test]
    fn test_lambertian_degenerate_direction_uses_normal() {
        // Every draw is 0.25, so the unit vector is -(1, 1, 1) / sqrt(3)
        // and cancels a normal pointing the other way.
        let diffuse = Lambertian::new(Color::splat(0.5));
        let normal = Vec3::ONE.unit();
        let rec = record(Vec3::ZERO, normal, true);
        let mut rng = StepRng::new(1 << 62, 0);

        let result = diffuse.scatter(&Ray::default(), &rec, &mut rng).unwrap();
        assert_eq!(result.scattered.direction(), normal);
        assert_eq!(result.scattered.origin(), Vec3::ZERO);
    }

    #[test]
    fn test_shared_material() {
        let shared: Arc<dyn Material> = Arc::new(Lambertian::new(Color::splat(0.5)));
        let rec = record(Vec3::ZERO, Vec3::Y, true);
        let mut rng = StdRng::seed_from_u64(2);
        let result = shared.scatter(&Ray::default(), &rec, &mut rng).unwrap();
        assert_eq!(result.attenuation, Color::splat(0.5));
    }
}
