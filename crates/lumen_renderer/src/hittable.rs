//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Material, Ray, ScatterResult};
use lumen_math::{Interval, Point3, Vec3};
use rand::RngCore;

/// A placeholder material used for HitRecord::default().
/// Always absorbs light (returns None from scatter).
struct Absorber;

impl Material for Absorber {
    fn scatter(&self, _ray_in: &Ray, _rec: &HitRecord, _rng: &mut dyn RngCore) -> Option<ScatterResult> {
        None
    }
}

static ABSORBER: Absorber = Absorber;

/// Record of a ray-object intersection.
#[derive(Clone)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Point3,
    /// Unit surface normal at intersection (always points against ray)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a dyn Material,
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl<'a> Default for HitRecord<'a> {
    fn default() -> Self {
        Self {
            p: Vec3::ZERO,
            normal: Vec3::ZERO,
            material: &ABSORBER,
            t: 0.0,
            front_face: false,
        }
    }
}

impl<'a> HitRecord<'a> {
    /// Set the face normal based on ray direction and outward normal.
    ///
    /// `outward_normal` must be unit length. The stored normal always
    /// points against the ray, so whether we hit the front or back face
    /// is tracked separately.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object within the given interval.
    ///
    /// Returns true if hit, and fills in the hit record. The record is left
    /// untouched on a miss.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool;
}

/// A list of hittable objects.
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Box<dyn Hittable>> for HittableList {
    fn from_iter<I: IntoIterator<Item = Box<dyn Hittable>>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl Hittable for HittableList {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        // Shrinking the upper bound means each later member can only
        // report a nearer hit.
        for object in &self.objects {
            let interval = Interval::new(ray_t.min, closest_so_far);
            if object.hit(ray, interval, rec) {
                hit_anything = true;
                closest_so_far = rec.t;
            }
        }

        hit_anything
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lambertian, Sphere};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sphere_at(z: f64, radius: f64) -> Box<dyn Hittable> {
        Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, z),
            radius,
            Lambertian::new(Vec3::splat(0.5)),
        ))
    }

    #[test]
    fn test_set_face_normal_front() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let n = lumen_math::sampling::random_unit_vector(&mut rng);
            // Any direction with a negative component along n
            let d = -n + 0.3 * lumen_math::sampling::random_unit_vector(&mut rng);
            if d.dot(n) >= 0.0 {
                continue;
            }
            let ray = Ray::new(Vec3::ZERO, d);
            let mut rec = HitRecord::default();
            rec.set_face_normal(&ray, n);
            assert!(rec.front_face);
            assert_eq!(rec.normal, n);
        }
    }

    #[test]
    fn test_set_face_normal_back() {
        let n = Vec3::Y;
        let mut rec = HitRecord::default();

        rec.set_face_normal(&Ray::new(Vec3::ZERO, Vec3::new(0.2, 1.0, 0.0)), n);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, -n);

        // Perpendicular rays count as back face hits
        rec.set_face_normal(&Ray::new(Vec3::ZERO, Vec3::X), n);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, -n);
    }

    #[test]
    fn test_default_record_absorbs() {
        let rec = HitRecord::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(rec.material.scatter(&Ray::default(), &rec, &mut rng).is_none());
    }

    #[test]
    fn test_list_nearest_hit_regardless_of_order() {
        // Two overlapping spheres along -Z; the near one has its front at z = -1.5.
        let near = || sphere_at(-2.0, 0.5);
        let far = || sphere_at(-2.5, 0.75);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        for world in [
            HittableList::from_iter([near(), far()]),
            HittableList::from_iter([far(), near()]),
        ] {
            let mut rec = HitRecord::default();
            assert!(world.hit(&ray, Interval::new(0.001, f64::INFINITY), &mut rec));
            assert!((rec.t - 1.5).abs() < 1e-9, "t was {}", rec.t);
        }
    }

    #[test]
    fn test_list_miss_outside_interval() {
        let world = HittableList::from_iter([sphere_at(-5.0, 1.0)]);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut rec = HitRecord::default();

        assert!(!world.hit(&ray, Interval::new(0.001, 3.0), &mut rec));
        assert!(world.hit(&ray, Interval::new(0.001, 4.5), &mut rec));
        assert!((rec.t - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_list() {
        let mut world = HittableList::new();
        assert!(world.is_empty());
        world.add(sphere_at(-1.0, 0.5));
        assert_eq!(world.len(), 1);
        world.clear();
        assert!(world.is_empty());

        let mut rec = HitRecord::default();
        assert!(!world.hit(&Ray::default(), Interval::UNIVERSE, &mut rec));
    }
}
