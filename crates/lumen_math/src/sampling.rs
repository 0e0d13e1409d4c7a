//! Random sampling primitives shared by the camera and materials.
//!
//! All functions take the random source explicitly so each render worker
//! can drive its own independent stream.

use crate::Vec3;
use rand::Rng;

/// Upper bound on rejection sampling trials before falling back to a
/// fixed sample. With a healthy RNG the chance of reaching it is far below
/// 1e-20, so the cap only matters for degenerate sources.
pub const MAX_REJECTION_ATTEMPTS: usize = 64;

/// Squared lengths at or below this are rejected to avoid dividing by
/// a value that underflows.
const MIN_LENGTH_SQUARED: f64 = 1e-160;

/// Uniform random value in `[min, max)`.
#[inline]
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + (max - min) * rng.gen::<f64>()
}

/// Generate a random unit vector, uniformly distributed on the unit sphere.
///
/// Rejection samples the cube `[-1, 1]^3` until the point falls inside the
/// unit ball, then projects it onto the sphere.
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let v = Vec3::new(
            random_range(rng, -1.0, 1.0),
            random_range(rng, -1.0, 1.0),
            random_range(rng, -1.0, 1.0),
        );
        let len_sq = v.length_squared();
        if len_sq > MIN_LENGTH_SQUARED && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
    Vec3::Z
}

/// Sample a random point in the unit disk on the z = 0 plane.
pub fn random_in_unit_disk<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let p = Vec3::new(
            random_range(rng, -1.0, 1.0),
            random_range(rng, -1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
    Vec3::ZERO
}

/// Sample a random point in the unit square [-0.5, 0.5) x [-0.5, 0.5).
#[inline]
pub fn sample_square<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(rng.gen::<f64>() - 0.5, rng.gen::<f64>() - 0.5, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_unit_vector_is_unit() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = random_unit_vector(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-9, "length was {}", v.length());
        }
    }

    #[test]
    fn test_random_unit_vector_is_centered() {
        let mut rng = StdRng::seed_from_u64(11);
        let n = 20_000;
        let mean = (0..n).map(|_| random_unit_vector(&mut rng)).sum::<Vec3>() / n as f64;
        assert!(mean.length() < 0.05, "mean direction was {:?}", mean);
    }

    #[test]
    fn test_random_in_unit_disk() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let p = random_in_unit_disk(&mut rng);
            assert!(p.length_squared() < 1.0);
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn test_sample_square_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let p = sample_square(&mut rng);
            assert!((-0.5..0.5).contains(&p.x));
            assert!((-0.5..0.5).contains(&p.y));
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn test_degenerate_rng_falls_back() {
        // Every draw is 0.0, so every trial lands on a cube corner.
        let mut rng = StepRng::new(0, 0);
        assert_eq!(random_unit_vector(&mut rng), Vec3::Z);
        assert_eq!(random_in_unit_disk(&mut rng), Vec3::ZERO);
    }

    #[test]
    fn test_works_through_dyn_rng() {
        let mut rng = StdRng::seed_from_u64(1);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        let v = random_unit_vector(dyn_rng);
        assert!((v.length() - 1.0).abs() < 1e-9);
    }
}
