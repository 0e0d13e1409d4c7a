use crate::Vec3;

/// Components below this magnitude count as zero for scatter directions.
pub const NEAR_ZERO_EPSILON: f64 = 1e-8;

/// Ray tracing helpers that glam does not provide.
pub trait Vec3Ext {
    /// Normalize the vector.
    ///
    /// Unlike `normalize`, a zero-length vector is returned unchanged
    /// instead of turning into NaNs.
    fn unit(self) -> Self;

    /// Returns true if every component is within `NEAR_ZERO_EPSILON` of zero.
    fn near_zero(self) -> bool;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn unit(self) -> Self {
        let length = self.length();
        if length == 0.0 {
            return self;
        }
        self / length
    }

    #[inline]
    fn near_zero(self) -> bool {
        self.x.abs() < NEAR_ZERO_EPSILON
            && self.y.abs() < NEAR_ZERO_EPSILON
            && self.z.abs() < NEAR_ZERO_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_length() {
        let v = Vec3::new(3.0, 4.0, 0.0).unit();
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert_eq!(v, Vec3::new(0.6, 0.8, 0.0));
    }

    #[test]
    fn test_unit_of_zero_is_noop() {
        let v = Vec3::ZERO.unit();
        assert_eq!(v, Vec3::ZERO);
        assert!(!v.x.is_nan());
    }

    #[test]
    fn test_near_zero() {
        assert!(Vec3::ZERO.near_zero());
        assert!(Vec3::new(1e-9, -1e-9, 5e-9).near_zero());
        assert!(!Vec3::new(1e-9, 0.0, 1e-7).near_zero());
        assert!(!Vec3::X.near_zero());
    }
}
