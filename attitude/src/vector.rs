use glam::{Quat, Vec3};

use crate::GeometryError;

/// The world vertical axis.
///
/// Every orientation quaternion in this workspace is a rotation of this one
/// constant; call sites must not restate their own up vector.
pub const WORLD_UP: Vec3 = Vec3::Z;

/// Length below which a vector has no usable direction.
pub const DEGENERATE_EPS: f32 = 1e-9;

/// Tolerance for unit-length and parallelism checks.
pub const UNIT_EPS: f32 = 1e-6;

pub fn try_normalise(v: Vec3) -> Result<Vec3, GeometryError> {
    let length = v.length();
    if length < DEGENERATE_EPS {
        return Err(GeometryError::DegenerateVector(length));
    }
    Ok(v / length)
}

/// Rotation carrying unit vector `from` onto unit vector `to`.
///
/// Antiparallel inputs have no unique rotation axis; the axis used is
/// `e x from`, where `e` is the basis vector of `from`'s smallest-magnitude
/// component. That choice is deterministic and never produces NaN.
pub fn quaternion_from_to(from: Vec3, to: Vec3) -> Quat {
    let dot = from.dot(to);
    if dot > 1.0 - UNIT_EPS {
        return Quat::IDENTITY;
    }
    if dot < -1.0 + UNIT_EPS {
        let a = from.abs();
        let e = if a.x <= a.y && a.x <= a.z {
            Vec3::X
        } else if a.y <= a.z {
            Vec3::Y
        } else {
            Vec3::Z
        };
        let axis = e.cross(from).normalize();
        return Quat::from_axis_angle(axis, std::f32::consts::PI);
    }
    Quat::from_rotation_arc(from, to)
}

/// Unit direction of the horizontal line contained in a plane of the given
/// strike.
pub fn strike_direction(strike_deg: f32) -> Vec3 {
    let s = strike_deg.to_radians();
    Vec3::new(s.cos(), s.sin(), 0.0)
}

/// Unit vector down the steepest slope of a plane with the given dip
/// direction and dip.
///
/// Closed form of `normalize(cos dd, sin dd, -tan d)` scaled by `cos d`,
/// which stays finite for a vertical plane (d = 90).
pub fn dip_vector(dip_direction_deg: f32, dip_deg: f32) -> Vec3 {
    let dd = dip_direction_deg.to_radians();
    let d = dip_deg.to_radians();
    Vec3::new(dd.cos() * d.cos(), dd.sin() * d.cos(), -d.sin())
}

#[cfg(test)]
mod tests {
    use glam::{vec3, Vec3};

    use super::*;

    #[test]
    fn normalise_produces_unit_length() {
        let v = try_normalise(vec3(3.0, -4.0, 12.0)).unwrap();
        assert!((v.length() - 1.0).abs() < UNIT_EPS);
    }

    #[test]
    fn normalise_rejects_near_zero() {
        assert!(matches!(
            try_normalise(Vec3::splat(1e-12)),
            Err(crate::GeometryError::DegenerateVector(_))
        ));
    }

    #[test]
    fn rotation_between_equal_vectors_is_identity() {
        let q = quaternion_from_to(Vec3::Z, Vec3::Z);
        assert_eq!(q, Quat::IDENTITY);
    }

    #[test]
    fn rotation_maps_from_onto_to() {
        let to = vec3(1.0, 2.0, 2.0).normalize();
        let q = quaternion_from_to(Vec3::Z, to);
        assert!(q.mul_vec3(Vec3::Z).distance(to) < 1e-5);
    }

    #[test]
    fn antiparallel_rotation_is_finite_and_correct() {
        for from in [Vec3::X, Vec3::Y, Vec3::Z, vec3(1.0, 1.0, 1.0).normalize()] {
            let q = quaternion_from_to(from, -from);
            assert!(q.is_finite());
            assert!(q.mul_vec3(from).distance(-from) < 1e-5);
        }
    }

    #[test]
    fn antiparallel_rotation_is_deterministic() {
        let a = quaternion_from_to(Vec3::Z, -Vec3::Z);
        let b = quaternion_from_to(Vec3::Z, -Vec3::Z);
        assert_eq!(a, b);
    }

    #[test]
    fn dip_vector_is_unit_even_when_vertical() {
        let v = dip_vector(90.0, 90.0);
        assert!(v.is_finite());
        assert!((v.length() - 1.0).abs() < UNIT_EPS);
        assert!((v.z + 1.0).abs() < UNIT_EPS);
    }

    #[test]
    fn strike_direction_is_horizontal() {
        for strike in [0.0, 30.0, 137.5, 359.0] {
            let v = strike_direction(strike);
            assert_eq!(v.z, 0.0);
            assert!((v.length() - 1.0).abs() < UNIT_EPS);
        }
    }
}
