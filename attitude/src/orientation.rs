use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::vector::{self, quaternion_from_to, try_normalise, DEGENERATE_EPS, WORLD_UP};
use crate::GeometryError;

/// Strike / dip / dip-direction triple in degrees.
///
/// Strike and dip direction live in `[0, 360)`, dip in `[0, 90]`. Values are
/// range-checked on construction, so a stored triple is always displayable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attitude {
    pub strike_deg: f32,
    pub dip_deg: f32,
    pub dip_direction_deg: f32,
}

impl Attitude {
    pub fn new(strike_deg: f32, dip_deg: f32, dip_direction_deg: f32) -> Result<Self, GeometryError> {
        check_bearing("strike", strike_deg)?;
        check_bearing("dip direction", dip_direction_deg)?;
        if !(0.0..=90.0).contains(&dip_deg) {
            return Err(GeometryError::OutOfRangeAngle {
                name: "dip",
                value: dip_deg,
            });
        }
        Ok(Self {
            strike_deg,
            dip_deg,
            dip_direction_deg,
        })
    }
}

fn check_bearing(name: &'static str, value: f32) -> Result<(), GeometryError> {
    if !(0.0..360.0).contains(&value) {
        return Err(GeometryError::OutOfRangeAngle { name, value });
    }
    Ok(())
}

/// A plane orientation derived from measured points or from an angle triple.
///
/// Never assembled by hand: the two builders are the only constructors, and
/// every value they produce satisfies `||normal|| = 1` within 1e-6.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    normal: Vec3,
    centroid: Vec3,
    attitude: Option<Attitude>,
}

impl Orientation {
    /// Plane through three measured points.
    ///
    /// The result carries geometry only; the angle triple for a measured
    /// sample comes from the analysis service, not from this builder.
    pub fn from_points(points: [Vec3; 3]) -> Result<Self, GeometryError> {
        let [p1, p2, p3] = points;
        let e1 = p2 - p1;
        let e2 = p3 - p1;
        let cross = e1.cross(e2);
        // Relative threshold: a sliver triangle with long edges still has a
        // cross product that is tiny next to the edge-length product.
        if cross.length() < DEGENERATE_EPS * e1.length() * e2.length()
            || cross.length() < DEGENERATE_EPS
        {
            return Err(GeometryError::DegenerateTriangle(points));
        }
        Ok(Self {
            normal: try_normalise(cross)?,
            centroid: (p1 + p2 + p3) / 3.0,
            attitude: None,
        })
    }

    /// Plane with the given strike, dip and dip direction, centred at the
    /// origin until rebased with [`Orientation::with_centroid`].
    pub fn from_angles(
        strike_deg: f32,
        dip_deg: f32,
        dip_direction_deg: f32,
    ) -> Result<Self, GeometryError> {
        let attitude = Attitude::new(strike_deg, dip_deg, dip_direction_deg)?;
        let s = strike_deg.to_radians();
        let d = dip_deg.to_radians();
        let raw = Vec3::new(s.sin() * d.sin(), -s.cos() * d.sin(), d.cos());
        Ok(Self {
            normal: try_normalise(raw)?,
            centroid: Vec3::ZERO,
            attitude: Some(attitude),
        })
    }

    pub fn with_centroid(self, centroid: Vec3) -> Self {
        Self { centroid, ..self }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn centroid(&self) -> Vec3 {
        self.centroid
    }

    pub fn attitude(&self) -> Option<Attitude> {
        self.attitude
    }

    /// Rotation carrying [`WORLD_UP`] onto the plane normal. Orients the
    /// rendered plane patch.
    pub fn rotation(&self) -> Quat {
        quaternion_from_to(WORLD_UP, self.normal)
    }

    /// Unit direction of the strike line, when the angle triple is known.
    pub fn strike_line(&self) -> Option<Vec3> {
        self.attitude
            .map(|a| vector::strike_direction(a.strike_deg))
    }

    /// Unit direction down the steepest slope, when the angle triple is
    /// known.
    pub fn dip_line(&self) -> Option<Vec3> {
        self.attitude
            .map(|a| vector::dip_vector(a.dip_direction_deg, a.dip_deg))
    }
}

#[cfg(test)]
mod tests {
    use glam::{vec3, Vec3};

    use super::*;
    use crate::vector::UNIT_EPS;

    #[test]
    fn three_points_on_the_floor_give_a_vertical_normal() {
        let o = Orientation::from_points([Vec3::ZERO, Vec3::X, Vec3::Y]).unwrap();
        assert!(o.normal().distance(Vec3::Z) < UNIT_EPS);
        assert!(o.centroid().distance(vec3(1.0 / 3.0, 1.0 / 3.0, 0.0)) < UNIT_EPS);
        assert!(o.attitude().is_none());
    }

    #[test]
    fn point_normals_are_unit_length() {
        let triples = [
            [vec3(0.0, 0.0, 0.0), vec3(5.0, 0.1, 2.0), vec3(-1.0, 4.0, 0.5)],
            [vec3(100.0, 50.0, 3.0), vec3(101.0, 50.0, 3.5), vec3(100.0, 51.0, 2.0)],
            [vec3(-3.0, -3.0, -3.0), vec3(0.0, 1.0, 7.0), vec3(2.0, -5.0, 1.0)],
        ];
        for points in triples {
            let o = Orientation::from_points(points).unwrap();
            assert!((o.normal().length() - 1.0).abs() < UNIT_EPS);
        }
    }

    #[test]
    fn collinear_points_are_rejected() {
        let result = Orientation::from_points([Vec3::ZERO, Vec3::X, Vec3::X * 2.0]);
        assert!(matches!(result, Err(GeometryError::DegenerateTriangle(_))));

        // Coincident points are a (fully) degenerate triangle too.
        let result = Orientation::from_points([Vec3::ONE, Vec3::ONE, Vec3::Y]);
        assert!(matches!(result, Err(GeometryError::DegenerateTriangle(_))));
    }

    #[test]
    fn zero_dip_means_vertical_normal_whatever_the_bearings() {
        for (strike, dd) in [(0.0, 0.0), (123.0, 45.0), (359.0, 271.0)] {
            let o = Orientation::from_angles(strike, 0.0, dd).unwrap();
            assert!((o.normal().z - 1.0).abs() < UNIT_EPS);
        }
    }

    #[test]
    fn vertical_plane_has_horizontal_normal() {
        let o = Orientation::from_angles(0.0, 90.0, 90.0).unwrap();
        assert!(o.normal().z.abs() < UNIT_EPS);
        // sin(strike) = 0, so the normal has no x component either.
        assert!(o.normal().x.abs() < UNIT_EPS);
    }

    #[test]
    fn out_of_range_angles_are_rejected() {
        assert!(matches!(
            Orientation::from_angles(360.0, 10.0, 0.0),
            Err(GeometryError::OutOfRangeAngle { name: "strike", .. })
        ));
        assert!(matches!(
            Orientation::from_angles(0.0, 90.5, 0.0),
            Err(GeometryError::OutOfRangeAngle { name: "dip", .. })
        ));
        assert!(matches!(
            Orientation::from_angles(0.0, 10.0, -1.0),
            Err(GeometryError::OutOfRangeAngle { .. })
        ));
    }

    #[test]
    fn strike_line_lies_in_the_plane() {
        for (strike, dip, dd) in [(30.0, 20.0, 300.0), (200.0, 75.0, 110.0)] {
            let o = Orientation::from_angles(strike, dip, dd).unwrap();
            let strike_line = o.strike_line().unwrap();
            assert!(strike_line.dot(o.normal()).abs() < 1e-5);
        }
    }

    #[test]
    fn dip_line_descends_the_plane_perpendicular_to_strike() {
        // A consistent triple relates the bearings by dd = strike - 90.
        let (strike, dip) = (120.0_f32, 35.0_f32);
        let dd = strike - 90.0;
        let o = Orientation::from_angles(strike, dip, dd).unwrap();

        let dip_line = o.dip_line().unwrap();
        let strike_line = o.strike_line().unwrap();
        assert!(dip_line.dot(o.normal()).abs() < 1e-5);
        assert!(dip_line.dot(strike_line).abs() < 1e-5);
        assert!(dip_line.z < 0.0);
    }

    #[test]
    fn points_and_angles_agree_on_the_same_plane() {
        // Sample a plane of known attitude along its strike and dip lines,
        // then rebuild it from those points; the two normals must be
        // parallel or antiparallel.
        for (strike, dip) in [(0.0_f32, 30.0_f32), (45.0, 60.0), (280.0, 10.0)] {
            let dd = (strike - 90.0).rem_euclid(360.0);
            let from_angles = Orientation::from_angles(strike, dip, dd).unwrap();

            let centre = vec3(2.0, -1.0, 4.0);
            let u = from_angles.strike_line().unwrap();
            let v = from_angles.dip_line().unwrap();
            let from_points =
                Orientation::from_points([centre, centre + u * 3.0, centre + v * 2.0]).unwrap();

            let agreement = from_points.normal().dot(from_angles.normal()).abs();
            assert!(
                (agreement - 1.0).abs() < 1e-5,
                "strike {strike} dip {dip}: |dot| = {agreement}"
            );
        }
    }

    #[test]
    fn rotation_carries_world_up_onto_the_normal() {
        let o = Orientation::from_angles(75.0, 40.0, 345.0).unwrap();
        let rotated = o.rotation().mul_vec3(WORLD_UP);
        assert!(rotated.distance(o.normal()) < 1e-5);
    }
}
