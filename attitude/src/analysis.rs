use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::{GeometryError, Orientation};

/// A result produced by the external three-point analysis service.
///
/// The angle triple is computed upstream and arrives here as an opaque
/// numeric fact; this crate never re-derives it. The transport layer is
/// expected to have validated the payload, but [`AnalysisResult::orientation`]
/// still range-checks defensively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub strike: f32,
    pub dip: f32,
    pub dip_direction: f32,
    #[serde(default)]
    pub points: Option<[Vec3; 3]>,
    pub timestamp: String,
}

impl AnalysisResult {
    /// Renderable orientation for this result, centred on the measured
    /// points when they were included in the payload.
    pub fn orientation(&self) -> Result<Orientation, GeometryError> {
        let orientation = Orientation::from_angles(self.strike, self.dip, self.dip_direction)?;
        Ok(match self.points {
            Some([p1, p2, p3]) => orientation.with_centroid((p1 + p2 + p3) / 3.0),
            None => orientation,
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::vec3;

    use super::*;

    #[test]
    fn deserialises_a_service_payload() {
        let payload = r#"{
            "strike": 45.5,
            "dip": 30.0,
            "dip_direction": 135.5,
            "points": [[0.0, 0.0, 0.0], [1.0, 0.0, 0.5], [0.0, 1.0, 0.25]],
            "timestamp": "2026-08-06T10:30:00Z"
        }"#;
        let result: AnalysisResult = serde_json::from_str(payload).unwrap();
        assert_eq!(result.strike, 45.5);
        assert_eq!(result.points.unwrap()[1], vec3(1.0, 0.0, 0.5));

        let orientation = result.orientation().unwrap();
        assert_eq!(orientation.attitude().unwrap().dip_deg, 30.0);
    }

    #[test]
    fn points_are_optional() {
        let payload = r#"{ "strike": 10.0, "dip": 5.0, "dip_direction": 280.0, "timestamp": "" }"#;
        let result: AnalysisResult = serde_json::from_str(payload).unwrap();
        assert!(result.points.is_none());
        assert_eq!(result.orientation().unwrap().centroid(), glam::Vec3::ZERO);
    }

    #[test]
    fn orientation_rebases_onto_the_measured_points() {
        let result = AnalysisResult {
            strike: 90.0,
            dip: 45.0,
            dip_direction: 0.0,
            points: Some([vec3(0.0, 0.0, 3.0), vec3(3.0, 0.0, 3.0), vec3(0.0, 3.0, 3.0)]),
            timestamp: String::new(),
        };
        let orientation = result.orientation().unwrap();
        assert_eq!(orientation.centroid(), vec3(1.0, 1.0, 3.0));
    }

    #[test]
    fn out_of_range_payload_is_rejected_not_crashed_on() {
        let result = AnalysisResult {
            strike: 400.0,
            dip: 10.0,
            dip_direction: 0.0,
            points: None,
            timestamp: String::new(),
        };
        assert!(result.orientation().is_err());
    }
}
