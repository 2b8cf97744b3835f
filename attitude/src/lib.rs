//! Geometry core for planar geological surfaces.
//!
//! A plane is represented internally by its unit normal. The two builders on
//! [`Orientation`] reconcile the representations a survey produces: three
//! measured points, or the strike / dip / dip-direction triple returned by
//! the analysis service.

pub mod analysis;
pub mod orientation;
pub mod vector;

pub use analysis::AnalysisResult;
pub use orientation::{Attitude, Orientation};
pub use vector::WORLD_UP;

use glam::Vec3;

/// Data-quality failures over a single plane sample.
///
/// Every variant is recoverable: the scene layer drops back to its idle
/// rendering state instead of propagating a crash.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("cannot normalise a vector of length {0:e}")]
    DegenerateVector(f32),
    #[error("collinear points {0:?} do not define a plane")]
    DegenerateTriangle([Vec3; 3]),
    #[error("{name} of {value}\u{b0} is outside its domain")]
    OutOfRangeAngle { name: &'static str, value: f32 },
}
