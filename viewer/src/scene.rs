use attitude::{AnalysisResult, Orientation};
use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::overlay::{generate_overlays, OverlayPrimitive};
use crate::resources::filters::DisplayFilters;

pub const IDLE_PLACEHOLDER: &str = "No plane loaded - submit a sample to begin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneState {
    /// No orientation available: point markers and a placeholder only.
    Idle,
    /// Orientation present: the full overlay set is rendered.
    Active,
}

/// The one owner of the current orientation and measured points.
///
/// Replaced content-wholesale when a new sample arrives; systems read it
/// fresh each frame and never hold derived state across updates.
#[derive(Resource, Debug, Clone)]
pub struct PlaneScene {
    points: Vec<Vec3>,
    orientation: Option<Orientation>,
    placeholder: String,
}

impl Default for PlaneScene {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            orientation: None,
            placeholder: IDLE_PLACEHOLDER.to_owned(),
        }
    }
}

impl PlaneScene {
    pub fn state(&self) -> SceneState {
        if self.orientation.is_some() {
            SceneState::Active
        } else {
            SceneState::Idle
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn orientation(&self) -> Option<&Orientation> {
        self.orientation.as_ref()
    }

    /// Placeholder message, present only while idle.
    pub fn placeholder(&self) -> Option<&str> {
        match self.state() {
            SceneState::Idle => Some(&self.placeholder),
            SceneState::Active => None,
        }
    }

    /// Point the camera somewhere useful: the plane centroid when active,
    /// else the mean of whatever markers exist.
    pub fn focus(&self) -> Vec3 {
        if let Some(orientation) = &self.orientation {
            return orientation.centroid();
        }
        if self.points.is_empty() {
            return Vec3::ZERO;
        }
        self.points.iter().sum::<Vec3>() / self.points.len() as f32
    }

    fn set_idle(&mut self, message: impl Into<String>) {
        self.orientation = None;
        self.placeholder = message.into();
    }
}

/// Scene-level inputs, fed by the embedding shell.
#[derive(Debug, Clone, Event)]
pub enum SceneEvent {
    /// The analysis service produced an angle triple (and possibly the
    /// measured points it was derived from).
    AnalysisArrived(AnalysisResult),
    /// A raw three-point sample, ahead of any analysis.
    PointsSubmitted([Vec3; 3]),
    Clear,
}

/// A click landed on a point marker. Reported upward untouched; what it
/// means is the embedder's business.
#[derive(Debug, Clone, Copy, PartialEq, Event)]
pub struct PointPicked {
    pub index: usize,
    pub position: Vec3,
}

pub fn process_scene_events(
    mut scene: ResMut<PlaneScene>,
    mut events: EventReader<SceneEvent>,
) {
    for event in events.read() {
        match event {
            SceneEvent::AnalysisArrived(result) => {
                if let Some(points) = result.points {
                    scene.points = points.to_vec();
                }
                match result.orientation() {
                    Ok(orientation) => {
                        log::debug!(
                            "scene active: strike {:.2} dip {:.2} dip direction {:.2}",
                            result.strike,
                            result.dip,
                            result.dip_direction
                        );
                        scene.orientation = Some(orientation);
                    }
                    Err(e) => {
                        log::warn!("rejecting analysis result: {e}");
                        scene.set_idle(format!("Cannot display analysis: {e}"));
                    }
                }
            }
            SceneEvent::PointsSubmitted(points) => {
                scene.points = points.to_vec();
                match Orientation::from_points(*points) {
                    Ok(orientation) => scene.orientation = Some(orientation),
                    Err(e) => {
                        log::warn!("rejecting point sample: {e}");
                        scene.set_idle("Points are collinear - no plane to display");
                    }
                }
            }
            SceneEvent::Clear => scene.set_idle(IDLE_PLACEHOLDER),
        }
    }
}

/// The overlay set for the frame being drawn. Overwritten every tick; an
/// orientation that was superseded mid-frame simply never gets painted.
#[derive(Resource, Default)]
pub struct FrameOverlays(pub Vec<OverlayPrimitive>);

pub fn rebuild_overlays(
    scene: Res<PlaneScene>,
    filters: Res<DisplayFilters>,
    mut overlays: ResMut<FrameOverlays>,
) {
    let mut primitives = generate_overlays(scene.points(), scene.orientation(), &filters);
    if let Some(message) = scene.placeholder() {
        primitives.push(OverlayPrimitive::Label {
            position: Vec3::Z * 2.0,
            text: message.to_owned(),
            colour: filters.colour_scheme.palette().text,
        });
    }
    overlays.0 = primitives;
}
