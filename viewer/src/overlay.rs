use attitude::Orientation;
use egui::Color32;
use glam::{Quat, Vec2, Vec3};

use crate::resources::filters::DisplayFilters;

pub const PLANE_EXTENT: Vec2 = Vec2::new(15.0, 15.0);
pub const STRIKE_HALF_LENGTH: f32 = 5.0;
pub const DIP_HALF_LENGTH: f32 = 3.0;
pub const NORMAL_LENGTH: f32 = 4.0;
const AXIS_LENGTH: f32 = 8.0;
const GRID_EXTENT: f32 = 10.0;
const GRID_DIVISIONS: i32 = 20;
const LABEL_LIFT: f32 = 0.5;
const GRID_COLOUR: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Strike,
    Dip,
    Normal,
    Axis,
    Grid,
}

/// One renderable element of the current frame.
///
/// Primitives live for a single frame: the set is rebuilt from scratch on
/// every orientation or filter change, which costs nothing at this size and
/// removes any cache-invalidation question.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayPrimitive {
    PointMarker {
        index: usize,
        position: Vec3,
        radius: f32,
        colour: Color32,
    },
    Segment {
        kind: SegmentKind,
        start: Vec3,
        end: Vec3,
        colour: Color32,
    },
    PlanePatch {
        centre: Vec3,
        rotation: Quat,
        extent: Vec2,
        colour: Color32,
        opacity: f32,
    },
    Label {
        position: Vec3,
        text: String,
        colour: Color32,
    },
}

impl OverlayPrimitive {
    pub fn kind(&self) -> Option<SegmentKind> {
        match self {
            OverlayPrimitive::Segment { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Produce the overlay set for one frame.
///
/// Pure in its inputs; emission order is paint order only. Point markers are
/// raw data and always emitted; everything derived from the orientation is
/// subject to the visibility flags and the advisory range filters.
pub fn generate_overlays(
    points: &[Vec3],
    orientation: Option<&Orientation>,
    filters: &DisplayFilters,
) -> Vec<OverlayPrimitive> {
    let palette = filters.colour_scheme.palette();
    let mut out = Vec::new();

    if filters.show_grid {
        push_grid(&mut out);
    }
    if filters.show_axes {
        push_axes(&mut out);
    }

    for (index, &position) in points.iter().enumerate() {
        out.push(OverlayPrimitive::PointMarker {
            index,
            position,
            radius: filters.point_size,
            colour: palette.points[index % palette.points.len()],
        });
        out.push(OverlayPrimitive::Label {
            position: position + Vec3::Z * LABEL_LIFT,
            text: format!("P{}", index + 1),
            colour: palette.text,
        });
    }

    let Some(orientation) = orientation else {
        return out;
    };
    if let Some(attitude) = orientation.attitude() {
        if !filters.admits(&attitude) {
            // Filtered out: keep the measured markers, drop the derived
            // overlays.
            return out;
        }
    }

    let centre = orientation.centroid();
    out.push(OverlayPrimitive::PlanePatch {
        centre,
        rotation: orientation.rotation(),
        extent: PLANE_EXTENT,
        colour: palette.plane,
        opacity: filters.plane_opacity,
    });

    if filters.show_normal {
        let tip = centre + orientation.normal() * NORMAL_LENGTH;
        out.push(OverlayPrimitive::Segment {
            kind: SegmentKind::Normal,
            start: centre,
            end: tip,
            colour: palette.normal,
        });
        out.push(OverlayPrimitive::Label {
            position: tip + Vec3::Z * LABEL_LIFT,
            text: "Normal".to_owned(),
            colour: palette.normal,
        });
    }

    let Some(attitude) = orientation.attitude() else {
        return out;
    };

    if filters.show_strike_line {
        if let Some(direction) = orientation.strike_line() {
            let end = centre + direction * STRIKE_HALF_LENGTH;
            out.push(OverlayPrimitive::Segment {
                kind: SegmentKind::Strike,
                start: centre - direction * STRIKE_HALF_LENGTH,
                end,
                colour: palette.strike,
            });
            out.push(OverlayPrimitive::Label {
                position: end + Vec3::Z * LABEL_LIFT,
                text: format!("Strike: {:.2}\u{b0}", attitude.strike_deg),
                colour: palette.strike,
            });
        }
    }

    if filters.show_dip_line {
        if let Some(direction) = orientation.dip_line() {
            let end = centre + direction * DIP_HALF_LENGTH;
            out.push(OverlayPrimitive::Segment {
                kind: SegmentKind::Dip,
                start: centre - direction * DIP_HALF_LENGTH,
                end,
                colour: palette.dip,
            });
            out.push(OverlayPrimitive::Label {
                position: end + Vec3::Z * LABEL_LIFT,
                text: format!("Dip: {:.2}\u{b0}", attitude.dip_deg),
                colour: palette.dip,
            });
        }
    }

    out
}

fn push_grid(out: &mut Vec<OverlayPrimitive>) {
    let step = 2.0 * GRID_EXTENT / GRID_DIVISIONS as f32;
    for i in 0..=GRID_DIVISIONS {
        let offset = -GRID_EXTENT + i as f32 * step;
        out.push(OverlayPrimitive::Segment {
            kind: SegmentKind::Grid,
            start: Vec3::new(offset, -GRID_EXTENT, 0.0),
            end: Vec3::new(offset, GRID_EXTENT, 0.0),
            colour: GRID_COLOUR,
        });
        out.push(OverlayPrimitive::Segment {
            kind: SegmentKind::Grid,
            start: Vec3::new(-GRID_EXTENT, offset, 0.0),
            end: Vec3::new(GRID_EXTENT, offset, 0.0),
            colour: GRID_COLOUR,
        });
    }
}

fn push_axes(out: &mut Vec<OverlayPrimitive>) {
    let axes = [
        (Vec3::X, Color32::from_rgb(0xff, 0x00, 0x00)),
        (Vec3::Y, Color32::from_rgb(0x00, 0xff, 0x00)),
        (Vec3::Z, Color32::from_rgb(0x00, 0x00, 0xff)),
    ];
    for (direction, colour) in axes {
        out.push(OverlayPrimitive::Segment {
            kind: SegmentKind::Axis,
            start: Vec3::ZERO,
            end: direction * AXIS_LENGTH,
            colour,
        });
    }
}
