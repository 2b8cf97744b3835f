use std::f32::consts::FRAC_PI_4;

use bevy_ecs::prelude::*;
use glam::{Vec2, Vec3A};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::components::transform::Transform;
use crate::resources::filters::{DisplayFilters, Projection};
use crate::scene::PlaneScene;

/// Pitch of the canonical isometric corner view, `atan(1 / sqrt 2)`.
const ISO_PITCH: f32 = 0.615_479_7;
const PITCH_LIMIT: f32 = 1.54;
const DRAG_SENSITIVITY: f32 = 0.01;
const ZOOM_STEP: f32 = 0.1;
const MIN_DISTANCE: f32 = 2.0;
const MAX_DISTANCE: f32 = 50.0;

/// Orbits the camera around the scene focus: drag to turn, wheel to zoom.
#[derive(Component)]
pub struct OrbitController {
    distance: f32,
    yaw: f32,
    pitch: f32,
    dragging: bool,
    // Set by the first move after a press; deltas are measured between
    // consecutive moves so a stale cursor position never counts as a drag.
    drag_anchor: Option<PhysicalPosition<f64>>,
    cursor_delta: Vec2,
}

#[derive(Event)]
pub struct PointerClick(pub ElementState, pub MouseButton);

#[derive(Event)]
pub struct PointerMove(pub PhysicalPosition<f64>);

#[derive(Event)]
pub struct WheelScroll(pub MouseScrollDelta);

#[derive(Event)]
pub struct KeyPress(pub KeyEvent);

impl OrbitController {
    pub fn new(distance: f32, yaw: f32, pitch: f32) -> Self {
        Self {
            distance: distance.clamp(MIN_DISTANCE, MAX_DISTANCE),
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            dragging: false,
            drag_anchor: None,
            cursor_delta: Vec2::ZERO,
        }
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    fn reset(&mut self) {
        *self = Self::new(14.0, FRAC_PI_4, ISO_PITCH);
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        // Matches the canonical (8, 8, 8) starting eye.
        Self::new(14.0, FRAC_PI_4, ISO_PITCH)
    }
}

pub fn orbit_handle_input(
    mut controllers: Query<&mut OrbitController>,
    mut ev_click: EventReader<PointerClick>,
    mut ev_move: EventReader<PointerMove>,
    mut ev_wheel: EventReader<WheelScroll>,
    mut ev_key: EventReader<KeyPress>,
) {
    for PointerClick(state, button) in ev_click.read() {
        if *button != MouseButton::Left {
            continue;
        }
        for mut c in controllers.iter_mut() {
            c.dragging = *state == ElementState::Pressed;
            c.drag_anchor = None;
        }
    }

    for PointerMove(position) in ev_move.read() {
        for mut c in controllers.iter_mut() {
            if !c.dragging {
                continue;
            }
            if let Some(anchor) = c.drag_anchor {
                c.cursor_delta.x += (position.x - anchor.x) as f32;
                c.cursor_delta.y += (position.y - anchor.y) as f32;
            }
            c.drag_anchor = Some(*position);
        }
    }

    for WheelScroll(delta) in ev_wheel.read() {
        let steps = match delta {
            MouseScrollDelta::LineDelta(_, y) => *y,
            MouseScrollDelta::PixelDelta(p) => p.y as f32 / 20.0,
        };
        for mut c in controllers.iter_mut() {
            let distance = c.distance * (1.0 - steps * ZOOM_STEP);
            c.distance = distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
        }
    }

    for KeyPress(key) in ev_key.read() {
        if key.state != ElementState::Pressed {
            continue;
        }
        if key.physical_key == PhysicalKey::Code(KeyCode::KeyR) {
            for mut c in controllers.iter_mut() {
                c.reset();
            }
        }
    }
}

pub fn update_orbit(
    mut cameras: Query<(&mut OrbitController, &mut Transform)>,
    filters: Res<DisplayFilters>,
    scene: Res<PlaneScene>,
) {
    for (mut c, mut transform) in cameras.iter_mut() {
        let delta = c.cursor_delta * DRAG_SENSITIVITY;
        c.yaw -= delta.x;
        c.pitch = (c.pitch + delta.y).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        c.cursor_delta = Vec2::ZERO;

        // Isometric projection pins the eye to the canonical corner; the
        // orbit state is kept so perspective resumes where it left off.
        let (yaw, pitch) = match filters.projection {
            Projection::Isometric => (FRAC_PI_4, ISO_PITCH),
            _ => (c.yaw, c.pitch),
        };

        let target = Vec3A::from(scene.focus());
        let eye = target
            + Vec3A::new(
                pitch.cos() * yaw.cos(),
                pitch.cos() * yaw.sin(),
                pitch.sin(),
            ) * c.distance;
        transform.set_pos(eye);
        transform.look_at(target);
    }
}
