use bevy_ecs::prelude::*;
use glam::{vec2, Vec2, Vec3};
use winit::event::{ElementState, MouseButton};

use crate::components::camera::Camera;
use crate::components::orbit::{PointerClick, PointerMove};
use crate::components::transform::Transform;
use crate::resources::filters::DisplayFilters;
use crate::scene::{PlaneScene, PointPicked};

/// Window-space state the pick ray needs: surface size in physical pixels
/// and the cursor's last known position.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Viewport {
    pub size: Vec2,
    pub cursor: Option<Vec2>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: vec2(1280.0, 720.0),
            cursor: None,
        }
    }
}

/// Casts a ray through the cursor on left click and reports the nearest
/// point marker it passes through.
pub fn pick_point_markers(
    mut clicks: EventReader<PointerClick>,
    mut moves: EventReader<PointerMove>,
    mut viewport: ResMut<Viewport>,
    scene: Res<PlaneScene>,
    filters: Res<DisplayFilters>,
    cameras: Query<(&Camera, &Transform)>,
    mut picked: EventWriter<PointPicked>,
) {
    for PointerMove(position) in moves.read() {
        viewport.cursor = Some(vec2(position.x as f32, position.y as f32));
    }

    let clicked = clicks
        .read()
        .any(|PointerClick(state, button)| {
            *state == ElementState::Pressed && *button == MouseButton::Left
        });
    if !clicked {
        return;
    }

    let Some(cursor) = viewport.cursor else {
        return;
    };
    let Ok((camera, transform)) = cameras.get_single() else {
        return;
    };
    let Some((origin, direction)) =
        cursor_ray(camera, transform, &filters, cursor, viewport.size)
    else {
        return;
    };

    let mut nearest: Option<(f32, usize, Vec3)> = None;
    for (index, &position) in scene.points().iter().enumerate() {
        if let Some(t) = ray_sphere(origin, direction, position, filters.point_size) {
            if nearest.map_or(true, |(best, _, _)| t < best) {
                nearest = Some((t, index, position));
            }
        }
    }

    if let Some((_, index, position)) = nearest {
        log::debug!("picked marker {index} at {position}");
        picked.send(PointPicked { index, position });
    }
}

/// World-space ray through a cursor position, valid for any projection
/// because it unprojects both depth-range endpoints.
fn cursor_ray(
    camera: &Camera,
    transform: &Transform,
    filters: &DisplayFilters,
    cursor: Vec2,
    size: Vec2,
) -> Option<(Vec3, Vec3)> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return None;
    }
    let ndc = vec2(
        2.0 * cursor.x / size.x - 1.0,
        1.0 - 2.0 * cursor.y / size.y,
    );
    let clip_to_world = camera
        .view_projection(transform, filters.projection)
        .inverse();
    let near = clip_to_world.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
    let far = clip_to_world.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
    let direction = (far - near).normalize_or_zero();
    if !near.is_finite() || direction == Vec3::ZERO {
        return None;
    }
    Some((near, direction))
}

fn ray_sphere(origin: Vec3, direction: Vec3, centre: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - centre;
    let b = oc.dot(direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let t = -b - sqrt_d;
    if t >= 0.0 {
        return Some(t);
    }
    let t = -b + sqrt_d;
    (t >= 0.0).then_some(t)
}

#[cfg(test)]
mod tests {
    use glam::{vec3, Vec3A};

    use super::*;
    use crate::resources::filters::Projection;

    #[test]
    fn ray_hits_a_sphere_in_front_of_it() {
        let t = ray_sphere(Vec3::ZERO, Vec3::X, vec3(5.0, 0.0, 0.0), 0.5).unwrap();
        assert!((t - 4.5).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_a_sphere_behind_it() {
        assert!(ray_sphere(Vec3::ZERO, Vec3::X, vec3(-5.0, 0.0, 0.0), 0.5).is_none());
    }

    #[test]
    fn ray_starting_inside_still_reports_a_hit() {
        assert!(ray_sphere(Vec3::ZERO, Vec3::X, vec3(0.1, 0.0, 0.0), 0.5).is_some());
    }

    #[test]
    fn centre_cursor_ray_points_at_the_look_target() {
        let camera = Camera::new(1.0);
        let mut transform = Transform::from_pos(Vec3A::new(10.0, 4.0, 6.0));
        transform.look_at(Vec3A::ZERO);
        let filters = DisplayFilters::default();
        let size = vec2(800.0, 600.0);

        let (origin, direction) =
            cursor_ray(&camera, &transform, &filters, size / 2.0, size).unwrap();
        // The ray through the screen centre must pass (near) the origin.
        let closest = origin - direction * origin.dot(direction);
        assert!(closest.length() < 1e-2, "{closest}");
    }

    #[test]
    fn orthographic_rays_unproject_too() {
        let camera = Camera::new(1.0);
        let mut transform = Transform::from_pos(Vec3A::new(0.0, -12.0, 3.0));
        transform.look_at(Vec3A::ZERO);
        let mut filters = DisplayFilters::default();
        filters.projection = Projection::Orthographic;

        let ray = cursor_ray(&camera, &transform, &filters, vec2(100.0, 100.0), vec2(400.0, 400.0));
        assert!(ray.is_some());
    }
}
