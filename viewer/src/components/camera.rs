use bevy_ecs::prelude::*;
use glam::Mat4;

use crate::components::transform::Transform;
use crate::resources::filters::Projection;

/// Scene camera. The projection *mode* is user state and lives in
/// [`crate::resources::filters::DisplayFilters`]; this component only holds
/// the lens parameters.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Camera {
    aspect: f32,
    fovy: f32,
    znear: f32,
    zfar: f32,
    ortho_height: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            aspect,
            fovy: 60.0_f32.to_radians(),
            znear: 0.1,
            zfar: 200.0,
            ortho_height: 12.0,
        }
    }

    pub fn on_resize(&mut self, size: &winit::dpi::PhysicalSize<u32>) {
        if size.height > 0 {
            self.aspect = size.width as f32 / size.height as f32;
        }
    }

    pub fn projection_matrix(&self, projection: Projection) -> Mat4 {
        match projection {
            Projection::Perspective => {
                Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar)
            }
            // Isometric is orthographic with a fixed eye direction; the
            // orbit system pins the direction, the lens is the same.
            Projection::Orthographic | Projection::Isometric => {
                let h = self.ortho_height;
                let w = h * self.aspect;
                Mat4::orthographic_rh(-w, w, -h, h, self.znear, self.zfar)
            }
        }
    }

    pub fn view_projection(&self, transform: &Transform, projection: Projection) -> Mat4 {
        self.projection_matrix(projection) * transform.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use glam::{vec3, Vec3A};

    use super::*;

    #[test]
    fn perspective_and_orthographic_lenses_differ() {
        let cam = Camera::new(1.5);
        assert_ne!(
            cam.projection_matrix(Projection::Perspective),
            cam.projection_matrix(Projection::Orthographic)
        );
        assert_eq!(
            cam.projection_matrix(Projection::Orthographic),
            cam.projection_matrix(Projection::Isometric)
        );
    }

    #[test]
    fn view_projection_puts_the_looked_at_point_on_axis() {
        let cam = Camera::new(1.0);
        let mut t = Transform::from_pos(Vec3A::new(10.0, 0.0, 0.0));
        t.look_at(Vec3A::ZERO);
        for projection in [Projection::Perspective, Projection::Orthographic] {
            let clip = cam
                .view_projection(&t, projection)
                .project_point3(vec3(0.0, 0.0, 0.0));
            assert!(clip.x.abs() < 1e-4 && clip.y.abs() < 1e-4, "{projection:?}");
        }
    }
}
