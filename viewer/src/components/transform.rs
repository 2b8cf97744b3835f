use attitude::WORLD_UP;
use bevy_ecs::component::Component;
use glam::{Mat3, Mat4, Quat, Vec3, Vec3A};

/// Position and orientation of a scene entity.
///
/// Local forward is -Z so a camera transform feeds `Mat4::perspective_rh`
/// style projections directly; world up is [`WORLD_UP`].
#[derive(Debug, Copy, Clone, Default, bytemuck::Zeroable, Component)]
pub struct Transform {
    pos: Vec3A,
    rot: Quat,
}

impl Transform {
    pub fn new(pos: Vec3A, rot: Quat) -> Self {
        Self { pos, rot }
    }

    pub fn from_pos(pos: Vec3A) -> Self {
        Self {
            pos,
            rot: Quat::IDENTITY,
        }
    }

    pub fn pos(&self) -> Vec3A {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Vec3A) {
        self.pos = pos;
    }

    pub fn rot(&self) -> &Quat {
        &self.rot
    }

    pub fn forward(&self) -> Vec3A {
        self.rot.mul_vec3a(Vec3A::NEG_Z)
    }

    /// Aim -Z at `target`, keeping the world vertical as close to local +Y
    /// as the view direction allows.
    pub fn look_at(&mut self, target: Vec3A) {
        let fwd = Vec3::from(target - self.pos).normalize_or_zero();
        if fwd == Vec3::ZERO {
            return;
        }
        let mut right = fwd.cross(WORLD_UP);
        if right.length_squared() < 1e-12 {
            // Looking straight along the vertical; any horizontal right
            // axis works, but it must be the same one every time.
            right = Vec3::X;
        }
        let right = right.normalize();
        let up = right.cross(fwd);
        self.rot = Quat::from_mat3(&Mat3::from_cols(right, up, -fwd));
    }

    pub fn local_to_world(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rot, self.pos.into())
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.local_to_world().inverse()
    }
}

#[cfg(test)]
mod tests {
    use glam::vec3a;

    use super::*;

    #[test]
    fn look_at_points_forward_at_the_target() {
        let mut t = Transform::from_pos(vec3a(8.0, 8.0, 8.0));
        t.look_at(Vec3A::ZERO);
        let fwd = t.forward();
        assert!(fwd.distance((-t.pos()).normalize()) < 1e-5);
    }

    #[test]
    fn look_straight_down_stays_finite() {
        let mut t = Transform::from_pos(Vec3A::Z * 10.0);
        t.look_at(Vec3A::ZERO);
        assert!(t.rot().is_finite());
        assert!(t.forward().distance(-Vec3A::Z) < 1e-5);
    }

    #[test]
    fn view_matrix_moves_the_eye_to_the_origin() {
        let mut t = Transform::from_pos(vec3a(3.0, -2.0, 5.0));
        t.look_at(Vec3A::ZERO);
        let eye_in_view = t.view_matrix().project_point3(t.pos().into());
        assert!(eye_in_view.length() < 1e-4);
    }
}
