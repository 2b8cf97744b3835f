use bevy_ecs::system::Resource;

/// Scene time, ticked once per rendered frame.
#[derive(Resource, Default)]
pub struct Time {
    pub delta: f32,
    pub elapsed: f32,
}

impl Time {
    pub fn tick(&mut self, delta: f32) {
        self.delta = delta;
        self.elapsed += delta;
    }
}
