use bevy_ecs::prelude::*;
use glam::{vec2, Vec3};
use winit::event::WindowEvent;

use attitude::AnalysisResult;

use crate::components::camera::Camera;
use crate::components::orbit::{
    orbit_handle_input, update_orbit, KeyPress, OrbitController, PointerClick, PointerMove,
    WheelScroll,
};
use crate::components::transform::Transform;
use crate::gui::gui::Gui;
use crate::gui::window::PanelContext;
use crate::overlay::OverlayPrimitive;
use crate::picking::{pick_point_markers, Viewport};
use crate::resources::filters::DisplayFilters;
use crate::resources::frame_clock::FrameClock;
use crate::resources::time::Time;
use crate::scene::{
    process_scene_events, rebuild_overlays, FrameOverlays, PlaneScene, PointPicked, SceneEvent,
};

/// The viewer session: one world, one camera, two schedules.
///
/// `schedule` reacts to input and scene events; `draw_schedule` does the
/// per-frame recomputation. Both run from [`App::frame`], which the
/// embedding shell calls once per rendered frame.
pub struct App {
    pub world: World,
    pub schedule: Schedule,
    pub draw_schedule: Schedule,
    camera: Entity,
}

impl App {
    pub fn new() -> App {
        let mut world = World::new();

        world.insert_resource(Events::<PointerClick>::default());
        world.insert_resource(Events::<PointerMove>::default());
        world.insert_resource(Events::<WheelScroll>::default());
        world.insert_resource(Events::<KeyPress>::default());
        world.insert_resource(Events::<SceneEvent>::default());
        world.insert_resource(Events::<PointPicked>::default());

        world.insert_resource(Time::default());
        world.insert_resource(FrameClock::new());
        world.insert_resource(DisplayFilters::default());
        world.insert_resource(PlaneScene::default());
        world.insert_resource(FrameOverlays::default());
        world.insert_resource(Viewport::default());
        world.insert_resource(Gui::new());

        let camera = world
            .spawn((
                Camera::new(1.0),
                OrbitController::default(),
                Transform::default(),
            ))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems((
            orbit_handle_input,
            update_orbit.after(orbit_handle_input),
            process_scene_events,
            pick_point_markers,
        ));

        let mut draw_schedule = Schedule::default();
        draw_schedule.add_systems((
            tick_clocks,
            rebuild_overlays.after(tick_clocks),
            advance_event_buffers.after(rebuild_overlays),
        ));

        App {
            world,
            schedule,
            draw_schedule,
            camera,
        }
    }

    /// Feed one window event into the scene.
    pub fn input(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                self.world.send_event(PointerClick(*state, *button));
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.world.send_event(PointerMove(*position));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.world.send_event(WheelScroll(*delta));
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.world.send_event(KeyPress(event.clone()));
            }
            WindowEvent::Resized(size) => {
                self.world.resource_mut::<Viewport>().size =
                    vec2(size.width as f32, size.height as f32);
                if let Some(mut camera) = self.world.get_mut::<Camera>(self.camera) {
                    camera.on_resize(size);
                }
            }
            _ => {}
        }
    }

    /// Run one update + draw cycle.
    pub fn frame(&mut self) {
        self.schedule.run(&mut self.world);
        self.draw_schedule.run(&mut self.world);
    }

    pub fn submit_analysis(&mut self, result: AnalysisResult) {
        self.world.send_event(SceneEvent::AnalysisArrived(result));
    }

    pub fn submit_points(&mut self, points: [Vec3; 3]) {
        self.world.send_event(SceneEvent::PointsSubmitted(points));
    }

    pub fn clear(&mut self) {
        self.world.send_event(SceneEvent::Clear);
    }

    pub fn scene(&self) -> &PlaneScene {
        self.world.resource::<PlaneScene>()
    }

    /// The overlay set produced by the most recent [`App::frame`].
    pub fn overlays(&self) -> &[OverlayPrimitive] {
        &self.world.resource::<FrameOverlays>().0
    }

    /// Drain the point-pick events accumulated since the last call.
    pub fn take_picks(&mut self) -> Vec<PointPicked> {
        self.world
            .resource_mut::<Events<PointPicked>>()
            .drain()
            .collect()
    }

    /// Run one egui pass over the control panels. Filter edits apply
    /// immediately; scene edits queue as events for the next frame.
    pub fn run_gui(&mut self, input: egui::RawInput) -> egui::FullOutput {
        self.world.resource_scope(|world, mut gui: Mut<Gui>| {
            world.resource_scope(|world, mut filters: Mut<DisplayFilters>| {
                let mut pending = Vec::new();
                let output = {
                    let scene = world.resource::<PlaneScene>();
                    let clock = world.resource::<FrameClock>();
                    let time = world.resource::<Time>();
                    let mut view = PanelContext {
                        filters: &mut *filters,
                        scene,
                        clock,
                        time,
                        events: &mut pending,
                    };
                    gui.run(input, &mut view)
                };
                for event in pending {
                    world.send_event(event);
                }
                output
            })
        })
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn tick_clocks(mut time: ResMut<Time>, mut clock: ResMut<FrameClock>) {
    clock.tick_frame();
    time.tick(clock.delta_time());
}

/// Advance every event double-buffer at the end of the frame; there is no
/// outer runner to do it for us.
fn advance_event_buffers(
    mut pointer_clicks: ResMut<Events<PointerClick>>,
    mut pointer_moves: ResMut<Events<PointerMove>>,
    mut wheel_scrolls: ResMut<Events<WheelScroll>>,
    mut key_presses: ResMut<Events<KeyPress>>,
    mut scene_events: ResMut<Events<SceneEvent>>,
    mut picks: ResMut<Events<PointPicked>>,
) {
    pointer_clicks.update();
    pointer_moves.update();
    wheel_scrolls.update();
    key_presses.update();
    scene_events.update();
    picks.update();
}
