use crate::resources::filters::DisplayFilters;
use crate::resources::frame_clock::FrameClock;
use crate::resources::time::Time;
use crate::scene::{PlaneScene, SceneEvent};

/// The slice of scene state a panel may read and edit while drawing.
/// Scene-level changes are queued as events rather than applied in place.
pub struct PanelContext<'a> {
    pub filters: &'a mut DisplayFilters,
    pub scene: &'a PlaneScene,
    pub clock: &'a FrameClock,
    pub time: &'a Time,
    pub events: &'a mut Vec<SceneEvent>,
}

pub trait GuiWindow: Send + Sync {
    fn draw(&mut self, ctx: &egui::Context, view: &mut PanelContext);

    fn state(&mut self) -> (&mut bool, &str);
}
