use bevy_ecs::system::Resource;

use super::attitude_window::AttitudeWindow;
use super::filters_window::FiltersWindow;
use super::window::{GuiWindow, PanelContext};

/// Owns the egui context and the registered panels.
///
/// Backend-free: the embedding shell translates window events into
/// [`egui::RawInput`], hands it to [`Gui::run`] once per frame and paints
/// the returned [`egui::FullOutput`] however it likes.
#[derive(Resource)]
pub struct Gui {
    ctx: egui::Context,
    windows: Vec<Box<dyn GuiWindow>>,
}

impl Default for Gui {
    fn default() -> Self {
        Self {
            ctx: egui::Context::default(),
            windows: vec![
                Box::new(FiltersWindow::new()),
                Box::new(AttitudeWindow::new()),
            ],
        }
    }
}

impl Gui {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(&self) -> &egui::Context {
        &self.ctx
    }

    /// Run one egui pass over the menu bar and every open panel.
    pub fn run(&mut self, input: egui::RawInput, view: &mut PanelContext) -> egui::FullOutput {
        let ctx = self.ctx.clone();
        ctx.run(input, |ctx| self.draw(ctx, view))
    }

    fn draw(&mut self, ctx: &egui::Context, view: &mut PanelContext) {
        egui::TopBottomPanel::top("panel_menu").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                for window in &mut self.windows {
                    let (open, name) = window.state();
                    ui.checkbox(open, name);
                }
            });
        });

        for window in &mut self.windows {
            window.draw(ctx, view);
        }
    }
}
