use super::window::{GuiWindow, PanelContext};

/// Read-out of the current analysis: the angle triple, the derived normal
/// and the frame clock.
pub struct AttitudeWindow {
    open: bool,
}

impl AttitudeWindow {
    pub fn new() -> Self {
        Self { open: true }
    }
}

impl Default for AttitudeWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl GuiWindow for AttitudeWindow {
    fn draw(&mut self, ctx: &egui::Context, view: &mut PanelContext) {
        egui::Window::new("Geological Analysis")
            .open(&mut self.open)
            .show(ctx, |ui| {
                match view.scene.orientation() {
                    None => {
                        ui.label(view.scene.placeholder().unwrap_or_default());
                    }
                    Some(orientation) => {
                        match orientation.attitude() {
                            Some(attitude) => {
                                ui.label(format!("Strike: {:.2}\u{b0}", attitude.strike_deg));
                                ui.label(format!("Dip: {:.2}\u{b0}", attitude.dip_deg));
                                ui.label(format!(
                                    "Dip direction: {:.2}\u{b0}",
                                    attitude.dip_direction_deg
                                ));
                            }
                            None => {
                                ui.label("Angles pending analysis");
                            }
                        }
                        let n = orientation.normal();
                        ui.label(format!("Normal: ({:.3}, {:.3}, {:.3})", n.x, n.y, n.z));
                    }
                }

                ui.separator();
                ui.label(format!("Session: {:.0} s", view.time.elapsed));
                ui.add(view.clock);
            });
    }

    fn state(&mut self) -> (&mut bool, &str) {
        (&mut self.open, "Geological Analysis")
    }
}
