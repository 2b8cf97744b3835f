use crate::resources::filters::{ColourScheme, DegreeRange, Projection};
use crate::scene::SceneEvent;

use super::window::{GuiWindow, PanelContext};

/// The interactive display controls: visibility toggles, sizes, advisory
/// angle ranges, projection and colour scheme.
pub struct FiltersWindow {
    open: bool,
}

impl FiltersWindow {
    pub fn new() -> Self {
        Self { open: true }
    }
}

impl Default for FiltersWindow {
    fn default() -> Self {
        Self::new()
    }
}

fn range_sliders(ui: &mut egui::Ui, label: &str, range: &mut DegreeRange, limit: f32) {
    ui.label(format!("{label}: {:.0}\u{b0} to {:.0}\u{b0}", range.min, range.max));
    ui.add(egui::Slider::new(&mut range.min, 0.0..=limit).text("min"));
    ui.add(egui::Slider::new(&mut range.max, 0.0..=limit).text("max"));
    // Keep the interval well-formed while either end is being dragged.
    if range.min > range.max {
        range.max = range.min;
    }
}

impl GuiWindow for FiltersWindow {
    fn draw(&mut self, ctx: &egui::Context, view: &mut PanelContext) {
        egui::Window::new("Display Filters")
            .open(&mut self.open)
            .show(ctx, |ui| {
                ui.checkbox(&mut view.filters.show_strike_line, "Strike line");
                ui.checkbox(&mut view.filters.show_dip_line, "Dip line");
                ui.checkbox(&mut view.filters.show_normal, "Normal vector");
                ui.checkbox(&mut view.filters.show_grid, "Grid");
                ui.checkbox(&mut view.filters.show_axes, "Axes");

                ui.separator();
                ui.add(
                    egui::Slider::new(&mut view.filters.point_size, 0.05..=0.5)
                        .text("Point size"),
                );
                ui.add(
                    egui::Slider::new(&mut view.filters.plane_opacity, 0.0..=1.0)
                        .text("Plane opacity"),
                );

                ui.separator();
                range_sliders(ui, "Strike", &mut view.filters.strike_range, 360.0);
                range_sliders(ui, "Dip", &mut view.filters.dip_range, 90.0);
                range_sliders(
                    ui,
                    "Dip direction",
                    &mut view.filters.dip_direction_range,
                    360.0,
                );

                ui.separator();
                egui::ComboBox::from_label("Projection")
                    .selected_text(view.filters.projection.label())
                    .show_ui(ui, |ui| {
                        for projection in Projection::ALL {
                            ui.selectable_value(
                                &mut view.filters.projection,
                                projection,
                                projection.label(),
                            );
                        }
                    });

                egui::ComboBox::from_label("Colour scheme")
                    .selected_text(view.filters.colour_scheme.label())
                    .show_ui(ui, |ui| {
                        for scheme in ColourScheme::ALL {
                            ui.selectable_value(
                                &mut view.filters.colour_scheme,
                                scheme,
                                scheme.label(),
                            );
                        }
                    });

                ui.separator();
                if ui.button("Reset filters").clicked() {
                    view.filters.reset();
                }
                if ui.button("Clear scene").clicked() {
                    view.events.push(SceneEvent::Clear);
                }
            });
    }

    fn state(&mut self) -> (&mut bool, &str) {
        (&mut self.open, "Display Filters")
    }
}
