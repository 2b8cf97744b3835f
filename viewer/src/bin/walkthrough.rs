use anyhow::Result;
use attitude::AnalysisResult;
use glam::vec3;
use viewer::app::App;
use viewer::overlay::OverlayPrimitive;
use viewer::resources::filters::DisplayFilters;

/// Drives the scene through an idle -> active -> filtered cycle without a
/// window, logging what would be painted at each stage.
fn main() -> Result<()> {
    env_logger::init();

    let mut app = App::new();
    app.frame();
    log::info!(
        "idle: {} primitives ({:?})",
        app.overlays().len(),
        app.scene().state()
    );

    app.submit_points([vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)]);
    app.frame();
    log::info!(
        "after raw points: {} primitives ({:?})",
        app.overlays().len(),
        app.scene().state()
    );

    app.submit_analysis(AnalysisResult {
        strike: 45.0,
        dip: 30.0,
        dip_direction: 315.0,
        points: Some([vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.5), vec3(0.0, 1.0, 0.25)]),
        timestamp: "2026-08-06T10:30:00Z".to_owned(),
    });
    app.frame();
    for primitive in app.overlays() {
        match primitive {
            OverlayPrimitive::Label { text, .. } => log::info!("label: {text}"),
            other => log::debug!("{other:?}"),
        }
    }

    app.world.resource_mut::<DisplayFilters>().show_strike_line = false;
    app.frame();
    log::info!("strike line hidden: {} primitives", app.overlays().len());

    let _ = app.run_gui(egui::RawInput::default());

    Ok(())
}
