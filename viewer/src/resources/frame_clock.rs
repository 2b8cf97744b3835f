use std::collections::VecDeque;
use std::fmt;
use std::time::Instant;

use bevy_ecs::system::Resource;

/// Fixed-window rolling record of a numeric measure.
#[derive(Default)]
pub struct RollingMeasure<T, const S: usize>
where
    T: Default,
{
    samples: VecDeque<T>,
}

impl<T, const S: usize> RollingMeasure<T, S>
where
    T: num::Num
        + num::ToPrimitive
        + num::FromPrimitive
        + Copy
        + std::ops::AddAssign
        + Default
        + fmt::Display,
{
    pub fn tick(&mut self, sample: T) {
        if self.samples.len() >= S {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Rolling mean; zero for an empty window.
    pub fn mean(&self) -> T {
        let mut sum = T::zero();
        for &sample in &self.samples {
            sum += sample;
        }
        sum / T::from_usize(self.samples.len().max(1)).unwrap_or_else(T::one)
    }

    /// Most recent sample; zero for an empty window.
    pub fn last(&self) -> T {
        self.samples.back().copied().unwrap_or_else(T::zero)
    }

    pub fn plot(&self, label: &str, ui: &mut egui::Ui) -> egui::Response {
        let response = ui.label(format!("{}: {:.2}", label, self.mean()));

        let points = egui_plot::PlotPoints::new(
            self.samples
                .iter()
                .enumerate()
                .map(|(x, &y)| [x as f64, y.to_f64().unwrap_or_default()])
                .collect(),
        );
        let line = egui_plot::Line::new(points);
        egui_plot::Plot::new(label.to_owned())
            .allow_boxed_zoom(false)
            .include_y(0.0)
            .view_aspect(2.0)
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            });

        response
    }
}

/// Wall-clock frame timer, ticked once per rendered frame.
#[derive(Resource)]
pub struct FrameClock {
    last_tick: Instant,
    delta_ms: RollingMeasure<f32, 64>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            last_tick: Instant::now(),
            delta_ms: RollingMeasure::default(),
        }
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_frame(&mut self) {
        let elapsed = self.last_tick.elapsed();
        self.last_tick = Instant::now();
        self.delta_ms.tick(elapsed.as_secs_f32() * 1000.0);
    }

    /// Last frame duration in seconds.
    pub fn delta_time(&self) -> f32 {
        self.delta_ms.last() / 1000.0
    }

    pub fn fps(&self) -> f32 {
        let mean_ms = self.delta_ms.mean();
        if mean_ms > 0.0 {
            1000.0 / mean_ms
        } else {
            0.0
        }
    }
}

impl egui::Widget for &FrameClock {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        ui.label(format!("FPS: {:.0}", self.fps()));
        self.delta_ms.plot("Frame ms", ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolling_measure_window_is_bounded() {
        let mut m: RollingMeasure<f32, 4> = RollingMeasure::default();
        for i in 0..10 {
            m.tick(i as f32);
        }
        assert_eq!(m.last(), 9.0);
        // Window holds 6..=9.
        assert!((m.mean() - 7.5).abs() < 1e-6);
    }

    #[test]
    fn empty_measure_is_zero() {
        let m: RollingMeasure<f32, 8> = RollingMeasure::default();
        assert_eq!(m.mean(), 0.0);
        assert_eq!(m.last(), 0.0);
    }

    #[test]
    fn clock_ticks_monotonically() {
        let mut clock = FrameClock::new();
        clock.tick_frame();
        clock.tick_frame();
        assert!(clock.delta_time() >= 0.0);
        assert!(clock.fps() >= 0.0);
    }
}
