use std::ops::RangeInclusive;

use egui::*;
use web_time::Instant;

use crate::geo;
use crate::pattern::{Figure, reveal::Scheduler};

mod color;
mod settings;
pub use settings::{Settings, SettingsError};

fn load_or<T: serde::de::DeserializeOwned>(
    storage: Option<&dyn eframe::Storage>,
    key: &str,
    default: impl FnOnce() -> T,
) -> T {
    storage.and_then(|s| eframe::get_value(s, key)).unwrap_or_else(default)
}

/// returns if val was changed
fn add_drag_value(
    ui: &mut Ui,
    val: &mut usize,
    name: &str,
    range: RangeInclusive<usize>,
) -> bool {
    ui.horizontal(|ui| {
        let prev = *val;
        ui.label(name);
        if ui.button(" - ").clicked() && prev > *range.start() {
            *val -= 1;
        }
        ui.add(DragValue::new(val).range(range.clone()));
        if ui.button(" + ").clicked() && prev < *range.end() {
            *val += 1;
        }
        prev != *val
    })
    .inner
}

pub struct State {
    settings: Settings,
    figure: Figure,
    scheduler: Scheduler,
    paused: bool,
}

impl State {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = Settings::load(cc.storage);
        cc.egui_ctx.set_visuals(Visuals::dark());
        Self::with_settings(settings)
    }

    fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            figure: Figure::initial(settings.nr_corners, settings.radius),
            scheduler: Scheduler::new(settings.interval(), Instant::now()),
            paused: false,
        }
    }

    fn restart(&mut self) {
        log::info!(
            "restarting with {} corners, radius {}",
            self.settings.nr_corners,
            self.settings.radius
        );
        *self = Self {
            paused: self.paused,
            ..Self::with_settings(self.settings)
        };
    }

    fn draw_menu(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.button("🔄 neu starten").clicked() {
                self.restart();
            }
            ui.checkbox(&mut self.paused, "Pause");
        });
        ui.add_space(5.0);
        if self.settings.draw_menu(ui) {
            self.restart();
        }
        self.scheduler.set_interval(self.settings.interval());

        ui.separator();
        ui.label(format!(
            "Generation: {}\nKnoten: {}\nKanten: {}\nausstehend: {}",
            self.scheduler.generation(),
            self.figure.vertices().len(),
            self.figure.edges().len(),
            self.figure.pending().len(),
        ));
    }

    fn step(&mut self, ctx: &Context) {
        if self.paused {
            return;
        }
        let now = Instant::now();
        self.scheduler.check(&mut self.figure, now);
        ctx.request_repaint_after(self.scheduler.until_next_tick(now));
    }

    fn draw_figure(&self, ui: &mut Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let canvas = geo::centered_square(response.rect);
        let painter = painter.with_clip_rect(canvas);

        let to_canvas = if self.settings.fit_to_canvas {
            geo::ToCanvas::fitting(canvas, self.settings.radius)
        } else {
            geo::ToCanvas::new(canvas.center(), 1.0)
        };
        let stroke = Stroke::new(self.settings.stroke_width, self.settings.stroke);
        painter.extend(self.figure.visible_lines().map(|[a, b]| {
            Shape::line_segment([to_canvas.apply(a), to_canvas.apply(b)], stroke)
        }));
    }
}

impl eframe::App for State {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings.save(storage);
    }

    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        SidePanel::left("left_panel").show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.heading("Optionen");
                self.draw_menu(ui);
            });
        });

        self.step(ctx);

        let background = Frame::default().fill(self.settings.background);
        CentralPanel::default().frame(background).show(ctx, |ui| {
            self.draw_figure(ui);
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use web_time::Duration;

    #[test]
    fn restart_uses_new_corner_count() {
        let mut state = State::with_settings(Settings::default());
        state.figure.next_generation(0.3);
        state.paused = true;

        state.settings.nr_corners = 6;
        state.restart();
        assert_eq!(state.figure.vertices().len(), 6);
        assert_eq!(state.figure.edges().len(), 9);
        assert!(state.figure.pending().is_empty());
        assert_eq!(state.scheduler.generation(), 1);
        assert!(state.paused);
    }

    #[test]
    fn scheduler_follows_interval_setting() {
        let mut state = State::with_settings(Settings::default());
        state.settings.reveal_interval = 0.5;
        state.scheduler.set_interval(state.settings.interval());
        assert_eq!(state.scheduler.interval(), Duration::from_millis(500));
    }
}
