use std::ops::RangeInclusive;

use egui::{Color32, DragValue, Ui};
use web_time::Duration;

use super::{add_drag_value, color, load_or};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SettingsError {
    #[error("polygon needs at least {min} corners, got {got}")]
    TooFewCorners { got: usize, min: usize },

    #[error("polygon may have at most {max} corners, got {got}")]
    TooManyCorners { got: usize, max: usize },

    #[error("radius must lie in {:?}, got {}", Settings::RADIUS, .0)]
    Radius(f32),

    #[error("reveal interval must lie in {:?} s, got {} s", Settings::INTERVAL, .0)]
    Interval(f32),

    #[error("stroke width must lie in {:?}, got {}", Settings::STROKE_WIDTH, .0)]
    StrokeWidth(f32),
}

/// everything the user can change in the side panel.
/// changing `nr_corners` or `radius` starts a new figure, all other fields apply immediately.
#[derive(Clone, Copy, PartialEq, Debug, serde::Deserialize, serde::Serialize)]
pub struct Settings {
    pub nr_corners: usize,
    /// in figure coordinates, equal to screen points if `fit_to_canvas` is off
    pub radius: f32,
    pub fit_to_canvas: bool,
    /// seconds between two revealed edges
    pub reveal_interval: f32,
    pub stroke_width: f32,
    pub stroke: Color32,
    pub background: Color32,
}

pub const DEFAULT_SETTINGS: Settings = Settings {
    nr_corners: 4,
    radius: 600.0,
    fit_to_canvas: false,
    reveal_interval: 0.05,
    stroke_width: 1.0,
    stroke: color::WHITE,
    background: color::BACKGROUND,
};

impl Default for Settings {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}

const STORAGE_KEY: &str = "app::settings";

impl Settings {
    pub const MIN_CORNERS: usize = 3;
    pub const MAX_CORNERS: usize = 16;
    pub const RADIUS: RangeInclusive<f32> = 10.0..=2000.0;
    pub const INTERVAL: RangeInclusive<f32> = 0.0..=2.0;
    pub const STROKE_WIDTH: RangeInclusive<f32> = 0.25..=8.0;

    /// the same bounds the menu enforces, NaN is never contained in a range.
    pub fn validate(self) -> Result<Self, SettingsError> {
        if self.nr_corners < Self::MIN_CORNERS {
            return Err(SettingsError::TooFewCorners {
                got: self.nr_corners,
                min: Self::MIN_CORNERS,
            });
        }
        if self.nr_corners > Self::MAX_CORNERS {
            return Err(SettingsError::TooManyCorners {
                got: self.nr_corners,
                max: Self::MAX_CORNERS,
            });
        }
        if !Self::RADIUS.contains(&self.radius) {
            return Err(SettingsError::Radius(self.radius));
        }
        if !Self::INTERVAL.contains(&self.reveal_interval) {
            return Err(SettingsError::Interval(self.reveal_interval));
        }
        if !Self::STROKE_WIDTH.contains(&self.stroke_width) {
            return Err(SettingsError::StrokeWidth(self.stroke_width));
        }
        Ok(self)
    }

    /// falls back to the default interval for values [`Self::validate`] would reject.
    pub fn interval(&self) -> Duration {
        let secs = if Self::INTERVAL.contains(&self.reveal_interval) {
            self.reveal_interval
        } else {
            DEFAULT_SETTINGS.reveal_interval
        };
        Duration::from_secs_f32(secs)
    }

    /// settings of the last session, or the defaults if there are none (or they are broken).
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        let stored = load_or(storage, STORAGE_KEY, Self::default);
        stored.validate().unwrap_or_else(|e| {
            log::warn!("ignoring stored settings: {e}");
            Self::default()
        })
    }

    pub fn save(&self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, STORAGE_KEY, self);
    }

    /// returns if the figure has to be rebuilt
    pub fn draw_menu(&mut self, ui: &mut Ui) -> bool {
        let mut rebuild = false;
        ui.collapsing("Figur", |ui| {
            rebuild |= add_drag_value(
                ui,
                &mut self.nr_corners,
                "Ecken: ",
                Self::MIN_CORNERS..=Self::MAX_CORNERS,
            );
            ui.horizontal(|ui| {
                ui.label("Radius: ");
                rebuild |= ui
                    .add(DragValue::new(&mut self.radius).range(Self::RADIUS).speed(1.0))
                    .changed();
            });
            ui.checkbox(&mut self.fit_to_canvas, "an Fenster anpassen")
                .on_hover_text("skaliert die Figur, sodass der Kreis genau ins Fenster passt");
        });
        ui.collapsing("Animation", |ui| {
            ui.horizontal(|ui| {
                ui.label("Intervall [s]: ");
                let interval = DragValue::new(&mut self.reveal_interval).range(Self::INTERVAL);
                ui.add(interval.speed(0.005));
            });
        });
        ui.collapsing("Stil", |ui| {
            ui.horizontal(|ui| {
                ui.label("Linienstärke: ");
                let width = DragValue::new(&mut self.stroke_width).range(Self::STROKE_WIDTH);
                ui.add(width.speed(0.05));
            });
            color::draw_color_option(ui, "Linie: ", &mut self.stroke, DEFAULT_SETTINGS.stroke);
            color::draw_color_option(
                ui,
                "Hintergrund: ",
                &mut self.background,
                DEFAULT_SETTINGS.background,
            );
        });
        if ui.button("Standardwerte").clicked() {
            rebuild |= self.nr_corners != DEFAULT_SETTINGS.nr_corners
                || self.radius != DEFAULT_SETTINGS.radius;
            *self = DEFAULT_SETTINGS;
        }
        rebuild
    }
}
