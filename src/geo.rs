use egui::{Pos2, Vec2, vec2};

/// point at `angle` (in rad, measured from the positive x-axis) on the circle around `center`.
pub fn point_on_circle(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    let (sin, cos) = angle.sin_cos();
    center + radius * vec2(cos, sin)
}

#[inline]
pub fn rotate_vec(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    vec2(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// rotates `p` by `angle` around `center`.
pub fn rotate_about(p: Pos2, center: Pos2, angle: f32) -> Pos2 {
    center + rotate_vec(p - center, angle)
}

/// maps figure coordinates (centered around [`Pos2::ZERO`]) onto a canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToCanvas {
    pub center: Pos2,
    pub scale: f32,
}

impl ToCanvas {
    pub fn new(center: Pos2, scale: f32) -> Self {
        Self { center, scale }
    }

    /// scale is chosen s.t. a circle of `radius` just touches the shorter side of `canvas`.
    pub fn fitting(canvas: egui::Rect, radius: f32) -> Self {
        let side = canvas.width().min(canvas.height());
        Self::new(canvas.center(), 0.5 * side / radius)
    }

    pub fn apply(&self, p: Pos2) -> Pos2 {
        self.center + self.scale * p.to_vec2()
    }
}

/// the largest centered square inside `rect`.
pub fn centered_square(rect: egui::Rect) -> egui::Rect {
    let side = rect.width().min(rect.height());
    egui::Rect::from_center_size(rect.center(), Vec2::splat(side))
}
