use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Block, BorderType, Widget,
        canvas::{Canvas, Line, Points},
    },
};

use crate::ui::theme::Theme;

/// Fixed pseudo-random star field in canvas coordinates.
const STARS: [(f64, f64); 24] = [
    (-9.1, 4.2), (-7.4, -3.8), (-6.2, 2.9), (-5.5, -4.6), (-4.8, 4.7), (-3.9, -1.2),
    (-3.1, 3.6), (-2.2, -4.1), (-1.6, 4.4), (-0.7, -3.3), (0.4, 4.8), (1.2, -4.7),
    (1.9, 3.1), (2.7, -2.6), (3.3, 4.5), (4.1, -4.4), (4.9, 2.2), (5.6, -3.5),
    (6.3, 4.1), (7.0, -1.9), (7.8, 3.7), (8.4, -4.2), (9.0, 1.4), (9.5, -2.8),
];

const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 2), (2, 3), (3, 0),
    (4, 5), (5, 6), (6, 7), (7, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

/// Placeholder for the 3D scene: a blue wireframe cube among stars.
///
/// `yaw` rotates the cube about the vertical axis; the projection is a plain
/// orthographic one with a fixed tilt.
pub struct Scene<'a> {
    theme: &'a dyn Theme,
    yaw: f64,
    focused: bool,
}

impl<'a> Scene<'a> {
    pub fn new(theme: &'a dyn Theme, yaw: f64) -> Self {
        Self {
            theme,
            yaw,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Cube corners projected onto the canvas plane.
    pub fn projected_corners(yaw: f64) -> [(f64, f64); 8] {
        let (sin_y, cos_y) = yaw.sin_cos();
        let (sin_t, cos_t) = 0.45f64.sin_cos();
        let mut corners = [(0.0, 0.0); 8];
        for (index, corner) in corners.iter_mut().enumerate() {
            let x = if index & 1 == (index >> 1) & 1 { -2.0 } else { 2.0 };
            let y = if index < 4 { -2.0 } else { 2.0 };
            let z = if index & 2 == 0 { -2.0 } else { 2.0 };
            let rx = x * cos_y + z * sin_y;
            let rz = -x * sin_y + z * cos_y;
            let ry = y * cos_t - rz * sin_t;
            *corner = (rx, ry);
        }
        corners
    }
}

impl Widget for Scene<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let roles = self.theme.roles();
        let star_color = roles.text_muted;
        let corners = Self::projected_corners(self.yaw);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(self.focused));
        Canvas::default()
            .block(block)
            .background_color(roles.background)
            .marker(Marker::Braille)
            .x_bounds([-10.0, 10.0])
            .y_bounds([-5.0, 5.0])
            .paint(move |ctx| {
                ctx.draw(&Points {
                    coords: &STARS,
                    color: star_color,
                });
                ctx.layer();
                for (from, to) in CUBE_EDGES {
                    let (x1, y1) = corners[from];
                    let (x2, y2) = corners[to];
                    ctx.draw(&Line::new(x1, y1, x2, y2, Color::Blue));
                }
            })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_keeps_cube_inside_canvas() {
        for step in 0..12 {
            let yaw = f64::from(step) * 0.5;
            for (x, y) in Scene::projected_corners(yaw) {
                assert!(x.abs() <= 10.0 && y.abs() <= 5.0, "({x}, {y}) at yaw {yaw}");
            }
        }
    }
}
