use macroquad::prelude::*;

use super::Rect;

/// Button UI component with hover and click detection
#[derive(Clone)]
pub struct Button {
    bounds: Rect,
    text: String,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            bounds: Rect::new(x, y, width, height),
            text: text.into(),
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
        }
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.bounds.contains(mouse_pos)
    }

    /// Draw button with hover effect; `enabled = false` greys it out
    pub fn draw(&self, mouse_pos: (f32, f32), enabled: bool) {
        let Rect { x, y, width, height } = self.bounds;
        let color = match (enabled, self.is_hovered(mouse_pos)) {
            (false, _) => Color::from_rgba(60, 60, 60, 255),
            (true, true) => self.hover_color,
            (true, false) => self.color,
        };

        draw_rectangle(x, y, width, height, color);
        draw_rectangle_lines(x, y, width, height, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            x + (width - text_size.width) / 2.0,
            y + (height + text_size.height) / 2.0,
            20.0,
            if enabled { WHITE } else { GRAY },
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
