use macroquad::prelude::*;

use super::Rect;

const ROW_HEIGHT: f32 = 30.0;
const FONT_SIZE: f32 = 16.0;

/// Dropdown selector over (value, label) entries.
/// Shows labels, reports the selected value.
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    entries: Vec<(String, String)>,
    selected: usize,
    is_open: bool,
    label: String,
}

/// Shorten `text` with an ellipsis until it fits `max_width`
fn fit_text(text: &str, max_width: f32) -> String {
    let width_of = |s: &str| measure_text(s, None, FONT_SIZE as u16, 1.0).width;
    if width_of(text) <= max_width {
        return text.to_owned();
    }
    let mut truncated = text.to_owned();
    while !truncated.is_empty() && width_of(&format!("{truncated}...")) > max_width {
        truncated.pop();
    }
    format!("{truncated}...")
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, entries: Vec<(String, String)>) -> Self {
        Self {
            x,
            y,
            width,
            entries,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Value of the selected entry
    pub fn selected_value(&self) -> Option<&str> {
        self.entries.get(self.selected).map(|(value, _)| value.as_str())
    }

    /// Select the entry with this value, if present
    pub fn select_value(&mut self, value: &str) {
        if let Some(idx) = self.entries.iter().position(|(v, _)| v == value) {
            self.selected = idx;
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn header(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, ROW_HEIGHT)
    }

    fn row(&self, index: usize) -> Rect {
        Rect::new(self.x, self.y + ROW_HEIGHT * (index + 1) as f32, self.width, ROW_HEIGHT)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let header = self.header();
        let header_color = if header.contains(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(header.x, header.y, header.width, header.height, header_color);
        draw_rectangle_lines(header.x, header.y, header.width, header.height, 2.0, WHITE);

        if let Some((_, label)) = self.entries.get(self.selected) {
            // Leave room for the arrow
            draw_text(&fit_text(label, self.width - 30.0), self.x + 5.0, self.y + 21.0, FONT_SIZE, WHITE);
        }
        draw_text("v", self.x + self.width - 18.0, self.y + 21.0, 14.0, WHITE);

        if !self.is_open {
            return;
        }

        let menu_height = self.entries.len() as f32 * ROW_HEIGHT;
        draw_rectangle(self.x, self.y + ROW_HEIGHT, self.width, menu_height, Color::from_rgba(30, 30, 30, 255));

        for (i, (_, label)) in self.entries.iter().enumerate() {
            let row = self.row(i);
            let row_color = if row.contains(mouse_pos) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };
            draw_rectangle(row.x, row.y, row.width, row.height, row_color);
            draw_rectangle_lines(row.x, row.y, row.width, row.height, 1.0, Color::from_rgba(80, 80, 80, 255));
            draw_text(&fit_text(label, self.width - 10.0), row.x + 5.0, row.y + 21.0, FONT_SIZE, WHITE);
        }

        draw_rectangle_lines(self.x, self.y + ROW_HEIGHT, self.width, menu_height, 2.0, WHITE);
    }

    /// Handle this frame's click, returning true if the selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }
        self.click(mouse_pos)
    }

    /// Apply a left click at `mouse_pos`
    fn click(&mut self, mouse_pos: (f32, f32)) -> bool {
        if self.header().contains(mouse_pos) {
            self.is_open = !self.is_open;
            return false;
        }
        if !self.is_open {
            return false;
        }

        self.is_open = false;
        match (0..self.entries.len()).find(|&i| self.row(i).contains(mouse_pos)) {
            Some(i) if i != self.selected => {
                self.selected = i;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dropdown() -> Dropdown {
        let entries = ["blinker", "pulsar", "gliderGun"]
            .iter()
            .map(|k| (k.to_string(), k.to_uppercase()))
            .collect();
        Dropdown::new(0.0, 0.0, 100.0, "Pattern", entries)
    }

    #[test]
    fn test_header_click_toggles_menu() {
        let mut dd = dropdown();
        assert!(!dd.click((50.0, 15.0)));
        assert!(dd.is_open());
        assert!(!dd.click((50.0, 15.0)));
        assert!(!dd.is_open());
    }

    #[test]
    fn test_row_click_selects_value() {
        let mut dd = dropdown();
        dd.click((50.0, 15.0));
        // Third row spans y 90..120
        assert!(dd.click((50.0, 100.0)));
        assert_eq!(dd.selected_value(), Some("gliderGun"));
        assert!(!dd.is_open());
    }

    #[test]
    fn test_clicks_ignored_while_closed() {
        let mut dd = dropdown();
        assert!(!dd.click((50.0, 100.0)));
        assert_eq!(dd.selected(), 0);
    }

    #[test]
    fn test_select_value() {
        let mut dd = dropdown();
        dd.select_value("pulsar");
        assert_eq!(dd.selected(), 1);
        dd.select_value("unknown");
        assert_eq!(dd.selected(), 1);
    }
}
