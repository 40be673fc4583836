mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use macroquad::prelude::{screen_width, screen_height};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
/// Largest cell edge in pixels; small boards are not blown up past this
pub const MAX_CELL_SIZE: f32 = 24.0;

/// Axis-aligned screen rectangle used for hit testing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, point: (f32, f32)) -> bool {
        point.0 >= self.x
            && point.0 <= self.x + self.width
            && point.1 >= self.y
            && point.1 <= self.y + self.height
    }
}

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the board area
pub fn board_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the board area
pub fn board_area_height() -> f32 {
    screen_height()
}

/// Largest square cell that fits a `height x width` board into the area
pub fn fit_cell_size(area: (f32, f32), height: usize, width: usize) -> f32 {
    if height == 0 || width == 0 {
        return MAX_CELL_SIZE;
    }
    (area.0 / width as f32)
        .min(area.1 / height as f32)
        .clamp(1.0, MAX_CELL_SIZE)
}

/// Panel buttons, indexed as `input::process_button_clicks` expects
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    vec![
        Button::new(px, 170.0, PANEL_WIDTH, BUTTON_HEIGHT, "Start"),
        Button::new(px, 220.0, PANEL_WIDTH, BUTTON_HEIGHT, "Stop"),
    ]
}
