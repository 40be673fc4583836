use macroquad::prelude::*;

use crate::application::{Engine, EngineConfig, Renderer, Trigger};
use crate::ui::{Button, Dropdown, PANEL_WIDTH, board_area_height, board_area_width, fit_cell_size, panel_x};

/// Renderer that mirrors the board from engine notifications.
/// The window draws from this mirror; it never reads the engine's board.
#[derive(Clone, Debug, Default)]
pub struct CanvasRenderer {
    height: usize,
    width: usize,
    filled: Vec<bool>,
    updates: u64,
}

impl CanvasRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas dimensions as (height, width)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.filled[row * self.width + col]
    }

    pub fn filled_count(&self) -> usize {
        self.filled.iter().filter(|&&f| f).count()
    }

    /// Cell notifications received since the last reset
    pub const fn updates(&self) -> u64 {
        self.updates
    }
}

impl Renderer for CanvasRenderer {
    fn on_board_reset(&mut self, height: usize, width: usize) {
        self.height = height;
        self.width = width;
        self.filled = vec![false; height * width];
        self.updates = 0;
    }

    fn on_cell_changed(&mut self, row: usize, col: usize, alive: bool) {
        if row < self.height && col < self.width {
            self.filled[row * self.width + col] = alive;
            self.updates += 1;
        } else {
            tracing::warn!(row, col, "cell notification outside canvas");
        }
    }
}

/// Draw the canvas centered in the board area
pub fn draw_board(canvas: &CanvasRenderer) {
    let (height, width) = canvas.dimensions();
    if height == 0 || width == 0 {
        return;
    }

    let area = (board_area_width(), board_area_height());
    let cell_size = fit_cell_size(area, height, width);
    let origin_x = ((area.0 - cell_size * width as f32) / 2.0).max(0.0);
    let origin_y = ((area.1 - cell_size * height as f32) / 2.0).max(0.0);

    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let dead_color = Color::from_rgba(15, 15, 15, 255);
    let line_color = Color::from_rgba(40, 40, 40, 255);
    let draw_lines = cell_size >= 4.0;

    for row in 0..height {
        for col in 0..width {
            let x = origin_x + col as f32 * cell_size;
            let y = origin_y + row as f32 * cell_size;
            let color = if canvas.is_filled(row, col) { alive_color } else { dead_color };
            draw_rectangle(x, y, cell_size, cell_size, color);
            if draw_lines {
                draw_rectangle_lines(x, y, cell_size, cell_size, 1.0, line_color);
            }
        }
    }
}

fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x + 10.0, y, size, color);
}

/// Draw the side panel: pattern selector, buttons and run status
pub fn draw_controls<T: Trigger>(
    engine: &Engine<CanvasRenderer, T>,
    config: &EngineConfig,
    buttons: &[Button],
    pattern_dropdown: &Dropdown,
    mouse_pos: (f32, f32),
) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    let running = engine.is_running();
    // Start is always available (restarts); Stop only while running
    for (idx, button) in buttons.iter().enumerate() {
        button.draw(mouse_pos, idx == 0 || running);
    }

    let pattern = engine.pattern().unwrap_or("-");
    let speed = format!("{:.0} gen/s", config.generations_per_second());
    let generation = engine.generation().to_string();
    let live = engine.snapshot().map_or(0, |s| s.live_count()).to_string();
    let strategy = format!("{} | FPS: {}", engine.strategy().name(), get_fps());
    let value_color = Color::from_rgba(180, 180, 180, 255);

    let labels: [(&str, f32, f32, Color); 12] = [
        ("Pattern:", 300.0, 16.0, WHITE),
        (pattern, 320.0, 16.0, value_color),
        ("Speed:", 350.0, 16.0, WHITE),
        (&speed, 370.0, 14.0, value_color),
        ("Generation:", 400.0, 16.0, WHITE),
        (&generation, 420.0, 20.0, Color::from_rgba(0, 255, 150, 255)),
        ("Live cells:", 450.0, 16.0, WHITE),
        (&live, 470.0, 16.0, value_color),
        ("Status:", 500.0, 16.0, WHITE),
        (
            if running { "Running" } else { "Stopped" },
            520.0,
            16.0,
            if running {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
        (&strategy, 550.0, 12.0, GRAY),
        ("Space: start/stop  Up/Down: speed", 580.0, 11.0, GRAY),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text_label(text, px, *y, *size, *color);
    });

    // Last so the open menu covers the panel
    pattern_dropdown.draw(mouse_pos);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_sizes_empty_canvas() {
        let mut canvas = CanvasRenderer::new();
        canvas.on_board_reset(3, 4);
        canvas.on_cell_changed(2, 3, true);
        assert!(canvas.is_filled(2, 3));

        canvas.on_board_reset(2, 2);
        assert_eq!(canvas.dimensions(), (2, 2));
        assert_eq!(canvas.filled_count(), 0);
        assert_eq!(canvas.updates(), 0);
    }

    #[test]
    fn test_out_of_range_notification_ignored() {
        let mut canvas = CanvasRenderer::new();
        canvas.on_board_reset(2, 2);
        canvas.on_cell_changed(5, 0, true);
        assert_eq!(canvas.filled_count(), 0);
        assert!(!canvas.is_filled(5, 0));
    }

    #[test]
    fn test_mirrors_engine_run() {
        use crate::application::FrameTrigger;
        use crate::domain::PatternCatalog;

        let mut engine = Engine::new(PatternCatalog::builtin(), CanvasRenderer::new(), FrameTrigger::new());
        engine.start("pulsar", 100).unwrap();
        for _ in 0..4 {
            engine.step().unwrap();
        }

        let snapshot = engine.snapshot().unwrap();
        let canvas = engine.renderer();
        assert_eq!(canvas.dimensions(), snapshot.dimensions());
        for row in 0..17 {
            for col in 0..17 {
                assert_eq!(canvas.is_filled(row, col), snapshot.get(row, col).unwrap());
            }
        }
    }
}
