/// Observer of board changes.
/// Receives coordinates and states only, never the board itself.
pub trait Renderer {
    /// A new board of the given size is about to be seeded; all cells start dead
    fn on_board_reset(&mut self, height: usize, width: usize);

    /// Cell (row, col) was filled (`alive`) or emptied
    fn on_cell_changed(&mut self, row: usize, col: usize, alive: bool);
}

/// Renderer for headless runs
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn on_board_reset(&mut self, _height: usize, _width: usize) {}

    fn on_cell_changed(&mut self, _row: usize, _col: usize, _alive: bool) {}
}
