use std::sync::Arc;

use super::{Cell, LifeError, LifeResult};

/// Row-major cell storage shared by `Board` and `Snapshot`.
fn index_of(height: usize, width: usize, row: usize, col: usize) -> LifeResult<usize> {
    if row < height && col < width {
        Ok(row * width + col)
    } else {
        Err(LifeError::OutOfBounds { row, col, height, width })
    }
}

fn live_cells_of(cells: &[Cell], width: usize) -> Vec<(usize, usize)> {
    cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_alive())
        .map(|(idx, _)| (idx / width, idx % width))
        .collect()
}

/// Board owns the live 2D grid of a run.
/// Dimensions are fixed at construction; every position always has a state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new board with all cells dead
    pub fn new(height: usize, width: usize) -> LifeResult<Self> {
        if height == 0 || width == 0 {
            return Err(LifeError::InvalidDimensions { height, width });
        }
        Ok(Self {
            height,
            width,
            cells: vec![Cell::Dead; height * width],
        })
    }

    /// Board dimensions as (height, width)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn get(&self, row: usize, col: usize) -> LifeResult<bool> {
        let idx = index_of(self.height, self.width, row, col)?;
        Ok(self.cells[idx].is_alive())
    }

    /// Set a cell, returning whether its state actually changed
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> LifeResult<bool> {
        let idx = index_of(self.height, self.width, row, col)?;
        let next = Cell::from(alive);
        let changed = self.cells[idx] != next;
        self.cells[idx] = next;
        Ok(changed)
    }

    /// Freeze the current generation into an immutable copy
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            height: self.height,
            width: self.width,
            cells: Arc::from(self.cells.as_slice()),
        }
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Alive coordinates in row-major order
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        live_cells_of(&self.cells, self.width)
    }
}

/// Immutable copy of a board generation.
/// Cloning is cheap; all clones share the same cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    height: usize,
    width: usize,
    cells: Arc<[Cell]>,
}

impl Snapshot {
    /// Snapshot dimensions as (height, width)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn get(&self, row: usize, col: usize) -> LifeResult<bool> {
        let idx = index_of(self.height, self.width, row, col)?;
        Ok(self.cells[idx].is_alive())
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Alive coordinates in row-major order
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        live_cells_of(&self.cells, self.width)
    }
}
