/// Cell is the state of a single board position.
/// Positions carry no identity beyond their (row, col) coordinate.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Pure B3/S23 transition:
    /// 1. Fewer than 2 live neighbors: dies
    /// 2. Exactly 2: keeps its current state
    /// 3. Exactly 3: alive (birth or survival)
    /// 4. More than 3: dies
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive.evolve(0), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.evolve(2), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_two_neighbors_keeps_dead_cell_dead() {
        assert_eq!(Cell::Dead.evolve(2), Cell::Dead);
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(Cell::Alive.evolve(4), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(8), Cell::Dead);
        assert_eq!(Cell::Dead.evolve(4), Cell::Dead);
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Cell::Dead.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_bool_conversion() {
        assert_eq!(Cell::from(true), Cell::Alive);
        assert!(!bool::from(Cell::default()));
    }
}
