use super::{Cell, LifeResult, Snapshot};

/// Moore neighborhood offsets, self excluded
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Conway's Game of Life (B3/S23) on a bounded board.
/// Neighborhoods are clipped at the edges, never wrapped.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeighborRule;

impl NeighborRule {
    pub fn name(&self) -> &'static str {
        "Conway"
    }

    pub fn description(&self) -> &'static str {
        "B3/S23 - Classic"
    }

    /// Count live cells among the up to 8 in-bounds neighbors of (row, col)
    pub fn live_neighbor_count(&self, snapshot: &Snapshot, row: usize, col: usize) -> LifeResult<u8> {
        // Validates (row, col) itself
        snapshot.get(row, col)?;
        let (height, width) = snapshot.dimensions();

        let count = NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                (r < height && c < width).then_some((r, c))
            })
            .filter(|&(r, c)| snapshot.get(r, c).unwrap_or(false))
            .count();

        Ok(count as u8)
    }

    /// Next state of a cell given its live neighbor count
    pub fn next_state(&self, alive: bool, live_neighbors: u8) -> bool {
        Cell::from(alive).evolve(live_neighbors).is_alive()
    }

    /// Next state of (row, col), evaluated purely against the snapshot
    pub fn next_cell(&self, snapshot: &Snapshot, row: usize, col: usize) -> LifeResult<bool> {
        let alive = snapshot.get(row, col)?;
        let neighbors = self.live_neighbor_count(snapshot, row, col)?;
        Ok(self.next_state(alive, neighbors))
    }
}
