//! Strategy for computing the next generation of a snapshot.
//!
//! Both strategies read only the immutable snapshot, so they always agree;
//! `Parallel` spreads the per-cell work over the rayon thread pool.

use rayon::prelude::*;

use super::{LifeResult, NeighborRule, Snapshot};

/// Outcome of the rule for one cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub alive: bool,
    pub live_neighbors: u8,
}

/// How a step computes next states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StepStrategy {
    /// Cell-by-cell, serial
    #[default]
    Serial,
    /// Cell-by-cell, parallel rayon
    Parallel,
}

impl StepStrategy {
    /// Get all available strategies
    pub fn all() -> Vec<StepStrategy> {
        vec![StepStrategy::Serial, StepStrategy::Parallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            StepStrategy::Serial => "Serial",
            StepStrategy::Parallel => "Parallel",
        }
    }

    /// Parse a config value (`serial` / `parallel`, case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "serial" => Some(StepStrategy::Serial),
            "parallel" => Some(StepStrategy::Parallel),
            _ => None,
        }
    }

    /// Transition of every cell, row-major, evaluated against `snapshot` only.
    /// Fails without partial output if any cell lookup fails.
    pub fn next_generation(&self, rule: &NeighborRule, snapshot: &Snapshot) -> LifeResult<Vec<Transition>> {
        let (_, width) = snapshot.dimensions();
        let next_at = |idx: usize| -> LifeResult<Transition> {
            let (row, col) = (idx / width, idx % width);
            let live_neighbors = rule.live_neighbor_count(snapshot, row, col)?;
            let alive = rule.next_state(snapshot.get(row, col)?, live_neighbors);
            Ok(Transition { alive, live_neighbors })
        };

        match self {
            StepStrategy::Serial => (0..snapshot.len()).map(next_at).collect(),
            StepStrategy::Parallel => (0..snapshot.len()).into_par_iter().map(next_at).collect(),
        }
    }
}
