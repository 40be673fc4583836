mod error;
mod cell;
mod board;
mod rules;
mod patterns;
mod algorithm;

pub use error::{LifeError, LifeResult};
pub use cell::Cell;
pub use board::{Board, Snapshot};
pub use rules::NeighborRule;
pub use patterns::{Pattern, PatternCatalog, presets};
pub use algorithm::{StepStrategy, Transition};
