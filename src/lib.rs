// Domain layer - Board, rule and pattern catalog
pub mod domain;

// Application layer - Engine lifecycle, trigger and renderer seams
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Board, LifeError, LifeResult, NeighborRule, Pattern, PatternCatalog, Snapshot, StepStrategy, presets};
pub use application::{Engine, EngineConfig, EngineState, FrameTrigger, NotifyPolicy, NullRenderer, Renderer, Trigger};
pub use rendering::CanvasRenderer;
pub use ui::Button;
