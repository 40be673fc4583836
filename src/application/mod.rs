mod config;
mod engine;
mod renderer;
mod trigger;

pub use config::{EngineConfig, NotifyPolicy};
pub use engine::{Engine, EngineState};
pub use renderer::{NullRenderer, Renderer};
pub use trigger::{FrameTrigger, Trigger, TriggerHandle};
