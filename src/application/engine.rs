use std::time::Duration;

use crate::domain::{Board, LifeResult, NeighborRule, PatternCatalog, Snapshot, StepStrategy};

use super::{EngineConfig, NotifyPolicy, Renderer, Trigger, TriggerHandle};

/// Lifecycle state of the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Stopped,
    Running,
}

/// Everything that lives only while a pattern is running
struct RunSession {
    pattern: String,
    board: Board,
    handle: TriggerHandle,
    interval: Duration,
    generation: u64,
}

/// Engine orchestrates a run.
/// It exclusively owns the board and the trigger handle; the renderer only
/// ever sees per-cell notifications.
pub struct Engine<R: Renderer, T: Trigger> {
    catalog: PatternCatalog,
    rule: NeighborRule,
    strategy: StepStrategy,
    notify: NotifyPolicy,
    renderer: R,
    trigger: T,
    session: Option<RunSession>,
}

impl<R: Renderer, T: Trigger> Engine<R, T> {
    /// Create a stopped engine with default settings
    pub fn new(catalog: PatternCatalog, renderer: R, trigger: T) -> Self {
        Self {
            catalog,
            rule: NeighborRule,
            strategy: StepStrategy::default(),
            notify: NotifyPolicy::default(),
            renderer,
            trigger,
            session: None,
        }
    }

    /// Create a stopped engine using the config's strategy and notify policy
    pub fn with_config(config: &EngineConfig, catalog: PatternCatalog, renderer: R, trigger: T) -> Self {
        let mut engine = Self::new(catalog, renderer, trigger);
        engine.strategy = config.strategy;
        engine.notify = config.notify;
        engine
    }

    /// Load `name` onto a fresh board and schedule a step every `interval_ms`.
    /// A running session is stopped first; on an unknown name the engine
    /// stays stopped.
    pub fn start(&mut self, name: &str, interval_ms: u64) -> LifeResult<()> {
        self.stop();

        let pattern = self.catalog.lookup(name)?;
        let mut board = Board::new(pattern.height(), pattern.width())?;

        self.renderer.on_board_reset(pattern.height(), pattern.width());
        for &(row, col) in pattern.coordinates() {
            let changed = board.set(row, col, true)?;
            if changed || self.notify == NotifyPolicy::Always {
                self.renderer.on_cell_changed(row, col, true);
            }
        }

        let interval = Duration::from_millis(interval_ms);
        let handle = self.trigger.schedule(interval);
        tracing::debug!(
            pattern = name,
            height = pattern.height(),
            width = pattern.width(),
            interval_ms,
            "run started"
        );

        self.session = Some(RunSession {
            pattern: pattern.key().to_owned(),
            board,
            handle,
            interval,
            generation: 0,
        });
        Ok(())
    }

    /// Cancel the trigger and end the run. No-op when already stopped.
    pub fn stop(&mut self) {
        if let Some(session) = self.session.take() {
            self.trigger.cancel(session.handle);
            tracing::debug!(
                pattern = %session.pattern,
                generation = session.generation,
                "run stopped"
            );
        }
    }

    /// Advance the running board by one generation.
    ///
    /// Every next state is computed from a snapshot of the current
    /// generation before any cell is written, so a failed step leaves the
    /// board and the renderer untouched. No-op when stopped.
    pub fn step(&mut self) -> LifeResult<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        let snapshot = session.board.snapshot();
        let transitions = self.strategy.next_generation(&self.rule, &snapshot)?;
        let (_, width) = snapshot.dimensions();

        let mut changes = 0usize;
        for (idx, next) in transitions.into_iter().enumerate() {
            let (row, col) = (idx / width, idx % width);
            let changed = session.board.set(row, col, next.alive)?;
            if changed {
                changes += 1;
            }
            let notify = match self.notify {
                NotifyPolicy::Changes => changed,
                // Two neighbors leaves the cell as it was and is not a decision
                NotifyPolicy::Always => changed || next.live_neighbors != 2,
            };
            if notify {
                self.renderer.on_cell_changed(row, col, next.alive);
            }
        }

        session.generation += 1;
        tracing::trace!(generation = session.generation, changes, "step");
        Ok(())
    }

    /// Feed elapsed frame time to the trigger and step if it fired.
    /// Returns whether a step ran; never more than one per call.
    pub fn tick(&mut self, elapsed: Duration) -> LifeResult<bool> {
        let Some(handle) = self.session.as_ref().map(|s| s.handle) else {
            return Ok(false);
        };

        if self.trigger.poll(handle, elapsed) {
            self.step()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn state(&self) -> EngineState {
        if self.session.is_some() {
            EngineState::Running
        } else {
            EngineState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// Generations computed since the last start (0 when stopped)
    pub fn generation(&self) -> u64 {
        self.session.as_ref().map_or(0, |s| s.generation)
    }

    /// Key of the running pattern
    pub fn pattern(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.pattern.as_str())
    }

    pub fn interval(&self) -> Option<Duration> {
        self.session.as_ref().map(|s| s.interval)
    }

    /// Copy of the running board's current generation
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.session.as_ref().map(|s| s.board.snapshot())
    }

    pub fn strategy(&self) -> StepStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: StepStrategy) {
        self.strategy = strategy;
    }

    pub fn notify_policy(&self) -> NotifyPolicy {
        self.notify
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut PatternCatalog {
        &mut self.catalog
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn trigger(&self) -> &T {
        &self.trigger
    }
}
