use std::collections::HashMap;
use std::time::Duration;

/// Opaque id of a scheduled periodic trigger
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TriggerHandle(u64);

/// Periodic-execution primitive the engine schedules its steps on.
///
/// The engine owns the callback side: it polls its handle from its own
/// driver loop, so a trigger never calls back into the engine and two
/// steps can never overlap.
pub trait Trigger {
    /// Start firing every `interval`
    fn schedule(&mut self, interval: Duration) -> TriggerHandle;

    /// Stop firing; unknown or already-cancelled handles are ignored
    fn cancel(&mut self, handle: TriggerHandle);

    /// Advance the handle's clock by `elapsed`; true if it fired.
    /// Cancelled handles never fire.
    fn poll(&mut self, handle: TriggerHandle, elapsed: Duration) -> bool;

    fn is_scheduled(&self, handle: TriggerHandle) -> bool;
}

#[derive(Clone, Copy, Debug)]
struct Schedule {
    interval: Duration,
    update_timer: Duration,
}

/// Frame-time driven trigger.
/// Each poll adds the frame's elapsed time; once the interval is reached the
/// handle fires once and its timer restarts from zero.
#[derive(Debug, Default)]
pub struct FrameTrigger {
    schedules: HashMap<u64, Schedule>,
    next_id: u64,
}

impl FrameTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live schedules
    pub fn active_count(&self) -> usize {
        self.schedules.len()
    }
}

impl Trigger for FrameTrigger {
    fn schedule(&mut self, interval: Duration) -> TriggerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.schedules.insert(
            id,
            Schedule {
                interval,
                update_timer: Duration::ZERO,
            },
        );
        TriggerHandle(id)
    }

    fn cancel(&mut self, handle: TriggerHandle) {
        self.schedules.remove(&handle.0);
    }

    fn poll(&mut self, handle: TriggerHandle, elapsed: Duration) -> bool {
        let Some(schedule) = self.schedules.get_mut(&handle.0) else {
            return false;
        };

        schedule.update_timer += elapsed;
        if schedule.update_timer >= schedule.interval {
            schedule.update_timer = Duration::ZERO;
            true
        } else {
            false
        }
    }

    fn is_scheduled(&self, handle: TriggerHandle) -> bool {
        self.schedules.contains_key(&handle.0)
    }
}
