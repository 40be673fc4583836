//! Run configuration, with environment overrides for the binaries.

use std::env;

use crate::domain::StepStrategy;

/// Which cell writes reach the renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NotifyPolicy {
    /// Only writes that flip a cell's state
    #[default]
    Changes,
    /// Every birth and death decision, even when the cell already had that
    /// state. A cell with exactly two neighbors is never notified.
    Always,
}

impl NotifyPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "changes" => Some(NotifyPolicy::Changes),
            "always" => Some(NotifyPolicy::Always),
            _ => None,
        }
    }
}

/// Engine and run settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Catalog key of the pattern to start with
    pub pattern: String,

    /// Time between generations
    pub interval_ms: u64,

    /// Next-generation computation
    pub strategy: StepStrategy,

    /// Renderer notification policy
    pub notify: NotifyPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pattern: "blinker".to_owned(),
            interval_ms: 100,
            strategy: StepStrategy::default(),
            notify: NotifyPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `LIFE_PATTERN`, `LIFE_INTERVAL_MS`,
    /// `LIFE_STRATEGY` and `LIFE_NOTIFY`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    /// Unparseable values are logged and the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(pattern) = lookup("LIFE_PATTERN") {
            config.pattern = pattern.trim().to_owned();
        }

        if let Some(interval) = lookup("LIFE_INTERVAL_MS") {
            match interval.trim().parse() {
                Ok(ms) => config.interval_ms = ms,
                Err(_) => tracing::warn!(value = %interval, "ignoring invalid LIFE_INTERVAL_MS"),
            }
        }

        if let Some(strategy) = lookup("LIFE_STRATEGY") {
            match StepStrategy::parse(&strategy) {
                Some(s) => config.strategy = s,
                None => tracing::warn!(value = %strategy, "ignoring invalid LIFE_STRATEGY"),
            }
        }

        if let Some(notify) = lookup("LIFE_NOTIFY") {
            match NotifyPolicy::parse(&notify) {
                Some(n) => config.notify = n,
                None => tracing::warn!(value = %notify, "ignoring invalid LIFE_NOTIFY"),
            }
        }

        config
    }

    /// Apply a speed change in generations per second, clamped to 1..=60
    pub fn adjust_speed(&mut self, delta: f64) {
        let per_second = (1000.0 / self.interval_ms.max(1) as f64 + delta).clamp(1.0, 60.0);
        self.interval_ms = (1000.0 / per_second).round() as u64;
    }

    pub fn generations_per_second(&self) -> f64 {
        1000.0 / self.interval_ms.max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::from_lookup(|_| None);
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.pattern, "blinker");
        assert_eq!(config.interval_ms, 100);
        assert_eq!(config.notify, NotifyPolicy::Changes);
    }

    #[test]
    fn test_overrides() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("LIFE_PATTERN", "gliderGun"),
            ("LIFE_INTERVAL_MS", "250"),
            ("LIFE_STRATEGY", "parallel"),
            ("LIFE_NOTIFY", "always"),
        ]));
        assert_eq!(config.pattern, "gliderGun");
        assert_eq!(config.interval_ms, 250);
        assert_eq!(config.strategy, StepStrategy::Parallel);
        assert_eq!(config.notify, NotifyPolicy::Always);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("LIFE_INTERVAL_MS", "fast"),
            ("LIFE_STRATEGY", "gpu"),
            ("LIFE_NOTIFY", "sometimes"),
        ]));
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_adjust_speed_clamps() {
        let mut config = EngineConfig::default();
        config.adjust_speed(10.0);
        assert_eq!(config.interval_ms, 50);

        config.adjust_speed(1000.0);
        assert_eq!(config.interval_ms, 17);

        config.adjust_speed(-1000.0);
        assert_eq!(config.interval_ms, 1000);
    }
}
