use macroquad::prelude::*;

use crate::application::{Engine, EngineConfig, Renderer, Trigger};
use crate::domain::LifeResult;
use crate::ui::Button;

/// User intent, decoupled from the key or button that produced it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    ToggleRunning,
    Faster,
    Slower,
}

/// Map this frame's key presses to commands
pub fn keyboard_commands() -> Vec<Command> {
    const BINDINGS: [(KeyCode, Command); 3] = [
        (KeyCode::Space, Command::ToggleRunning),
        (KeyCode::Up, Command::Faster),
        (KeyCode::Down, Command::Slower),
    ];

    BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, command)| command)
        .collect()
}

/// Map clicks on the panel buttons (Start, Stop) to commands
pub fn button_commands(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Command> {
    buttons
        .iter()
        .enumerate()
        .filter(|(_, btn)| btn.is_clicked(mouse_pos))
        .filter_map(|(idx, _)| match idx {
            0 => Some(Command::Start),
            1 => Some(Command::Stop),
            _ => None,
        })
        .collect()
}

/// Apply a command. Speed changes restart a running pattern on the new
/// interval; the board is reseeded.
pub fn apply_command<R: Renderer, T: Trigger>(
    engine: &mut Engine<R, T>,
    config: &mut EngineConfig,
    command: Command,
) -> LifeResult<()> {
    match command {
        Command::Start => engine.start(&config.pattern, config.interval_ms),
        Command::Stop => {
            engine.stop();
            Ok(())
        }
        Command::ToggleRunning if engine.is_running() => {
            engine.stop();
            Ok(())
        }
        Command::ToggleRunning => engine.start(&config.pattern, config.interval_ms),
        Command::Faster | Command::Slower => {
            config.adjust_speed(if command == Command::Faster { 1.0 } else { -1.0 });
            if engine.is_running() {
                engine.start(&config.pattern, config.interval_ms)
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{FrameTrigger, NullRenderer};
    use crate::domain::{LifeError, PatternCatalog};

    fn engine() -> Engine<NullRenderer, FrameTrigger> {
        Engine::new(PatternCatalog::builtin(), NullRenderer, FrameTrigger::new())
    }

    #[test]
    fn test_toggle_starts_and_stops() {
        let mut engine = engine();
        let mut config = EngineConfig::default();

        apply_command(&mut engine, &mut config, Command::ToggleRunning).unwrap();
        assert_eq!(engine.pattern(), Some("blinker"));
        apply_command(&mut engine, &mut config, Command::ToggleRunning).unwrap();
        assert!(!engine.is_running());
    }

    #[test]
    fn test_speed_change_restarts_running_pattern() {
        let mut engine = engine();
        let mut config = EngineConfig::default();
        apply_command(&mut engine, &mut config, Command::Start).unwrap();
        engine.step().unwrap();

        apply_command(&mut engine, &mut config, Command::Faster).unwrap();
        assert_eq!(config.interval_ms, 91);
        assert_eq!(engine.interval(), Some(std::time::Duration::from_millis(91)));
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.trigger().active_count(), 1);
    }

    #[test]
    fn test_speed_change_while_stopped_keeps_engine_stopped() {
        let mut engine = engine();
        let mut config = EngineConfig::default();
        apply_command(&mut engine, &mut config, Command::Slower).unwrap();

        assert_eq!(config.interval_ms, 111);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_start_with_unknown_pattern_reports_error() {
        let mut engine = engine();
        let mut config = EngineConfig {
            pattern: "glider".to_owned(),
            ..EngineConfig::default()
        };
        assert!(matches!(
            apply_command(&mut engine, &mut config, Command::Start),
            Err(LifeError::UnknownPattern(_))
        ));
        assert!(!engine.is_running());
    }
}
