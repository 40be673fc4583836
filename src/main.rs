use std::time::Duration;

use macroquad::prelude::*;

use life_engine::{
    CanvasRenderer, Engine, EngineConfig, FrameTrigger, PatternCatalog,
    input,
    rendering,
    ui::{self, Dropdown},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut config = EngineConfig::from_env();
    let catalog = PatternCatalog::builtin();

    let entries: Vec<(String, String)> = catalog
        .iter()
        .map(|p| (p.key().to_owned(), p.name().to_owned()))
        .collect();
    let mut pattern_dropdown = Dropdown::new(ui::panel_x(), 40.0, ui::PANEL_WIDTH, "Pattern", entries);
    pattern_dropdown.select_value(&config.pattern);

    let mut engine = Engine::with_config(&config, catalog, CanvasRenderer::new(), FrameTrigger::new());
    tracing::info!(
        pattern = %config.pattern,
        interval_ms = config.interval_ms,
        strategy = engine.strategy().name(),
        "starting"
    );
    if let Err(err) = engine.start(&config.pattern, config.interval_ms) {
        tracing::error!(%err, "could not start initial pattern");
    }

    loop {
        let mouse_pos = mouse_position();
        pattern_dropdown.set_position(ui::panel_x(), 40.0);
        let buttons = ui::create_buttons();

        // Picking a pattern starts it right away
        let mut commands = Vec::new();
        if pattern_dropdown.update(mouse_pos) {
            if let Some(key) = pattern_dropdown.selected_value() {
                config.pattern = key.to_owned();
                commands.push(input::Command::Start);
            }
        }
        if !pattern_dropdown.is_open() {
            commands.extend(input::button_commands(&buttons, mouse_pos));
        }
        commands.extend(input::keyboard_commands());

        for command in commands {
            if let Err(err) = input::apply_command(&mut engine, &mut config, command) {
                tracing::error!(%err, ?command, "command failed");
            }
        }

        let elapsed = Duration::from_secs_f32(get_frame_time());
        if let Err(err) = engine.tick(elapsed) {
            tracing::error!(%err, "step failed, stopping");
            engine.stop();
        }

        clear_background(BLACK);
        rendering::draw_board(engine.renderer());
        rendering::draw_controls(&engine, &config, &buttons, &pattern_dropdown, mouse_pos);

        next_frame().await;
    }
}
