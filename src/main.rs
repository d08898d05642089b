//! STAG HUNT: a hidden-object game
//!
//! Five stags hide on a large map. Drag to pan, scroll or pinch to zoom,
//! and click every stag before the clock runs out. Runs natively and in the
//! browser (wasm32) from the same code.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Longest frame the simulation accepts; a backgrounded browser tab can
/// report seconds-long frames that would otherwise drain the clock
const MAX_FRAME_TIME: f32 = 0.25;

mod app;
mod assets;
mod camera;
mod config;
mod hud;
mod hunt;
mod input;
mod render;

use macroquad::logging::{error, info};
use macroquad::prelude::*;
use app::AppState;
use assets::GameTextures;
use config::{load_config, HuntConfig, CONFIG_PATH};
use input::{poll_actions, PointerInput};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Stag Hunt v{}", VERSION),
        window_width: 1920,
        window_height: 1080,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    info!("=== STAG HUNT v{} ===", VERSION);

    let config = startup_config().await;
    let textures = GameTextures::load(&config).await;

    let mut pointer_input = PointerInput::new();
    let mut app = AppState::new(config, textures, vec2(screen_width(), screen_height()));

    loop {
        let dt = get_frame_time().min(MAX_FRAME_TIME);
        let viewport = vec2(screen_width(), screen_height());
        let pointers = pointer_input.poll();
        let actions = poll_actions();

        app.step(dt, viewport, &pointers, &actions);
        app.draw();

        next_frame().await;
    }
}

/// Native builds accept a round file as the first argument
#[cfg(not(target_arch = "wasm32"))]
async fn startup_config() -> HuntConfig {
    match std::env::args().nth(1) {
        Some(path) => match HuntConfig::load(&path) {
            Ok(config) => {
                info!("Loaded round from {}", path);
                config
            }
            Err(e) => {
                error!("Failed to load round {}: {}", path, e);
                load_config(CONFIG_PATH).await
            }
        },
        None => load_config(CONFIG_PATH).await,
    }
}

#[cfg(target_arch = "wasm32")]
async fn startup_config() -> HuntConfig {
    load_config(CONFIG_PATH).await
}
