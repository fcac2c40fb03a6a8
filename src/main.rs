//! Carrot Hunt headless runner
//!
//! Plays the game on autopilot against a simulated 60 Hz clock and logs what
//! happened. Usage: `carrot-hunt [config.json] [seconds]`.

use std::process::ExitCode;

use carrot_hunt::audio::LogAudio;
use carrot_hunt::sim::GamePhase;
use carrot_hunt::{App, ConfigError, FrameInput, GameConfig, GameState, Sprites};

/// Simulated frame length (seconds)
const FRAME_DT: f64 = 1.0 / 60.0;
/// Default session length when none is given
const DEFAULT_SECONDS: f64 = 120.0;

fn load_config(path: Option<&str>) -> Result<GameConfig, ConfigError> {
    match path {
        Some(path) => {
            log::info!("Loading config from {path}");
            GameConfig::load(path)
        }
        None => Ok(GameConfig::default()),
    }
}

fn run(config: GameConfig, seconds: f64) -> Result<(), ConfigError> {
    let state = GameState::from_config(config, Sprites::default())?;
    let mut app = App::new(state, LogAudio::default());
    let mut games = 1u32;

    let frames = (seconds / FRAME_DT).round() as u64;
    for frame in 0..frames {
        let now = frame as f64 * FRAME_DT;
        let input = FrameInput::autopilot(&app.state, frame);
        if input.reset {
            let hud = app.hud();
            log::info!(
                "Game {games} over: {} carrots, {} vampires, {} juice",
                hud.carrots_killed,
                hud.vampires_killed,
                hud.juice
            );
            games += 1;
        }
        if app.frame(now, &input) {
            let hud = app.hud();
            log::debug!(
                "HUD: health {}/{} garlic {}/{} juice {}",
                hud.health,
                hud.max_health,
                hud.garlic,
                hud.max_garlic,
                hud.juice
            );
        }
    }

    let hud = app.hud();
    let status = match hud.phase {
        GamePhase::Playing => "alive",
        GamePhase::Dying | GamePhase::GameOver => "dead",
    };
    log::info!(
        "Session done after {} frames ({games} games): player {status}, {} carrots, {} vampires, {} juice",
        app.frames(),
        hud.carrots_killed,
        hud.vampires_killed,
        hud.juice
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config_path = args.first().map(String::as_str);
    let seconds = match args.get(1).map(|s| s.parse::<f64>()) {
        None => DEFAULT_SECONDS,
        Some(Ok(s)) if s > 0.0 => s,
        Some(_) => {
            log::error!("seconds must be a positive number");
            return ExitCode::FAILURE;
        }
    };

    match load_config(config_path).and_then(|config| run(config, seconds)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
