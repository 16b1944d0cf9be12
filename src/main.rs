use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use macroquad::Window;
use macroquad::prelude::{Conf, get_time, next_frame, screen_height, screen_width};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use snake_modes::config::Settings;
use snake_modes::game::{GameState, Lifecycle, Mode, SessionRng};
use snake_modes::{input, render};

#[derive(Parser)]
#[command(about = "Snake with classic, free and obstacle modes")]
struct Cli {
    #[arg(long, help = "JSON file overriding board size, start cell, obstacle and tick intervals")]
    config: Option<PathBuf>,
    #[arg(long, help = "Seed for food placement, random when omitted")]
    seed: Option<u64>,
    #[arg(long, help = "Skip the menu and start in this mode: classic, free or obstacle")]
    mode: Option<Mode>,
    #[arg(long, help = "Write logs to this file instead of the terminal")]
    log_file: Option<PathBuf>,
    #[arg(long, default_value = "info", help = "Available levels: off, error, warn, info, debug, trace")]
    log_level: LevelFilter,
}

fn init_logging(cli: &Cli) -> Result<()> {
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            WriteLogger::init(cli.log_level, Config::default(), file)
        }
        None => TermLogger::init(cli.log_level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
    }
    .context("Failed to initialise logger")
}

fn window_conf(settings: &Settings) -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: settings.canvas_width,
        window_height: settings.canvas_height,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

fn buttons_for(lifecycle: Lifecycle) -> Vec<render::Button> {
    match lifecycle {
        Lifecycle::GameOver => render::game_over_buttons(screen_width(), screen_height()),
        _ => Vec::new(),
    }
}

async fn run(mut game: GameState, start_mode: Option<Mode>) {
    if let Some(mode) = start_mode {
        game.select_mode(mode, get_time());
    }

    loop {
        let now = get_time();
        let buttons = buttons_for(game.lifecycle());
        for command in input::poll_commands(game.lifecycle(), &buttons) {
            if input::dispatch(&mut game, command, now).is_break() {
                return;
            }
        }

        game.update(now);
        render::draw(&game.snapshot(), &buttons_for(game.lifecycle()));

        next_frame().await;
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let settings = Settings::load(cli.config.as_deref())?;
    let rng = cli.seed.map_or_else(SessionRng::from_random, SessionRng::new);
    info!(
        "Board {}x{} cells of {}px, seed {}",
        settings.grid_width(),
        settings.grid_height(),
        settings.tile_size,
        rng.seed()
    );

    let game = GameState::new(&settings, rng);
    Window::from_config(window_conf(&settings), run(game, cli.mode));
    Ok(())
}
