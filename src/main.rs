use std::fs::File;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use macroquad::prelude::*;
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode, WriteLogger};

use snake_engine::clock::TickClock;
use snake_engine::config::{CONFIG_PATH, Config};
use snake_engine::layout::Layout;
use snake_engine::{Command, Engine, dispatch, input, render};

const LOG_PATH: &str = "snake.log";

fn init_logging() -> Result<()> {
    match File::create(LOG_PATH) {
        Ok(file) => WriteLogger::init(LevelFilter::Info, LogConfig::default(), file)
            .context("installing file logger"),
        Err(_) => TermLogger::init(
            LevelFilter::Info,
            LogConfig::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )
        .context("installing terminal logger"),
    }
}

fn window_conf(config: &Config) -> Conf {
    let (window_width, window_height) = config.window_size();
    Conf {
        window_title: "Snake".to_owned(),
        window_width,
        window_height,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

// One config read feeds both the window and the game
fn main() {
    if let Err(err) = init_logging() {
        eprintln!("logging disabled: {err:#}");
    }
    info!("starting snake");

    let config = Config::load_or_default(CONFIG_PATH);
    macroquad::Window::from_config(window_conf(&config), run(config));
}

async fn run(config: Config) {
    let mut engine = Engine::from_entropy(config.rules.clone());
    let mut clock = TickClock::new(engine.snapshot().speed());
    let mut hover = input::Hover::default();

    loop {
        if input::quit_requested() { break; }

        let layout = Layout::new(
            screen_width(),
            screen_height(),
            config.rules.grid_width,
            config.rules.grid_height,
            config.display.cell_size,
        );

        let phase = engine.snapshot().phase();
        for command in input::poll(&layout, &mut hover, phase) {
            dispatch(&mut engine, command);
        }

        for _ in 0..clock.update(get_frame_time()) {
            dispatch(&mut engine, Command::Tick);
        }
        // Speed may have changed on a restart or after eating
        if clock.reschedule(engine.snapshot().speed()) {
            info!("tick interval now {:?}", clock.interval());
        }

        render::draw(&engine.snapshot(), &layout, &hover);

        next_frame().await;
    }

    info!("bye, best score {}", engine.snapshot().high_score());
}
