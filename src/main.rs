use std::fs::File;
use std::io;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

mod app;
mod config;
mod food;
mod game;
mod grid;
mod render;

use app::App;
use config::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging before anything else. The terminal belongs to the UI,
    // so logs go to a file.
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create("gridsnake.log")?,
    )?;

    let game_config = cli.to_config()?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(
        "starting gridsnake: seed {}, grid {}x{}, tick {:?}",
        seed, game_config.grid_count, game_config.grid_count, game_config.tick_interval
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(game_config, seed);
    let res = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("gridsnake exiting");
    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| render::draw(frame, app))?;

        let timeout = app.tick_interval().saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
        if app.should_exit() {
            return Ok(());
        }

        if last_tick.elapsed() >= app.tick_interval() {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}
