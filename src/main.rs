use crossterm::event;
use gridsnake::clock::Clock;
use gridsnake::consts::{GRID_SIZE, LOG_FILE, TICKS_PER_SECOND, WON_EXIT_CODE};
use gridsnake::game::{Game, GameState};
use gridsnake::input::Command;
use gridsnake::render::required_size;
use gridsnake::terminal::TerminalSession;
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::process::ExitCode;

fn main() -> io::Result<ExitCode> {
    // Set up logging before anything else
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create(LOG_FILE)?,
    )
    .map_err(io::Error::other)?;

    info!(
        "Starting snake on a {}x{} board",
        GRID_SIZE.width, GRID_SIZE.height
    );

    // The terminal is handed back before anything is printed
    let final_state = {
        let mut session = TerminalSession::acquire()?;
        run(&mut session)?
    };

    match final_state {
        GameState::Won => {
            info!("Game over, the snake filled the board");
            println!("Game over, you won!");
            Ok(ExitCode::from(WON_EXIT_CODE))
        }
        _ => {
            info!("Quitting");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run(terminal: &mut TerminalSession) -> io::Result<GameState> {
    let (width, height) = required_size(GRID_SIZE);
    let size = terminal.size()?;
    if size.width < width || size.height < height {
        warn!(
            "Terminal is {}x{}, the board needs {}x{} and will be clipped",
            size.width, size.height, width, height
        );
    }

    let mut game = Game::new(GRID_SIZE);
    let mut clock = Clock::new(TICKS_PER_SECOND);

    loop {
        terminal.draw(|frame| frame.render_widget(&game, frame.area()))?;

        // Wait for input no longer than the rest of this tick
        if event::poll(clock.time_until_tick())? {
            if let Some(command) = Command::from_event(event::read()?) {
                game.handle_command(command);
            }
        }

        if clock.tick_due() {
            game.update();
        }

        match game.state() {
            GameState::Exit | GameState::Won => return Ok(game.state()),
            GameState::Playing | GameState::Paused => {}
        }
    }
}
