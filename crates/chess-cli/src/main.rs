//! Terminal front end for a two-click chess session.
//!
//! Reads squares and commands from stdin, feeds them to a
//! [`Session`](chess_engine::Session) and redraws the board after every
//! change.

mod command;
mod config;
mod render;

use chess_core::Color;
use chess_engine::{SelectOutcome, Session};
use clap::Parser;
use command::{Command, HELP};
use config::CliConfig;
use render::TextRenderer;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Two-click chess board with move legality and undo.
#[derive(Parser)]
#[command(name = "chess-cli")]
#[command(about = "Play chess by clicking squares in the terminal")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = CliConfig::DEFAULT_PATH)]
    config: PathBuf,

    /// Start from a FEN piece-placement field instead of the initial position
    #[arg(long)]
    placement: Option<String>,

    /// Give Black the first move
    #[arg(long)]
    black_first: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = CliConfig::load(&args.config)?;

    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level()?)
        .with_writer(io::stderr)
        .init();
    tracing::info!("Config: {:?}", args.config);

    let turn = if args.black_first {
        Color::Black
    } else {
        Color::White
    };
    let mut session = match &args.placement {
        Some(placement) => Session::from_placement(placement, turn)?,
        None => Session::with_board(chess_core::Board::initial(), turn),
    };

    let mut renderer = TextRenderer::new(config.display.clone());
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    session.render(&mut renderer);
    write!(stdout, "{}> ", renderer.take())?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let redraw = match Command::parse(&line) {
            Command::Quit => break,
            Command::Empty => false,
            Command::Click(square) => {
                let outcome = session.select(square);
                if outcome == SelectOutcome::Ignored {
                    writeln!(stdout, "Nothing to select on {}", square)?;
                }
                outcome != SelectOutcome::Ignored
            }
            Command::Move(from, to) => match session.make_move(from, to) {
                Ok(_) => true,
                Err(e) => {
                    writeln!(stdout, "{}", e)?;
                    false
                }
            },
            Command::Undo => match session.undo() {
                Ok(_) => true,
                Err(e) => {
                    writeln!(stdout, "{}", e)?;
                    false
                }
            },
            Command::Moves => {
                for entry in session.move_list() {
                    writeln!(stdout, "{}", entry)?;
                }
                false
            }
            Command::Board => true,
            Command::Reset => {
                session.reset();
                true
            }
            Command::Help => {
                writeln!(stdout, "{}", HELP)?;
                false
            }
            Command::Unknown(input) => {
                writeln!(stdout, "Unknown command: {} (type 'help')", input)?;
                false
            }
        };

        if redraw {
            session.render(&mut renderer);
            write!(stdout, "{}", renderer.take())?;
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    Ok(())
}
