//! Terminal game entrypoint
//!
//! Parses the command line, owns the terminal lifecycle and replays
//! sessions while the player wants more. The in-process high score
//! survives across sessions and dies with the process.

use anyhow::Result;
use clap::Parser;

use tetriz::core::{GameSession, PieceGenerator};
use tetriz::runner::run_session;
use tetriz::term::{TerminalInput, TerminalScreen};
use tetriz::types::GameOptions;
use tetriz::ui::GameUi;

/// Classic falling-block puzzle for the terminal
#[derive(Debug, Parser)]
#[command(name = "tetriz", version, about)]
struct Args {
    /// Starting difficulty level
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=25))]
    level: u32,

    /// Keep the gravity interval fixed instead of speeding up per level
    #[arg(long)]
    no_speedup: bool,

    /// Wipe the board every time the level advances
    #[arg(long)]
    clear_on_level_up: bool,

    /// Color blocks by piece kind
    #[arg(long)]
    colors: bool,

    /// Seed the piece generator for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let options = GameOptions {
        initial_level: args.level,
        increase_difficulty: !args.no_speedup,
        clear_board_on_level_up: args.clear_on_level_up,
        display_colors: args.colors,
    };

    let mut screen = TerminalScreen::new(options.display_colors);
    screen.enter()?;

    let result = run(&mut screen, options, args.seed);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut TerminalScreen, options: GameOptions, seed: Option<u64>) -> Result<()> {
    let mut input = TerminalInput::new();
    let mut high_score = 0u32;

    loop {
        screen.draw_chrome()?;
        if !screen.ready_prompt()? {
            return Ok(());
        }

        let generator = match seed {
            Some(seed) => PieceGenerator::from_seed(seed),
            None => PieceGenerator::new(),
        };
        let session = GameSession::new(options, generator, high_score);

        // Initial panels; the gravity thread takes over from here.
        screen.draw_score(&session.score())?;
        let (kind, rotation) = session.next_preview();
        screen.draw_next_piece(kind, rotation)?;
        screen.draw_level_banner(session.score().level)?;
        screen.draw_board(session.board(), None)?;

        let outcome = run_session(session, screen, &mut input)?;

        screen.draw_game_over(outcome.reason)?;
        if outcome.score.score > high_score {
            high_score = outcome.score.score;
            screen.draw_high_score(high_score)?;
        }
        if !screen.play_again_prompt()? {
            return Ok(());
        }
    }
}
