//! Terminal runner (default binary).
//!
//! Owns the gravity clock and the terminal. The engine is driven purely by
//! calls: key presses become [`GameAction`]s and the clock calls `tick`.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};

use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport, MAX_CELL_WIDTH};
use blockfall::types::{GameAction, Phase};

/// Classic falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "blockfall",
    version,
    about = "Classic falling-block puzzle in the terminal.",
    long_about = "Blockfall is a terminal falling-block puzzle.\n\n\
        CONTROLS:\n  Left/h/a    Move left    Right/l/d   Move right   Down/j/s   Soft drop\n  \
        Up/k/w/x    Rotate CW    Space       Hard drop    P          Pause\n  \
        Enter/r     Start        Q / Ctrl-C  Quit"
)]
struct Args {
    /// Seed for the piece sequence. Random if omitted.
    #[arg(long, value_name = "N")]
    seed: Option<u32>,

    /// Terminal columns per board cell (1-4).
    #[arg(
        long,
        default_value = "2",
        value_name = "COLS",
        value_parser = clap::value_parser!(u16).range(1..=MAX_CELL_WIDTH as i64)
    )]
    cell_width: u16,

    /// Hide the landing preview.
    #[arg(long)]
    no_ghost: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(clock_seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args, seed);

    // Restore the terminal before anything is printed.
    let restored = term.exit();
    let score = first_error(result, restored)?;
    println!("Final score: {score}");
    Ok(())
}

/// Run until the player quits; returns the final score.
fn run(term: &mut TerminalRenderer, args: &Args, seed: u32) -> Result<u32> {
    let mut game = GameState::new(seed);
    let view = GameView::new(args.cell_width).with_ghost(!args.no_ghost);

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_drop = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // The gravity clock only runs while playing.
        let interval = Duration::from_millis(game.drop_interval_ms() as u64);
        if !game.is_playing() {
            last_drop = Instant::now();
        }
        let timeout = interval.saturating_sub(last_drop.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(game.score());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let was_playing = game.is_playing();
                        game.apply_action(action);
                        if action == GameAction::Start || !was_playing {
                            last_drop = Instant::now();
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if game.phase() == Phase::Playing && last_drop.elapsed() >= interval {
            last_drop = Instant::now();
            game.tick();
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// The game's error wins over a failed terminal restore.
fn first_error(result: Result<u32>, restored: Result<()>) -> Result<u32> {
    let score = result?;
    restored?;
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn run_error_is_reported_before_restore_error() {
        let err = first_error(Err(anyhow!("run failed")), Err(anyhow!("restore failed"))).unwrap_err();
        assert_eq!(err.to_string(), "run failed");
    }

    #[test]
    fn restore_error_surfaces_after_clean_run() {
        let err = first_error(Ok(10), Err(anyhow!("restore failed"))).unwrap_err();
        assert_eq!(err.to_string(), "restore failed");
        assert_eq!(first_error(Ok(10), Ok(())).unwrap(), 10);
    }

    #[test]
    fn cell_width_flag_is_bounded() {
        assert_eq!(Args::try_parse_from(["blockfall"]).unwrap().cell_width, 2);
        assert_eq!(Args::try_parse_from(["blockfall", "--cell-width", "4"]).unwrap().cell_width, 4);
        assert!(Args::try_parse_from(["blockfall", "--cell-width", "0"]).is_err());
        assert!(Args::try_parse_from(["blockfall", "--cell-width", "7000"]).is_err());
    }
}
