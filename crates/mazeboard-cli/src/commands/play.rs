//! Play command: a terminal stand-in for the maze level runner.
//!
//! Enter starts a level and Enter again marks the exit as reached. The
//! stopwatch in between is the completion time.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use mazeboard_core::{
    GameState, KeyValueStore, LeaderboardView, LevelOutcome, RunSession, ScoreStore,
    format_leaderboard_console,
};

/// Play through every level in the catalog
pub fn run<S: KeyValueStore>(store: &mut ScoreStore<S>) -> Result<()> {
    let mut session = RunSession::default();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!(
        "{} levels. Press Enter to start a level, Enter again at the exit, q to quit.",
        session.catalog().len()
    );

    loop {
        match session.state() {
            GameState::MainMenu => {
                let label = session.level_info_label().unwrap_or_default();
                if !prompt(&mut input, &format!("{} - ready?", label))? {
                    break;
                }
                session.start_level(Instant::now())?;
            }
            GameState::Playing => {
                if !prompt(&mut input, "Running... exit reached?")? {
                    break;
                }
                let outcome = session
                    .finish_level(store, Instant::now())
                    .context("failed to record completion")?;
                print_outcome(&outcome);
            }
            GameState::Completed => {
                println!("Congratulations! You've completed all levels!");
                print!("{}", format_leaderboard_console(&run_board(store, &session)));
                break;
            }
        }
    }

    Ok(())
}

/// Board covering every level the run went through
fn run_board<S: KeyValueStore>(store: &ScoreStore<S>, session: &RunSession) -> LeaderboardView {
    store.render(session.catalog().len())
}

fn print_outcome(outcome: &LevelOutcome) {
    let recorded = &outcome.recorded;
    match recorded.rank {
        Some(rank) => println!(
            "{} completed in {} (rank {})",
            recorded.level,
            recorded.entry,
            rank + 1
        ),
        None => println!("{} completed in {}", recorded.level, recorded.entry),
    }
}

/// Show `message` and wait for a line; `false` on EOF or "q"
fn prompt<R: BufRead>(input: &mut R, message: &str) -> Result<bool> {
    print!("{} ", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(!line.trim().eq_ignore_ascii_case("q"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazeboard_core::{LevelKey, MemoryStore};
    use std::io::Cursor;

    #[test]
    fn test_run_board_covers_whole_catalog() {
        let mut store = ScoreStore::load(MemoryStore::new());
        store.record_completion(LevelKey::new(2), 30.0).unwrap();
        let session = RunSession::default();

        let view = run_board(&store, &session);

        assert_eq!(view.levels.len(), session.catalog().len());
        assert_eq!(view.levels[2].label, "Level 3");
        assert_eq!(view.levels[2].times, vec!["30.00 seconds"]);
    }

    #[test]
    fn test_prompt_continues_on_enter() {
        let mut input = Cursor::new("\n");
        assert!(prompt(&mut input, "go?").unwrap());
    }

    #[test]
    fn test_prompt_stops_on_quit_or_eof() {
        assert!(!prompt(&mut Cursor::new("q\n"), "go?").unwrap());
        assert!(!prompt(&mut Cursor::new("Q\n"), "go?").unwrap());
        assert!(!prompt(&mut Cursor::new(""), "go?").unwrap());
    }
}
