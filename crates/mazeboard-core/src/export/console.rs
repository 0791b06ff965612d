//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::score::{LeaderboardView, LevelBoard};

/// Format the leaderboard for the terminal
///
/// "Leaderboard" heading, then each level's label and a numbered list of
/// times. Levels without times show a dimmed placeholder.
pub fn format_leaderboard_console(view: &LeaderboardView) -> String {
    let mut output = String::new();
    let border: String = "━".repeat(32);

    let _ = writeln!(output, "{}", border.dimmed());
    let _ = writeln!(output, "  {}", "Leaderboard".bold());
    let _ = writeln!(output, "{}", border.dimmed());

    for board in &view.levels {
        format_level_board(&mut output, board);
    }

    output
}

fn format_level_board(output: &mut String, board: &LevelBoard) {
    let _ = writeln!(output, "  {}", board.label.bold());

    if board.times.is_empty() {
        let _ = writeln!(output, "    {}", "no times yet".dimmed());
        return;
    }

    for (rank, time) in board.times.iter().enumerate() {
        let _ = writeln!(output, "    {} {}", format_colored_rank(rank + 1), time);
    }
}

fn format_colored_rank(rank: usize) -> String {
    let label = format!("{}.", rank);
    match rank {
        1 => label.truecolor(255, 200, 0).bold().to_string(),
        2 => label.truecolor(192, 192, 192).to_string(),
        3 => label.truecolor(205, 127, 50).to_string(),
        _ => label.dimmed().to_string(),
    }
}
