//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without touching the saved leaderboard.

use std::path::PathBuf;

use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "mazeboard")]
struct Args {
    #[arg(short, long, default_value = "mazeboard.toml")]
    config: PathBuf,

    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Record {
        #[arg(allow_hyphen_values = true)]
        level: i64,
        #[arg(allow_hyphen_values = true)]
        seconds: f64,
    },
    Show {
        #[arg(long)]
        level: Option<i64>,
        #[arg(long)]
        json: bool,
    },
    Clear {
        #[arg(long)]
        yes: bool,
    },
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value = "tsv")]
        format: ExportFormat,
    },
    Play,
}

#[derive(Clone, Debug, PartialEq, clap::ValueEnum)]
enum ExportFormat {
    Tsv,
    Json,
}

#[test]
fn test_subcommand_required() {
    assert!(Args::try_parse_from(["mazeboard"]).is_err());
}

#[test]
fn test_parse_record() {
    let args = Args::try_parse_from(["mazeboard", "record", "1", "12.34"]).unwrap();
    assert_eq!(args.config, PathBuf::from("mazeboard.toml"));
    match args.command {
        Command::Record { level, seconds } => {
            assert_eq!(level, 1);
            assert_eq!(seconds, 12.34);
        }
        _ => panic!("Expected Record command"),
    }
}

#[test]
fn test_parse_record_negative_values_reach_validation() {
    let args = Args::try_parse_from(["mazeboard", "record", "-1", "-5"]).unwrap();
    match args.command {
        Command::Record { level, seconds } => {
            assert_eq!(level, -1);
            assert_eq!(seconds, -5.0);
        }
        _ => panic!("Expected Record command"),
    }
}

#[test]
fn test_parse_record_rejects_fractional_level() {
    assert!(Args::try_parse_from(["mazeboard", "record", "1.5", "10"]).is_err());
}

#[test]
fn test_parse_show_defaults() {
    let args = Args::try_parse_from(["mazeboard", "show"]).unwrap();
    match args.command {
        Command::Show { level, json } => {
            assert!(level.is_none());
            assert!(!json);
        }
        _ => panic!("Expected Show command"),
    }
}

#[test]
fn test_parse_show_single_level_json() {
    let args = Args::try_parse_from(["mazeboard", "show", "--level", "2", "--json"]).unwrap();
    match args.command {
        Command::Show { level, json } => {
            assert_eq!(level, Some(2));
            assert!(json);
        }
        _ => panic!("Expected Show command"),
    }
}

#[test]
fn test_parse_clear() {
    let args = Args::try_parse_from(["mazeboard", "clear"]).unwrap();
    assert!(matches!(args.command, Command::Clear { yes: false }));

    let args = Args::try_parse_from(["mazeboard", "clear", "--yes"]).unwrap();
    assert!(matches!(args.command, Command::Clear { yes: true }));
}

#[test]
fn test_parse_export() {
    let args = Args::try_parse_from(["mazeboard", "export"]).unwrap();
    match args.command {
        Command::Export { output, format } => {
            assert!(output.is_none());
            assert_eq!(format, ExportFormat::Tsv);
        }
        _ => panic!("Expected Export command"),
    }

    let args =
        Args::try_parse_from(["mazeboard", "export", "-f", "json", "-o", "board.json"]).unwrap();
    match args.command {
        Command::Export { output, format } => {
            assert_eq!(output, Some(PathBuf::from("board.json")));
            assert_eq!(format, ExportFormat::Json);
        }
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn test_parse_global_options() {
    let args = Args::try_parse_from([
        "mazeboard",
        "--config",
        "custom.toml",
        "--data-dir",
        "/tmp/board",
        "play",
    ])
    .unwrap();
    assert_eq!(args.config, PathBuf::from("custom.toml"));
    assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/board")));
    assert!(matches!(args.command, Command::Play));
}

#[test]
fn test_parse_invalid_format() {
    assert!(Args::try_parse_from(["mazeboard", "export", "--format", "csv"]).is_err());
}
