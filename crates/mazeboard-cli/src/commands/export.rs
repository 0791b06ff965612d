//! Export command for writing the leaderboard out.

use std::path::Path;

use anyhow::{Context, Result};
use mazeboard_core::{KeyValueStore, ScoreStore, format_leaderboard_json, format_leaderboard_tsv};

use crate::cli::ExportFormat;
use crate::config::Config;

/// Export the configured levels as TSV or JSON
pub fn run<S: KeyValueStore>(
    store: &ScoreStore<S>,
    config: &Config,
    output: Option<&Path>,
    format: ExportFormat,
) -> Result<()> {
    let content = render(store, config.level_count, format)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, &content)
            .with_context(|| format!("failed to write {}", output_path.display()))?;
        eprintln!("Exported to: {}", output_path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}

fn render<S: KeyValueStore>(
    store: &ScoreStore<S>,
    level_count: usize,
    format: ExportFormat,
) -> Result<String> {
    Ok(match format {
        ExportFormat::Tsv => format_leaderboard_tsv(store.table(), level_count),
        ExportFormat::Json => format_leaderboard_json(&store.render(level_count))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazeboard_core::{LevelKey, MemoryStore};

    fn sample_store() -> ScoreStore<MemoryStore> {
        let mut store = ScoreStore::load(MemoryStore::new());
        store.record_completion(LevelKey::new(0), 12.5).unwrap();
        store
    }

    #[test]
    fn test_render_tsv() {
        let content = render(&sample_store(), 3, ExportFormat::Tsv).unwrap();
        assert_eq!(content, "level\trank\tseconds\n1\t1\t12.50");
    }

    #[test]
    fn test_export_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        let config = Config {
            level_count: 2,
            ..Config::default()
        };

        run(&sample_store(), &config, Some(&path), ExportFormat::Json).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["levels"].as_array().unwrap().len(), 2);
        assert_eq!(json["levels"][0]["times"][0], "12.50 seconds");
    }
}
