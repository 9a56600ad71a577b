//! Match result log
//!
//! Appends one plain-text line per finished match:
//! `Mode: <mode> | Date & Time: <YYYY-MM-DD HH:MM:SS> | Winner: <name>`

use bevy::prelude::*;
use chrono::{Local, NaiveDateTime};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::sim::MatchMode;

/// Timestamp layout used in the log
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format one log line (without the trailing newline)
pub fn format_result_line(mode: MatchMode, timestamp: &NaiveDateTime, winner: &str) -> String {
    format!(
        "Mode: {} | Date & Time: {} | Winner: {}",
        mode.label(),
        timestamp.format(TIMESTAMP_FORMAT),
        winner
    )
}

/// Append-only results file
#[derive(Resource, Debug, Clone)]
pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Log a result stamped with the current local time.
    ///
    /// Returns `Ok(false)` without touching the file when `winner` is empty.
    pub fn append(&self, mode: MatchMode, winner: &str) -> std::io::Result<bool> {
        self.append_at(mode, winner, &Local::now().naive_local())
    }

    /// Log a result with an explicit timestamp
    pub fn append_at(
        &self,
        mode: MatchMode,
        winner: &str,
        timestamp: &NaiveDateTime,
    ) -> std::io::Result<bool> {
        if winner.is_empty() {
            return Ok(false);
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", format_result_line(mode, timestamp, winner))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap()
    }

    fn temp_log(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "pong_game_results_{}_{}.txt",
            std::process::id(),
            name
        ));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_line_format_ai_match() {
        let line = format_result_line(MatchMode::VersusAi, &fixed_time(), "Player 1");
        assert_eq!(
            line,
            "Mode: AI vs Player | Date & Time: 2024-03-09 14:05:07 | Winner: Player 1"
        );
    }

    #[test]
    fn test_line_format_multiplayer() {
        let line = format_result_line(MatchMode::Multiplayer, &fixed_time(), "Kai");
        assert!(line.starts_with("Mode: Multiplayer | Date & Time: "));
        assert!(line.ends_with(" | Winner: Kai"));
    }

    #[test]
    fn test_append_adds_one_line_per_match() {
        let path = temp_log("append");
        let log = ResultLog::new(&path);

        assert!(log.append_at(MatchMode::VersusAi, "AI", &fixed_time()).unwrap());
        assert!(log.append(MatchMode::Multiplayer, "Mo").unwrap());

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Mode: AI vs Player | Date & Time: 2024-03-09 14:05:07 | Winner: AI"
        );
        assert!(lines[1].starts_with("Mode: Multiplayer | Date & Time: "));
        assert!(content.ends_with('\n'));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_empty_winner_is_skipped() {
        let path = temp_log("empty");
        let log = ResultLog::new(&path);

        assert!(!log.append(MatchMode::VersusAi, "").unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_unwritable_path_reports_error() {
        let dir = std::env::temp_dir().join(format!("pong_game_no_such_dir_{}", std::process::id()));
        let log = ResultLog::new(dir.join("nested").join("results.txt"));
        assert!(log.append(MatchMode::VersusAi, "AI").is_err());
    }
}
