//! High-score table persisted as `name score` lines, kept sorted descending.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::{LEADERBOARD_DISPLAY_LIMIT, SCORES_FILE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

pub struct Leaderboard {
    path: PathBuf,
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    /// Loads the score file from `data_dir`; an unreadable file starts empty.
    /// Stored order is kept as-is (saves always write sorted).
    pub fn open(data_dir: &Path) -> Self {
        let path = data_dir.join(SCORES_FILE);
        let mut entries = Vec::new();
        if let Ok(text) = fs::read_to_string(&path) {
            for line in text.lines() {
                let mut parts = line.split_whitespace();
                if let (Some(name), Some(score)) = (parts.next(), parts.next()) {
                    if let Ok(score) = score.parse() {
                        entries.push(ScoreEntry {
                            name: name.to_string(),
                            score,
                        });
                    }
                }
            }
        }
        Self { path, entries }
    }

    /// Appends an entry, re-sorts descending by score (stable, so ties keep
    /// insertion order) and persists. A failed write is skipped silently.
    pub fn add_score(&mut self, name: &str, score: u32) {
        self.entries.push(ScoreEntry {
            name: name.to_string(),
            score,
        });
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        let _ = self.save();
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Display view: at most the top ten entries. Storage is not truncated.
    pub fn top(&self) -> &[ScoreEntry] {
        let n = self.entries.len().min(LEADERBOARD_DISPLAY_LIMIT);
        &self.entries[..n]
    }

    fn save(&self) -> io::Result<()> {
        let mut text = String::new();
        for entry in &self.entries {
            text.push_str(&format!("{} {}\n", entry.name, entry.score));
        }
        fs::write(&self.path, text)
    }
}
