//! Difficulty and audio settings, persisted as a three-line config file.
//!
//! File format (fixed order, one field per line):
//! difficulty code (0/1/2), music enabled (0/1), sound effects enabled (0/1).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::SETTINGS_FILE;

/// Snake speed tier. One canonical mapping to the movement tick interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Movement tick interval in milliseconds (lower = faster).
    pub fn tick_interval_ms(self) -> u64 {
        match self {
            Self::Easy => 200,
            Self::Normal => 100,
            Self::Hard => 50,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
        }
    }

    /// Integer code used in the settings file.
    pub fn code(self) -> u8 {
        match self {
            Self::Easy => 0,
            Self::Normal => 1,
            Self::Hard => 2,
        }
    }

    /// Inverse of [`Difficulty::code`]. Unknown codes fall back to Normal.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Easy,
            2 => Self::Hard,
            _ => Self::Normal,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Easy => Self::Normal,
            Self::Normal => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Easy => Self::Hard,
            Self::Normal => Self::Easy,
            Self::Hard => Self::Normal,
        }
    }
}

/// Process-wide settings, loaded once at startup and saved only on the
/// explicit save action in the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub music_enabled: bool,
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            music_enabled: true,
            sound_enabled: true,
        }
    }
}

/// Reads and writes the settings file. A failed load leaves defaults in
/// place; callers are expected to skip failed saves.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SETTINGS_FILE),
        }
    }

    pub fn load(&self) -> Settings {
        match fs::read_to_string(&self.path) {
            Ok(text) => parse_settings(&text).unwrap_or_default(),
            Err(_) => Settings::default(),
        }
    }

    /// Complete rewrite of the file on every save.
    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        let text = format!(
            "{}\n{}\n{}\n",
            settings.difficulty.code(),
            settings.music_enabled as u8,
            settings.sound_enabled as u8,
        );
        fs::write(&self.path, text)
    }
}

fn parse_settings(text: &str) -> Option<Settings> {
    let mut lines = text.lines();
    let difficulty = Difficulty::from_code(lines.next()?.trim().parse().ok()?);
    let music_enabled = lines.next()?.trim() == "1";
    let sound_enabled = lines.next()?.trim() == "1";
    Some(Settings {
        difficulty,
        music_enabled,
        sound_enabled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_speed_tiers_are_ordered() {
        assert!(Difficulty::Easy.tick_interval_ms() > Difficulty::Normal.tick_interval_ms());
        assert!(Difficulty::Normal.tick_interval_ms() > Difficulty::Hard.tick_interval_ms());
    }

    #[test]
    fn test_code_round_trip() {
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_code(d.code()), d);
        }
        assert_eq!(Difficulty::from_code(99), Difficulty::Normal);
    }

    #[test]
    fn test_parse_settings() {
        let parsed = parse_settings("2\n0\n1\n").unwrap();
        assert_eq!(parsed.difficulty, Difficulty::Hard);
        assert!(!parsed.music_enabled);
        assert!(parsed.sound_enabled);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_settings("").is_none());
        assert!(parse_settings("difficulty=hard").is_none());
        assert!(parse_settings("1\n1").is_none());
    }
}
