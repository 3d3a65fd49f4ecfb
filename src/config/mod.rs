//! Configuration loading for `tuckr.conf`.
//!
//! The configuration is located once per process, before any action runs,
//! and is immutable afterwards. Search order: `tuckr.conf` in the current
//! working directory, then `<home>/.config/tuckr.conf`. The first candidate
//! that reads and parses successfully wins; there is no merging.

pub mod ini;

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::logging::Logger;
use ini::Section;

/// Name of the configuration file.
pub const CONFIG_FILE: &str = "tuckr.conf";

/// The parsed configuration: an ordered collection of named sections.
#[derive(Debug, Clone, Default)]
pub struct Config {
    sections: Vec<Section>,
}

impl Config {
    /// An empty configuration (zero sections). Every key lookup misses, so
    /// downstream actions take their missing-key paths instead of crashing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the configuration has no sections at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Parse configuration from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Syntax`] on malformed content.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            sections: ini::parse(content)?,
        })
    }

    /// Parse a specific configuration file.
    ///
    /// This is the `--config` path: the user named the file explicitly, so
    /// a missing or malformed file is a hard error here, unlike the default
    /// search in [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Locate and parse the configuration from the default search paths.
    ///
    /// When no candidate loads, a single error notice is emitted and an
    /// empty configuration is returned; loading itself never fails.
    #[must_use]
    pub fn load(home: &Path, log: &Logger) -> Self {
        Self::load_from(&Self::search_paths(home), log)
    }

    /// Default candidate locations, in priority order.
    #[must_use]
    pub fn search_paths(home: &Path) -> [PathBuf; 2] {
        [
            PathBuf::from(CONFIG_FILE),
            home.join(".config").join(CONFIG_FILE),
        ]
    }

    fn load_from(candidates: &[PathBuf], log: &Logger) -> Self {
        for path in candidates {
            match Self::read_candidate(path) {
                Ok(Some(config)) => {
                    log.debug(&format!("loaded {}", path.display()));
                    return config;
                }
                Ok(None) => {}
                Err(e) => log.debug(&format!("skipping {}: {e}", path.display())),
            }
        }
        log.error("No config file was found");
        Self::empty()
    }

    /// Try one candidate path. `Ok(None)` means the file is not present;
    /// a file that exists but cannot be read or parsed is an `Err`, which
    /// the caller treats as "keep searching".
    fn read_candidate(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Some(Self::parse(&content)?))
    }

    /// Look up a section by name (case-sensitive).
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name() == name)
    }

    /// Look up a single key within a section.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_conf(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn from_file_parses_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_conf(
            dir.path(),
            CONFIG_FILE,
            "[GENERAL]\ndotfiles_repo = https://example.com/df.git\n",
        );
        let config = Config::from_file(&path).unwrap();
        assert_eq!(
            config.get("GENERAL", "dotfiles_repo"),
            Some("https://example.com/df.git")
        );
    }

    #[test]
    fn from_file_missing_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::from_file(&dir.path().join("absent.conf")).is_err());
    }

    #[test]
    fn from_file_malformed_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_conf(dir.path(), CONFIG_FILE, "orphan line\n");
        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn load_prefers_first_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_conf(dir.path(), "first.conf", "[GENERAL]\na = 1\n");
        let second = write_conf(dir.path(), "second.conf", "[GENERAL]\na = 2\n");
        let log = Logger::new("test");
        let config = Config::load_from(&[first, second], &log);
        assert_eq!(config.get("GENERAL", "a"), Some("1"));
    }

    #[test]
    fn load_falls_back_past_missing_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.conf");
        let second = write_conf(dir.path(), "second.conf", "[GENERAL]\na = 2\n");
        let log = Logger::new("test");
        let config = Config::load_from(&[missing, second], &log);
        assert_eq!(config.get("GENERAL", "a"), Some("2"));
    }

    #[test]
    fn load_falls_back_past_malformed_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write_conf(dir.path(), "bad.conf", "not ini at all\n");
        let good = write_conf(dir.path(), "good.conf", "[SCRIPTS]\nhello = echo hi\n");
        let log = Logger::new("test");
        let config = Config::load_from(&[bad, good], &log);
        assert_eq!(config.get("SCRIPTS", "hello"), Some("echo hi"));
    }

    #[test]
    fn load_with_no_usable_candidate_is_empty_with_one_notice() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write_conf(dir.path(), "bad.conf", "broken\n");
        let missing = dir.path().join("absent.conf");
        let log = Logger::new("test");
        let config = Config::load_from(&[bad, missing], &log);
        assert!(config.is_empty(), "malformed-only search should yield empty");
        assert_eq!(log.error_count(), 1, "exactly one notice expected");
        // The empty config stays usable for later lookups.
        assert_eq!(config.get("GENERAL", "dotfiles_repo"), None);
    }

    #[test]
    fn search_paths_cover_cwd_then_home_config() {
        let paths = Config::search_paths(Path::new("/home/user"));
        assert_eq!(paths[0], PathBuf::from("tuckr.conf"));
        assert_eq!(paths[1], PathBuf::from("/home/user/.config/tuckr.conf"));
    }

    #[test]
    fn empty_config_has_no_sections() {
        let config = Config::empty();
        assert!(config.is_empty());
        assert!(config.section("GENERAL").is_none());
    }
}
