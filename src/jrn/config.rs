use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_JOURNAL_NAME: &str = "notes";

/// Which journal is active, and where journal files live.
///
/// Persisted as a small JSON file; rewritten only by the `load` command.
/// A missing or unreadable file falls back to defaults, so a broken
/// config can never keep the tool from starting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalConfig {
    /// Directory holding the journal database files and their backups
    pub journal_dir: PathBuf,

    /// Name of the active journal
    pub journal_name: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            journal_dir: default_home().join("journals"),
            journal_name: DEFAULT_JOURNAL_NAME.to_string(),
        }
    }
}

/// Base directory for the config file and the default journal location.
/// `JRN_HOME` overrides the per-user directories, which keeps tests (and
/// anyone wanting a portable setup) away from the real home directory.
fn default_home() -> PathBuf {
    if let Some(home) = std::env::var_os("JRN_HOME") {
        return PathBuf::from(home);
    }
    let proj_dirs = ProjectDirs::from("com", "jrn", "jrn").expect("Could not determine config dir");
    proj_dirs.data_dir().to_path_buf()
}

impl JournalConfig {
    /// Path of the persisted config file.
    pub fn config_file() -> PathBuf {
        default_home().join(CONFIG_FILENAME)
    }

    /// Load config from `path`, creating it with defaults if it does not
    /// exist. A corrupt file is replaced with defaults rather than
    /// failing the whole invocation.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("config file {} is unreadable ({}), recreating with defaults", path.display(), e);
                let config = Self::default();
                config.save(path)?;
                Ok(config)
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Switch the active journal.
    pub fn set_journal(&mut self, name: &str) {
        self.journal_name = name.to_string();
    }

    /// The active journal's database file: `{journal_dir}/{name}.db`.
    pub fn db_file(&self) -> PathBuf {
        self.journal_dir.join(format!("{}.db", self.journal_name))
    }

    /// Backups for the active journal: `{journal_dir}/backups/{name}/`.
    pub fn backup_dir(&self) -> PathBuf {
        self.journal_dir.join("backups").join(&self.journal_name)
    }
}
