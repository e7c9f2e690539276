use std::path::PathBuf;

use crate::config::JournalConfig;
use crate::model::Note;

pub mod add;
pub mod backup;
pub mod categories;
pub mod delete;
pub mod edit;
pub mod erase;
pub mod list;
pub mod load;
pub mod restore;
pub mod search;

/// Filesystem locations for one journal, resolved once from the config.
#[derive(Debug, Clone)]
pub struct JournalPaths {
    pub journal_name: String,
    pub db_file: PathBuf,
    pub backup_dir: PathBuf,
}

impl JournalPaths {
    pub fn from_config(config: &JournalConfig) -> Self {
        Self {
            journal_name: config.journal_name.clone(),
            db_file: config.db_file(),
            backup_dir: config.backup_dir(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<Note>,
    pub categories: Vec<String>,
    pub backup_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_backup_path(mut self, path: PathBuf) -> Self {
        self.backup_path = Some(path);
        self
    }
}
