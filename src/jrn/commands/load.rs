use log::info;
use std::fs;
use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::config::JournalConfig;
use crate::error::Result;

/// Switches the active journal, persisting the choice and creating the
/// journal directory on first use. The database file itself appears when
/// the store is first opened against it.
pub fn run(config: &mut JournalConfig, config_file: &Path, name: &str) -> Result<CmdResult> {
    config.set_journal(name);
    config.save(config_file)?;

    if !config.journal_dir.exists() {
        fs::create_dir_all(&config.journal_dir)?;
    }

    info!("active journal is now {}", config.db_file().display());
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Set journal to {}",
        config.db_file().display()
    )));
    Ok(result)
}
