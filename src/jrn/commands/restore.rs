use log::info;
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

use crate::commands::{CmdMessage, CmdResult, JournalPaths};
use crate::error::{JrnError, Result};

/// Copies a backup file over the live database. Without a filename the
/// newest backup in the journal's backup directory is used. The copy is
/// not an atomic swap; a crash mid-copy can leave the live file torn.
pub fn run(paths: &JournalPaths, filename: Option<&str>) -> Result<CmdResult> {
    let source = match filename {
        Some(name) => {
            let name = name.strip_suffix(".db").unwrap_or(name);
            paths.backup_dir.join(format!("{}.db", name))
        }
        None => newest_backup(paths)?
            .ok_or_else(|| JrnError::BackupNotFound(paths.backup_dir.display().to_string()))?,
    };

    if !source.exists() {
        return Err(JrnError::BackupNotFound(source.display().to_string()));
    }

    info!(
        "restoring {} from {}",
        paths.db_file.display(),
        source.display()
    );
    fs::copy(&source, &paths.db_file)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Restored {} from {}",
        paths.db_file.display(),
        source.display()
    )));
    Ok(result.with_backup_path(source))
}

/// The backup file with the newest creation time, or modification time
/// where the filesystem reports no birth time.
fn newest_backup(paths: &JournalPaths) -> Result<Option<PathBuf>> {
    let entries = match fs::read_dir(&paths.backup_dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(None),
    };

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let metadata = entry.metadata()?;
        let stamp = metadata.created().or_else(|_| metadata.modified())?;
        if newest.as_ref().map_or(true, |(best, _)| stamp > *best) {
            newest = Some((stamp, path));
        }
    }
    Ok(newest.map(|(_, path)| path))
}
