use chrono::Local;
use log::info;
use std::fs;

use crate::commands::{CmdMessage, CmdResult, JournalPaths};
use crate::error::Result;

const BACKUP_TIMESTAMP_FORMAT: &str = "%y_%m_%d_%H_%M_%S";

/// Copies the live database file into the journal's backup directory.
/// Without a filename the backup is named
/// `backup_{journal}_{timestamp}.db`; explicit names get a `.db` suffix
/// normalized on.
pub fn run(paths: &JournalPaths, filename: Option<&str>) -> Result<CmdResult> {
    if !paths.backup_dir.exists() {
        fs::create_dir_all(&paths.backup_dir)?;
    }

    let name = match filename {
        Some(name) => name.strip_suffix(".db").unwrap_or(name).to_string(),
        None => format!(
            "backup_{}_{}",
            paths.journal_name,
            Local::now().format(BACKUP_TIMESTAMP_FORMAT)
        ),
    };
    let target = paths.backup_dir.join(format!("{}.db", name));

    info!(
        "backing up {} to {}",
        paths.db_file.display(),
        target.display()
    );
    fs::copy(&paths.db_file, &target)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Backed up {} to {}",
        paths.db_file.display(),
        target.display()
    )));
    Ok(result.with_backup_path(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn paths_in(dir: &Path) -> JournalPaths {
        JournalPaths {
            journal_name: "notes".to_string(),
            db_file: dir.join("notes.db"),
            backup_dir: dir.join("backups").join("notes"),
        }
    }

    #[test]
    fn copies_database_byte_for_byte() {
        let temp = TempDir::new().unwrap();
        let paths = paths_in(temp.path());
        fs::write(&paths.db_file, b"journal bytes").unwrap();

        let result = run(&paths, Some("snapshot")).unwrap();

        let target = result.backup_path.unwrap();
        assert_eq!(target, paths.backup_dir.join("snapshot.db"));
        assert_eq!(fs::read(target).unwrap(), b"journal bytes");
    }

    #[test]
    fn explicit_db_suffix_is_not_doubled() {
        let temp = TempDir::new().unwrap();
        let paths = paths_in(temp.path());
        fs::write(&paths.db_file, b"x").unwrap();

        let result = run(&paths, Some("snapshot.db")).unwrap();
        assert_eq!(
            result.backup_path.unwrap(),
            paths.backup_dir.join("snapshot.db")
        );
    }

    #[test]
    fn default_name_carries_journal_name() {
        let temp = TempDir::new().unwrap();
        let paths = paths_in(temp.path());
        fs::write(&paths.db_file, b"x").unwrap();

        let result = run(&paths, None).unwrap();
        let name = result
            .backup_path
            .unwrap()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        assert!(name.starts_with("backup_notes_"));
        assert!(name.ends_with(".db"));
    }

    #[test]
    fn missing_database_is_an_error() {
        let temp = TempDir::new().unwrap();
        let paths = paths_in(temp.path());
        assert!(run(&paths, None).is_err());
    }
}
