//! # API Facade
//!
//! [`JournalApi`] is a thin facade over the command modules: the single
//! entry point for every journal operation, regardless of the UI in
//! front of it. It dispatches, normalizes inputs, and returns structured
//! [`CmdResult`] values. Business logic lives in `commands/*.rs`; the
//! facade never touches stdout, stderr, or the process exit code.

use crate::commands;
use crate::commands::list::ListOptions;
use crate::commands::{CmdResult, JournalPaths};
use crate::error::Result;
use crate::model::Note;
use crate::store::JournalStore;

pub struct JournalApi {
    store: JournalStore,
    paths: JournalPaths,
}

impl JournalApi {
    pub fn new(store: JournalStore, paths: JournalPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_note(
        &self,
        category: &str,
        content_parts: &[String],
        style: Option<&str>,
    ) -> Result<CmdResult> {
        commands::add::run(&self.store, category, content_parts, style)
    }

    pub fn list_notes(&self, options: &ListOptions) -> Result<CmdResult> {
        commands::list::run(&self.store, options)
    }

    /// Search terms are joined with single spaces into one literal term.
    pub fn search_notes(
        &self,
        terms: &[String],
        category: Option<&str>,
        quantity: Option<usize>,
        all: bool,
    ) -> Result<CmdResult> {
        let term = terms.join(" ");
        commands::search::run(&self.store, &term, category, quantity, all)
    }

    pub fn delete_notes(&self, criteria: &[String]) -> Result<CmdResult> {
        commands::delete::run(&self.store, criteria)
    }

    pub fn erase_notes(&self, skip_confirm: bool) -> Result<CmdResult> {
        commands::erase::run(&self.store, skip_confirm)
    }

    /// The note an `edit` with the given id (or none) would target.
    pub fn note_to_edit(&self, id: Option<i64>) -> Result<Note> {
        commands::edit::resolve_target(&self.store, id)
    }

    pub fn edit_note(&self, id: i64, new_content: &str) -> Result<CmdResult> {
        commands::edit::run(&self.store, id, new_content)
    }

    pub fn categories(&self, filter: Option<&str>) -> Result<CmdResult> {
        commands::categories::run(&self.store, filter)
    }

    pub fn backup(&self, filename: Option<&str>) -> Result<CmdResult> {
        commands::backup::run(&self.paths, filename)
    }

    pub fn restore(&self, filename: Option<&str>) -> Result<CmdResult> {
        commands::restore::run(&self.paths, filename)
    }

    pub fn paths(&self) -> &JournalPaths {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn api() -> JournalApi {
        let store = JournalStore::open_in_memory().unwrap();
        let paths = JournalPaths {
            journal_name: "notes".to_string(),
            db_file: PathBuf::from("notes.db"),
            backup_dir: PathBuf::from("backups/notes"),
        };
        JournalApi::new(store, paths)
    }

    #[test]
    fn search_terms_join_into_one_literal() {
        let api = api();
        api.add_note("General", &["the quick brown fox".to_string()], None)
            .unwrap();
        api.add_note("General", &["quick, brown".to_string()], None)
            .unwrap();

        let terms = vec!["quick".to_string(), "brown".to_string()];
        let result = api.search_notes(&terms, None, None, true).unwrap();
        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.listed_notes[0].content, "the quick brown fox");
    }

    #[test]
    fn dispatches_add_and_list() {
        let api = api();
        api.add_note("Work", &["standup".to_string()], None).unwrap();

        let result = api.list_notes(&ListOptions::default()).unwrap();
        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.listed_notes[0].category, "Work");
    }
}
