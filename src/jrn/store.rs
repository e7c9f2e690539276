//! # Journal Store
//!
//! One [`JournalStore`] owns the SQLite connection for one journal file
//! and is the only module that issues SQL. Everything above it (the
//! command modules) works with [`Note`] values.
//!
//! Schema: a single `notes` table. `id` is assigned by the store as
//! `max(id) + 1` (0 for an empty table), so ids are monotonic and never
//! reused; a deleted id leaves a permanent gap. Erasing every row resets
//! the sequence, since the next id is derived from the current contents
//! rather than a persistent counter.
//!
//! All statements are parameterized. Category filters are exact matches;
//! substring-style matching (search, categories) happens in the command
//! layer on already-fetched rows, never in SQL.

use log::debug;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use std::path::Path;

use crate::error::Result;
use crate::model::Note;

const SCHEMA: &str =
    "CREATE TABLE IF NOT EXISTS notes (id INTEGER PRIMARY KEY, timestamp TEXT, category TEXT, content TEXT)";

const SELECT_COLUMNS: &str = "SELECT id, timestamp, category, content FROM notes";

pub struct JournalStore {
    conn: Connection,
}

impl JournalStore {
    /// Opens (creating if needed) the journal database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("opening journal database at {}", path.as_ref().display());
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    /// In-memory journal, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    fn ensure_schema(&self) -> Result<()> {
        self.conn.execute(SCHEMA, [])?;
        Ok(())
    }

    /// Inserts a new note and returns it. The id is one greater than the
    /// current maximum, or 0 for an empty journal.
    pub fn add(&self, category: &str, content: &str) -> Result<Note> {
        let id = match self.max_id()? {
            Some(max) => max + 1,
            None => 0,
        };
        let note = Note::new(id, category.to_string(), content.to_string());
        self.insert(&note)?;
        Ok(note)
    }

    pub fn insert(&self, note: &Note) -> Result<()> {
        self.conn.execute(
            "INSERT INTO notes (id, timestamp, category, content) VALUES (?1, ?2, ?3, ?4)",
            params![
                note.id,
                note.timestamp_string(),
                note.category,
                note.content
            ],
        )?;
        Ok(())
    }

    pub fn get(&self, id: i64) -> Result<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE id = ?1", SELECT_COLUMNS))?;
        let mut rows = stmt.query_map(params![id], row_to_note)?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    /// The most recently added note (highest id), if any.
    pub fn latest(&self) -> Result<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY id DESC LIMIT 1", SELECT_COLUMNS))?;
        let mut rows = stmt.query_map([], row_to_note)?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    /// Notes ordered most recent first, optionally filtered to one exact
    /// category, optionally truncated.
    pub fn list(&self, category: Option<&str>, limit: Option<usize>) -> Result<Vec<Note>> {
        // SQLite treats a negative LIMIT as "no limit".
        let limit = limit.map(|n| n as i64).unwrap_or(-1);
        let mut notes = Vec::new();
        match category {
            Some(category) => {
                let mut stmt = self.conn.prepare(&format!(
                    "{} WHERE category = ?1 ORDER BY id DESC LIMIT ?2",
                    SELECT_COLUMNS
                ))?;
                let rows = stmt.query_map(params![category, limit], row_to_note)?;
                for row in rows {
                    notes.push(row?);
                }
            }
            None => {
                let mut stmt = self
                    .conn
                    .prepare(&format!("{} ORDER BY id DESC LIMIT ?1", SELECT_COLUMNS))?;
                let rows = stmt.query_map(params![limit], row_to_note)?;
                for row in rows {
                    notes.push(row?);
                }
            }
        }
        Ok(notes)
    }

    /// Every note, most recent first.
    pub fn fetch_all(&self) -> Result<Vec<Note>> {
        self.list(None, None)
    }

    /// Replaces a note's content in place, leaving id, category, and
    /// timestamp untouched. Returns false if no such note exists.
    pub fn update_content(&self, id: i64, content: &str) -> Result<bool> {
        let affected = self.conn.execute(
            "UPDATE notes SET content = ?1 WHERE id = ?2",
            params![content, id],
        )?;
        Ok(affected > 0)
    }

    /// Deletes one note by id. Returns false if no such note existed.
    pub fn delete_note(&self, id: i64) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    /// Deletes every note. Returns how many were removed.
    pub fn erase(&self) -> Result<usize> {
        let affected = self.conn.execute("DELETE FROM notes", [])?;
        Ok(affected)
    }

    /// Distinct category names, ascending.
    pub fn categories(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT category FROM notes ORDER BY category ASC")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        let mut categories = Vec::new();
        for row in rows {
            categories.push(row?);
        }
        Ok(categories)
    }

    pub fn max_id(&self) -> Result<Option<i64>> {
        let max: Option<i64> = self
            .conn
            .query_row("SELECT max(id) FROM notes", [], |row| row.get(0))?;
        Ok(max)
    }
}

fn row_to_note(row: &Row) -> rusqlite::Result<Note> {
    let raw_timestamp: String = row.get(1)?;
    let timestamp = Note::parse_timestamp(&raw_timestamp)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;
    Ok(Note {
        id: row.get(0)?,
        timestamp,
        category: row.get(2)?,
        content: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_CATEGORY;

    fn store_with_notes(contents: &[&str]) -> JournalStore {
        let store = JournalStore::open_in_memory().unwrap();
        for content in contents {
            store.add(DEFAULT_CATEGORY, content).unwrap();
        }
        store
    }

    #[test]
    fn ids_are_sequential_from_zero() {
        let store = store_with_notes(&["a", "b", "c"]);
        let ids: Vec<i64> = store.fetch_all().unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 1, 0]);
    }

    #[test]
    fn next_id_skips_deleted_gaps() {
        let store = store_with_notes(&["a", "b", "c"]);
        assert!(store.delete_note(1).unwrap());
        let note = store.add(DEFAULT_CATEGORY, "d").unwrap();
        // max is still 2, so the gap at 1 is never refilled
        assert_eq!(note.id, 3);
    }

    #[test]
    fn id_sequence_resets_after_erase() {
        let store = store_with_notes(&["a", "b"]);
        assert_eq!(store.erase().unwrap(), 2);
        let note = store.add(DEFAULT_CATEGORY, "fresh").unwrap();
        assert_eq!(note.id, 0);
    }

    #[test]
    fn list_orders_most_recent_first_and_truncates() {
        let store = store_with_notes(&["a", "b", "c", "d", "e"]);
        let page = store.list(None, Some(3)).unwrap();
        let ids: Vec<i64> = page.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![4, 3, 2]);
    }

    #[test]
    fn list_filters_by_exact_category() {
        let store = JournalStore::open_in_memory().unwrap();
        store.add("Work", "standup").unwrap();
        store.add("General", "misc").unwrap();
        store.add("Work", "retro").unwrap();

        let work = store.list(Some("Work"), None).unwrap();
        assert_eq!(work.len(), 2);
        assert!(work.iter().all(|n| n.category == "Work"));

        // Exact match only: a prefix is not enough
        assert!(store.list(Some("Wor"), None).unwrap().is_empty());
    }

    #[test]
    fn update_content_preserves_everything_else() {
        let store = store_with_notes(&["original"]);
        let before = store.get(0).unwrap().unwrap();

        assert!(store.update_content(0, "rewritten").unwrap());

        let after = store.get(0).unwrap().unwrap();
        assert_eq!(after.content, "rewritten");
        assert_eq!(after.id, before.id);
        assert_eq!(after.category, before.category);
        assert_eq!(after.timestamp, before.timestamp);
        assert_eq!(store.fetch_all().unwrap().len(), 1);
    }

    #[test]
    fn update_content_reports_missing_note() {
        let store = JournalStore::open_in_memory().unwrap();
        assert!(!store.update_content(9, "x").unwrap());
    }

    #[test]
    fn delete_missing_note_is_a_noop() {
        let store = store_with_notes(&["a"]);
        assert!(!store.delete_note(41).unwrap());
        assert_eq!(store.fetch_all().unwrap().len(), 1);
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        let store = JournalStore::open_in_memory().unwrap();
        store.add("Work", "a").unwrap();
        store.add("General", "b").unwrap();
        store.add("Work", "c").unwrap();
        store.add("Errands", "d").unwrap();

        assert_eq!(
            store.categories().unwrap(),
            vec!["Errands", "General", "Work"]
        );
    }

    #[test]
    fn notes_round_trip_by_value() {
        let store = store_with_notes(&["hello world"]);
        let note = store.get(0).unwrap().unwrap();
        assert_eq!(note.category, DEFAULT_CATEGORY);
        assert_eq!(note.content, "hello world");

        let all = store.fetch_all().unwrap();
        assert_eq!(all, vec![note]);
    }

    #[test]
    fn max_id_is_none_for_empty_journal() {
        let store = JournalStore::open_in_memory().unwrap();
        assert_eq!(store.max_id().unwrap(), None);
    }
}
