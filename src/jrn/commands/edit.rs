use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JrnError, Result};
use crate::model::Note;
use crate::store::JournalStore;

/// Resolves which note an edit targets: the given id, or the most recent
/// note when no id was supplied.
pub fn resolve_target(store: &JournalStore, id: Option<i64>) -> Result<Note> {
    match id {
        Some(id) => store.get(id)?.ok_or(JrnError::NoteNotFound(id)),
        None => store
            .latest()?
            .ok_or_else(|| JrnError::Api("No notes to edit".to_string())),
    }
}

/// Replaces the content of note `id`. Category and timestamp keep their
/// original values; the timestamp still reflects creation time.
pub fn run(store: &JournalStore, id: i64, new_content: &str) -> Result<CmdResult> {
    if !store.update_content(id, new_content)? {
        return Err(JrnError::NoteNotFound(id));
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Updated note #{}", id)));
    if let Some(note) = store.get(id)? {
        result.affected_notes.push(note);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_CATEGORY;

    #[test]
    fn replaces_content_and_nothing_else() {
        let store = JournalStore::open_in_memory().unwrap();
        store.add("Work", "draft").unwrap();
        let before = store.get(0).unwrap().unwrap();

        run(&store, 0, "final").unwrap();

        let after = store.get(0).unwrap().unwrap();
        assert_eq!(after.content, "final");
        assert_eq!(after.category, before.category);
        assert_eq!(after.timestamp, before.timestamp);
        assert_eq!(store.fetch_all().unwrap().len(), 1);
    }

    #[test]
    fn missing_id_is_an_error() {
        let store = JournalStore::open_in_memory().unwrap();
        let err = run(&store, 3, "anything").unwrap_err();
        assert!(matches!(err, JrnError::NoteNotFound(3)));
    }

    #[test]
    fn target_defaults_to_most_recent_note() {
        let store = JournalStore::open_in_memory().unwrap();
        store.add(DEFAULT_CATEGORY, "older").unwrap();
        store.add(DEFAULT_CATEGORY, "newer").unwrap();

        let target = resolve_target(&store, None).unwrap();
        assert_eq!(target.id, 1);
        assert_eq!(target.content, "newer");
    }

    #[test]
    fn explicit_target_wins_over_latest() {
        let store = JournalStore::open_in_memory().unwrap();
        store.add(DEFAULT_CATEGORY, "older").unwrap();
        store.add(DEFAULT_CATEGORY, "newer").unwrap();

        let target = resolve_target(&store, Some(0)).unwrap();
        assert_eq!(target.content, "older");
    }

    #[test]
    fn resolving_on_empty_journal_fails() {
        let store = JournalStore::open_in_memory().unwrap();
        assert!(resolve_target(&store, None).is_err());
        assert!(matches!(
            resolve_target(&store, Some(0)).unwrap_err(),
            JrnError::NoteNotFound(0)
        ));
    }
}
