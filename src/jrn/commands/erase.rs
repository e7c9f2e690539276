use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JrnError, Result};
use crate::store::JournalStore;
use std::io::{self, Write};

/// Deletes every note in the journal, after an interactive confirmation
/// unless `skip_confirm` is set.
pub fn run(store: &JournalStore, skip_confirm: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let count = store.fetch_all()?.len();

    if count == 0 {
        result.add_message(CmdMessage::info("Journal is already empty."));
        return Ok(result);
    }

    if !skip_confirm {
        print!(
            "This will permanently delete all {} notes. Continue? [y/N] ",
            count
        );
        io::stdout().flush().map_err(JrnError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(JrnError::Io)?;

        if !matches!(input.trim(), "y" | "Y" | "yes") {
            result.add_message(CmdMessage::info(
                "Operation cancelled. No notes were deleted.",
            ));
            return Ok(result);
        }
    }

    let deleted = store.erase()?;
    result.add_message(CmdMessage::success(format!("Deleted {} notes.", deleted)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_CATEGORY;

    #[test]
    fn erases_every_note() {
        let store = JournalStore::open_in_memory().unwrap();
        for i in 0..3 {
            store.add(DEFAULT_CATEGORY, &format!("note {}", i)).unwrap();
        }

        let result = run(&store, true).unwrap();
        assert!(store.fetch_all().unwrap().is_empty());
        assert_eq!(result.messages[0].content, "Deleted 3 notes.");
    }

    #[test]
    fn empty_journal_reports_without_prompting() {
        let store = JournalStore::open_in_memory().unwrap();
        // skip_confirm false: must not block on stdin when there is nothing to delete
        let result = run(&store, false).unwrap();
        assert_eq!(result.messages[0].content, "Journal is already empty.");
    }
}
