use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::range::{parse_tokens, RangeToken};
use crate::store::JournalStore;

/// Deletes notes selected by the criteria tokens (exact ids, spans,
/// open-ended bounds). Absent ids are no-ops; only rows actually removed
/// are reported. Unrecognized tokens produce a warning and are otherwise
/// ignored.
pub fn run(store: &JournalStore, criteria: &[String]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut deleted = 0usize;

    for token in parse_tokens(criteria) {
        match token {
            RangeToken::Exact(id) => {
                deleted += delete_one(store, id, &mut result)?;
            }
            RangeToken::Below(bound) => {
                if let Some(max) = store.max_id()? {
                    for id in 0..=bound.min(max) {
                        deleted += delete_one(store, id, &mut result)?;
                    }
                }
            }
            RangeToken::Above(bound) => {
                if let Some(max) = store.max_id()? {
                    for id in bound..=max {
                        deleted += delete_one(store, id, &mut result)?;
                    }
                }
            }
            RangeToken::Unrecognized(raw) => {
                result.add_message(CmdMessage::warning(format!(
                    "Skipping unrecognized delete target \"{}\"",
                    raw
                )));
            }
        }
    }

    if deleted == 0 {
        result.add_message(CmdMessage::info("No notes deleted."));
    }
    Ok(result)
}

fn delete_one(store: &JournalStore, id: i64, result: &mut CmdResult) -> Result<usize> {
    if store.delete_note(id)? {
        result.add_message(CmdMessage::success(format!("Deleted note #{}", id)));
        Ok(1)
    } else {
        Ok(0)
    }
}
