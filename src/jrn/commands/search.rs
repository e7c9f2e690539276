use crate::commands::list::DEFAULT_QUANTITY;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::JournalStore;

/// Lists the notes whose content contains `term` as a case-insensitive
/// literal substring. The category/quantity/all knobs shape the candidate
/// page exactly like `list` does; the substring filter applies to that
/// page, so a small quantity bounds how many rows are even considered.
pub fn run(
    store: &JournalStore,
    term: &str,
    category: Option<&str>,
    quantity: Option<usize>,
    all: bool,
) -> Result<CmdResult> {
    let limit = if all {
        None
    } else {
        Some(quantity.unwrap_or(DEFAULT_QUANTITY))
    };
    let candidates = store.list(category, limit)?;

    let needle = term.to_lowercase();
    let matches: Vec<_> = candidates
        .into_iter()
        .filter(|note| note.content.to_lowercase().contains(&needle))
        .collect();

    Ok(CmdResult::default().with_listed_notes(matches))
}
