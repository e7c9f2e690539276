use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::JournalStore;

/// Adds one note. Content words are joined with single spaces; a style
/// wraps the content in `[style]…[/]` markup, stored as part of the
/// content itself rather than as a separate column.
pub fn run(
    store: &JournalStore,
    category: &str,
    content_parts: &[String],
    style: Option<&str>,
) -> Result<CmdResult> {
    let mut content = content_parts.join(" ");
    if let Some(style) = style {
        content = format!("[{}]{}[/]", style, content);
    }

    let note = store.add(category, &content)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added note #{} to {}",
        note.id, note.category
    )));
    result.affected_notes.push(note);
    Ok(result)
}
