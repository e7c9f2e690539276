use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::JournalStore;

pub const DEFAULT_QUANTITY: usize = 5;

#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Exact category to filter on
    pub category: Option<String>,
    /// Page size, ignored when `all` is set
    pub quantity: usize,
    pub all: bool,
    /// Reverse the page (oldest of the page first). Applies after the
    /// quantity cut, not to the whole table.
    pub reverse: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            category: None,
            quantity: DEFAULT_QUANTITY,
            all: false,
            reverse: false,
        }
    }
}

pub fn run(store: &JournalStore, options: &ListOptions) -> Result<CmdResult> {
    let limit = if options.all {
        None
    } else {
        Some(options.quantity)
    };
    let mut notes = store.list(options.category.as_deref(), limit)?;
    if options.reverse {
        notes.reverse();
    }
    Ok(CmdResult::default().with_listed_notes(notes))
}
