use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::JournalStore;

/// Distinct category names, ascending. The optional filter is a
/// case-insensitive literal substring match, unlike the exact category
/// match of `list` and `search`.
pub fn run(store: &JournalStore, filter: Option<&str>) -> Result<CmdResult> {
    let mut categories = store.categories()?;

    if let Some(filter) = filter {
        let needle = filter.to_lowercase();
        categories.retain(|category| category.to_lowercase().contains(&needle));
    }

    Ok(CmdResult::default().with_categories(categories))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> JournalStore {
        let store = JournalStore::open_in_memory().unwrap();
        store.add("Work", "a").unwrap();
        store.add("General", "b").unwrap();
        store.add("Work", "c").unwrap();
        store.add("Homework", "d").unwrap();
        store
    }

    #[test]
    fn distinct_and_ascending() {
        let store = seeded_store();
        let result = run(&store, None).unwrap();
        assert_eq!(result.categories, vec!["General", "Homework", "Work"]);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let store = seeded_store();
        let result = run(&store, Some("work")).unwrap();
        assert_eq!(result.categories, vec!["Homework", "Work"]);
    }

    #[test]
    fn filter_with_no_hits_is_empty() {
        let store = seeded_store();
        let result = run(&store, Some("nope")).unwrap();
        assert!(result.categories.is_empty());
    }
}
