use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuotezError, Result};
use crate::store::{DataStore, QuoteStore};

pub fn list<S: DataStore>(store: &QuoteStore<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_categories(store.categories(), store.selected_category()))
}

pub fn select<S: DataStore>(store: &mut QuoteStore<S>, category: &str) -> Result<CmdResult> {
    match store.select_category(category) {
        Ok(()) => {
            let mut result = list(store)?;
            result.add_message(CmdMessage::success(format!(
                "Selected category: {}",
                store.selected_category()
            )));
            Ok(result)
        }
        Err(QuotezError::Validation(msg)) => {
            let mut result = list(store)?;
            result.add_message(CmdMessage::error(msg));
            Ok(result)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Quote, ALL_CATEGORIES};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_sorted_categories_with_selection() {
        let store = StoreFixture::new()
            .with_quotes(&[
                Quote::new("1", "Zen"),
                Quote::new("2", "Art"),
                Quote::new("3", "Zen"),
            ])
            .load();
        let result = list(&store).unwrap();
        assert_eq!(result.categories, vec!["Art", "Zen"]);
        assert_eq!(result.selected_category.as_deref(), Some(ALL_CATEGORIES));
    }

    #[test]
    fn select_persists() {
        let mut store = StoreFixture::new().load();
        let result = select(&mut store, "Life").unwrap();
        assert!(!result.has_errors());
        assert_eq!(result.selected_category.as_deref(), Some("Life"));
    }

    #[test]
    fn select_all_is_always_allowed() {
        let mut store = StoreFixture::new().with_raw_quotes("[]").load();
        let result = select(&mut store, ALL_CATEGORIES).unwrap();
        assert!(!result.has_errors());
    }

    #[test]
    fn select_unknown_reports_error() {
        let mut store = StoreFixture::new().load();
        let result = select(&mut store, "Nope").unwrap();
        assert!(result.has_errors());
        assert_eq!(store.selected_category(), ALL_CATEGORIES);
    }
}
