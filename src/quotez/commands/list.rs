use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, QuoteStore};

pub fn run<S: DataStore>(store: &QuoteStore<S>, category: Option<&str>) -> Result<CmdResult> {
    let category = category.unwrap_or_else(|| store.selected_category());
    let listed = store.filter(category);

    let mut result = CmdResult::default().with_listed_quotes(listed);
    if result.listed_quotes.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No quotes in category '{}'.",
            category
        )));
    }
    Ok(result)
}
