use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuotezError, Result};
use crate::store::{DataStore, QuoteStore};

pub fn run<S: DataStore>(
    store: &mut QuoteStore<S>,
    text: &str,
    category: &str,
    author: Option<&str>,
) -> Result<CmdResult> {
    let quote = match store.add(text, category, author) {
        Ok(quote) => quote,
        Err(QuotezError::Validation(msg)) => {
            let mut res = CmdResult::default();
            res.add_message(CmdMessage::error(msg));
            return Ok(res);
        }
        Err(e) => return Err(e),
    };

    if let Err(e) = store.remember_viewed(&quote) {
        tracing::warn!(error = %e, "could not record last viewed quote");
    }

    let mut result = CmdResult::default().with_displayed(quote.clone());
    result.add_message(CmdMessage::success(format!(
        "Added quote to {}",
        quote.category
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Quote;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn adds_and_displays() {
        let mut store = StoreFixture::new().with_numbered(1, "Life").load();
        let result = run(&mut store, "New one", "Art", None).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(result.displayed, Some(Quote::new("New one", "Art")));
        assert_eq!(store.last_viewed().unwrap(), result.displayed);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn empty_text_is_reported_not_raised() {
        let mut store = StoreFixture::new().with_numbered(1, "Life").load();
        let result = run(&mut store, "", "X", None).unwrap();
        assert!(result.has_errors());
        assert!(result.displayed.is_none());
        assert_eq!(store.len(), 1);

        let result = run(&mut store, "X", "", None).unwrap();
        assert!(result.has_errors());
        assert_eq!(store.len(), 1);
    }
}
