use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, QuoteStore};

pub fn run<S: DataStore>(store: &mut QuoteStore<S>) -> Result<CmdResult> {
    let removed = store.len();
    store.reset()?;

    let mut result = CmdResult::default().with_listed_quotes(store.quotes().to_vec());
    result.add_message(CmdMessage::success(format!(
        "Saved quotes cleared ({} removed) and defaults restored.",
        removed
    )));
    Ok(result)
}
