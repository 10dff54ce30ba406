use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::random::RandomSource;
use crate::store::{DataStore, QuoteStore};

const NO_QUOTES: &str = "No quotes available in this category.";

/// Pick a random quote from `category`, or from the selected category when
/// none is given.
pub fn run<S: DataStore, R: RandomSource + ?Sized>(
    store: &mut QuoteStore<S>,
    category: Option<&str>,
    rng: &mut R,
) -> Result<CmdResult> {
    let category = category
        .map(str::to_string)
        .unwrap_or_else(|| store.selected_category().to_string());

    let Some(quote) = store.pick_random(&category, rng) else {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::warning(NO_QUOTES));
        return Ok(res);
    };

    if let Err(e) = store.remember_viewed(&quote) {
        tracing::warn!(error = %e, "could not record last viewed quote");
    }
    Ok(CmdResult::default().with_displayed(quote))
}

/// Show the quote displayed last in this session, or a random one.
pub fn show<S: DataStore, R: RandomSource + ?Sized>(
    store: &mut QuoteStore<S>,
    rng: &mut R,
) -> Result<CmdResult> {
    match store.last_viewed()? {
        Some(quote) => Ok(CmdResult::default().with_displayed(quote)),
        None => run(store, None, rng),
    }
}
