use crate::commands::{CmdMessage, CmdResult, SyncReport};
use crate::error::Result;
use crate::merge::MergePolicy;
use crate::model::Quote;
use crate::store::{DataStore, QuoteStore};
use chrono::Utc;
use tracing::{info, warn};

/// Fold the outcome of a remote fetch into the store.
///
/// A failed fetch leaves the collection untouched and is reported, not
/// raised. Only persistence failures are returned as errors.
pub fn run<S: DataStore>(
    store: &mut QuoteStore<S>,
    fetched: Result<Vec<Quote>>,
    policy: MergePolicy,
    server_category: &str,
) -> Result<CmdResult> {
    let before = store.len();

    let remote = match fetched {
        Ok(remote) => remote,
        Err(e) => {
            warn!(error = %e, "sync failed, keeping local quotes");
            let report = SyncReport {
                fetched: 0,
                before,
                after: before,
                finished_at: Utc::now(),
                error: Some(e.to_string()),
            };
            let mut result = CmdResult::default().with_sync(report);
            result.add_message(CmdMessage::error(format!("Sync failed: {}", e)));
            return Ok(result);
        }
    };

    store.apply_remote(&remote, policy, server_category)?;
    let report = SyncReport {
        fetched: remote.len(),
        before,
        after: store.len(),
        finished_at: Utc::now(),
        error: None,
    };
    info!(
        fetched = report.fetched,
        before = report.before,
        after = report.after,
        "sync complete"
    );

    let mut result = CmdResult::default().with_sync(report);
    result.add_message(CmdMessage::success(format!(
        "Quotes synced with server ({} fetched, {} total).",
        remote.len(),
        store.len()
    )));
    Ok(result)
}
