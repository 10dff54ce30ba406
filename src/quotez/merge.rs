//! # Reconciliation
//!
//! A sync cycle fetches a batch of remote quotes and folds it into the local
//! collection. Resolution is whole-record and keyed only by `text`; there are
//! no timestamps or version vectors.
//!
//! Two policies exist:
//!
//! - [`MergePolicy::LocalWins`] walks `remote ++ local` and keeps, for every
//!   distinct text, the *last* record seen, at the position where that text
//!   *first* appeared. A local quote therefore overrides a remote one with the
//!   same text.
//! - [`MergePolicy::ServerReplaces`] drops every local quote tagged with the
//!   server category and returns `remote ++ remaining_local`, without any text
//!   collision handling.

use crate::model::Quote;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergePolicy {
    #[default]
    LocalWins,
    ServerReplaces,
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergePolicy::LocalWins => write!(f, "local-wins"),
            MergePolicy::ServerReplaces => write!(f, "server-replaces"),
        }
    }
}

impl FromStr for MergePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local-wins" => Ok(MergePolicy::LocalWins),
            "server-replaces" => Ok(MergePolicy::ServerReplaces),
            other => Err(format!(
                "Unknown merge policy '{}' (expected local-wins or server-replaces)",
                other
            )),
        }
    }
}

pub fn reconcile(
    local: &[Quote],
    remote: &[Quote],
    policy: MergePolicy,
    server_category: &str,
) -> Vec<Quote> {
    match policy {
        MergePolicy::LocalWins => dedup_last_wins(remote.iter().chain(local.iter())),
        MergePolicy::ServerReplaces => remote
            .iter()
            .chain(local.iter().filter(|q| q.category != server_category))
            .cloned()
            .collect(),
    }
}

fn dedup_last_wins<'a>(quotes: impl Iterator<Item = &'a Quote>) -> Vec<Quote> {
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut merged: Vec<Quote> = Vec::new();

    for quote in quotes {
        match slots.get(quote.text.as_str()) {
            Some(&pos) => merged[pos] = quote.clone(),
            None => {
                slots.insert(quote.text.as_str(), merged.len());
                merged.push(quote.clone());
            }
        }
    }

    merged
}
