use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuotezError, Result};
use crate::store::{DataStore, QuoteStore};
use serde_json::Value;
use std::fs;
use std::path::Path;

pub fn run<S: DataStore>(store: &mut QuoteStore<S>, path: &Path) -> Result<CmdResult> {
    if !path.is_file() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::error(format!(
            "File not found: {}",
            path.display()
        )));
        return Ok(res);
    }

    let content = fs::read_to_string(path).map_err(QuotezError::Io)?;
    let mut result = import_str(store, &content)?;
    if !result.has_errors() {
        result.add_message(CmdMessage::info(format!("Imported from {}", path.display())));
    }
    Ok(result)
}

/// Import a JSON document holding an array of quote objects.
///
/// Invalid JSON and non-array documents are rejected as a whole; inside an
/// array, entries that are not quotes are skipped.
pub fn import_str<S: DataStore>(store: &mut QuoteStore<S>, content: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let items = match parse_batch(content) {
        Ok(items) => items,
        Err(e) => {
            result.add_message(CmdMessage::error(e.to_string()));
            return Ok(result);
        }
    };

    let accepted = store.import_batch(&items)?;
    result.imported = accepted;

    if accepted == 0 {
        result.add_message(CmdMessage::warning(
            "No valid quote objects found in the imported file.",
        ));
        return Ok(result);
    }

    let skipped = items.len() - accepted;
    if skipped > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Skipped {} invalid entr{}",
            skipped,
            if skipped == 1 { "y" } else { "ies" }
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Successfully imported {} quotes.",
        accepted
    )));
    Ok(result)
}

fn parse_batch(content: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(content)? {
        Value::Array(items) => Ok(items),
        _ => Err(QuotezError::Import(
            "Imported JSON must be an array of quote objects.".to_string(),
        )),
    }
}
