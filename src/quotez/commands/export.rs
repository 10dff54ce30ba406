use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuotezError, Result};
use crate::store::{DataStore, QuoteStore};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_EXPORT_FILENAME: &str = "quotes.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    File(PathBuf),
    /// Hand the document back in `CmdResult::exported`
    Inline,
}

pub fn run<S: DataStore>(store: &QuoteStore<S>, target: ExportTarget) -> Result<CmdResult> {
    let document = store.export_all()?;
    let mut result = CmdResult::default();

    match target {
        ExportTarget::Inline => result.exported = Some(document),
        ExportTarget::File(path) => {
            fs::write(&path, document).map_err(QuotezError::Io)?;
            result.add_message(CmdMessage::success(format!(
                "Exported {} quotes to {}",
                store.len(),
                path.display()
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Quote;
    use crate::store::memory::fixtures::StoreFixture;
    use tempfile::TempDir;

    #[test]
    fn inline_export_is_pretty_json() {
        let store = StoreFixture::new()
            .with_quotes(&[Quote::new("A", "B")])
            .load();
        let result = run(&store, ExportTarget::Inline).unwrap();
        assert_eq!(
            result.exported.as_deref(),
            Some("[\n  {\n    \"text\": \"A\",\n    \"category\": \"B\"\n  }\n]")
        );
    }

    #[test]
    fn file_export_writes_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILENAME);
        let store = StoreFixture::new().with_numbered(3, "Life").load();

        let result = run(&store, ExportTarget::File(path.clone())).unwrap();
        assert!(result.exported.is_none());

        let written: Vec<Quote> =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(written, store.quotes());
    }

    #[test]
    fn export_does_not_touch_store() {
        let store = StoreFixture::new().with_numbered(2, "Life").load();
        let before = store.quotes().to_vec();
        run(&store, ExportTarget::Inline).unwrap();
        assert_eq!(store.quotes(), before.as_slice());
    }
}
