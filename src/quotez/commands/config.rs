use crate::commands::{CmdMessage, CmdResult};
use crate::config::QuotezConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Read or change the settings in `data_dir`.
///
/// A broken `config.json` reads as the defaults here, so setting a key
/// rewrites it into a valid file.
pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = QuotezConfig::load_or_default(data_dir);
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => return Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => result.add_message(CmdMessage::info(value)),
            None => result.add_message(CmdMessage::error(format!("Unknown config key: {}", key))),
        },
        ConfigAction::Set(key, value) => {
            if let Err(reason) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(reason));
                return Ok(result);
            }
            config.save(data_dir)?;

            let stored = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} = {}", key, stored)));
            result = result.with_config(config);
        }
    }

    Ok(result)
}
