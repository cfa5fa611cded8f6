use crate::commands::{CmdMessage, CmdResult, StockroomPaths};
use crate::config::StockroomConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &StockroomPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = StockroomConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = StockroomConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = StockroomConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn set_persists_normalized_value() {
        let dir = TempDir::new().unwrap();
        let paths = StockroomPaths::new(dir.path());

        let result = run(
            &paths,
            ConfigAction::Set("data-file".into(), "stock".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "data-file set to stock.json");

        let shown = run(&paths, ConfigAction::ShowKey("data-file".into())).unwrap();
        assert_eq!(shown.messages[0].content, "stock.json");
    }

    #[test]
    fn invalid_value_is_reported_not_saved() {
        let dir = TempDir::new().unwrap();
        let paths = StockroomPaths::new(dir.path());

        let result = run(
            &paths,
            ConfigAction::Set("log-level".into(), "chatty".into()),
        )
        .unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn show_all_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let paths = StockroomPaths::new(dir.path());

        let result = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(StockroomConfig::default()));
    }
}
