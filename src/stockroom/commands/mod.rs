use crate::config::StockroomConfig;
use crate::model::InventoryItem;
use crate::store::LoadOutcome;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod list;
pub mod persist;
pub mod seed;
pub mod stock;

#[derive(Debug, Clone)]
pub struct StockroomPaths {
    pub data_dir: PathBuf,
}

impl StockroomPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_file(&self, config: &StockroomConfig) -> PathBuf {
        self.data_dir.join(&config.data_file)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command. The CLI decides how to show it.
#[derive(Debug)]
pub struct CmdResult<T = InventoryItem> {
    pub affected_items: Vec<T>,
    pub listed_items: Vec<T>,
    pub load_outcome: Option<LoadOutcome>,
    pub config: Option<StockroomConfig>,
    pub messages: Vec<CmdMessage>,
}

impl<T> Default for CmdResult<T> {
    fn default() -> Self {
        Self {
            affected_items: Vec::new(),
            listed_items: Vec::new(),
            load_outcome: None,
            config: None,
            messages: Vec::new(),
        }
    }
}

impl<T> CmdResult<T> {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<T>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<T>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_load_outcome(mut self, outcome: LoadOutcome) -> Self {
        self.load_outcome = Some(outcome);
        self
    }

    pub fn with_config(mut self, config: StockroomConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Convert the carried items, keeping messages and metadata.
    pub fn map_items<U>(self, f: impl Fn(T) -> U) -> CmdResult<U> {
        CmdResult {
            affected_items: self.affected_items.into_iter().map(&f).collect(),
            listed_items: self.listed_items.into_iter().map(&f).collect(),
            load_outcome: self.load_outcome,
            config: self.config,
            messages: self.messages,
        }
    }
}
