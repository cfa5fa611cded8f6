use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stockroom::model::{EntityId, Section};

/// Returns the version string, including git hash and commit date for non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "stockroom", bin_name = "stockroom", version = get_version())]
#[command(about = "Typed inventory store with JSON persistence", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (overrides STOCKROOM_HOME and the platform default)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace the inventory file with the sample catalogue
    Seed,

    /// Append an item to the inventory file
    #[command(alias = "a")]
    Add {
        id: EntityId,

        name: String,

        #[arg(allow_negative_numbers = true)]
        quantity: i32,
    },

    /// List the items stored in the inventory file
    #[command(alias = "ls")]
    List,

    /// Run stock operations against the sample warehouse (not persisted)
    #[command(alias = "wh")]
    Warehouse {
        /// Section to operate on and print
        #[arg(short, long, default_value = "electronics")]
        section: Section,

        /// Id of the item to restock
        #[arg(long, requires = "amount")]
        restock: Option<EntityId>,

        /// Amount added to the stock (negative to take stock out)
        #[arg(long, allow_negative_numbers = true)]
        amount: Option<i32>,

        /// Id of the item to remove
        #[arg(long)]
        remove: Option<EntityId>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
