use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use stockroom::api::{CmdMessage, CmdResult, ConfigAction, InventoryApi, StockroomPaths};
use stockroom::config::StockroomConfig;
use stockroom::error::{Result, StockroomError};
use stockroom::logging::init_logging;
use stockroom::model::{EntityId, Section};

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_config, print_inventory, print_messages, print_stock};

const HOME_ENV: &str = "STOCKROOM_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: InventoryApi,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Seed) => handle_seed(&mut ctx),
        Some(Commands::Add { id, name, quantity }) => handle_add(&mut ctx, id, name, quantity),
        Some(Commands::List) | None => handle_list(&mut ctx),
        Some(Commands::Warehouse {
            section,
            restock,
            amount,
            remove,
        }) => handle_warehouse(&mut ctx, section, restock.zip(amount), remove),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "stockroom", "stockroom")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| StockroomError::Api("Could not determine data dir".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let paths = StockroomPaths::new(data_dir);

    let config = match StockroomConfig::load(&paths.data_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring unreadable config: {}", e);
            StockroomConfig::default()
        }
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    if let Err(e) = init_logging(level, &paths.log_dir()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let api = InventoryApi::new(paths, &config)?;
    Ok(AppContext { api })
}

fn handle_seed(ctx: &mut AppContext) -> Result<()> {
    let seeded = ctx.api.seed_inventory()?;
    print_messages(&seeded.messages);
    let saved = ctx.api.save()?;
    print_messages(&saved.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, id: EntityId, name: String, quantity: i32) -> Result<()> {
    ctx.api.load()?;
    let added = ctx.api.add_item(id, name, quantity)?;
    let saved = ctx.api.save()?;
    print_messages(&added.messages);
    print_messages(&saved.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let loaded = ctx.api.load()?;
    print_messages(&loaded.messages);
    let result = ctx.api.list_items()?;
    print_inventory(&result.listed_items);
    Ok(())
}

fn handle_warehouse(
    ctx: &mut AppContext,
    section: Section,
    restock: Option<(EntityId, i32)>,
    remove: Option<EntityId>,
) -> Result<()> {
    ctx.api.seed_warehouse()?;

    if let Some((id, amount)) = restock {
        report(ctx.api.restock(section, id, amount))?;
    }
    if let Some(id) = remove {
        report(ctx.api.remove_stock(section, id))?;
    }

    let listing = ctx.api.warehouse_items(section);
    print_stock(section, &listing.listed_items);
    Ok(())
}

/// Print the outcome of a stock operation. Rejections caused by the request
/// itself are shown and the run continues; anything else is propagated.
fn report<T>(outcome: Result<CmdResult<T>>) -> Result<()> {
    match outcome {
        Ok(result) => {
            print_messages(&result.messages);
            Ok(())
        }
        Err(
            e @ (StockroomError::NotFound(_)
            | StockroomError::InvalidValue(_)
            | StockroomError::DuplicateKey(_)),
        ) => {
            print_messages(&[CmdMessage::error(format!("Error: {}", e))]);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
