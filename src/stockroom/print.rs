use colored::Colorize;
use stockroom::api::{CmdMessage, MessageLevel};
use stockroom::config::StockroomConfig;
use stockroom::model::{Entity, InventoryItem, Section, StockItem, Stocked};
use unicode_width::UnicodeWidthStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_inventory(items: &[InventoryItem]) {
    if items.is_empty() {
        println!("No items found.");
        return;
    }

    let name_width = column_width(items.iter().map(|i| i.name()));
    println!("\n{}", "Inventory Items:".bold());
    for item in items {
        println!(
            "  {}  {}  qty {:>5}  added {}",
            format!("{:>4}", item.id()).yellow(),
            pad_right(item.name(), name_width),
            item.quantity(),
            item.date_added().format(DATE_FORMAT).to_string().dimmed()
        );
    }
}

pub(crate) fn print_stock(section: Section, items: &[StockItem]) {
    let heading = match section {
        Section::Electronics => "All Electronic Items:",
        Section::Groceries => "All Grocery Items:",
    };
    println!("\n{}", heading.bold());
    if items.is_empty() {
        println!("No items found.");
        return;
    }

    let name_width = column_width(items.iter().map(|i| i.name()));
    for item in items {
        let detail = match item {
            StockItem::Electronic(e) => {
                format!("{}, {} months warranty", e.brand(), e.warranty_months())
            }
            StockItem::Grocery(g) => format!("expires {}", g.expiry_date().format(DATE_FORMAT)),
        };
        println!(
            "  {}  {}  qty {:>5}  {}",
            format!("{:>4}", item.id()).yellow(),
            pad_right(item.name(), name_width),
            item.quantity(),
            detail.dimmed()
        );
    }
}

pub(crate) fn print_config(config: &StockroomConfig) {
    for key in StockroomConfig::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn column_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.width()).max().unwrap_or(0)
}

fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
