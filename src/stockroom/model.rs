use crate::error::{Result, StockroomError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Caller-assigned identity of a stored record.
pub type EntityId = i32;

/// A record with a stable identity that never changes after construction.
///
/// This is the only capability [`crate::store::Repository`] and
/// [`crate::store::PersistentLog`] require from the types they hold.
pub trait Entity {
    fn id(&self) -> EntityId;
}

/// An entity that carries a stock level.
///
/// `set_quantity` only touches the value it is called on. Stored copies are
/// changed through `Repository::update_quantity`, which enforces the
/// non-negative rule.
pub trait Stocked: Entity {
    fn name(&self) -> &str;
    fn quantity(&self) -> i32;
    fn set_quantity(&mut self, quantity: i32);
}

fn require_text(field: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(StockroomError::InvalidArgument(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(value)
}

fn require_quantity(quantity: i32) -> Result<i32> {
    if quantity < 0 {
        return Err(StockroomError::InvalidValue(
            "Quantity cannot be negative.".to_string(),
        ));
    }
    Ok(quantity)
}

/// A line of the persisted inventory log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInventoryItem")]
pub struct InventoryItem {
    id: EntityId,
    name: String,
    quantity: i32,
    date_added: DateTime<Utc>,
}

impl InventoryItem {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        quantity: i32,
        date_added: DateTime<Utc>,
    ) -> Result<Self> {
        Ok(Self {
            id,
            name: require_text("name", name.into())?,
            quantity: require_quantity(quantity)?,
            date_added,
        })
    }

    pub fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }
}

impl Entity for InventoryItem {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Stocked for InventoryItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawElectronicItem")]
pub struct ElectronicItem {
    id: EntityId,
    name: String,
    quantity: i32,
    brand: String,
    warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        quantity: i32,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Result<Self> {
        Ok(Self {
            id,
            name: require_text("name", name.into())?,
            quantity: require_quantity(quantity)?,
            brand: require_text("brand", brand.into())?,
            warranty_months,
        })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl Entity for ElectronicItem {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Stocked for ElectronicItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGroceryItem")]
pub struct GroceryItem {
    id: EntityId,
    name: String,
    quantity: i32,
    expiry_date: DateTime<Utc>,
}

impl GroceryItem {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        quantity: i32,
        expiry_date: DateTime<Utc>,
    ) -> Result<Self> {
        Ok(Self {
            id,
            name: require_text("name", name.into())?,
            quantity: require_quantity(quantity)?,
            expiry_date,
        })
    }

    pub fn expiry_date(&self) -> DateTime<Utc> {
        self.expiry_date
    }
}

impl Entity for GroceryItem {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Stocked for GroceryItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }
}

// Stored records are read into these shapes first and then go through the
// constructors, so a file cannot bring in values `new` would reject.

#[derive(Deserialize)]
struct RawInventoryItem {
    id: EntityId,
    name: String,
    quantity: i32,
    date_added: DateTime<Utc>,
}

impl TryFrom<RawInventoryItem> for InventoryItem {
    type Error = StockroomError;

    fn try_from(raw: RawInventoryItem) -> Result<Self> {
        InventoryItem::new(raw.id, raw.name, raw.quantity, raw.date_added)
    }
}

#[derive(Deserialize)]
struct RawElectronicItem {
    id: EntityId,
    name: String,
    quantity: i32,
    brand: String,
    warranty_months: u32,
}

impl TryFrom<RawElectronicItem> for ElectronicItem {
    type Error = StockroomError;

    fn try_from(raw: RawElectronicItem) -> Result<Self> {
        ElectronicItem::new(
            raw.id,
            raw.name,
            raw.quantity,
            raw.brand,
            raw.warranty_months,
        )
    }
}

#[derive(Deserialize)]
struct RawGroceryItem {
    id: EntityId,
    name: String,
    quantity: i32,
    expiry_date: DateTime<Utc>,
}

impl TryFrom<RawGroceryItem> for GroceryItem {
    type Error = StockroomError;

    fn try_from(raw: RawGroceryItem) -> Result<Self> {
        GroceryItem::new(raw.id, raw.name, raw.quantity, raw.expiry_date)
    }
}

/// The two stock sections kept by the warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Electronics,
    Groceries,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Electronics => write!(f, "electronics"),
            Section::Groceries => write!(f, "groceries"),
        }
    }
}

impl FromStr for Section {
    type Err = StockroomError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "electronics" | "e" => Ok(Section::Electronics),
            "groceries" | "g" => Ok(Section::Groceries),
            other => Err(StockroomError::InvalidArgument(format!(
                "unknown section `{}`; expected electronics|groceries",
                other
            ))),
        }
    }
}

/// A warehouse record from either section, for uniform listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockItem {
    Electronic(ElectronicItem),
    Grocery(GroceryItem),
}

impl From<ElectronicItem> for StockItem {
    fn from(item: ElectronicItem) -> Self {
        StockItem::Electronic(item)
    }
}

impl From<GroceryItem> for StockItem {
    fn from(item: GroceryItem) -> Self {
        StockItem::Grocery(item)
    }
}

impl Entity for StockItem {
    fn id(&self) -> EntityId {
        match self {
            StockItem::Electronic(item) => item.id(),
            StockItem::Grocery(item) => item.id(),
        }
    }
}

impl Stocked for StockItem {
    fn name(&self) -> &str {
        match self {
            StockItem::Electronic(item) => item.name(),
            StockItem::Grocery(item) => item.name(),
        }
    }

    fn quantity(&self) -> i32 {
        match self {
            StockItem::Electronic(item) => item.quantity(),
            StockItem::Grocery(item) => item.quantity(),
        }
    }

    fn set_quantity(&mut self, quantity: i32) {
        match self {
            StockItem::Electronic(item) => item.set_quantity(quantity),
            StockItem::Grocery(item) => item.set_quantity(quantity),
        }
    }
}
