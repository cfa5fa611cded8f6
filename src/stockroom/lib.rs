//! # Stockroom Architecture
//!
//! Stockroom is a **typed inventory store** with a small CLI on top. The store
//! is the product; the CLI is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: owns the log and the warehouse, dispatches  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, warehouse.rs)                │
//! │  - Seeding, adding, listing, persisting, restocking         │
//! │  - Returns `CmdResult` values, never prints                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Repository<T>: keyed, in-memory, validated mutations     │
//! │  - PersistentLog<T>: ordered, JSON file round-trip          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Entity Contract
//!
//! Both containers are generic over any `T: Entity`, a record exposing a
//! read-only integer id. Quantity updates additionally need `T: Stocked`.
//! Concrete records ([`model::InventoryItem`], [`model::ElectronicItem`],
//! [`model::GroceryItem`]) are independent types that implement these traits.
//!
//! ## Errors
//!
//! Every failure is a [`error::StockroomError`] variant. Duplicate ids, missing
//! ids, invalid values and I/O or format problems are distinct variants so
//! callers can branch on them. Nothing below `main.rs` exits the process.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: `Repository` and `PersistentLog`
//! - [`model`]: Entity traits and record types
//! - [`warehouse`]: Two-section in-memory warehouse
//! - [`config`]: Configuration file
//! - [`logging`]: File logger bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
pub mod warehouse;
