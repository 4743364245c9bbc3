//! SeaORM entity definitions for the Little Lemon database schema.
//!
//! Each module mirrors one table created by the `migration` crate. The `prelude` module
//! re-exports every `Entity` under its table-level name for concise imports.

pub mod prelude;

pub mod cart;
pub mod category;
pub mod group;
pub mod menu_item;
pub mod order;
pub mod order_item;
pub mod user;
pub mod user_group;
