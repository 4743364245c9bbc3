//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models or entity tuples to the service layer. The cart and order repositories
//! (and the menu item lookups they depend on) are generic over `ConnectionTrait` so they
//! can run inside the order placement transaction.

pub mod cart;
pub mod category;
pub mod group;
pub mod menu_item;
pub mod order;
pub mod user;

#[cfg(test)]
mod test;
