//! Request and response payloads shared by every endpoint.
//!
//! These types define the JSON wire format. Server-side domain models convert into them at
//! the controller boundary via `into_dto()`.

pub mod api;
pub mod cart;
pub mod category;
pub mod menu_item;
pub mod order;
pub mod user;
