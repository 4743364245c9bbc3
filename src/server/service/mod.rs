//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, pricing and the order state machine
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Order placement runs as a single transaction

pub mod auth;
pub mod cart;
pub mod category;
pub mod group;
pub mod menu_item;
pub mod order;
pub mod user;

#[cfg(test)]
mod test;
