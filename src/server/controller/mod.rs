//! HTTP request handlers.
//!
//! Controllers authorize the caller through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert request DTOs into parameters, call a service and convert the result back into a
//! response DTO. Each handler carries a `utoipa::path` annotation for the OpenAPI document.

pub mod auth;
pub mod cart;
pub mod category;
pub mod group;
pub mod menu_item;
pub mod order;
pub mod user;

#[cfg(test)]
mod test;
