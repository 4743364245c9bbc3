//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields
//! they care about. Foreign keys are created on demand when a test does not supply them.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let customer = factory::user::create_user(&db).await?;
//!     let item = factory::menu_item::create_menu_item(&db).await?;
//!     factory::cart::create_cart_item(&db, customer.id, &item, 2).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let manager = factory::user::UserFactory::new(&db)
//!     .username("mario")
//!     .password("lemon-secret")
//!     .group(factory::group::MANAGER)
//!     .build()
//!     .await?;
//!
//! let item = factory::menu_item::MenuItemFactory::new(&db)
//!     .title("Greek Salad")
//!     .price(Decimal::new(1250, 2))
//!     .featured(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create users with hashed passwords and group memberships
//! - `group` - Look up or create the authorization groups
//! - `category` - Create menu categories
//! - `menu_item` - Create menu items (creating a category when none is given)
//! - `cart` - Create cart rows priced from their menu item
//! - `order` - Create orders and order items
//! - `helpers` - Unique ID generation

pub mod cart;
pub mod category;
pub mod group;
pub mod helpers;
pub mod menu_item;
pub mod order;
pub mod user;

pub use cart::create_cart_item;
pub use category::create_category;
pub use group::{add_user_to_group, get_or_create_group};
pub use menu_item::create_menu_item;
pub use order::{create_order, create_order_item};
pub use user::{create_delivery_crew, create_manager, create_user};
