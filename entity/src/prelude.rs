pub use super::cart::Entity as Cart;
pub use super::category::Entity as Category;
pub use super::group::Entity as Group;
pub use super::menu_item::Entity as MenuItem;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::user::Entity as User;
pub use super::user_group::Entity as UserGroup;
