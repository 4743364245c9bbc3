pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_user_table;
mod m20261018_000002_create_group_table;
mod m20261018_000003_create_user_group_table;
mod m20261018_000004_create_category_table;
mod m20261018_000005_create_menu_item_table;
mod m20261018_000006_create_cart_table;
mod m20261018_000007_create_order_table;
mod m20261018_000008_create_order_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_user_table::Migration),
            Box::new(m20261018_000002_create_group_table::Migration),
            Box::new(m20261018_000003_create_user_group_table::Migration),
            Box::new(m20261018_000004_create_category_table::Migration),
            Box::new(m20261018_000005_create_menu_item_table::Migration),
            Box::new(m20261018_000006_create_cart_table::Migration),
            Box::new(m20261018_000007_create_order_table::Migration),
            Box::new(m20261018_000008_create_order_item_table::Migration),
        ]
    }
}
