use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261018_000001_create_user_table::User, m20261018_000005_create_menu_item_table::MenuItem,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cart::Table)
                    .if_not_exists()
                    .col(pk_auto(Cart::Id))
                    .col(integer(Cart::UserId))
                    .col(integer(Cart::MenuitemId))
                    .col(integer(Cart::Quantity))
                    .col(double(Cart::UnitPrice))
                    .col(double(Cart::Price))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_user_id")
                            .from(Cart::Table, Cart::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_menuitem_id")
                            .from(Cart::Table, Cart::MenuitemId)
                            .to(MenuItem::Table, MenuItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_cart_user_menuitem_unique")
                            .col(Cart::UserId)
                            .col(Cart::MenuitemId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cart::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cart {
    Table,
    Id,
    UserId,
    MenuitemId,
    Quantity,
    UnitPrice,
    Price,
}
