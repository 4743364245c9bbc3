use sea_orm_migration::{prelude::*, schema::*};

use super::m20261018_000004_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItem::Id))
                    .col(string(MenuItem::Title))
                    .col(double(MenuItem::Price))
                    .col(
                        ColumnDef::new(MenuItem::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(integer(MenuItem::CategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_item_category_id")
                            .from(MenuItem::Table, MenuItem::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_menu_item_title")
                    .table(MenuItem::Table)
                    .col(MenuItem::Title)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuItem {
    Table,
    Id,
    Title,
    Price,
    Featured,
    CategoryId,
}
