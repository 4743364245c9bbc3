use sea_orm_migration::{prelude::*, schema::*};

/// Groups every deployment starts with; membership is the only authorization signal.
const SEEDED_GROUPS: [&str; 2] = ["Manager", "Delivery crew"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Group::Table)
                    .if_not_exists()
                    .col(pk_auto(Group::Id))
                    .col(string_uniq(Group::Name))
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert();
        seed.into_table(Group::Table).columns([Group::Name]);
        for name in SEEDED_GROUPS {
            seed.values_panic([name.into()]);
        }

        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Group::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Group {
    #[sea_orm(iden = "auth_group")]
    Table,
    Id,
    Name,
}
