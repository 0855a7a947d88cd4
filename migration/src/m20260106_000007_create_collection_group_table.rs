use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000006_create_collection_table::Collection;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CollectionGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(CollectionGroup::Id))
                    .col(integer(CollectionGroup::CollectionId))
                    .col(string(CollectionGroup::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collection_group_collection_id")
                            .from(CollectionGroup::Table, CollectionGroup::CollectionId)
                            .to(Collection::Table, Collection::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CollectionGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CollectionGroup {
    Table,
    Id,
    CollectionId,
    Name,
}
