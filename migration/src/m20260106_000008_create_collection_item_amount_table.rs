use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_item_table::Item;
use super::m20260106_000007_create_collection_group_table::CollectionGroup;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CollectionItemAmount::Table)
                    .if_not_exists()
                    .col(integer(CollectionItemAmount::GroupId))
                    .col(integer(CollectionItemAmount::ItemId))
                    .col(integer(CollectionItemAmount::Amount))
                    .primary_key(
                        Index::create()
                            .col(CollectionItemAmount::GroupId)
                            .col(CollectionItemAmount::ItemId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collection_item_amount_group_id")
                            .from(CollectionItemAmount::Table, CollectionItemAmount::GroupId)
                            .to(CollectionGroup::Table, CollectionGroup::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collection_item_amount_item_id")
                            .from(CollectionItemAmount::Table, CollectionItemAmount::ItemId)
                            .to(Item::Table, Item::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CollectionItemAmount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CollectionItemAmount {
    Table,
    GroupId,
    ItemId,
    Amount,
}
