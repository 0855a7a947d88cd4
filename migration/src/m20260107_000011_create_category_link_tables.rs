use sea_orm_migration::{prelude::*, schema::*};

use super::m20260104_000002_create_item_category_table::ItemCategory;
use super::m20260105_000002_create_game_table::Game;
use super::m20260105_000003_create_item_table::Item;

/// Creates `game_item_category` and `item_item_category`, linking categories to the
/// games offering them and to the items filed under them.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameItemCategory::Table)
                    .if_not_exists()
                    .col(integer(GameItemCategory::GameId))
                    .col(integer(GameItemCategory::CategoryId))
                    .primary_key(
                        Index::create()
                            .col(GameItemCategory::GameId)
                            .col(GameItemCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_item_category_game_id")
                            .from(GameItemCategory::Table, GameItemCategory::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_item_category_category_id")
                            .from(GameItemCategory::Table, GameItemCategory::CategoryId)
                            .to(ItemCategory::Table, ItemCategory::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ItemItemCategory::Table)
                    .if_not_exists()
                    .col(integer(ItemItemCategory::ItemId))
                    .col(integer(ItemItemCategory::CategoryId))
                    .primary_key(
                        Index::create()
                            .col(ItemItemCategory::ItemId)
                            .col(ItemItemCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_item_category_item_id")
                            .from(ItemItemCategory::Table, ItemItemCategory::ItemId)
                            .to(Item::Table, Item::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_item_category_category_id")
                            .from(ItemItemCategory::Table, ItemItemCategory::CategoryId)
                            .to(ItemCategory::Table, ItemCategory::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemItemCategory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GameItemCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameItemCategory {
    Table,
    GameId,
    CategoryId,
}

#[derive(DeriveIden)]
pub enum ItemItemCategory {
    Table,
    ItemId,
    CategoryId,
}
