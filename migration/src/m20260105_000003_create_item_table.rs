use sea_orm_migration::{prelude::*, schema::*};

use super::m20260104_000001_create_image_table::Image;
use super::m20260105_000002_create_game_table::Game;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(pk_auto(Item::Id))
                    .col(integer(Item::GameId))
                    .col(string(Item::Name))
                    .col(integer_null(Item::ImageId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_game_id")
                            .from(Item::Table, Item::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_image_id")
                            .from(Item::Table, Item::ImageId)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Item::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Item {
    Table,
    Id,
    GameId,
    Name,
    ImageId,
}
