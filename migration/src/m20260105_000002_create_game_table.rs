use sea_orm_migration::{prelude::*, schema::*};

use super::m20260104_000001_create_image_table::Image;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(string(Game::Name))
                    .col(integer_null(Game::IconId))
                    .col(integer_null(Game::BannerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_icon_id")
                            .from(Game::Table, Game::IconId)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_banner_id")
                            .from(Game::Table, Game::BannerId)
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
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    Name,
    IconId,
    BannerId,
}
