use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;
use super::m20260105_000002_create_game_table::Game;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Collection::Table)
                    .if_not_exists()
                    .col(pk_auto(Collection::Id))
                    .col(integer(Collection::UserId))
                    .col(integer(Collection::GameId))
                    .col(string(Collection::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collection_user_id")
                            .from(Collection::Table, Collection::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collection_game_id")
                            .from(Collection::Table, Collection::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_collection_user_id_game_id")
                    .table(Collection::Table)
                    .col(Collection::UserId)
                    .col(Collection::GameId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Collection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Collection {
    Table,
    Id,
    UserId,
    GameId,
    Name,
}
