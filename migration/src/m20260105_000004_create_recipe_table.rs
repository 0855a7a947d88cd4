use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_game_table::Game;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipe::Table)
                    .if_not_exists()
                    .col(pk_auto(Recipe::Id))
                    .col(integer(Recipe::GameId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recipe_game_id")
                            .from(Recipe::Table, Recipe::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recipe::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Recipe {
    Table,
    Id,
    GameId,
}
