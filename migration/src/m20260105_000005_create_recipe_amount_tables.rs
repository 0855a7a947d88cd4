use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_item_table::Item;
use super::m20260105_000004_create_recipe_table::Recipe;

/// Creates `recipe_input` and `recipe_output`, which share one layout.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(recipe_amount_table(RecipeInput::Table, "recipe_input"))
            .await?;
        manager
            .create_table(recipe_amount_table(RecipeOutput::Table, "recipe_output"))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecipeOutput::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RecipeInput::Table).to_owned())
            .await
    }
}

fn recipe_amount_table<T: IntoIden + Copy + 'static>(
    table: T,
    prefix: &str,
) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(pk_auto(RecipeAmount::Id))
        .col(integer(RecipeAmount::RecipeId))
        .col(integer(RecipeAmount::ItemId))
        .col(integer(RecipeAmount::Amount))
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{}_recipe_id", prefix))
                .from(table, RecipeAmount::RecipeId)
                .to(Recipe::Table, Recipe::Id)
                .on_delete(ForeignKeyAction::NoAction)
                .on_update(ForeignKeyAction::NoAction),
        )
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{}_item_id", prefix))
                .from(table, RecipeAmount::ItemId)
                .to(Item::Table, Item::Id)
                .on_delete(ForeignKeyAction::NoAction)
                .on_update(ForeignKeyAction::NoAction),
        )
        .to_owned()
}

#[derive(DeriveIden, Clone, Copy)]
pub enum RecipeInput {
    Table,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum RecipeOutput {
    Table,
}

#[derive(DeriveIden)]
pub enum RecipeAmount {
    Id,
    RecipeId,
    ItemId,
    Amount,
}
