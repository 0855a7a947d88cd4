use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;
use super::m20260105_000003_create_item_table::Item;
use super::m20260105_000004_create_recipe_table::Recipe;
use super::m20260106_000007_create_collection_group_table::CollectionGroup;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupItemPreference::Table)
                    .if_not_exists()
                    .col(integer(GroupItemPreference::GroupId))
                    .col(integer(GroupItemPreference::UserId))
                    .col(integer(GroupItemPreference::ItemId))
                    .col(integer_null(GroupItemPreference::RecipeId))
                    .primary_key(
                        Index::create()
                            .col(GroupItemPreference::GroupId)
                            .col(GroupItemPreference::UserId)
                            .col(GroupItemPreference::ItemId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_item_preference_group_id")
                            .from(GroupItemPreference::Table, GroupItemPreference::GroupId)
                            .to(CollectionGroup::Table, CollectionGroup::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_item_preference_user_id")
                            .from(GroupItemPreference::Table, GroupItemPreference::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_item_preference_item_id")
                            .from(GroupItemPreference::Table, GroupItemPreference::ItemId)
                            .to(Item::Table, Item::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_item_preference_recipe_id")
                            .from(GroupItemPreference::Table, GroupItemPreference::RecipeId)
                            .to(Recipe::Table, Recipe::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupItemPreference::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupItemPreference {
    Table,
    GroupId,
    UserId,
    ItemId,
    RecipeId,
}
