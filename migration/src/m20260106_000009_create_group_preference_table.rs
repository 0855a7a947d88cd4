use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;
use super::m20260106_000007_create_collection_group_table::CollectionGroup;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupPreference::Table)
                    .if_not_exists()
                    .col(integer(GroupPreference::GroupId))
                    .col(integer(GroupPreference::UserId))
                    .col(boolean(GroupPreference::ShowBaseIngredients).default(false))
                    .col(boolean(GroupPreference::CollapseIngredients).default(true))
                    .col(float(GroupPreference::CostReduction).default(1.0))
                    .primary_key(
                        Index::create()
                            .col(GroupPreference::GroupId)
                            .col(GroupPreference::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_preference_group_id")
                            .from(GroupPreference::Table, GroupPreference::GroupId)
                            .to(CollectionGroup::Table, CollectionGroup::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_preference_user_id")
                            .from(GroupPreference::Table, GroupPreference::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupPreference::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupPreference {
    Table,
    GroupId,
    UserId,
    ShowBaseIngredients,
    CollapseIngredients,
    CostReduction,
}
