pub use sea_orm_migration::prelude::*;

mod m20260104_000001_create_image_table;
mod m20260104_000002_create_item_category_table;
mod m20260105_000001_create_user_table;
mod m20260105_000002_create_game_table;
mod m20260105_000003_create_item_table;
mod m20260105_000004_create_recipe_table;
mod m20260105_000005_create_recipe_amount_tables;
mod m20260106_000006_create_collection_table;
mod m20260106_000007_create_collection_group_table;
mod m20260106_000008_create_collection_item_amount_table;
mod m20260106_000009_create_group_preference_table;
mod m20260106_000010_create_group_item_preference_table;
mod m20260107_000011_create_category_link_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260104_000001_create_image_table::Migration),
            Box::new(m20260104_000002_create_item_category_table::Migration),
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_game_table::Migration),
            Box::new(m20260105_000003_create_item_table::Migration),
            Box::new(m20260105_000004_create_recipe_table::Migration),
            Box::new(m20260105_000005_create_recipe_amount_tables::Migration),
            Box::new(m20260106_000006_create_collection_table::Migration),
            Box::new(m20260106_000007_create_collection_group_table::Migration),
            Box::new(m20260106_000008_create_collection_item_amount_table::Migration),
            Box::new(m20260106_000009_create_group_preference_table::Migration),
            Box::new(m20260106_000010_create_group_item_preference_table::Migration),
            Box::new(m20260107_000011_create_category_link_tables::Migration),
        ]
    }
}
