use super::*;

/// Tests loading the categories of several games at once.
///
/// Expected: Ok with each game's categories ordered by id and no entry for a game
/// without categories
#[tokio::test]
async fn groups_categories_by_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ores = factory::item_category::create_named_item_category(db, "Ores").await?;
    let food = factory::item_category::create_named_item_category(db, "Food").await?;
    let valheim = factory::game::GameFactory::new(db)
        .category(food.id)
        .category(ores.id)
        .build()
        .await?;
    let satisfactory = factory::game::GameFactory::new(db)
        .category(ores.id)
        .build()
        .await?;
    let empty = factory::create_game(db).await?;

    let linked = ItemCategoryRepository::new(db)
        .get_by_games(&[valheim.id, satisfactory.id, empty.id])
        .await?;

    let names = |game_id: i32| -> Vec<String> {
        linked[&game_id].iter().map(|c| c.name.clone()).collect()
    };
    assert_eq!(names(valheim.id), vec!["Ores", "Food"]);
    assert_eq!(names(satisfactory.id), vec!["Ores"]);
    assert!(!linked.contains_key(&empty.id));

    Ok(())
}
