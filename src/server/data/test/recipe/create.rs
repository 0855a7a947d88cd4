use super::*;

/// Tests creating a recipe with inputs and outputs.
///
/// Verifies that the returned recipe is hydrated with both amount lists.
///
/// Expected: Ok with matching inputs and outputs
#[tokio::test]
async fn creates_recipe_with_amounts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let ore = factory::create_item(db, game.id).await?;
    let coal = factory::create_item(db, game.id).await?;
    let ingot = factory::create_item(db, game.id).await?;

    let recipe = RecipeRepository::new(db)
        .create(RecipeParam {
            game_id: game.id,
            input: vec![
                RecipeAmount {
                    item_id: ore.id,
                    amount: 2,
                },
                RecipeAmount {
                    item_id: coal.id,
                    amount: 1,
                },
            ],
            output: vec![RecipeAmount {
                item_id: ingot.id,
                amount: 1,
            }],
        })
        .await?;

    assert_eq!(recipe.game_id, game.id);
    assert_eq!(recipe.input.len(), 2);
    assert_eq!(recipe.input[0].item_id, ore.id);
    assert_eq!(recipe.input[0].amount, 2);
    assert_eq!(recipe.output.len(), 1);
    assert_eq!(recipe.output[0].item_id, ingot.id);

    let reloaded = RecipeRepository::new(db).find_by_id(recipe.id).await?;
    assert_eq!(reloaded, Some(recipe));

    Ok(())
}
