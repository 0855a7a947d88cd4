use super::*;

/// Tests creating categories and listing them.
///
/// Expected: Ok with trimmed names in creation order
#[tokio::test]
async fn creates_and_lists_categories() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ItemCategoryService::new(db);
    let ores = service.create("  Ores ".to_string()).await?;
    service.create("Food".to_string()).await?;

    let all = service.get_all().await?;

    assert_eq!(ores.name, "Ores");
    let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Ores", "Food"]);

    Ok(())
}

/// Tests creating a category with a blank name.
///
/// Expected: Err(BadRequest) and no row written
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ItemCategoryService::new(db).create("   ".to_string()).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::ItemCategory::find().count(db).await?, 0);

    Ok(())
}
