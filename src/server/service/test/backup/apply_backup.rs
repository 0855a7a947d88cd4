use super::*;

/// Tests restoring a backup after the database changed.
///
/// Seeds a collection with amounts and preferences of two users, one of them an
/// explicit null recipe choice, takes a backup, deletes the collection and adds a
/// game, then restores.
///
/// Expected: Ok with the collection, its amounts and both users' preferences back
/// and the extra game gone
#[tokio::test]
async fn restores_collections_and_preferences() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .user_name("admin")
        .role("Admin")
        .build()
        .await?;
    let owner = factory::user::UserFactory::new(db)
        .user_name("owner")
        .build()
        .await?;
    let game = factory::game::GameFactory::new(db).name("Valheim").build().await?;
    let ore = factory::item::ItemFactory::new(db, game.id)
        .name("Ore")
        .build()
        .await?;
    let ingot = factory::item::ItemFactory::new(db, game.id)
        .name("Ingot")
        .build()
        .await?;
    let recipe = factory::recipe::RecipeFactory::new(db, game.id)
        .input(ore.id, 2)
        .output(ingot.id, 1)
        .build()
        .await?;

    let collections = CollectionService::new(db);
    let collection = collections
        .add_collection(CreateCollectionParam {
            user_id: owner.id,
            game_id: game.id,
            name: "Base".to_string(),
            groups: vec![NewGroupParam {
                name: "Smithy".to_string(),
                item_amounts: vec![ItemAmount {
                    item_id: ingot.id,
                    amount: 10,
                }],
            }],
        })
        .await?;
    let group_id = collection.groups[0].id;
    collections
        .update_group_preferences(
            owner.id,
            collection.id,
            group_id,
            UpdateGroupPreferencesParam {
                preferences: GroupPreferences {
                    show_base_ingredients: true,
                    collapse_ingredients: false,
                    cost_reduction: 0.8,
                },
                item_recipe_preferences: BTreeMap::from([(ingot.id, Some(recipe.id))]),
            },
        )
        .await?;
    collections
        .update_group_preferences(
            admin.id,
            collection.id,
            group_id,
            UpdateGroupPreferencesParam {
                preferences: GroupPreferences::default(),
                item_recipe_preferences: BTreeMap::from([(ingot.id, None)]),
            },
        )
        .await?;

    let images = tempfile::tempdir().unwrap();
    let backups = BackupService::new(db, dir.path(), images.path());
    let backup = backups.create_backup(admin.id).await?;

    collections.delete_collection(collection.id).await?;
    factory::create_game(db).await?;

    backups.apply_backup(&backup.id).await?;

    assert_eq!(entity::prelude::Game::find().count(db).await?, 1);
    assert_eq!(entity::prelude::User::find().count(db).await?, 2);
    assert_eq!(entity::prelude::Recipe::find().count(db).await?, 1);

    let restored_owner = entity::prelude::User::find()
        .all(db)
        .await?
        .into_iter()
        .find(|u| u.user_name == "owner")
        .unwrap();
    let restored_admin = entity::prelude::User::find()
        .all(db)
        .await?
        .into_iter()
        .find(|u| u.user_name == "admin")
        .unwrap();
    assert_eq!(restored_admin.role, "Admin");

    let restored = collections.get_all_collections(restored_owner.id).await?;
    assert_eq!(restored.len(), 1);
    assert_eq!(restored[0].name, "Base");
    assert_eq!(restored[0].user_id, restored_owner.id);

    let group = &restored[0].groups[0];
    assert_eq!(group.name, "Smithy");
    assert_eq!(group.item_amounts.len(), 1);
    assert_eq!(group.item_amounts[0].amount, 10);
    assert_eq!(group.preferences.cost_reduction, 0.8);
    assert!(group.preferences.show_base_ingredients);

    let restored_recipe = entity::prelude::Recipe::find().one(db).await?.unwrap();
    let restored_ingot = group.item_amounts[0].item_id;
    assert_eq!(
        group.item_recipe_preferences,
        BTreeMap::from([(restored_ingot, Some(restored_recipe.id))])
    );

    let as_admin = collections.get_group(restored_admin.id, group.id).await?;
    assert_eq!(as_admin.preferences, GroupPreferences::default());
    assert_eq!(
        as_admin.item_recipe_preferences,
        BTreeMap::from([(restored_ingot, None)])
    );

    Ok(())
}

/// Tests ids that could escape the backup root or do not exist.
///
/// Expected: Err(InvalidId) for a path, Err(NotFound) for a well-formed unknown id
#[tokio::test]
async fn rejects_bad_and_unknown_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let images = tempfile::tempdir().unwrap();
    let service = BackupService::new(db, dir.path(), images.path());

    assert!(matches!(
        service.apply_backup("../secrets").await,
        Err(AppError::BackupErr(BackupError::InvalidId(_)))
    ));
    assert!(matches!(
        service.apply_backup("2020_01_01_00_00_00_000").await,
        Err(AppError::BackupErr(BackupError::NotFound(_)))
    ));

    Ok(())
}

/// Tests a backup whose item points at a game missing from the backup.
///
/// Expected: Err(MissingReference) and the existing data untouched
#[tokio::test]
async fn dangling_reference_leaves_database_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();

    factory::create_user(db).await?;
    factory::create_game(db).await?;

    let id = "2021_02_03_04_05_06_007";
    let backup_dir = dir.path().join(id);
    std::fs::create_dir_all(&backup_dir).unwrap();
    let files = [
        (
            "metaData.json",
            r#"{"id":"2021_02_03_04_05_06_007","date":"2021-02-03 04:05:06.007","version":1}"#,
        ),
        ("users.json", "[]"),
        ("games.json", "[]"),
        ("items.json", r#"[{"id":1,"gameId":99,"name":"Ore"}]"#),
        ("recipes.json", "[]"),
        ("collections.json", "[]"),
        ("collectionsGroupPreference.json", "[]"),
    ];
    for (name, content) in files {
        std::fs::write(backup_dir.join(name), content).unwrap();
    }

    let images = tempfile::tempdir().unwrap();
    let result = BackupService::new(db, dir.path(), images.path())
        .apply_backup(id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::BackupErr(BackupError::MissingReference("game", 99)))
    ));
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Game::find().count(db).await?, 1);

    Ok(())
}

/// Tests a backup whose user record names a role that does not exist.
///
/// Expected: Err(BadRequest), the existing users keep their roles and the game
/// added after the backup is still there
#[tokio::test]
async fn unknown_role_leaves_database_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let images = tempfile::tempdir().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .user_name("admin")
        .role("Admin")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .user_name("member")
        .build()
        .await?;

    let service = BackupService::new(db, dir.path(), images.path());
    let backup = service.create_backup(admin.id).await?;

    let users_file = dir.path().join(&backup.id).join("users.json");
    let mut users: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&users_file).unwrap()).unwrap();
    for user in users.as_array_mut().unwrap() {
        if user["userName"] == "member" {
            user["role"] = "Owner".into();
        }
    }
    std::fs::write(&users_file, serde_json::to_vec(&users).unwrap()).unwrap();

    factory::create_game(db).await?;

    let result = service.apply_backup(&backup.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let mut roles: Vec<(String, String)> = entity::prelude::User::find()
        .all(db)
        .await?
        .into_iter()
        .map(|u| (u.user_name, u.role))
        .collect();
    roles.sort();
    assert_eq!(
        roles,
        vec![
            ("admin".to_string(), "Admin".to_string()),
            ("member".to_string(), "User".to_string()),
        ]
    );
    assert_eq!(entity::prelude::Game::find().count(db).await?, 1);

    Ok(())
}

/// Tests restoring images and item categories referenced by a game and an item.
///
/// Takes a backup, then adds another category and image before restoring.
///
/// Expected: Ok with one category and one image whose bytes survive, the game and
/// item pointing at the restored ids, and only the restored image file left on disk
#[tokio::test]
async fn restores_images_and_categories() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let images = tempfile::tempdir().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let image_service = ImageService::new(db, images.path());
    let icon = image_service
        .add_image(ImageType::Png, "Icon".to_string(), b"icon-bytes")
        .await?;
    let ores = factory::item_category::create_named_item_category(db, "Ores").await?;
    let game = GameService::new(db)
        .create(GameParam {
            name: "Valheim".to_string(),
            item_category_ids: vec![ores.id],
            icon_id: Some(icon.id),
            banner_id: None,
        })
        .await?;
    ItemService::new(db)
        .create(ItemParam {
            game_id: game.id,
            name: "Copper".to_string(),
            category_ids: vec![ores.id],
            image_id: Some(icon.id),
        })
        .await?;

    let backups = BackupService::new(db, dir.path(), images.path());
    let backup = backups.create_backup(admin.id).await?;
    assert!(dir
        .path()
        .join(&backup.id)
        .join("images")
        .join(&icon.path)
        .exists());

    factory::item_category::create_named_item_category(db, "Wood").await?;
    let spare = image_service
        .add_image(ImageType::Webp, "Spare".to_string(), b"spare-bytes")
        .await?;

    backups.apply_backup(&backup.id).await?;

    assert_eq!(entity::prelude::ItemCategory::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Image::find().count(db).await?, 1);

    let games = GameService::new(db).get_all().await?;
    assert_eq!(games.len(), 1);
    let restored_icon = games[0].icon_id.unwrap();
    assert_eq!(games[0].item_categories.len(), 1);
    assert_eq!(games[0].item_categories[0].name, "Ores");
    assert_eq!(games[0].banner_id, None);

    let items = ItemService::new(db).get_all(None).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].image_id, Some(restored_icon));
    assert_eq!(items[0].categories, games[0].item_categories);

    let (image, data) = image_service.get_image_data(restored_icon).await?;
    assert_eq!(image.description, "Icon");
    assert_eq!(image.image_type, ImageType::Png);
    assert_eq!(data, b"icon-bytes");

    assert!(!images.path().join(&spare.path).exists());
    assert_eq!(std::fs::read_dir(images.path()).unwrap().count(), 1);

    Ok(())
}
