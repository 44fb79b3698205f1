use pantry_core::db::open_db_in_memory;
use pantry_core::{
    CatalogService, Product, ProductPatch, ProductRepository, SqliteProductRepository,
};

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::new(&conn);

    let created = repo.create("Sugar", 32).unwrap();
    assert_eq!(created.name, "Sugar");
    assert_eq!(created.price, 32);

    let loaded = repo.get(created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn get_unknown_id_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::new(&conn);

    assert_eq!(repo.get(42).unwrap(), None);
}

#[test]
fn update_with_empty_patch_leaves_record_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::new(&conn);

    let created = repo.create("Bread", 20).unwrap();
    let updated = repo.update(created.id, &ProductPatch::new()).unwrap().unwrap();
    assert_eq!(updated, created);

    let loaded = repo.get(created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn update_name_only_preserves_price() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::new(&conn);

    let created = repo.create("Butter", 62).unwrap();
    let patch = ProductPatch::new().with_name("Salted Butter");
    let updated = repo.update(created.id, &patch).unwrap().unwrap();

    assert_eq!(updated.name, "Salted Butter");
    assert_eq!(updated.price, 62);
    assert_eq!(repo.get(created.id).unwrap().unwrap(), updated);
}

#[test]
fn update_can_set_price_to_zero() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::new(&conn);

    let created = repo.create("Milk", 32).unwrap();
    let patch = ProductPatch::new().with_price(0);
    let updated = repo.update(created.id, &patch).unwrap().unwrap();

    assert_eq!(updated.price, 0);
    assert_eq!(repo.get(created.id).unwrap().unwrap().price, 0);
}

#[test]
fn update_unknown_id_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::new(&conn);

    let patch = ProductPatch::new().with_name("Ghost");
    assert_eq!(repo.update(7, &patch).unwrap(), None);
}

#[test]
fn delete_returns_true_exactly_once() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::new(&conn);

    let created = repo.create("Sult", 19).unwrap();
    assert!(repo.delete(created.id).unwrap());
    assert!(!repo.delete(created.id).unwrap());
    assert_eq!(repo.get(created.id).unwrap(), None);
}

#[test]
fn full_product_lifecycle_scenario() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::new(&conn);

    let created = repo.create("Sugar", 32).unwrap();
    assert_eq!(created.id, 1);

    assert_eq!(
        repo.get(1).unwrap().unwrap(),
        Product {
            id: 1,
            name: "Sugar".to_string(),
            price: 32,
        }
    );

    let repriced = repo
        .update(1, &ProductPatch::new().with_price(40))
        .unwrap()
        .unwrap();
    assert_eq!(repriced.name, "Sugar");
    assert_eq!(repriced.price, 40);

    assert!(repo.delete(1).unwrap());
    assert_eq!(repo.get(1).unwrap(), None);
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open_db_in_memory().unwrap();
    let service = CatalogService::new(SqliteProductRepository::new(&conn));

    let created = service.create_product("Flour", 24).unwrap();
    let fetched = service.get_product(created.id).unwrap().unwrap();
    assert_eq!(fetched.name, "Flour");

    let updated = service
        .update_product(created.id, &ProductPatch::new().with_price(27))
        .unwrap()
        .unwrap();
    assert_eq!(updated.price, 27);

    assert!(service.delete_product(created.id).unwrap());
    assert_eq!(service.get_product(created.id).unwrap(), None);
}
