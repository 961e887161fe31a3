//! Repository-level CRUD tests for the `mesas` table.

use mesas_core::mesa::{MesaFields, DEFAULT_STATUS};
use mesas_db::repositories::MesaRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fields(name: &str, capacity: i32, status: &str) -> MesaFields {
    MesaFields {
        name: name.to_string(),
        capacity,
        status: status.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Create / find
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_assigns_id(pool: PgPool) {
    let mesa = MesaRepo::create(&pool, &fields("T1", 4, DEFAULT_STATUS))
        .await
        .unwrap();

    assert!(mesa.id > 0);
    assert_eq!(mesa.name, "T1");
    assert_eq!(mesa.capacity, 4);
    assert_eq!(mesa.status, DEFAULT_STATUS);

    let found = MesaRepo::find_by_id(&pool, mesa.id).await.unwrap();
    assert_eq!(found, Some(mesa));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_missing_returns_none(pool: PgPool) {
    let found = MesaRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_empty(pool: PgPool) {
    let mesas = MesaRepo::list(&pool).await.unwrap();
    assert!(mesas.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_orders_by_id_desc(pool: PgPool) {
    let first = MesaRepo::create(&pool, &fields("A", 2, DEFAULT_STATUS))
        .await
        .unwrap();
    let second = MesaRepo::create(&pool, &fields("B", 6, "occupied"))
        .await
        .unwrap();

    let ids: Vec<i64> = MesaRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_update_replaces_all_fields(pool: PgPool) {
    let mesa = MesaRepo::create(&pool, &fields("T1", 4, DEFAULT_STATUS))
        .await
        .unwrap();

    let updated = MesaRepo::update(&pool, mesa.id, &fields("T1b", 6, "occupied"))
        .await
        .unwrap()
        .expect("row should exist");

    assert_eq!(updated.id, mesa.id);
    assert_eq!(updated.name, "T1b");
    assert_eq!(updated.capacity, 6);
    assert_eq!(updated.status, "occupied");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_returns_none(pool: PgPool) {
    let updated = MesaRepo::update(&pool, 999_999, &fields("X", 1, "available"))
        .await
        .unwrap();
    assert!(updated.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_removes_row(pool: PgPool) {
    let mesa = MesaRepo::create(&pool, &fields("T1", 4, DEFAULT_STATUS))
        .await
        .unwrap();

    assert!(MesaRepo::delete(&pool, mesa.id).await.unwrap());
    assert!(MesaRepo::find_by_id(&pool, mesa.id).await.unwrap().is_none());

    // Second delete finds nothing.
    assert!(!MesaRepo::delete(&pool, mesa.id).await.unwrap());
}
