//! Integration tests for the PostgreSQL practice adapter.
//!
//! Exercises the repository and the `PracticeStore` implementation against a
//! real database. Requires `DATABASE_URL`; run with `cargo test -- --ignored`.

use assert_matches::assert_matches;
use practices_db::models::practice::NewPractice;
use practices_db::postgres::PgPracticeStore;
use practices_db::repositories::PracticeRepo;
use practices_db::PracticeStore;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_practice(name: &str, management: &str, practice: &str) -> NewPractice {
    NewPractice::new(name, management, practice, "2024-05-20")
}

// ---------------------------------------------------------------------------
// Create / read / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn create_then_find_round_trip(pool: PgPool) {
    let store = PgPracticeStore::new(pool);
    let created = store
        .insert(&new_practice("Ana", "Finance", "Audit"))
        .await
        .unwrap();

    assert_eq!(created.category, "Auditor");
    assert_eq!(created.area, "Geral");

    let found = store.find_by_id(&created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn malformed_id_is_absent(pool: PgPool) {
    let store = PgPracticeStore::new(pool);
    assert_matches!(store.find_by_id("not-a-uuid").await, Ok(None));
    assert_matches!(store.delete_by_id("not-a-uuid").await, Ok(false));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn delete_removes_exactly_one(pool: PgPool) {
    let store = PgPracticeStore::new(pool);
    let a = store.insert(&new_practice("A", "X", "P")).await.unwrap();
    store.insert(&new_practice("B", "Y", "P")).await.unwrap();

    assert!(store.delete_by_id(&a.id).await.unwrap());
    assert!(!store.delete_by_id(&a.id).await.unwrap());
    assert_eq!(store.list_recent().await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Ordering and search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn list_is_newest_first(pool: PgPool) {
    for name in ["R1", "R2", "R3"] {
        PracticeRepo::create(&pool, &new_practice(name, "M", "P"))
            .await
            .unwrap();
    }

    let names: Vec<String> = PracticeRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["R3", "R2", "R1"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn search_is_case_insensitive_or(pool: PgPool) {
    PracticeRepo::create(&pool, &new_practice("Ana", "Finance", "Audit"))
        .await
        .unwrap();
    PracticeRepo::create(&pool, &new_practice("Bob", "Audit Team", "Review"))
        .await
        .unwrap();
    PracticeRepo::create(&pool, &new_practice("Caio", "Legal", "Contracts"))
        .await
        .unwrap();

    let lower = PracticeRepo::search(&pool, "audit").await.unwrap();
    let upper = PracticeRepo::search(&pool, "AUDIT").await.unwrap();
    assert_eq!(lower.len(), 2);
    assert_eq!(lower, upper);

    let all = PracticeRepo::search(&pool, "").await.unwrap();
    assert_eq!(all.len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn search_wildcards_match_literally(pool: PgPool) {
    PracticeRepo::create(&pool, &new_practice("Ana", "Finance", "Coverage 50% reached"))
        .await
        .unwrap();
    PracticeRepo::create(&pool, &new_practice("Bob", "Finance", "Coverage 500 reached"))
        .await
        .unwrap();

    let hits = PracticeRepo::search(&pool, "50%").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Ana");

    assert!(PracticeRepo::search(&pool, "_").await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn empty_required_field_violates_check(pool: PgPool) {
    let result = PracticeRepo::create(&pool, &new_practice("", "Finance", "Audit")).await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}
