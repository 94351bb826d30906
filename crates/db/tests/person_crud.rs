//! Integration tests for the `pessoas` repository and store adapter.
//!
//! These need a PostgreSQL server reachable through `DATABASE_URL`; run
//! them with `cargo test -p pessoas-db -- --ignored`.

use assert_matches::assert_matches;
use pessoas_core::error::CoreError;
use pessoas_core::person::{NewPerson, PersonDto};
use pessoas_core::service::PersonService;
use pessoas_core::store::PersonStore;
use pessoas_db::repositories::PersonRepo;
use pessoas_db::PgPersonStore;
use sqlx::PgPool;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_person(name: &str, age: i32) -> NewPerson {
    NewPerson {
        name: name.to_string(),
        national_id: format!("{name}-cpf"),
        age,
    }
}

fn dto(name: &str, national_id: &str, age: i32) -> PersonDto {
    PersonDto {
        id: None,
        name: name.to_string(),
        national_id: national_id.to_string(),
        age,
    }
}

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn create_assigns_sequential_ids(pool: PgPool) {
    let a = PersonRepo::create(&pool, &new_person("Ana", 30)).await.unwrap();
    let b = PersonRepo::create(&pool, &new_person("Bia", 40)).await.unwrap();

    assert!(b.id > a.id);
    assert_eq!(a.nome, "Ana");
    assert_eq!(a.cpf, "Ana-cpf");
    assert_eq!(a.idade, 30);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn list_is_ordered_by_id(pool: PgPool) {
    for name in ["Caio", "Ana", "Bia"] {
        PersonRepo::create(&pool, &new_person(name, 20)).await.unwrap();
    }

    let rows = PersonRepo::list(&pool).await.unwrap();
    let names: Vec<_> = rows.iter().map(|r| r.nome.as_str()).collect();
    assert_eq!(names, ["Caio", "Ana", "Bia"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn delete_reports_whether_a_row_was_removed(pool: PgPool) {
    let row = PersonRepo::create(&pool, &new_person("Ana", 30)).await.unwrap();

    assert!(PersonRepo::delete(&pool, row.id).await.unwrap());
    assert!(!PersonRepo::delete(&pool, row.id).await.unwrap());
    assert!(PersonRepo::find_by_id(&pool, row.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Store adapter + service
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn update_persists_values_create_would_reject(pool: PgPool) {
    let svc = PersonService::new(Arc::new(PgPersonStore::new(pool.clone())));
    let created = svc.create(dto("Ana", "123", 30)).await.unwrap();
    let id = created.id.unwrap();

    let updated = svc.update(id, dto("", "", 999)).await.unwrap();
    assert_eq!(updated.age, 999);

    let row = PersonRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(row.nome, "");
    assert_eq!(row.idade, 999);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn store_round_trip_and_missing_ids(pool: PgPool) {
    let store = PgPersonStore::new(pool);
    let svc = PersonService::new(Arc::new(store.clone()));

    let created = svc.create(dto("Ana", "123", 104)).await.unwrap();
    let found = svc.find_by_id(created.id.unwrap()).await.unwrap();
    assert_eq!(found, created);

    assert_matches!(svc.find_by_id(999_999).await, Err(CoreError::NotFound { .. }));
    assert_matches!(
        svc.update(999_999, dto("x", "y", 1)).await,
        Err(CoreError::NotFound { .. })
    );
    assert!(svc.delete(999_999).await.is_ok());
    assert!(store.health_check().await.is_ok());
}
