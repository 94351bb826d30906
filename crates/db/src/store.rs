//! [`PersonStore`] backed by PostgreSQL.

use async_trait::async_trait;
use pessoas_core::error::CoreError;
use pessoas_core::person::{NewPerson, Person};
use pessoas_core::store::PersonStore;
use pessoas_core::types::DbId;

use crate::repositories::PersonRepo;
use crate::DbPool;

/// Adapter from the domain store capability to [`PersonRepo`].
///
/// Database errors are logged here and surface as [`CoreError::Internal`].
#[derive(Clone)]
pub struct PgPersonStore {
    pool: DbPool,
}

impl PgPersonStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn internal(op: &'static str) -> impl FnOnce(sqlx::Error) -> CoreError {
    move |err| {
        tracing::error!(error = %err, op, "Person store query failed");
        CoreError::Internal(format!("{op}: {err}"))
    }
}

#[async_trait]
impl PersonStore for PgPersonStore {
    async fn create(&self, person: NewPerson) -> Result<Person, CoreError> {
        let row = PersonRepo::create(&self.pool, &person)
            .await
            .map_err(internal("create"))?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Person>, CoreError> {
        let row = PersonRepo::find_by_id(&self.pool, id)
            .await
            .map_err(internal("find_by_id"))?;
        Ok(row.map(Person::from))
    }

    async fn find_all(&self) -> Result<Vec<Person>, CoreError> {
        let rows = PersonRepo::list(&self.pool)
            .await
            .map_err(internal("find_all"))?;
        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn save(&self, person: &Person) -> Result<Option<Person>, CoreError> {
        let row = PersonRepo::update(&self.pool, person)
            .await
            .map_err(internal("save"))?;
        Ok(row.map(Person::from))
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), CoreError> {
        let deleted = PersonRepo::delete(&self.pool, id)
            .await
            .map_err(internal("delete_by_id"))?;
        if !deleted {
            tracing::debug!(person_id = id, "Delete matched no row");
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(internal("health_check"))
    }
}
