//! Persistence capability consumed by [`crate::service::PersonService`].

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::person::{NewPerson, Person};
use crate::types::DbId;

/// Record store for persons, keyed by a store-assigned integer id.
///
/// Each call is expected to be atomic on its own. No cross-call
/// transactions are assumed.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Insert a new record and return it with its assigned id.
    async fn create(&self, person: NewPerson) -> Result<Person, CoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Person>, CoreError>;

    /// Every stored record, in store-defined order.
    async fn find_all(&self) -> Result<Vec<Person>, CoreError>;

    /// Overwrite the record with `person.id`.
    ///
    /// Returns `None` if no such record exists.
    async fn save(&self, person: &Person) -> Result<Option<Person>, CoreError>;

    /// Remove the record with `id`. Removing a missing id is not an error.
    async fn delete_by_id(&self, id: DbId) -> Result<(), CoreError>;

    /// Cheap liveness probe used by the health endpoint.
    async fn health_check(&self) -> Result<(), CoreError>;
}

/// Process-local store backed by a `BTreeMap`. Ids start at 1 and are
/// never reused.
#[derive(Debug, Default)]
pub struct InMemoryPersonStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: DbId,
    rows: BTreeMap<DbId, Person>,
}

impl InMemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonStore for InMemoryPersonStore {
    async fn create(&self, person: NewPerson) -> Result<Person, CoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let stored = Person {
            id: inner.last_id,
            name: person.name,
            national_id: person.national_id,
            age: person.age,
        };
        inner.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Person>, CoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Person>, CoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn save(&self, person: &Person) -> Result<Option<Person>, CoreError> {
        let mut inner = self.inner.write().await;
        match inner.rows.get_mut(&person.id) {
            Some(row) => {
                *row = person.clone();
                Ok(Some(person.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), CoreError> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
