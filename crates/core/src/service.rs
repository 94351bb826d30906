//! Person lifecycle operations: validation, persistence and DTO translation.

use std::sync::Arc;

use crate::error::CoreError;
use crate::person::{validate_new_person, NewPerson, PersonDto};
use crate::store::PersonStore;
use crate::types::DbId;

const ENTITY: &str = "Person";

/// Gatekeeper between the wire DTO and the record store.
///
/// Cheaply cloneable; the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct PersonService {
    store: Arc<dyn PersonStore>,
}

impl PersonService {
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }

    /// The underlying store, for liveness probes.
    pub fn store(&self) -> &dyn PersonStore {
        self.store.as_ref()
    }

    /// Every stored person as a DTO, in store order.
    pub async fn list_all(&self) -> Result<Vec<PersonDto>, CoreError> {
        let people = self.store.find_all().await?;
        Ok(people.into_iter().map(PersonDto::from).collect())
    }

    /// Validate and persist a new person. Any id on `dto` is ignored.
    ///
    /// Rules are checked in order (name, national id, age) and the first
    /// violation is returned as [`CoreError::Validation`].
    pub async fn create(&self, dto: PersonDto) -> Result<PersonDto, CoreError> {
        validate_new_person(&dto).map_err(|v| CoreError::Validation(v.to_string()))?;

        let saved = self.store.create(NewPerson::from(dto)).await?;
        Ok(PersonDto::from(saved))
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<PersonDto, CoreError> {
        let person = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        Ok(PersonDto::from(person))
    }

    /// Replace name, national id and age of an existing person.
    ///
    /// No create rules are applied here: whatever the caller sends is
    /// stored as-is.
    pub async fn update(&self, id: DbId, dto: PersonDto) -> Result<PersonDto, CoreError> {
        let mut person = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        person.replace_fields(dto);

        let saved = self
            .store
            .save(&person)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        Ok(PersonDto::from(saved))
    }

    /// Remove by id. Missing ids are not an error.
    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.store.delete_by_id(id).await
    }
}
