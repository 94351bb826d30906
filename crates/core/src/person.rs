//! Person entity, wire DTO and create-time validation rules.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::DbId;

/// Lowest age accepted when registering a person.
pub const MIN_AGE: i32 = 1;

/// Highest age accepted when registering a person.
pub const MAX_AGE: i32 = 104;

/// Highest age the HTTP boundary lets through. One above [`MAX_AGE`], so a
/// create with this age passes request validation and is then rejected by
/// [`validate_new_person`].
pub const BOUNDARY_MAX_AGE: i32 = 105;

/// A stored person record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: DbId,
    pub name: String,
    pub national_id: String,
    pub age: i32,
}

/// A person that has not been persisted yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub national_id: String,
    pub age: i32,
}

/// Wire representation used for request and response bodies.
///
/// `id` is ignored on input and always populated on output. Field names
/// on the wire are `nome`, `cpf` and `idade`; the English names are
/// accepted as input aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PersonDto {
    #[serde(default)]
    pub id: Option<DbId>,

    #[serde(rename = "nome", alias = "name")]
    #[validate(custom(function = "not_blank", message = "name must not be blank"))]
    pub name: String,

    #[serde(rename = "cpf", alias = "nationalId", alias = "national_id")]
    #[validate(custom(function = "not_blank", message = "national id must not be blank"))]
    pub national_id: String,

    #[serde(rename = "idade", alias = "age")]
    #[validate(range(min = 1, max = 105, message = "age must be between 1 and 105"))]
    pub age: i32,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// A create-time business rule that a [`PersonDto`] failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersonViolation {
    #[error("name must not be empty")]
    EmptyName,

    #[error("national id must not be empty")]
    EmptyNationalId,

    #[error("age {0} is invalid, must be between 1 and 104")]
    AgeOutOfRange(i32),
}

/// Check the create rules in order: name, national id, age.
///
/// Returns the first violation found. Only zero-length strings count as
/// empty here; blank-but-non-empty strings are the boundary's concern.
pub fn validate_new_person(dto: &PersonDto) -> Result<(), PersonViolation> {
    if dto.name.is_empty() {
        return Err(PersonViolation::EmptyName);
    }
    if dto.national_id.is_empty() {
        return Err(PersonViolation::EmptyNationalId);
    }
    if !(MIN_AGE..=MAX_AGE).contains(&dto.age) {
        return Err(PersonViolation::AgeOutOfRange(dto.age));
    }
    Ok(())
}

impl From<Person> for PersonDto {
    fn from(person: Person) -> Self {
        Self {
            id: Some(person.id),
            name: person.name,
            national_id: person.national_id,
            age: person.age,
        }
    }
}

impl From<PersonDto> for NewPerson {
    /// Drops any client-supplied id.
    fn from(dto: PersonDto) -> Self {
        Self {
            name: dto.name,
            national_id: dto.national_id,
            age: dto.age,
        }
    }
}

impl Person {
    /// Overwrite every mutable field from `dto`. The id is kept.
    pub fn replace_fields(&mut self, dto: PersonDto) {
        self.name = dto.name;
        self.national_id = dto.national_id;
        self.age = dto.age;
    }
}
