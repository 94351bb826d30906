//! Repository for the `pessoas` table.

use pessoas_core::person::{NewPerson, Person};
use pessoas_core::types::DbId;
use sqlx::PgPool;

use crate::models::person::PersonRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome, cpf, idade";

/// Provides CRUD operations for persons.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewPerson) -> Result<PersonRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO pessoas (nome, cpf, idade)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PersonRow>(&query)
            .bind(&input.name)
            .bind(&input.national_id)
            .bind(input.age)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PersonRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pessoas WHERE id = $1");
        sqlx::query_as::<_, PersonRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all persons ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<PersonRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pessoas ORDER BY id");
        sqlx::query_as::<_, PersonRow>(&query).fetch_all(pool).await
    }

    /// Overwrite every mutable column of the row with `person.id`.
    ///
    /// Returns `None` if no row with that id exists.
    pub async fn update(pool: &PgPool, person: &Person) -> Result<Option<PersonRow>, sqlx::Error> {
        let query = format!(
            "UPDATE pessoas SET
                nome = $2,
                cpf = $3,
                idade = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PersonRow>(&query)
            .bind(person.id)
            .bind(&person.name)
            .bind(&person.national_id)
            .bind(person.age)
            .fetch_optional(pool)
            .await
    }

    /// Delete a person by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pessoas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
