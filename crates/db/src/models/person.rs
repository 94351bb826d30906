//! Row model for the `pessoas` table.

use pessoas_core::person::Person;
use pessoas_core::types::DbId;
use sqlx::FromRow;

/// A row from the `pessoas` table. Column names follow the table.
#[derive(Debug, Clone, FromRow)]
pub struct PersonRow {
    pub id: DbId,
    pub nome: String,
    pub cpf: String,
    pub idade: i32,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Self {
            id: row.id,
            name: row.nome,
            national_id: row.cpf,
            age: row.idade,
        }
    }
}
