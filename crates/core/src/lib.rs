//! Domain core for the person registry.
//!
//! Holds the `Person` entity and its wire DTO, the create-time validation
//! rules, the [`store::PersonStore`] capability and the
//! [`service::PersonService`] that ties them together. Nothing in here
//! knows about HTTP or SQL.

pub mod error;
pub mod person;
pub mod service;
pub mod store;
pub mod types;
