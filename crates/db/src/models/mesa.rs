//! Mesa entity model and DTOs.

use mesas_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `mesas` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Mesa {
    pub id: DbId,
    pub name: String,
    pub capacity: i32,
    pub status: String,
}

/// DTO for creating a new mesa.
///
/// Fields are optional so missing values reach validation and come back as
/// a 400 with a message instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMesa {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    /// Defaults to `available` if omitted.
    pub status: Option<String>,
}

/// DTO for replacing a mesa. Every field is required by validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMesa {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub status: Option<String>,
}
