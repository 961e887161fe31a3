//! Repository for the `mesas` table.

use mesas_core::mesa::MesaFields;
use mesas_core::types::DbId;
use sqlx::PgPool;

use crate::models::mesa::Mesa;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, capacity, status";

/// Provides CRUD operations for mesas.
pub struct MesaRepo;

impl MesaRepo {
    /// Insert a new mesa, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &MesaFields) -> Result<Mesa, sqlx::Error> {
        let query = format!(
            "INSERT INTO mesas (name, capacity, status)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mesa>(&query)
            .bind(&input.name)
            .bind(input.capacity)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a mesa by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Mesa>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mesas WHERE id = $1");
        sqlx::query_as::<_, Mesa>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all mesas, newest id first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Mesa>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mesas ORDER BY id DESC");
        sqlx::query_as::<_, Mesa>(&query).fetch_all(pool).await
    }

    /// Replace name, capacity and status of a mesa.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &MesaFields,
    ) -> Result<Option<Mesa>, sqlx::Error> {
        let query = format!(
            "UPDATE mesas SET name = $2, capacity = $3, status = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mesa>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.capacity)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a mesa by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM mesas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
