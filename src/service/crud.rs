//! CRUD execution for the `animal` table.

use crate::error::AppError;
use crate::model::{Animal, AnimalChanges, AnimalDraft};
use sqlx::AnyConnection;

const COLUMNS: &str = "id, nome, especie, idade, disponivel";

pub struct AnimalService;

impl AnimalService {
    /// Insert one row. Returns the created row with its generated id.
    pub async fn create(conn: &mut AnyConnection, draft: &AnimalDraft) -> Result<Animal, AppError> {
        let sql = format!(
            "INSERT INTO animal (nome, especie, idade, disponivel) VALUES ($1, $2, $3, $4) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let animal = sqlx::query_as::<_, Animal>(&sql)
            .bind(draft.name.as_str())
            .bind(draft.species.as_str())
            .bind(draft.age)
            .bind(draft.available)
            .fetch_one(&mut *conn)
            .await?;
        tracing::info!(id = animal.id, "animal created");
        Ok(animal)
    }

    /// All rows in insertion order.
    pub async fn list_all(conn: &mut AnyConnection) -> Result<Vec<Animal>, AppError> {
        let sql = format!("SELECT {} FROM animal ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Animal>(&sql).fetch_all(&mut *conn).await?;
        Ok(rows)
    }

    pub async fn get_by_id(conn: &mut AnyConnection, id: i64) -> Result<Option<Animal>, AppError> {
        let sql = format!("SELECT {} FROM animal WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Animal>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Apply the supplied fields to `current` (as last read) and write the row back.
    /// None if the row was deleted in the meantime.
    pub async fn update(
        conn: &mut AnyConnection,
        current: Animal,
        changes: AnimalChanges,
    ) -> Result<Option<Animal>, AppError> {
        let mut animal = current;
        let id = animal.id;
        changes.apply_to(&mut animal);
        let sql = format!(
            "UPDATE animal SET nome = $1, especie = $2, idade = $3, disponivel = $4 WHERE id = $5 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Animal>(&sql)
            .bind(animal.name.as_str())
            .bind(animal.species.as_str())
            .bind(animal.age)
            .bind(animal.available)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        if row.is_some() {
            tracing::info!(id, "animal updated");
        }
        Ok(row)
    }

    /// Remove row `id` permanently. Returns whether a row was deleted.
    pub async fn delete(conn: &mut AnyConnection, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM animal WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&mut *conn).await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(id, "animal deleted");
        }
        Ok(deleted)
    }
}
