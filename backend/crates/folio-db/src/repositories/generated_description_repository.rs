//! Repository for AI generated descriptions.
//!
//! Rows are immutable apart from the `saved` flag.

use crate::columns::{decode_list, decode_timestamp, encode_list};
use crate::{DbError, Result as DbErrorResult};

use folio_core::{GeneratedDescription, NewGeneratedDescription};

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const TABLE: &str = "generated_descriptions";

const SELECT_COLUMNS: &str = r#"
    SELECT id, short_description, description, project_title, project_type,
        technologies, features, user_id, created_at, saved
    FROM generated_descriptions
"#;

pub struct GeneratedDescriptionRepository {
    pool: SqlitePool,
}

impl GeneratedDescriptionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a description and return the stored row
    pub async fn create(
        &self,
        description: &NewGeneratedDescription,
    ) -> DbErrorResult<GeneratedDescription> {
        let technologies = encode_list(TABLE, &description.technologies)?;
        let features = encode_list(TABLE, &description.features)?;
        let created_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO generated_descriptions (
                    short_description, description, project_title, project_type,
                    technologies, features, user_id, created_at, saved
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&description.short_description)
        .bind(&description.description)
        .bind(&description.project_title)
        .bind(&description.project_type)
        .bind(technologies)
        .bind(features)
        .bind(description.user_id)
        .bind(created_at)
        .bind(description.saved)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::from(sqlx::Error::RowNotFound))
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<GeneratedDescription>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    /// Every description owned by the user, newest first
    pub async fn find_by_user(&self, user_id: i64) -> DbErrorResult<Vec<GeneratedDescription>> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE user_id = ? ORDER BY created_at DESC, id DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    /// Saved descriptions owned by the user, newest first
    pub async fn find_saved_by_user(
        &self,
        user_id: i64,
    ) -> DbErrorResult<Vec<GeneratedDescription>> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE user_id = ? AND saved = 1 ORDER BY created_at DESC, id DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    /// Flip the saved flag. Returns None when the row does not exist.
    pub async fn set_saved(
        &self,
        id: i64,
        saved: bool,
    ) -> DbErrorResult<Option<GeneratedDescription>> {
        let result = sqlx::query("UPDATE generated_descriptions SET saved = ? WHERE id = ?")
            .bind(saved)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Returns true if a row was removed
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM generated_descriptions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn from_row(row: &SqliteRow) -> DbErrorResult<GeneratedDescription> {
        Ok(GeneratedDescription {
            id: row.try_get("id")?,
            short_description: row.try_get("short_description")?,
            description: row.try_get("description")?,
            project_title: row.try_get("project_title")?,
            project_type: row.try_get("project_type")?,
            technologies: decode_list(TABLE, row.try_get("technologies")?)?,
            features: decode_list(TABLE, row.try_get("features")?)?,
            user_id: row.try_get("user_id")?,
            created_at: decode_timestamp(TABLE, "created_at", row.try_get("created_at")?)?,
            saved: row.try_get("saved")?,
        })
    }
}
