//! Project repository for CRUD operations on portfolio projects.
//!
//! Contact-form requests are stored here too; they are ordinary project rows
//! with `contact_name`/`contact_email` set.

use crate::columns::{decode_list, decode_timestamp, encode_list};
use crate::{DbError, Result as DbErrorResult};

use folio_core::{NewProject, Project, ProjectUpdate};

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Page size used when callers do not ask for one
pub const DEFAULT_PROJECT_LIMIT: i64 = 50;

const TABLE: &str = "projects";

const SELECT_COLUMNS: &str = r#"
    SELECT id, title, short_description, description, project_type,
        technologies, features, categories, image_url, user_id,
        contact_name, contact_email, deadline, urgent, created_at, updated_at
    FROM projects
"#;

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, project: &NewProject) -> DbErrorResult<Project> {
        let technologies = encode_list(TABLE, &project.technologies)?;
        let features = encode_list(TABLE, &project.features)?;
        let categories = encode_list(TABLE, &project.categories)?;
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO projects (
                    title, short_description, description, project_type,
                    technologies, features, categories, image_url, user_id,
                    contact_name, contact_email, deadline, urgent,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&project.title)
        .bind(&project.short_description)
        .bind(&project.description)
        .bind(&project.project_type)
        .bind(technologies)
        .bind(features)
        .bind(categories)
        .bind(&project.image_url)
        .bind(project.user_id)
        .bind(&project.contact_name)
        .bind(&project.contact_email)
        .bind(&project.deadline)
        .bind(project.urgent)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.find_by_id(result.last_insert_rowid())
            .await?
            .ok_or_else(|| DbError::from(sqlx::Error::RowNotFound))
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    /// Newest first
    pub async fn find_all(&self, limit: i64) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC LIMIT ?"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    /// Projects whose categories list contains `category`, newest first
    pub async fn find_by_category(&self, category: &str, limit: i64) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(&format!(
            r#"{SELECT_COLUMNS}
                WHERE EXISTS (SELECT 1 FROM json_each(projects.categories) WHERE json_each.value = ?)
                ORDER BY created_at DESC, id DESC
                LIMIT ?"#
        ))
        .bind(category)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    /// Projects of one type whose categories contain `category`, newest first.
    /// Both predicates apply before the limit.
    pub async fn find_by_category_and_type(
        &self,
        category: &str,
        project_type: &str,
        limit: i64,
    ) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(&format!(
            r#"{SELECT_COLUMNS}
                WHERE EXISTS (SELECT 1 FROM json_each(projects.categories) WHERE json_each.value = ?)
                    AND project_type = ?
                ORDER BY created_at DESC, id DESC
                LIMIT ?"#
        ))
        .bind(category)
        .bind(project_type)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    /// Newest first
    pub async fn find_by_type(&self, project_type: &str, limit: i64) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE project_type = ? ORDER BY created_at DESC, id DESC LIMIT ?"
        ))
        .bind(project_type)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    /// Apply a partial update and bump `updated_at`.
    /// Returns None when the project does not exist.
    pub async fn update(&self, id: i64, changes: ProjectUpdate) -> DbErrorResult<Option<Project>> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(mut project) = row.as_ref().map(Self::from_row).transpose()? else {
            return Ok(None);
        };

        changes.apply_to(&mut project);
        let updated_at = Utc::now().timestamp();

        sqlx::query(
            r#"
                UPDATE projects
                SET title = ?, short_description = ?, description = ?, project_type = ?,
                    technologies = ?, features = ?, categories = ?, image_url = ?,
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&project.title)
        .bind(&project.short_description)
        .bind(&project.description)
        .bind(&project.project_type)
        .bind(encode_list(TABLE, &project.technologies)?)
        .bind(encode_list(TABLE, &project.features)?)
        .bind(encode_list(TABLE, &project.categories)?)
        .bind(&project.image_url)
        .bind(updated_at)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        self.find_by_id(id).await
    }

    /// Returns true if a row was removed
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn from_row(row: &SqliteRow) -> DbErrorResult<Project> {
        Ok(Project {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            short_description: row.try_get("short_description")?,
            description: row.try_get("description")?,
            project_type: row.try_get("project_type")?,
            technologies: decode_list(TABLE, row.try_get("technologies")?)?,
            features: decode_list(TABLE, row.try_get("features")?)?,
            categories: decode_list(TABLE, row.try_get("categories")?)?,
            image_url: row.try_get("image_url")?,
            user_id: row.try_get("user_id")?,
            contact_name: row.try_get("contact_name")?,
            contact_email: row.try_get("contact_email")?,
            deadline: row.try_get("deadline")?,
            urgent: row.try_get("urgent")?,
            created_at: decode_timestamp(TABLE, "created_at", row.try_get("created_at")?)?,
            updated_at: decode_timestamp(TABLE, "updated_at", row.try_get("updated_at")?)?,
        })
    }
}
