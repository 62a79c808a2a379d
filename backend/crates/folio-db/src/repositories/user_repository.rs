use crate::columns::decode_timestamp;
use crate::{DbError, Result as DbErrorResult};

use folio_core::{NewUser, User};

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user. Fails on a duplicate username.
    pub async fn create(&self, user: &NewUser) -> DbErrorResult<User> {
        let created_at = Utc::now().timestamp();

        let result =
            sqlx::query("INSERT INTO users (username, password, created_at) VALUES (?, ?, ?)")
                .bind(&user.username)
                .bind(&user.password)
                .bind(created_at)
                .execute(&self.pool)
                .await?;

        self.find_by_id(result.last_insert_rowid())
            .await?
            .ok_or_else(|| DbError::from(sqlx::Error::RowNotFound))
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let row = sqlx::query("SELECT id, username, password, created_at FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, password, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    fn from_row(row: &SqliteRow) -> DbErrorResult<User> {
        Ok(User {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            password: row.try_get("password")?,
            created_at: decode_timestamp("users", "created_at", row.try_get("created_at")?)?,
        })
    }
}
