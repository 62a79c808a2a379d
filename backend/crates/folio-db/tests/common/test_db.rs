use folio_core::NewUser;
use folio_db::UserRepository;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    folio_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a user so foreign keys resolve, returning its id
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> i64 {
    UserRepository::new(pool.clone())
        .create(&NewUser {
            username: username.to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .expect("Failed to create test user")
        .id
}
