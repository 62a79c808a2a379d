pub mod error;
pub mod repositories;

mod columns;

pub use error::{DbError, Result};
pub use repositories::generated_description_repository::GeneratedDescriptionRepository;
pub use repositories::project_repository::{DEFAULT_PROJECT_LIMIT, ProjectRepository};
pub use repositories::user_repository::UserRepository;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;

/// Embedded schema migrations
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Bring the schema up to date
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await.map_err(|e| DbError::Migration {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
