use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;

use crate::migrations::Migrator;
use crate::models::admin_login_log::{self, LoginStatus};
use crate::models::{admin_site, admin_user};

/// An in-memory SQLite database with migrations applied, for tests.
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_list() {
///     let db = TestDb::new().await;
///     db.seed_site(1, "Alpha", 1).await;
///     // ...
/// }
/// ```
pub struct TestDb {
    pub conn: DatabaseConnection,
}

impl TestDb {
    /// Create a fresh in-memory database and run all migrations.
    pub async fn new() -> Self {
        // Single connection: every pooled connection to sqlite::memory:
        // would otherwise get its own empty database
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);

        let conn = Database::connect(opts)
            .await
            .expect("Failed to connect to test database");

        Migrator::up(&conn, None)
            .await
            .expect("Failed to run migrations");

        TestDb { conn }
    }

    /// Insert a site with an explicit id.
    pub async fn seed_site(&self, id: i32, name: &str, status: i16) -> admin_site::Model {
        admin_site::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            status: Set(status),
            created_at: Set(dt("2024-01-01 00:00:00")),
        }
        .insert(&self.conn)
        .await
        .expect("Failed to seed site")
    }

    /// Insert an admin user with an explicit id.
    pub async fn seed_user(&self, id: i32, username: &str, nickname: &str) -> admin_user::Model {
        admin_user::ActiveModel {
            id: Set(id),
            username: Set(username.to_string()),
            nickname: Set(nickname.to_string()),
            created_at: Set(dt("2024-01-01 00:00:00")),
        }
        .insert(&self.conn)
        .await
        .expect("Failed to seed user")
    }

    /// Insert a login log with an explicit id and timestamp.
    #[allow(clippy::too_many_arguments)]
    pub async fn seed_log(
        &self,
        id: i32,
        user_id: Option<i32>,
        username: &str,
        ip: &str,
        status: LoginStatus,
        site_id: Option<i32>,
        created_at: &str,
    ) -> admin_login_log::Model {
        admin_login_log::ActiveModel {
            id: Set(id),
            user_id: Set(user_id),
            username: Set(username.to_string()),
            ip: Set(ip.to_string()),
            status: Set(status),
            site_id: Set(site_id),
            created_at: Set(dt(created_at)),
        }
        .insert(&self.conn)
        .await
        .expect("Failed to seed login log")
    }
}

/// Parse a `YYYY-MM-DD HH:MM:SS` timestamp for fixtures.
pub fn dt(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").expect("Invalid fixture timestamp")
}
