use login_audit::config::Config;
use login_audit::db;

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        environment: "test".to_string(),
    }
}

#[tokio::test]
async fn connect_with_sqlite_memory() {
    let conn = db::connect(&test_config()).await.unwrap();

    use sea_orm::ConnectionTrait;
    assert!(conn.execute_unprepared("SELECT 1").await.is_ok());
}

#[tokio::test]
async fn connect_with_invalid_url_fails() {
    let mut config = test_config();
    config.database_url = "invalid://database/url".to_string();

    assert!(db::connect(&config).await.is_err());
}

#[tokio::test]
async fn migrations_are_idempotent() {
    use login_audit::migrations::Migrator;
    use login_audit::testing::TestDb;
    use sea_orm_migration::MigratorTrait;

    // TestDb::new already ran the migrator once
    let db = TestDb::new().await;
    Migrator::up(&db.conn, None).await.unwrap();
}
