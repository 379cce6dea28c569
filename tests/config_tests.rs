use login_audit::config::Config;

#[test]
fn from_env_always_yields_a_config() {
    let config = Config::from_env().expect("from_env should not fail");
    assert!(!config.database_url.is_empty());
    assert!(!config.environment.is_empty());
}

#[test]
fn is_dev_matches_environment() {
    let mut config = Config {
        database_url: "sqlite::memory:".to_string(),
        environment: "development".to_string(),
    };
    assert!(config.is_dev());

    config.environment = "production".to_string();
    assert!(!config.is_dev());

    config.environment = "test".to_string();
    assert!(!config.is_dev());
}
