pub mod audit;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod migrations;
pub mod models;
pub mod principal;
pub mod testing;

pub use audit::{LogEntry, LogPage, LoginLogFilter, SelectOption};
pub use config::Config;
pub use error::AuditError;
pub use principal::Principal;
