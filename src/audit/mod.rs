//! Login-audit queries: tenant-scoped listing, inspection, and deletion.

mod filter;
mod login_logs;

pub use filter::{DEFAULT_PAGE_SIZE, LoginLogFilter, MAX_PAGE_SIZE};
pub use login_logs::{
    LogEntry, LogPage, SelectOption, batch_delete, delete, get_by_id, list, record_login,
    site_filter_options,
};
