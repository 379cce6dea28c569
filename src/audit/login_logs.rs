use std::collections::{BTreeSet, HashMap};

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Select, Set,
};
use serde::Serialize;

use crate::error::AuditError;
use crate::models::admin_login_log::{self, Entity as LoginLog, LoginStatus};
use crate::models::admin_site::{self, Entity as AdminSite, SITE_ACTIVE, SiteSummary};
use crate::models::admin_user::{self, Entity as AdminUser, UserSummary};
use crate::principal::Principal;

use super::filter::LoginLogFilter;

/// A login-log record with its joined user and site summaries.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    #[serde(flatten)]
    pub record: admin_login_log::Model,
    pub user: Option<UserSummary>,
    pub site: Option<SiteSummary>,
}

/// One page of login-log entries.
#[derive(Debug, Serialize)]
pub struct LogPage {
    pub entries: Vec<LogEntry>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

/// A `{value, label}` pair for filter dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// List login logs visible to the principal, newest first.
///
/// Super admins see every site unless they request one; everyone else is
/// confined to their own site regardless of what the filter asks for.
pub async fn list(
    db: &DatabaseConnection,
    filter: &LoginLogFilter,
    principal: &Principal,
) -> Result<LogPage, AuditError> {
    let mut query = scoped(principal, filter.site_id);

    if let Some(term) = normalized(&filter.username) {
        query = query.filter(contains_ci(admin_login_log::Column::Username, &term));
    }
    if let Some(term) = normalized(&filter.ip) {
        query = query.filter(contains_ci(admin_login_log::Column::Ip, &term));
    }
    if let Some(status) = filter.status {
        query = query.filter(admin_login_log::Column::Status.eq(status));
    }
    if let Some(start) = filter.start_date {
        query = query.filter(admin_login_log::Column::CreatedAt.gte(day_start(start)));
    }
    if let Some(end) = filter.end_date {
        query = query.filter(admin_login_log::Column::CreatedAt.lte(day_end(end)));
    }

    let page = filter.effective_page();
    let page_size = filter.effective_page_size();

    let paginator = query
        .order_by_desc(admin_login_log::Column::CreatedAt)
        .paginate(db, page_size);
    let total = paginator.num_items().await?;
    let records = paginator.fetch_page(page - 1).await?;

    tracing::debug!(total, page, page_size, "listed login logs");

    let entries = attach_summaries(db, records).await?;

    Ok(LogPage {
        entries,
        total,
        page,
        page_size,
    })
}

/// Fetch a single login log by id within the principal's scope.
///
/// A row owned by another site and a row that does not exist both yield
/// [`AuditError::NotFound`] — callers cannot probe other tenants.
pub async fn get_by_id(
    db: &DatabaseConnection,
    id: i32,
    principal: &Principal,
) -> Result<LogEntry, AuditError> {
    let record = scoped(principal, None)
        .filter(admin_login_log::Column::Id.eq(id))
        .one(db)
        .await?
        .ok_or_else(|| AuditError::NotFound(format!("login log {id} not found")))?;

    let mut entries = attach_summaries(db, vec![record]).await?;
    Ok(entries.swap_remove(0))
}

/// Delete a single login log, resolving it through [`get_by_id`] first so
/// the same scoping and NotFound semantics apply.
pub async fn delete(
    db: &DatabaseConnection,
    id: i32,
    principal: &Principal,
) -> Result<(), AuditError> {
    let entry = get_by_id(db, id, principal).await?;

    let result = LoginLog::delete_by_id(entry.record.id).exec(db).await?;
    if result.rows_affected != 1 {
        // Row vanished between resolve and delete
        return Err(AuditError::NotFound(format!("login log {id} not found")));
    }

    tracing::info!(id, "deleted login log");
    Ok(())
}

/// Delete every listed id the principal is allowed to touch.
///
/// Returns the number of rows actually removed. A count below `ids.len()`
/// means some ids were missing or out of scope — partial success, not an
/// error.
pub async fn batch_delete(
    db: &DatabaseConnection,
    ids: &[i32],
    principal: &Principal,
) -> Result<u64, AuditError> {
    if ids.is_empty() {
        return Ok(0);
    }

    let mut query =
        LoginLog::delete_many().filter(admin_login_log::Column::Id.is_in(ids.iter().copied()));
    if let Some(site) = principal.forced_site() {
        query = query.filter(admin_login_log::Column::SiteId.eq(site));
    }

    let result = query.exec(db).await?;

    tracing::info!(
        requested = ids.len(),
        deleted = result.rows_affected,
        "batch deleted login logs"
    );

    Ok(result.rows_affected)
}

/// Site choices for the list view's filter dropdown.
///
/// Empty unless the principal is a super admin; otherwise the active sites
/// ordered by id, prefixed with a synthetic all-sites option whose value is
/// the empty string.
pub async fn site_filter_options(
    db: &DatabaseConnection,
    principal: &Principal,
) -> Result<Vec<SelectOption>, AuditError> {
    if !principal.is_super_admin {
        return Ok(Vec::new());
    }

    let sites = AdminSite::find()
        .filter(admin_site::Column::Status.eq(SITE_ACTIVE))
        .order_by_asc(admin_site::Column::Id)
        .all(db)
        .await?;

    let mut options = Vec::with_capacity(sites.len() + 1);
    options.push(SelectOption {
        value: String::new(),
        label: "All sites".to_string(),
    });
    options.extend(sites.into_iter().map(|site| SelectOption {
        value: site.id.to_string(),
        label: site.name,
    }));

    Ok(options)
}

/// Record a login attempt.
pub async fn record_login(
    db: &DatabaseConnection,
    user_id: Option<i32>,
    username: &str,
    ip: &str,
    status: LoginStatus,
    site_id: Option<i32>,
) -> Result<admin_login_log::Model, AuditError> {
    let model = admin_login_log::ActiveModel {
        user_id: Set(user_id),
        username: Set(username.to_string()),
        ip: Set(ip.to_string()),
        status: Set(status),
        site_id: Set(site_id),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

/// Base query with row-level tenant authorization applied.
///
/// Non-super-admins with a site are always pinned to it; super admins get
/// the requested site filter when one is asked for (> 0), otherwise no
/// site predicate at all.
fn scoped(principal: &Principal, requested_site: Option<i32>) -> Select<LoginLog> {
    let mut query = LoginLog::find();

    if let Some(site) = principal.forced_site() {
        query = query.filter(admin_login_log::Column::SiteId.eq(site));
    } else if principal.is_super_admin {
        if let Some(site) = requested_site.filter(|s| *s > 0) {
            query = query.filter(admin_login_log::Column::SiteId.eq(site));
        }
    }

    query
}

/// Case-insensitive substring predicate: `lower(col) LIKE '%term%'`.
fn contains_ci(col: admin_login_log::Column, term: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(col))).like(format!("%{}%", term.to_lowercase()))
}

fn normalized(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn day_end(date: NaiveDate) -> NaiveDateTime {
    // 23:59:59 — the end date is a calendar day, inclusive
    day_start(date) + Duration::seconds(86_399)
}

/// Batch-load the user and site summaries for a page of records.
///
/// Two `IN` queries instead of per-row lookups; preserves input order and
/// length.
async fn attach_summaries(
    db: &DatabaseConnection,
    records: Vec<admin_login_log::Model>,
) -> Result<Vec<LogEntry>, AuditError> {
    let user_ids: Vec<i32> = records
        .iter()
        .filter_map(|r| r.user_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let site_ids: Vec<i32> = records
        .iter()
        .filter_map(|r| r.site_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let users: HashMap<i32, UserSummary> = if user_ids.is_empty() {
        HashMap::new()
    } else {
        AdminUser::find()
            .filter(admin_user::Column::Id.is_in(user_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|u| (u.id, UserSummary::from(u)))
            .collect()
    };

    let sites: HashMap<i32, SiteSummary> = if site_ids.is_empty() {
        HashMap::new()
    } else {
        AdminSite::find()
            .filter(admin_site::Column::Id.is_in(site_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|s| (s.id, SiteSummary::from(s)))
            .collect()
    };

    Ok(records
        .into_iter()
        .map(|record| {
            let user = record.user_id.and_then(|id| users.get(&id).cloned());
            let site = record.site_id.and_then(|id| sites.get(&id).cloned());
            LogEntry { record, user, site }
        })
        .collect())
}
