use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::models::admin_login_log::LoginStatus;

/// Page size applied when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u64 = 15;

/// Hard ceiling on page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Filters for the login-log list view.
///
/// Every field is optional. Values arriving as empty or malformed strings
/// deserialize to `None` instead of failing — admin UIs send whatever is in
/// the form, and an unusable filter is simply skipped. Note that `"0"` for
/// `status` is a real value ([`LoginStatus::Failed`]), distinct from absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginLogFilter {
    /// Requested site; only honored for super admins, and only when > 0.
    #[serde(deserialize_with = "lenient_i32")]
    pub site_id: Option<i32>,

    /// Case-insensitive substring match on the attempted username.
    #[serde(deserialize_with = "lenient_string")]
    pub username: Option<String>,

    /// Case-insensitive substring match on the request IP.
    #[serde(deserialize_with = "lenient_string")]
    pub ip: Option<String>,

    /// Exact match on the attempt outcome.
    #[serde(deserialize_with = "lenient_status")]
    pub status: Option<LoginStatus>,

    /// Inclusive lower bound, compared from the start of the day.
    #[serde(deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,

    /// Inclusive upper bound, compared to the end of the day (23:59:59).
    #[serde(deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,

    /// 1-based page number (default: 1).
    #[serde(deserialize_with = "lenient_u64")]
    pub page: Option<u64>,

    /// Items per page (default: 15, max: 100).
    #[serde(deserialize_with = "lenient_u64")]
    pub page_size: Option<u64>,
}

impl LoginLogFilter {
    /// The page actually queried: requested page, or 1.
    pub fn effective_page(&self) -> u64 {
        self.page.filter(|p| *p > 0).unwrap_or(1)
    }

    /// The page size actually queried: requested size clamped to
    /// [`MAX_PAGE_SIZE`], or [`DEFAULT_PAGE_SIZE`].
    pub fn effective_page_size(&self) -> u64 {
        self.page_size
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE)
    }
}

/// Raw filter value before coercion. Untagged so it absorbs whatever shape
/// the transport hands us; anything unrecognized falls through to `Other`.
#[derive(Deserialize)]
#[serde(untagged)]
#[allow(dead_code)]
enum Lenient {
    Int(i64),
    Num(f64),
    Str(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Lenient>::deserialize(deserializer)? {
        Some(Lenient::Int(v)) => i32::try_from(v).ok(),
        Some(Lenient::Str(s)) => s.trim().parse::<i32>().ok(),
        _ => None,
    })
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Lenient>::deserialize(deserializer)? {
        Some(Lenient::Int(v)) => u64::try_from(v).ok(),
        Some(Lenient::Str(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Lenient>::deserialize(deserializer)? {
        Some(Lenient::Str(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        _ => None,
    })
}

fn lenient_status<'de, D>(deserializer: D) -> Result<Option<LoginStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<Lenient>::deserialize(deserializer)? {
        Some(Lenient::Int(0)) => Some(LoginStatus::Failed),
        Some(Lenient::Int(1)) => Some(LoginStatus::Success),
        Some(Lenient::Str(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "0" | "failed" => Some(LoginStatus::Failed),
            "1" | "success" => Some(LoginStatus::Success),
            _ => None,
        },
        _ => None,
    };
    Ok(parsed)
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Lenient>::deserialize(deserializer)? {
        Some(Lenient::Str(s)) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok(),
        _ => None,
    })
}
