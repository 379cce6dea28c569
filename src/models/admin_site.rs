use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Status value marking a site as active.
pub const SITE_ACTIVE: i16 = 1;

/// Tenant site entity.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admin_sites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    /// 1 = active, 0 = disabled
    pub status: i16,

    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Compact site data attached to each log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSummary {
    pub id: i32,
    pub name: String,
}

impl From<Model> for SiteSummary {
    fn from(site: Model) -> Self {
        SiteSummary {
            id: site.id,
            name: site.name,
        }
    }
}
