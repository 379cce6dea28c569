use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One login attempt against the admin backend.
///
/// Records are written once by the login recorder and never mutated;
/// the only lifecycle event after creation is deletion.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admin_login_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// The admin user who attempted to log in, when resolved
    pub user_id: Option<i32>,

    /// Username used in the attempt (kept even if the user no longer exists)
    pub username: String,

    /// IP address of the request
    pub ip: String,

    /// Outcome of the attempt
    pub status: LoginStatus,

    /// Owning tenant site; NULL for platform-level logins
    pub site_id: Option<i32>,

    pub created_at: NaiveDateTime,
}

/// Outcome of a login attempt, stored as a small integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum LoginStatus {
    #[sea_orm(num_value = 0)]
    Failed,
    #[sea_orm(num_value = 1)]
    Success,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::admin_user::Entity",
        from = "Column::UserId",
        to = "super::admin_user::Column::Id"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::admin_site::Entity",
        from = "Column::SiteId",
        to = "super::admin_site::Column::Id"
    )]
    Site,
}

impl Related<super::admin_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::admin_site::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Site.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
