use serde::{Deserialize, Serialize};

/// The caller's authorization context.
///
/// Resolved by the host application (session, token, whatever) and passed
/// explicitly into every operation — there is no ambient "current site".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Tenant site id; `0` means the principal is not tenant-scoped.
    pub site_id: i32,

    /// Super admins see and delete records across all sites.
    pub is_super_admin: bool,
}

impl Principal {
    /// A platform-wide super admin.
    pub fn super_admin() -> Self {
        Principal {
            site_id: 0,
            is_super_admin: true,
        }
    }

    /// A regular admin locked to one site.
    pub fn for_site(site_id: i32) -> Self {
        Principal {
            site_id,
            is_super_admin: false,
        }
    }

    /// The site this principal is confined to, if any.
    ///
    /// `None` for super admins and for principals without a tenant
    /// (`site_id == 0`), both of which see every site.
    pub fn forced_site(&self) -> Option<i32> {
        if !self.is_super_admin && self.site_id > 0 {
            Some(self.site_id)
        } else {
            None
        }
    }
}
