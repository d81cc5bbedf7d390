/// Roles and the role guard.
///
/// `Role` is a closed enumeration assigned once at registration. The guard
/// itself is a pure membership test; which roles a route accepts is declared
/// in the route table (see `startup.rs`) using the named sets below.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::auth::Claims;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Recruiter,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Recruiter => "recruiter",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allowed-role sets consumed by the route table.
pub const STUDENT_ONLY: &[Role] = &[Role::Student];
pub const RECRUITER_ONLY: &[Role] = &[Role::Recruiter];
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const STAFF: &[Role] = &[Role::Recruiter, Role::Admin];
pub const ANY_USER: &[Role] = &[Role::Student, Role::Recruiter, Role::Admin];

/// Returns true iff the claims' role is in the allowed set.
/// No side effects, no I/O.
pub fn authorize(claims: &Claims, allowed_roles: &[Role]) -> bool {
    allowed_roles.contains(&claims.role)
}
