/// Authentication core
///
/// Credential hashing/verification, session-token issuance/validation,
/// and the role guard.

mod claims;
mod jwt;
mod password;
mod role;

pub use claims::Claims;
pub use jwt::issue_token;
pub use jwt::verify_token;
pub use password::hash_password;
pub use password::verify_password;
pub use role::authorize;
pub use role::Role;
pub use role::ADMIN_ONLY;
pub use role::ANY_USER;
pub use role::RECRUITER_ONLY;
pub use role::STAFF;
pub use role::STUDENT_ONLY;
