// Services layer - pure business logic leaves
pub mod password;
pub mod role_diff;

pub use password::{generate_temporary_password, hash_password, verify_password};
pub use role_diff::{reconcile, AssignmentRef, RoleDiff};
