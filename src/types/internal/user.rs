/// User classification, assigned once at account creation.
///
/// New accounts always start as `None`; promotion to another type is
/// owned by a different subsystem and never happens through the
/// mutation paths in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserType {
    None = 0,
    Staff = 1,
    Administrator = 2,
}

impl UserType {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Profile fields supplied when creating a new account.
///
/// The password is not part of the changeset: creation always generates
/// a temporary credential (see `UserCoordinator::add_user`).
#[derive(Debug, Clone, PartialEq)]
pub struct NewUserProfile {
    pub username: String,
    pub is_active: bool,
    pub full_name: String,
    pub designation: String,
    pub email_address: String,
    pub mobile_number: String,
}

/// Self-service profile changeset.
///
/// Deliberately narrower than `UserChanges`: a user editing their own
/// profile cannot touch username, active flag, or email address.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileChanges {
    pub full_name: String,
    pub designation: String,
    pub mobile_number: String,
}

/// Full-row changeset used by the administrative update path.
///
/// Never carries password, user type, or id; those fields are not
/// writable through this path by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct UserChanges {
    pub username: String,
    pub is_active: bool,
    pub full_name: String,
    pub designation: String,
    pub email_address: String,
    pub mobile_number: String,
}

/// Outcome of a successful `add_user` mutation.
///
/// The temporary password is returned exactly once, here; only its hash
/// is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedUser {
    pub id: i64,
    pub temporary_password: String,
}
