pub mod context;
pub mod user;

pub use context::RequestContext;
pub use user::{CreatedUser, NewUserProfile, ProfileChanges, UserChanges, UserType};
