// Coordinators layer - transactional orchestration over the stores
pub mod user_coordinator;

pub use user_coordinator::UserCoordinator;
