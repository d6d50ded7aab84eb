use uuid::Uuid;

/// Request context that flows through coordinator and store layers.
///
/// The actor id is the already-authenticated user performing the
/// mutation; authentication itself happens upstream of this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Unique identifier for this request (for tracing across layers)
    pub request_id: Uuid,

    /// User id of the actor performing the operation
    pub actor_id: i64,
}

impl RequestContext {
    pub fn new(actor_id: i64) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            actor_id,
        }
    }
}
