/// Domain errors shared by every layer of the service.
///
/// Only a miss is a domain error. Everything else that can go wrong is a
/// store or transport failure and is reported by the API layer as an
/// internal error.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row matched. `id` is the key exactly as the client sent it.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },
}
