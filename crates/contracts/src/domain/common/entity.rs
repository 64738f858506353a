use super::EntityId;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// A flat record owned by the backend and exposed under a fixed collection path.
///
/// Every entity map of the access layer is derived from this trait, so adding
/// a new record type only needs an impl, not a new client.
pub trait Entity:
    Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Body sent on create/update
    type Payload: Clone + Debug + Serialize + Send + Sync + 'static;

    /// Collection path relative to the API base (e.g. "/customers")
    const BASE_PATH: &'static str;

    // ============================================================================
    // Instance data
    // ============================================================================

    /// Backend identity, used to splice mutation responses into local state
    fn id(&self) -> EntityId;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Index of the entity within the application (e.g. "a003")
    fn entity_index() -> &'static str;

    /// UI name, singular and lowercase (e.g. "customer")
    fn element_name() -> &'static str;

    /// UI name, plural (e.g. "Customers")
    fn list_name() -> &'static str;

    /// Full system name (e.g. "a003_customers")
    fn full_name() -> String {
        format!(
            "{}_{}",
            Self::entity_index(),
            Self::BASE_PATH.trim_start_matches('/')
        )
    }
}
