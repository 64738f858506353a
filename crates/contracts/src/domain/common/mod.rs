//! Common types and traits for all backend records

pub mod entity;
pub mod entity_id;

// Re-exports
pub use entity::Entity;
pub use entity_id::{lenient_id, lenient_id_opt, null_as_empty, EntityId};
