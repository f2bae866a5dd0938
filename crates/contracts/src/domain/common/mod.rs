//! Common types shared by all entity kinds

pub mod entity_kind;
pub mod entity_record;

// Re-exports
pub use entity_kind::{EntityGroup, EntityKind, EntitySummary, GROUPS};
pub use entity_record::{value_text, EntityRecord, RecordDraft, RecordPatch};
