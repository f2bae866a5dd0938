use async_trait::async_trait;
use contracts::domain::common::{EntityKind, EntityRecord, RecordDraft, RecordPatch};
use contracts::shared::crud::EntityError;

/// Storage behind the entity endpoints.
///
/// Handlers only see this trait; `MockDataSource` is the in-memory implementation.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// All records of a kind, in insertion order
    async fn list(&self, kind: EntityKind) -> Vec<EntityRecord>;

    async fn get(&self, kind: EntityKind, id: &str) -> Result<EntityRecord, EntityError>;

    /// Append a record, generating its id when the draft has none
    async fn create(&self, kind: EntityKind, draft: RecordDraft)
        -> Result<EntityRecord, EntityError>;

    /// Merge `patch` into an existing record; the id never changes
    async fn update(
        &self,
        kind: EntityKind,
        id: &str,
        patch: RecordPatch,
    ) -> Result<EntityRecord, EntityError>;

    async fn count(&self, kind: EntityKind) -> usize;
}
