use async_trait::async_trait;
use contracts::domain::common::{EntityKind, EntityRecord, RecordDraft, RecordPatch};
use contracts::shared::crud::EntityError;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::data_source::DataSource;

/// Numbering of generated ids starts after this value when a collection is empty
const FIRST_ID_BASE: u64 = 100;

/// In-memory collections, one ordered `Vec` per entity kind.
///
/// Lives for the whole process; nothing is persisted. Locks are held for a
/// single operation only and never across an await.
#[derive(Debug, Default)]
pub struct MockDataSource {
    collections: RwLock<HashMap<EntityKind, Vec<EntityRecord>>>,
}

impl MockDataSource {
    pub fn new(collections: HashMap<EntityKind, Vec<EntityRecord>>) -> Self {
        Self {
            collections: RwLock::new(collections),
        }
    }

    /// Builder for tests and seeding: replace one collection
    pub fn with_records(self, kind: EntityKind, records: Vec<EntityRecord>) -> Self {
        self.write().insert(kind, records);
        self
    }

    // A panic while holding the lock cannot leave a collection half-written,
    // so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<EntityKind, Vec<EntityRecord>>> {
        self.collections
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<EntityKind, Vec<EntityRecord>>> {
        self.collections
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Next free id for a collection: prefix + (largest numeric suffix + 1).
///
/// Ids that do not carry the prefix or a numeric suffix are ignored.
pub fn next_id(prefix: &str, records: &[EntityRecord]) -> String {
    let max = records
        .iter()
        .filter_map(|r| r.id.strip_prefix(prefix))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max()
        .unwrap_or(FIRST_ID_BASE);

    let mut candidate = max + 1;
    loop {
        let id = format!("{}{}", prefix, candidate);
        if !records.iter().any(|r| r.id == id) {
            return id;
        }
        candidate += 1;
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn list(&self, kind: EntityKind) -> Vec<EntityRecord> {
        self.read().get(&kind).cloned().unwrap_or_default()
    }

    async fn get(&self, kind: EntityKind, id: &str) -> Result<EntityRecord, EntityError> {
        self.read()
            .get(&kind)
            .and_then(|records| records.iter().find(|r| r.id == id))
            .cloned()
            .ok_or_else(|| EntityError::not_found(kind.element_name(), id))
    }

    async fn create(
        &self,
        kind: EntityKind,
        draft: RecordDraft,
    ) -> Result<EntityRecord, EntityError> {
        let mut collections = self.write();
        let records = collections.entry(kind).or_default();

        let id = match draft.requested_id() {
            Some(requested) => {
                if records.iter().any(|r| r.id == requested) {
                    return Err(EntityError::duplicate_id(kind.element_name(), requested));
                }
                requested.to_string()
            }
            None => next_id(kind.schema().entity().id_prefix, records),
        };

        let record = draft.into_record(id);
        records.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        kind: EntityKind,
        id: &str,
        patch: RecordPatch,
    ) -> Result<EntityRecord, EntityError> {
        let mut collections = self.write();
        let record = collections
            .get_mut(&kind)
            .and_then(|records| records.iter_mut().find(|r| r.id == id))
            .ok_or_else(|| EntityError::not_found(kind.element_name(), id))?;

        record.apply_patch(&patch);
        Ok(record.clone())
    }

    async fn count(&self, kind: EntityKind) -> usize {
        self.read().get(&kind).map(Vec::len).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> MockDataSource {
        MockDataSource::default().with_records(
            EntityKind::Course,
            vec![
                EntityRecord::new("COURSE101")
                    .with_field("title", "Rust for Beginners")
                    .with_field("status", "published"),
                EntityRecord::new("COURSE102")
                    .with_field("title", "Practical UI Design")
                    .with_field("status", "draft"),
            ],
        )
    }

    fn draft(value: serde_json::Value) -> RecordDraft {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_get_existing_and_missing() {
        let store = store();

        let record = store.get(EntityKind::Course, "COURSE101").await.unwrap();
        assert_eq!(record.id, "COURSE101");

        let err = store.get(EntityKind::Course, "COURSE999").await.unwrap_err();
        assert_eq!(err, EntityError::not_found("Course", "COURSE999"));
    }

    #[tokio::test]
    async fn test_every_listed_id_can_be_fetched() {
        let store = store();
        for record in store.list(EntityKind::Course).await {
            assert_eq!(store.get(EntityKind::Course, &record.id).await.unwrap(), record);
        }
    }

    #[tokio::test]
    async fn test_unseeded_kind_is_empty() {
        let store = store();
        assert!(store.list(EntityKind::Rental).await.is_empty());
        assert_eq!(store.count(EntityKind::Rental).await, 0);
        assert!(store.get(EntityKind::Rental, "RENT101").await.is_err());
    }

    #[tokio::test]
    async fn test_create_generates_next_id_and_appends() {
        let store = store();

        let created = store
            .create(EntityKind::Course, draft(json!({"title": "Async Rust"})))
            .await
            .unwrap();
        assert_eq!(created.id, "COURSE103");

        let records = store.list(EntityKind::Course).await;
        assert_eq!(records.len(), 3);
        assert_eq!(records.last(), Some(&created));
        assert_eq!(records.iter().filter(|r| r.id == "COURSE103").count(), 1);
    }

    #[tokio::test]
    async fn test_create_in_empty_collection() {
        let store = MockDataSource::default();
        let created = store
            .create(EntityKind::Supplier, draft(json!({"name": "PackRight"})))
            .await
            .unwrap();
        assert_eq!(created.id, "SUP101");
    }

    #[tokio::test]
    async fn test_create_with_requested_id() {
        let store = store();

        let created = store
            .create(EntityKind::Course, draft(json!({"id": "COURSE500", "title": "x"})))
            .await
            .unwrap();
        assert_eq!(created.id, "COURSE500");

        let err = store
            .create(EntityKind::Course, draft(json!({"id": "COURSE101", "title": "x"})))
            .await
            .unwrap_err();
        assert_eq!(err, EntityError::duplicate_id("Course", "COURSE101"));
        assert_eq!(store.count(EntityKind::Course).await, 3);
    }

    #[tokio::test]
    async fn test_update_merges_and_keeps_id() {
        let store = store();
        let patch = RecordPatch::default()
            .with_field("status", "archived")
            .with_field("id", "COURSE777");

        let updated = store
            .update(EntityKind::Course, "COURSE102", patch)
            .await
            .unwrap();

        assert_eq!(updated.id, "COURSE102");
        assert_eq!(updated.text("status"), "archived");
        assert_eq!(updated.text("title"), "Practical UI Design");
        assert_eq!(
            store.get(EntityKind::Course, "COURSE102").await.unwrap(),
            updated
        );
        assert!(store.get(EntityKind::Course, "COURSE777").await.is_err());
    }

    #[tokio::test]
    async fn test_update_missing_record() {
        let store = store();
        let err = store
            .update(EntityKind::Course, "COURSE999", RecordPatch::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_next_id_skips_foreign_ids() {
        let records = vec![
            EntityRecord::new("PO101"),
            EntityRecord::new("PO-legacy"),
            EntityRecord::new("PO120"),
        ];
        assert_eq!(next_id("PO", &records), "PO121");
        assert_eq!(next_id("PO", &[]), "PO101");
    }
}
