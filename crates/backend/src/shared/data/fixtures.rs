//! Seed data for the in-memory data source.
//!
//! One JSON array per entity kind is bundled into the binary. A directory
//! configured as `data.fixtures_dir` may replace any of them with `<slug>.json`.

use anyhow::{bail, Context};
use contracts::domain::common::{EntityKind, EntityRecord};
use contracts::shared::metadata::FieldType;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::shared::config::{resolve_path, DataConfig};

fn bundled(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Course => include_str!("fixtures/courses.json"),
        EntityKind::Ebook => include_str!("fixtures/ebooks.json"),
        EntityKind::Enrollment => include_str!("fixtures/enrollments.json"),
        EntityKind::Freelancer => include_str!("fixtures/freelancers.json"),
        EntityKind::Job => include_str!("fixtures/jobs.json"),
        EntityKind::LogisticsOrder => include_str!("fixtures/logistics-orders.json"),
        EntityKind::Manufacturer => include_str!("fixtures/manufacturers.json"),
        EntityKind::NewsPost => include_str!("fixtures/news.json"),
        EntityKind::OnlineCourse => include_str!("fixtures/online-courses.json"),
        EntityKind::SalesOrder => include_str!("fixtures/orders.json"),
        EntityKind::PurchaseOrder => include_str!("fixtures/purchase-orders.json"),
        EntityKind::Rental => include_str!("fixtures/rentals.json"),
        EntityKind::Return => include_str!("fixtures/returns.json"),
        EntityKind::Student => include_str!("fixtures/students.json"),
        EntityKind::Supplier => include_str!("fixtures/suppliers.json"),
    }
}

/// Collections to seed the data source with, according to the config
pub fn load(config: &DataConfig) -> anyhow::Result<HashMap<EntityKind, Vec<EntityRecord>>> {
    let mut collections = HashMap::new();
    if !config.seed_fixtures {
        tracing::info!("Fixture seeding disabled, starting with empty collections");
        return Ok(collections);
    }

    let override_dir = config.fixtures_dir.as_deref().map(resolve_path);

    for kind in EntityKind::all() {
        let records = match override_dir.as_deref().and_then(|dir| override_file(dir, *kind)) {
            Some(path) => {
                tracing::info!("Loading {} fixtures from {}", kind, path.display());
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                parse(*kind, &contents)?
            }
            None => parse(*kind, bundled(*kind))?,
        };
        tracing::debug!("Seeded {} {} records", records.len(), kind);
        collections.insert(*kind, records);
    }

    Ok(collections)
}

fn override_file(dir: &Path, kind: EntityKind) -> Option<std::path::PathBuf> {
    let path = dir.join(format!("{}.json", kind.slug()));
    path.exists().then_some(path)
}

/// Parse and check one fixture file
pub fn parse(kind: EntityKind, contents: &str) -> anyhow::Result<Vec<EntityRecord>> {
    let records: Vec<EntityRecord> = serde_json::from_str(contents)
        .with_context(|| format!("parsing {} fixtures", kind))?;
    check(kind, &records)?;
    Ok(records)
}

/// Ids must be unique and non-blank, enum values must belong to the declared set
pub fn check(kind: EntityKind, records: &[EntityRecord]) -> anyhow::Result<()> {
    let schema = kind.schema();
    let mut ids = HashSet::new();

    for record in records {
        if record.id.trim().is_empty() {
            bail!("{} fixture has a blank id", kind);
        }
        if !ids.insert(record.id.as_str()) {
            bail!("{} fixture id '{}' is duplicated", kind, record.id);
        }

        for field in schema.fields() {
            if field.field_type != FieldType::Enum {
                continue;
            }
            let value = record.text(field.name);
            if !value.is_empty() && !field.accepts_choice(&value) {
                bail!(
                    "{} fixture '{}': '{}' is not a valid {}",
                    kind,
                    record.id,
                    value,
                    field.name
                );
            }
        }
    }

    Ok(())
}
