use crate::domain::{
    a001_course, a002_ebook, a003_enrollment, a004_freelancer, a005_job, a006_logistics_order,
    a007_manufacturer, a008_news_post, a009_online_course, a010_sales_order, a011_purchase_order,
    a012_rental, a013_return, a014_student, a015_supplier,
};
use crate::shared::crud::EntityError;
use crate::shared::metadata::EntitySchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Every entity kind the admin panel manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Course,
    Ebook,
    Enrollment,
    Freelancer,
    Job,
    LogisticsOrder,
    Manufacturer,
    NewsPost,
    OnlineCourse,
    SalesOrder,
    PurchaseOrder,
    Rental,
    Return,
    Student,
    Supplier,
}

impl EntityKind {
    pub const ALL: [EntityKind; 15] = [
        EntityKind::Course,
        EntityKind::Ebook,
        EntityKind::Enrollment,
        EntityKind::Freelancer,
        EntityKind::Job,
        EntityKind::LogisticsOrder,
        EntityKind::Manufacturer,
        EntityKind::NewsPost,
        EntityKind::OnlineCourse,
        EntityKind::SalesOrder,
        EntityKind::PurchaseOrder,
        EntityKind::Rental,
        EntityKind::Return,
        EntityKind::Student,
        EntityKind::Supplier,
    ];

    pub fn all() -> &'static [EntityKind] {
        &Self::ALL
    }

    pub fn schema(&self) -> EntitySchema {
        match self {
            Self::Course => a001_course::SCHEMA,
            Self::Ebook => a002_ebook::SCHEMA,
            Self::Enrollment => a003_enrollment::SCHEMA,
            Self::Freelancer => a004_freelancer::SCHEMA,
            Self::Job => a005_job::SCHEMA,
            Self::LogisticsOrder => a006_logistics_order::SCHEMA,
            Self::Manufacturer => a007_manufacturer::SCHEMA,
            Self::NewsPost => a008_news_post::SCHEMA,
            Self::OnlineCourse => a009_online_course::SCHEMA,
            Self::SalesOrder => a010_sales_order::SCHEMA,
            Self::PurchaseOrder => a011_purchase_order::SCHEMA,
            Self::Rental => a012_rental::SCHEMA,
            Self::Return => a013_return::SCHEMA,
            Self::Student => a014_student::SCHEMA,
            Self::Supplier => a015_supplier::SCHEMA,
        }
    }

    /// Route/API slug, e.g. "courses"
    pub fn slug(&self) -> &'static str {
        self.schema().entity().collection_name
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.slug() == slug)
    }

    /// Singular UI name, e.g. "Course"
    pub fn element_name(&self) -> &'static str {
        self.schema().entity().ui.element_name
    }

    /// Plural UI name, e.g. "Courses"
    pub fn list_name(&self) -> &'static str {
        self.schema().entity().ui.list_name
    }

    pub fn icon(&self) -> &'static str {
        self.schema().entity().ui.icon.unwrap_or("item")
    }

    pub fn group(&self) -> &'static str {
        self.schema().entity().ui.group
    }

    /// Kinds belonging to a sidebar group, in `ALL` order
    pub fn in_group(group: &str) -> impl Iterator<Item = EntityKind> + '_ {
        Self::ALL.iter().copied().filter(move |k| k.group() == group)
    }
}

impl FromStr for EntityKind {
    type Err = EntityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| EntityError::UnknownKind(s.to_string()))
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Sidebar / overview grouping of entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const GROUPS: &[EntityGroup] = &[
    EntityGroup {
        id: "education",
        label: "Education",
        icon: "book",
    },
    EntityGroup {
        id: "commerce",
        label: "Orders & Sales",
        icon: "shopping-cart",
    },
    EntityGroup {
        id: "supply_chain",
        label: "Supply Chain",
        icon: "truck",
    },
    EntityGroup {
        id: "talent",
        label: "Talent",
        icon: "briefcase",
    },
    EntityGroup {
        id: "content",
        label: "Content",
        icon: "file-text",
    },
];

/// Short description of an entity kind with its current record count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub kind: EntityKind,
    pub slug: String,
    pub element_name: String,
    pub list_name: String,
    pub group: String,
    pub icon: String,
    pub count: usize,
}

impl EntitySummary {
    pub fn new(kind: EntityKind, count: usize) -> Self {
        Self {
            kind,
            slug: kind.slug().to_string(),
            element_name: kind.element_name().to_string(),
            list_name: kind.list_name().to_string(),
            group: kind.group().to_string(),
            icon: kind.icon().to_string(),
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_schemas_are_valid() {
        for kind in EntityKind::all() {
            let schema = kind.schema();
            assert_eq!(schema.check(), Ok(()), "schema for {:?}", kind);
            assert!(schema.search_field().is_some());
        }
    }

    #[test]
    fn test_slugs_are_unique_and_round_trip() {
        let mut seen = HashSet::new();
        for kind in EntityKind::all() {
            assert!(seen.insert(kind.slug()), "duplicate slug {}", kind.slug());
            assert_eq!(EntityKind::from_slug(kind.slug()), Some(*kind));
            assert_eq!(kind.to_string().parse::<EntityKind>(), Ok(*kind));
        }
    }

    #[test]
    fn test_id_prefixes_are_unique() {
        let mut seen = HashSet::new();
        for kind in EntityKind::all() {
            let prefix = kind.schema().entity().id_prefix;
            assert!(!prefix.is_empty());
            assert!(seen.insert(prefix), "duplicate prefix {}", prefix);
        }
    }

    #[test]
    fn test_every_kind_belongs_to_a_group() {
        let total: usize = GROUPS
            .iter()
            .map(|g| EntityKind::in_group(g.id).count())
            .sum();
        assert_eq!(total, EntityKind::ALL.len());
    }

    #[test]
    fn test_unknown_slug() {
        assert_eq!(
            "spaceships".parse::<EntityKind>(),
            Err(EntityError::UnknownKind("spaceships".to_string()))
        );
    }
}
