//! Client-side routes.
//!
//! Paths: `/`, `/{slug}`, `/{slug}/new`, `/{slug}/{id}`, `/{slug}/update-{id}`.

use contracts::domain::common::EntityKind;

const NEW_SEGMENT: &str = "new";
const UPDATE_PREFIX: &str = "update-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Overview,
    List(EntityKind),
    New(EntityKind),
    Detail(EntityKind, String),
    Update(EntityKind, String),
    NotFound(String),
}

/// Decode one path parameter. Blank parameters do not resolve.
pub fn resolve_route_param(raw: &str) -> Option<String> {
    let decoded = urlencoding::decode(raw).ok()?;
    let value = decoded.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let clean = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_matches('/');
        if clean.is_empty() {
            return Self::Overview;
        }

        let segments: Vec<&str> = clean.split('/').collect();
        let not_found = || Self::NotFound(path.to_string());

        let Some(kind) = EntityKind::from_slug(segments[0]) else {
            return not_found();
        };

        match segments[1..] {
            [] => Self::List(kind),
            [NEW_SEGMENT] => Self::New(kind),
            [segment] => {
                let (raw, is_update) = match segment.strip_prefix(UPDATE_PREFIX) {
                    Some(rest) => (rest, true),
                    None => (segment, false),
                };
                match resolve_route_param(raw) {
                    Some(id) if is_update => Self::Update(kind, id),
                    Some(id) => Self::Detail(kind, id),
                    None => not_found(),
                }
            }
            _ => not_found(),
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Overview => "/".to_string(),
            Self::List(kind) => format!("/{}", kind.slug()),
            Self::New(kind) => format!("/{}/{}", kind.slug(), NEW_SEGMENT),
            Self::Detail(kind, id) => format!("/{}/{}", kind.slug(), urlencoding::encode(id)),
            Self::Update(kind, id) => format!(
                "/{}/{}{}",
                kind.slug(),
                UPDATE_PREFIX,
                urlencoding::encode(id)
            ),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// Page title shown in the header
    pub fn title(&self) -> String {
        match self {
            Self::Overview => "Overview".to_string(),
            Self::List(kind) => kind.list_name().to_string(),
            Self::New(kind) => format!("New {}", kind.element_name()),
            Self::Detail(kind, id) => format!("{} {}", kind.element_name(), id),
            Self::Update(kind, id) => format!("Edit {} {}", kind.element_name(), id),
            Self::NotFound(_) => "Page not found".to_string(),
        }
    }

    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            Self::List(kind)
            | Self::New(kind)
            | Self::Detail(kind, _)
            | Self::Update(kind, _) => Some(*kind),
            Self::Overview | Self::NotFound(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Overview);
        assert_eq!(Route::parse(""), Route::Overview);
        assert_eq!(Route::parse("/courses"), Route::List(EntityKind::Course));
        assert_eq!(Route::parse("/courses/"), Route::List(EntityKind::Course));
        assert_eq!(Route::parse("/courses/new"), Route::New(EntityKind::Course));
        assert_eq!(
            Route::parse("/courses/COURSE101"),
            Route::Detail(EntityKind::Course, "COURSE101".into())
        );
        assert_eq!(
            Route::parse("/purchase-orders/update-PO102?tab=1"),
            Route::Update(EntityKind::PurchaseOrder, "PO102".into())
        );
    }

    #[test]
    fn test_unknown_paths() {
        assert!(matches!(Route::parse("/spaceships"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/courses/a/b"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/courses/update-"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/courses/%20"), Route::NotFound(_)));
    }

    #[test]
    fn test_paths_round_trip() {
        let routes = [
            Route::Overview,
            Route::List(EntityKind::NewsPost),
            Route::New(EntityKind::Rental),
            Route::Detail(EntityKind::Return, "RET101".into()),
            Route::Update(EntityKind::LogisticsOrder, "LOG 7/B".into()),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.to_path()), route);
        }
    }

    #[test]
    fn test_resolve_route_param() {
        assert_eq!(resolve_route_param("COURSE101"), Some("COURSE101".into()));
        assert_eq!(resolve_route_param("LOG%207%2FB"), Some("LOG 7/B".into()));
        assert_eq!(resolve_route_param(""), None);
        assert_eq!(resolve_route_param("%20%20"), None);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Route::List(EntityKind::Course).title(), "Courses");
        assert_eq!(Route::New(EntityKind::Course).title(), "New Course");
        assert_eq!(Route::Overview.kind(), None);
        assert_eq!(
            Route::Update(EntityKind::Job, "JOB101".into()).kind(),
            Some(EntityKind::Job)
        );
    }
}
