//! Page category constants.
//!
//! Every page declares:
//!   - HTML `id` in the format `{slug}--{category}` (e.g. `"courses--list"`)
//!   - `data-page-category` with one of the constants below

/// Table of records with search and filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Single record, read-only.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Create or edit form for one record.
pub const PAGE_CAT_FORM: &str = "form";

/// Overview cards.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Fallback pages (unknown route).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Build a page id from its parts
pub fn page_id(scope: &str, category: &str) -> String {
    format!("{scope}--{category}")
}

/// Root CSS classes for a page category
pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_FORM => "page page--detail page--form",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    }
}

/// Validate that a page id matches the `{scope}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}
