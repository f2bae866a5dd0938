//! PageFrame: standard root wrapper for every page in the content area.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`                  `"{slug}--{category}"`, e.g. `"courses--list"`
//!   - `data-page-category`  one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper with the BEM modifier for its category:
/// - `list`      → `page`
/// - `detail`    → `page page--detail`
/// - `form`      → `page page--detail page--form`
/// - `dashboard` → `page page--dashboard`
/// - `system`    → `page page--system`
#[component]
pub fn PageFrame(
    /// HTML id in format `{slug}--{category}`
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(&page_id) {
        log::warn!("PageFrame: page id '{}' is not in {{scope}}--{{category}} form", page_id);
    }

    let base_class = page_class(category);

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
