/// List page helpers: search box with debounce and match highlighting
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Byte ranges of case-insensitive occurrences of `needle` in `text`.
///
/// Returns nothing when lowercasing changes byte lengths, so ranges are
/// always valid for `text`.
pub fn match_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    let needle = needle.trim().to_lowercase();
    let lower = text.to_lowercase();
    if needle.is_empty() || lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = lower[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        ranges.push((start, end));
        from = end;
    }
    ranges
}

/// Text with the search matches wrapped in `<mark>`
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="table__match">{text[start..end].to_string()}</mark> }.into_any());
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }

    view! { <span>{parts}</span> }.into_any()
}

/// Text the search box should show after the committed value changes.
///
/// `None` when the change came from this box's own commit. Otherwise the
/// committed value was replaced from outside and the box follows it.
pub fn external_search_text(committed: &str, last_sent: &str) -> Option<String> {
    (committed != last_sent).then(|| committed.to_string())
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Committed search text
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local text, ahead of the committed value until the debounce fires
    let input_value = RwSignal::new(value.get_untracked());
    // Only the latest keystroke's timer may commit
    let generation = StoredValue::new(0u64);
    // Last text handed to `on_change`
    let last_sent = StoredValue::new(value.get_untracked());

    Effect::new(move |_| {
        let committed = value.get();
        if let Some(text) = external_search_text(&committed, &last_sent.get_value()) {
            generation.update_value(|g| *g += 1);
            last_sent.set_value(text.clone());
            input_value.set(text);
        }
    });

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.get_value() == current {
                last_sent.set_value(new_value.clone());
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        input_value.set(String::new());
        last_sent.set_value(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
