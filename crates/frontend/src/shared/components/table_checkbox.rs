use leptos::prelude::*;

/// Row checkbox cell
///
/// Renders a `<td>` with a checkbox inside. Clicking the checkbox does not
/// trigger the row click (stop_propagation).
///
/// # BEM classes
/// - `.table__cell--checkbox` - td wrapper
/// - `.table__checkbox` - input element
///
/// ```rust,ignore
/// <TableCheckbox
///     checked=Signal::derive(move || selected.get().contains(&id))
///     on_change=Callback::new(move |checked| toggle_select(id.clone(), checked))
/// />
/// ```
#[component]
pub fn TableCheckbox(
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                prop:disabled=disabled
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </td>
    }
}

/// Header cell that selects or clears every visible row
#[component]
pub fn TableHeaderCheckbox(
    /// Every visible row is selected
    all_checked: Signal<bool>,
    /// Some, but not all, visible rows are selected
    partly_checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <th class="table__header-cell table__cell--checkbox">
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=all_checked
                prop:indeterminate=partly_checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </th>
    }
}
