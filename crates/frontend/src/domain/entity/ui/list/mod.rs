use crate::domain::entity::EntityApi;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::Route;
use crate::shared::components::table_checkbox::{TableCheckbox, TableHeaderCheckbox};
use crate::shared::components::ui::badge::{Badge as UiBadge, ToneBadge};
use crate::shared::date_utils::format_date_locale;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::domain::common::{EntityKind, EntityRecord};
use contracts::shared::crud::{filter_options, humanize, DisplayValue, ListQuery};
use contracts::shared::metadata::{FieldMetadata, FieldType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

/// Label of one filter choice in the dropdown
fn choice_label(field_type: FieldType, value: &str) -> String {
    match (field_type, value) {
        (FieldType::Boolean, "true") => "Yes".to_string(),
        (FieldType::Boolean, "false") => "No".to_string(),
        _ => humanize(value),
    }
}

/// One table cell. The search column highlights the current search text.
fn render_cell(field: &FieldMetadata, record: &EntityRecord, search: &str, is_search_field: bool) -> AnyView {
    match DisplayValue::from_field(field, record.get(field.name)) {
        DisplayValue::Badge { text, tone } => view! { <ToneBadge tone=tone text=text /> }.into_any(),
        DisplayValue::Date(date) => view! { <span>{format_date_locale(date)}</span> }.into_any(),
        DisplayValue::Text(text) if is_search_field => highlight_matches(&text, search),
        other => view! { <span>{other.plain_text()}</span> }.into_any(),
    }
}

#[component]
pub fn EntityList(kind: EntityKind) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let api = StoredValue::new(use_context::<EntityApi>().expect("EntityApi not found"));

    let schema = kind.schema();
    let search_field = schema.search_field().map(|f| f.name).unwrap_or("id");
    let search_label = schema.search_field().map(|f| f.ui.label).unwrap_or("ID");
    let columns: Vec<&'static FieldMetadata> = schema.list_fields().collect();
    let column_count = columns.len() + 3;
    let filters = filter_options(&schema);

    let records = RwSignal::new(Vec::<EntityRecord>::new());
    let query = RwSignal::new(ListQuery::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let selected = RwSignal::new(HashSet::<String>::new());
    let open_menu = RwSignal::new(None::<String>);
    // Responses to superseded requests are dropped
    let request_seq = StoredValue::new(0u64);

    let load_items = move || {
        request_seq.update_value(|n| *n += 1);
        let seq = request_seq.get_value();
        let current_query = query.get_untracked();
        let api = api.get_value();

        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api.list(kind, &current_query).await;
            if request_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(rows) => {
                    let visible: HashSet<String> = rows.iter().map(|r| r.id.clone()).collect();
                    selected.update(|s| s.retain(|id| visible.contains(id)));
                    records.set(rows);
                }
                Err(e) => {
                    log::warn!("Failed to load {}: {}", kind, e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    // Reload whenever search or filters change
    Effect::new(move |_| {
        query.track();
        load_items();
    });

    let is_no_results = move || records.with(Vec::is_empty) && !query.with(ListQuery::is_empty);
    let is_empty_collection = move || records.with(Vec::is_empty) && query.with(ListQuery::is_empty);

    let all_checked = Signal::derive(move || {
        let rows = records.get();
        let sel = selected.get();
        !rows.is_empty() && rows.iter().all(|r| sel.contains(&r.id))
    });
    let partly_checked = Signal::derive(move || {
        let sel = selected.get();
        !sel.is_empty() && !all_checked.get()
    });

    let toggle_all = move |check_all: bool| {
        if check_all {
            let ids: HashSet<String> = records.with(|rows| rows.iter().map(|r| r.id.clone()).collect());
            selected.set(ids);
        } else {
            selected.update(HashSet::clear);
        }
    };

    let toggle_selection = move |id: String, checked: bool| {
        selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    };

    let active_filters_count = Signal::derive(move || {
        query.with(|q| q.filters.values().filter(|v| !v.is_empty()).count())
    });

    let has_active_filters =
        move || active_filters_count.get() > 0 || !query.with(|q| q.search.is_empty());

    let clear_filters = move |_| {
        query.update(|q| {
            q.search.clear();
            q.filters.clear();
        });
    };

    let header_cells = columns
        .iter()
        .copied()
        .map(|field| {
            let label = field.ui.label;
            view! { <TableHeaderCell>{label}</TableHeaderCell> }
        })
        .collect_view();

    let filter_selects = filters
        .into_iter()
        .map(|option| {
            let field_name = option.field;
            let field_type = schema.field(field_name).map(|f| f.field_type).unwrap_or_default();
            let current = move || query.with(|q| q.filters.get(field_name).cloned().unwrap_or_default());
            view! {
                <label class="filter-panel__field">
                    <span class="filter-panel__label">{option.label}</span>
                    <select
                        class="form__select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            query.update(|q| {
                                if value.is_empty() {
                                    q.filters.remove(field_name);
                                } else {
                                    q.filters.insert(field_name.to_string(), value);
                                }
                            });
                        }
                    >
                        <option value="" selected=move || current().is_empty()>"All"</option>
                        {option.values.iter().map(|value| {
                            let value: &'static str = *value;
                            view! {
                                <option value=value selected=move || current() == value>
                                    {choice_label(field_type, value)}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>
            }
        })
        .collect_view();

    let rows_view = move || {
        let search = query.with(|q| q.search.trim().to_string());
        records
            .get()
            .into_iter()
            .map(|record| {
                let id = record.id.clone();
                let id_for_check = id.clone();
                let id_for_toggle = id.clone();
                let id_for_row = id.clone();
                let id_for_menu = id.clone();
                let id_for_view = id.clone();
                let id_for_edit = id.clone();
                let is_selected = selected.with(|s| s.contains(&id));
                let menu_is_open = {
                    let id = id.clone();
                    move || open_menu.get().as_deref() == Some(id.as_str())
                };

                let cells = columns
                    .iter()
                    .map(|field| {
                        let content = render_cell(field, &record, &search, field.name == search_field);
                        view! {
                            <TableCell>
                                <TableCellLayout>{content}</TableCellLayout>
                            </TableCell>
                        }
                    })
                    .collect_view();

                view! {
                    <TableRow class:table__row--selected=is_selected>
                        <TableCheckbox
                            checked=Signal::derive(move || selected.with(|s| s.contains(&id_for_check)))
                            on_change=Callback::new(move |checked| toggle_selection(id_for_toggle.clone(), checked))
                        />
                        <TableCell>
                            <TableCellLayout>
                                <a
                                    href=Route::Detail(kind, id.clone()).to_path()
                                    class="table__link"
                                    on:click=move |e| {
                                        e.prevent_default();
                                        ctx.navigate(Route::Detail(kind, id_for_row.clone()));
                                    }
                                >
                                    {id.clone()}
                                </a>
                            </TableCellLayout>
                        </TableCell>
                        {cells}
                        <td class="table__cell table__cell--actions" on:click=|e| e.stop_propagation()>
                            <div class="row-menu">
                                <button
                                    class="row-menu__toggle"
                                    title="Actions"
                                    on:click=move |_| {
                                        let id = id_for_menu.clone();
                                        open_menu.update(|m| {
                                            *m = if m.as_deref() == Some(id.as_str()) { None } else { Some(id) };
                                        });
                                    }
                                >
                                    {icon("more-vertical")}
                                </button>
                                <Show when=menu_is_open.clone()>
                                    <div class="row-menu__dropdown">
                                        <button
                                            class="row-menu__item"
                                            on:click={
                                                let id = id_for_view.clone();
                                                move |_| {
                                                    open_menu.set(None);
                                                    ctx.navigate(Route::Detail(kind, id.clone()));
                                                }
                                            }
                                        >
                                            {icon("eye")}" View"
                                        </button>
                                        <button
                                            class="row-menu__item"
                                            on:click={
                                                let id = id_for_edit.clone();
                                                move |_| {
                                                    open_menu.set(None);
                                                    ctx.navigate(Route::Update(kind, id.clone()));
                                                }
                                            }
                                        >
                                            {icon("edit")}" Edit"
                                        </button>
                                        <button
                                            class="row-menu__item row-menu__item--danger"
                                            disabled=true
                                            title="Deleting records is not available"
                                        >
                                            {icon("delete")}" Delete"
                                        </button>
                                    </div>
                                </Show>
                            </div>
                        </td>
                    </TableRow>
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id=page_id(kind.slug(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <span class="page__icon">{icon(kind.icon())}</span>
                    <h1 class="page__title">{kind.list_name()}</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || records.with(Vec::len).to_string()}
                    </UiBadge>
                    <Show when=move || !selected.with(HashSet::is_empty)>
                        <span class="page__selection">
                            {move || format!("{} selected", selected.with(HashSet::len))}
                        </span>
                    </Show>
                </div>

                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_items()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.navigate(Route::New(kind))
                    >
                        {icon("plus")}
                        {format!(" New {}", kind.element_name())}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Medium align=FlexAlign::End>
                            <label class="filter-panel__field">
                                <span class="filter-panel__label">{format!("Search by {}", search_label.to_lowercase())}</span>
                                <SearchInput
                                    value=Signal::derive(move || query.with(|q| q.search.clone()))
                                    on_change=Callback::new(move |text: String| query.update(|q| q.search = text))
                                    placeholder=format!("{}...", search_label)
                                />
                            </label>
                            {filter_selects}
                            <Show when=has_active_filters>
                                <Button appearance=ButtonAppearance::Subtle on_click=clear_filters>
                                    {icon("x")}" Clear"
                                </Button>
                            </Show>
                        </Flex>
                    </div>
                </div>

                {move || error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    all_checked=all_checked
                                    partly_checked=partly_checked
                                    on_change=Callback::new(toggle_all)
                                />
                                <TableHeaderCell>"ID"</TableHeaderCell>
                                {header_cells}
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {rows_view}
                            <Show when=is_no_results>
                                <tr class="table__row table__row--empty">
                                    <td class="table__cell" colspan=column_count>
                                        <div class="empty-state">
                                            {icon("search")}
                                            <div class="empty-state__title">"No results"</div>
                                            <div class="empty-state__text">"No records match the current search and filters."</div>
                                        </div>
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || is_empty_collection() && !loading.get() && error.get().is_none()>
                                <tr class="table__row table__row--empty">
                                    <td class="table__cell" colspan=column_count>
                                        <div class="empty-state">
                                            {icon("inbox")}
                                            <div class="empty-state__title">{format!("No {} yet", kind.list_name().to_lowercase())}</div>
                                        </div>
                                    </td>
                                </tr>
                            </Show>
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_labels() {
        assert_eq!(choice_label(FieldType::Boolean, "true"), "Yes");
        assert_eq!(choice_label(FieldType::Boolean, "false"), "No");
        assert_eq!(choice_label(FieldType::Enum, "in_transit"), "In transit");
    }
}
