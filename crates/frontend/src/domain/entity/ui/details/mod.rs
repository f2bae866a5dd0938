use crate::domain::entity::EntityApi;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::Route;
use crate::shared::components::ui::badge::ToneBadge;
use crate::shared::date_utils::format_date_locale;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};
use contracts::domain::common::EntityKind;
use contracts::shared::crud::{DetailModel, DetailRow, DisplayValue};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn render_value(value: DisplayValue) -> AnyView {
    match value {
        DisplayValue::Empty => view! { <span class="detail__empty">"—"</span> }.into_any(),
        DisplayValue::Date(date) => view! { <span>{format_date_locale(date)}</span> }.into_any(),
        DisplayValue::Number(n) => view! { <strong>{n}</strong> }.into_any(),
        DisplayValue::Badge { text, tone } => view! { <ToneBadge tone=tone text=text /> }.into_any(),
        other => view! { <span>{other.plain_text()}</span> }.into_any(),
    }
}

fn render_rows(rows: Vec<DetailRow>) -> AnyView {
    view! {
        <Card>
            <div class="detail__grid">
                {rows.into_iter().map(|row| view! {
                    <span class="form__label">{format!("{}:", row.label)}</span>
                    {render_value(row.value)}
                }).collect_view()}
            </div>
        </Card>
    }
    .into_any()
}

#[component]
pub fn EntityDetail(kind: EntityKind, id: String) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let api = use_context::<EntityApi>().expect("EntityApi not found");
    let schema = kind.schema();
    let stored_id = StoredValue::new(id);

    let (model, set_model) = signal(None::<DetailModel>);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        let id_val = stored_id.get_value();
        match api.get(kind, &id_val).await {
            Ok(record) => set_model.set(Some(DetailModel::build(&schema, &id_val, Some(&record)))),
            Err(e) if e.is_not_found() => set_model.set(Some(DetailModel::build(&schema, &id_val, None))),
            Err(e) => {
                log::warn!("Failed to load {} {}: {}", kind, id_val, e);
                set_error.set(Some(e.to_string()));
            }
        }
    });

    let is_found = move || model.with(|m| m.as_ref().is_some_and(DetailModel::is_found));

    view! {
        <PageFrame page_id=page_id(kind.slug(), PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <span class="page__icon">{icon(kind.icon())}</span>
                    <h1 class="page__title">
                        {move || format!("{} {}", kind.element_name(), stored_id.get_value())}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Show when=is_found>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| ctx.navigate(Route::Update(kind, stored_id.get_value()))
                        >
                            {icon("edit")}
                            " Edit"
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| ctx.navigate(Route::List(kind))
                    >
                        {icon("arrow-left")}
                        {format!(" Back to {}", kind.list_name())}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if let Some(err) = error.get() {
                        return view! {
                            <div class="alert alert--error">
                                <strong>"Error: "</strong>{err}
                            </div>
                        }.into_any();
                    }
                    match model.get() {
                        None => view! {
                            <Flex gap=FlexGap::Small style="align-items:center;padding:var(--spacing-4xl);justify-content:center;">
                                <Spinner />
                                <span>"Loading..."</span>
                            </Flex>
                        }.into_any(),
                        Some(DetailModel::NotFound { id }) => view! {
                            <div class="empty-state">
                                {icon("search")}
                                <div class="empty-state__title">{format!("{} not found", kind.element_name())}</div>
                                <div class="empty-state__text">
                                    {format!("There is no {} with id '{}'.", kind.element_name().to_lowercase(), id)}
                                </div>
                            </div>
                        }.into_any(),
                        Some(DetailModel::Found { rows, .. }) => render_rows(rows),
                    }
                }}
            </div>
        </PageFrame>
    }
}
