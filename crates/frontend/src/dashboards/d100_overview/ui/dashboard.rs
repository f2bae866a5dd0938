use crate::domain::entity::EntityApi;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::Route;
use crate::shared::components::stat_card::{format_thousands, StatCard};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DASHBOARD};
use contracts::domain::common::{EntityKind, EntitySummary, GROUPS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Record count of `kind` in the loaded summaries
fn count_of(summaries: &[EntitySummary], kind: EntityKind) -> Option<usize> {
    summaries.iter().find(|s| s.kind == kind).map(|s| s.count)
}

/// One card per entity kind, grouped like the sidebar
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let api = StoredValue::new(use_context::<EntityApi>().expect("EntityApi not found"));

    let summaries = RwSignal::new(None::<Vec<EntitySummary>>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let load = move || {
        let api = api.get_value();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api.summaries().await {
                Ok(items) => summaries.set(Some(items)),
                Err(e) => {
                    log::warn!("Failed to load overview: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };
    load();

    let total = move || {
        summaries.with(|s| {
            s.as_ref()
                .map(|items| format_thousands(items.iter().map(|i| i.count).sum()))
                .unwrap_or_else(|| "—".to_string())
        })
    };

    view! {
        <PageFrame page_id=page_id("overview", PAGE_CAT_DASHBOARD) category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Overview"</h1>
                    <span class="page__subtitle">{move || format!("{} records", total())}</span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                {GROUPS.iter().map(|group| view! {
                    <section class="dashboard__group">
                        <h2 class="dashboard__group-title">
                            {icon(group.icon)}
                            <span>{group.label}</span>
                        </h2>
                        <div class="dashboard__cards">
                            {EntityKind::in_group(group.id).map(|kind| view! {
                                <StatCard
                                    label=kind.list_name()
                                    icon_name=kind.icon()
                                    value=Signal::derive(move || {
                                        summaries.with(|s| s.as_deref().and_then(|items| count_of(items, kind)))
                                    })
                                    on_click=Callback::new(move |_: ()| ctx.navigate(Route::List(kind)))
                                />
                            }).collect_view()}
                        </div>
                    </section>
                }).collect_view()}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_of() {
        let summaries = vec![
            EntitySummary::new(EntityKind::Course, 4),
            EntitySummary::new(EntityKind::Job, 0),
        ];
        assert_eq!(count_of(&summaries, EntityKind::Course), Some(4));
        assert_eq!(count_of(&summaries, EntityKind::Job), Some(0));
        assert_eq!(count_of(&summaries, EntityKind::Rental), None);
    }
}
