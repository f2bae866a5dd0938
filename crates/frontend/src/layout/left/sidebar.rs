//! Sidebar with one collapsible group per entity group

use crate::layout::global_context::AppGlobalContext;
use crate::routes::Route;
use crate::shared::icons::icon;
use contracts::domain::common::{EntityKind, GROUPS};
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // All groups start expanded
    let expanded_groups = RwSignal::new(GROUPS.iter().map(|g| g.id).collect::<Vec<_>>());

    let active_kind = move || ctx.route.get().kind();

    view! {
        <div class="app-sidebar__content">
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || ctx.route.get() == Route::Overview
                style:padding-left="12px"
                on:click=move |_| ctx.navigate(Route::Overview)
            >
                <div class="app-sidebar__item-content">
                    {icon("layout-dashboard")}
                    <span>"Overview"</span>
                </div>
            </div>

            {GROUPS.iter().map(|group| {
                let group_id = group.id;
                let kinds: Vec<EntityKind> = EntityKind::in_group(group_id).collect();

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                        items.remove(pos);
                                    } else {
                                        items.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {kinds.iter().map(|kind| {
                                    let kind = *kind;
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || active_kind() == Some(kind)
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.navigate(Route::List(kind))
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(kind.icon())}
                                                <span>{kind.list_name()}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
