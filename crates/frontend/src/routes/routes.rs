use crate::dashboards::OverviewDashboard;
use crate::domain::entity::ui::details::EntityDetail;
use crate::domain::entity::ui::form::EntityForm;
use crate::domain::entity::ui::list::EntityList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::routes::Route;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_SYSTEM};
use leptos::prelude::*;
use thaw::*;

#[component]
fn NotFoundPage(path: String) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <PageFrame page_id=page_id("not_found", PAGE_CAT_SYSTEM) category=PAGE_CAT_SYSTEM>
            <div class="empty-state">
                {icon("search")}
                <div class="empty-state__title">"Page not found"</div>
                <div class="empty-state__text">{format!("Nothing lives at {}", path)}</div>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate(Route::Overview)>
                    "Go to overview"
                </Button>
            </div>
        </PageFrame>
    }
}

/// Page for the current route. Every route change mounts a fresh page.
#[component]
fn RouteOutlet() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    move || match ctx.route.get() {
        Route::Overview => view! { <OverviewDashboard /> }.into_any(),
        Route::List(kind) => view! { <EntityList kind=kind /> }.into_any(),
        Route::New(kind) => view! { <EntityForm kind=kind /> }.into_any(),
        Route::Detail(kind, id) => view! { <EntityDetail kind=kind id=id /> }.into_any(),
        Route::Update(kind, id) => view! { <EntityForm kind=kind id=id /> }.into_any(),
        Route::NotFound(path) => view! { <NotFoundPage path=path /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <RouteOutlet /> }.into_any()
        />
    }
}
