use crate::domain::entity::EntityApi;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Pages reach the backend only through this client
    provide_context(EntityApi::from_location());

    view! {
        <AppRoutes />
    }
}
