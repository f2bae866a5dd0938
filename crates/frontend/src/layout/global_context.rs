use crate::routes::Route;
use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// App-wide UI state: the current route and sidebar visibility
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<Route>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(Route::Overview),
            left_open: RwSignal::new(true),
        }
    }

    /// Sync the route with the browser location and follow back/forward.
    /// Called once by the shell.
    pub fn init_router_integration(&self) {
        self.route.set(Route::parse(&current_path()));

        let route = self.route;
        let on_popstate = Closure::<dyn Fn()>::new(move || {
            let path = current_path();
            log::debug!("popstate -> {}", path);
            route.set(Route::parse(&path));
        });
        if let Some(w) = window() {
            if w.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("Could not subscribe to popstate, back/forward will not re-route");
            }
        }
        // The listener lives as long as the page
        on_popstate.forget();
    }

    /// Go to `route` and push a browser history entry
    pub fn navigate(&self, route: Route) {
        let path = route.to_path();
        log::debug!("navigate -> {}", path);

        if current_path() != path {
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
            }
        }
        self.route.set(route);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
