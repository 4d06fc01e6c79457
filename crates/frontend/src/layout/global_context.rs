use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::routes::route_table::AppRoute;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<AppRoute>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(current_route()),
            left_open: RwSignal::new(true),
        }
    }

    /// Switch page and push the new path onto the browser history
    pub fn navigate(&self, route: AppRoute) {
        let path = route.to_path();
        if current_path() != path {
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
            }
        }
        log::debug!("navigate: {}", path);
        self.route.set(route);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    /// Follow back/forward buttons. Runs once when the layout is created.
    pub fn init_router_integration(&self) {
        let route = self.route;
        let on_pop = Closure::<dyn FnMut()>::new(move || {
            route.set(current_route());
        });
        if let Some(w) = window() {
            w.set_onpopstate(Some(on_pop.as_ref().unchecked_ref()));
        }
        // lives as long as the page
        on_pop.forget();
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

fn current_route() -> AppRoute {
    AppRoute::parse(&current_path())
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().unwrap_or_else(|| {
        log::warn!("AppGlobalContext context not found, using a detached one");
        AppGlobalContext::new()
    })
}
