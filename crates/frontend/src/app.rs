use crate::domain::a002_manual_session::store::ManualStore;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Manual workflow state, shared by the configurator and the review page
    provide_context(ManualStore::new());

    view! {
        <AppRoutes />
    }
}
