//! Sidebar: one item per application module

use crate::layout::global_context::use_app_context;
use crate::routes::route_table::modules;
use crate::shared::icons::module_icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="app-sidebar__content">
            {modules()
                .into_iter()
                .map(|(key, label, landing)| {
                    let landing = StoredValue::new(landing);
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.route.get().module_key() == key
                            style:padding-left="12px"
                            on:click=move |_| ctx.navigate(landing.get_value())
                        >
                            <div class="app-sidebar__item-content">
                                {module_icon(key)}
                                <span>{label}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
