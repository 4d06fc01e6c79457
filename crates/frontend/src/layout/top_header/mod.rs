//! TopHeader component - application top bar.
//!
//! Sidebar toggle, application title and the title of the current page.

use crate::layout::global_context::use_app_context;
use crate::routes::route_table::AppRoute;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "隐藏导航" } else { "显示导航" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title" on:click=move |_| ctx.navigate(AppRoute::Home)>
                    "BOM 编码助手"
                </span>
            </div>

            <div class="top-header__page">
                {move || ctx.route.get().title()}
            </div>
        </div>
    }
}
