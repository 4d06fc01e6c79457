use crate::domain::a001_bom_code::ui::configurator::BomConfigurator;
use crate::domain::a001_bom_code::ui::details::BomDetail;
use crate::layout::global_context::use_app_context;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::routes::route_table::AppRoute;
use crate::shared::components::page_header::PageHeader;
use crate::usecases::u001_manual_generation::ManualReviewPage;
use leptos::prelude::*;

/// Страница, содержимое которой живёт вне этого клиента
#[component]
fn PlaceholderPage(title: String) -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title=title />
            <div class="text-muted">"此页面暂未开放"</div>
        </div>
    }
}

fn page_for(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <BomConfigurator /> }.into_any(),
        AppRoute::BomDetail { product, bom } => view! { <BomDetail product=product bom=bom /> }.into_any(),
        AppRoute::ManualReview => view! { <ManualReviewPage /> }.into_any(),
        AppRoute::NotFound { path } => {
            log::warn!("no page for {}", path);
            view! { <PlaceholderPage title=format!("页面不存在: {}", path) /> }.into_any()
        }
        other => view! { <PlaceholderPage title=other.title() /> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();

    // Runs once when the layout is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || (move || page_for(ctx.route.get())).into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
