use leptos::prelude::*;

use super::super::summary::BomSummaryTable;
use super::super::configurator::BomConfiguratorViewModel;
use super::view_model::BomDetailViewModel;
use crate::layout::global_context::use_app_context;
use crate::routes::route_table::AppRoute;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Select};
use crate::shared::icons::icon;

#[component]
pub fn BomDetail(product: String, bom: String) -> impl IntoView {
    let ctx = use_app_context();
    let vm = BomDetailViewModel::new(bom.clone());
    let product_for_back = StoredValue::new(product.clone());

    view! {
        <div class="page bom-detail">
            <PageHeader title=format!("BOM {}", bom) subtitle=product>
                <Button
                    variant="ghost"
                    on_click=Callback::new(move |_| {
                        ctx.navigate(AppRoute::ProductBoms { product: product_for_back.get_value() })
                    })
                >
                    {icon("chevron-right")}
                    "返回列表"
                </Button>
            </PageHeader>

            <Select
                label="按产品类型解析"
                value=Signal::derive(move || vm.family.get().code().to_string())
                options=Signal::derive(BomConfiguratorViewModel::family_options)
                on_change=Callback::new(move |code: String| vm.select_family_command(code))
            />

            <code class="bom-code">{move || vm.code.get()}</code>

            {move || match vm.segments() {
                Ok(segments) => view! { <BomSummaryTable segments=Signal::derive(move || segments.clone()) /> }.into_any(),
                Err(e) => view! { <div class="warning-box text-error">{e}</div> }.into_any(),
            }}
        </div>
    }
}
