use contracts::domain::a002_manual_session::OcrStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge badge--primary",
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "error" => "badge badge--error",
        _ => "badge badge--neutral",
    };

    view! {
        <span class=variant_class>
            {children()}
        </span>
    }
}

/// Статус OCR-задачи
#[component]
pub fn OcrStatusBadge(#[prop(into)] status: Signal<Option<OcrStatus>>) -> impl IntoView {
    let class = move || match status.get() {
        Some(OcrStatus::Active) => "badge badge--primary",
        Some(OcrStatus::Success) => "badge badge--success",
        Some(OcrStatus::Exception) => "badge badge--error",
        None => "badge badge--neutral",
    };
    let text = move || match status.get() {
        Some(OcrStatus::Active) => "识别中",
        Some(OcrStatus::Success) => "已完成",
        Some(OcrStatus::Exception) => "失败",
        None => "未开始",
    };

    view! { <span class=class>{text}</span> }
}
