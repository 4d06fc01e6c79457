use leptos::prelude::*;

/// Button with variants (primary, secondary, ghost).
///
/// While `busy` is set the button is disabled and shows `busy_label`
/// instead of its children.
#[component]
pub fn Button(
    /// "primary" (default), "secondary" or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    #[prop(optional, into)]
    busy_label: MaybeProp<String>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: ChildrenFn,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button button--secondary",
        "ghost" => "button button--ghost",
        _ => "button button--primary",
    };
    let is_busy = move || busy.get().unwrap_or(false);
    let content = move || children();

    view! {
        <button
            type="button"
            class=variant_class
            disabled=move || is_busy() || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            <Show when=is_busy fallback=content>
                {move || busy_label.get().unwrap_or_else(|| "处理中...".to_string())}
            </Show>
        </button>
    }
}
