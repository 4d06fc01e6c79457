use contracts::domain::a001_bom_code::BomSegment;
use leptos::prelude::*;

/// Расшифровка кода: секция → токен → значение (и обоснование, если есть)
#[component]
pub fn BomSummaryTable(
    #[prop(into)] segments: Signal<Vec<BomSegment>>,
    /// Показывать колонку с обоснованием подбора
    #[prop(optional)]
    with_reason: bool,
) -> impl IntoView {
    view! {
        <table class="table bom-summary">
            <thead>
                <tr>
                    <th>"字段"</th>
                    <th>"编码"</th>
                    <th>"含义"</th>
                    {with_reason.then(|| view! { <th>"依据"</th> })}
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || segments.get()
                    key=|segment| (segment.key.clone(), segment.value.clone())
                    children=move |segment| {
                        let unresolved = !segment.value.is_empty() && segment.meaning.is_none();
                        let meaning = match (&segment.meaning, segment.value.is_empty()) {
                            (Some(m), _) => m.clone(),
                            (None, true) => "未选择".to_string(),
                            (None, false) => "未识别的编码".to_string(),
                        };
                        let reason = segment.reason.clone().unwrap_or_default();
                        view! {
                            <tr class:bom-summary__row--unresolved=unresolved>
                                <td>{segment.label.clone()}</td>
                                <td class="bom-summary__token">{segment.value.clone()}</td>
                                <td>{meaning}</td>
                                {with_reason.then(|| view! { <td class="text-muted">{reason}</td> })}
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
