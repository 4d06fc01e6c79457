use leptos::prelude::*;

use super::view_model::ManualGenerationViewModel;
use crate::domain::a001_bom_code::ui::summary::BomSummaryTable;
use crate::domain::a002_manual_session::store::use_manual_store;
use crate::domain::a002_manual_session::ui::session_panel::SessionPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;

#[component]
fn JsonEditor(label: &'static str, text: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="form__group json-editor">
            <label class="form__label">{label}</label>
            <textarea
                class="form__textarea"
                rows="18"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn ManualReviewPage() -> impl IntoView {
    let vm = ManualGenerationViewModel::new(use_manual_store());
    let busy = Signal::derive(move || vm.busy.get());

    view! {
        <div class="page manual-review">
            <PageHeader title="说明书审核" subtitle="上传资料 → OCR → 生成规格表与说明书 → 人工确认">
                <Button variant="ghost" on_click=Callback::new(move |_| vm.load_saved_command())>
                    "加载已保存结果"
                </Button>
            </PageHeader>

            <SessionPanel />

            <section class="card">
                <h3>"BOM 编码"</h3>
                {move || match vm.bom_segments() {
                    Ok(segments) if segments.is_empty() => {
                        view! { <div class="text-muted">"会话未指定 BOM 编码或产品类型"</div> }.into_any()
                    }
                    Ok(segments) => {
                        view! { <BomSummaryTable segments=Signal::derive(move || segments.clone()) /> }.into_any()
                    }
                    Err(e) => view! { <div class="warning-box text-error">{e}</div> }.into_any(),
                }}
            </section>

            {move || vm.error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}
            {move || vm.notice.get().map(|n| view! { <div class="info-box">{n}</div> })}

            <section class="card manual-review__specsheet">
                <div class="manual-review__actions">
                    <Button busy=busy on_click=Callback::new(move |_| vm.generate_specsheet_command())>
                        "生成规格表"
                    </Button>
                    <Button variant="secondary" busy=busy on_click=Callback::new(move |_| vm.save_specsheet_to_session_command())>
                        "保存到会话"
                    </Button>
                    <Button variant="secondary" busy=busy on_click=Callback::new(move |_| vm.save_specsheet_truth_command())>
                        "保存为标准答案"
                    </Button>
                </div>
                <JsonEditor label="规格表 (JSON)" text=vm.specsheet_text />

                <Show when=move || !vm.chunks.get().is_empty()>
                    <details>
                        <summary>{move || format!("检索片段 ({})", vm.chunks.get().len())}</summary>
                        <For
                            each=move || vm.chunks.get().into_iter().enumerate()
                            key=|(i, _)| *i
                            children=move |(_, chunk)| view! {
                                <blockquote class="chunk">
                                    <div class="text-muted">
                                        {chunk.source_path.clone()}
                                        {chunk.similarity.map(|s| format!(" · {:.2}", s))}
                                    </div>
                                    <pre>{chunk.text.clone()}</pre>
                                </blockquote>
                            }
                        />
                    </details>
                </Show>
            </section>

            <section class="card manual-review__book">
                <div class="manual-review__actions">
                    <Button busy=busy on_click=Callback::new(move |_| vm.generate_manual_book_command())>
                        "生成说明书"
                    </Button>
                    <Button variant="secondary" busy=busy on_click=Callback::new(move |_| vm.save_manual_book_truth_command())>
                        "保存为标准答案"
                    </Button>
                </div>
                <JsonEditor label="说明书页面 (JSON 数组)" text=vm.manual_book_text />
            </section>

            {move || vm.prompt_text.get().map(|prompt| view! {
                <details class="card">
                    <summary>"提示词"</summary>
                    <pre>{prompt}</pre>
                </details>
            })}
        </div>
    }
}
