use contracts::domain::a002_manual_session::{ManualFile, OcrGroup};
use leptos::prelude::*;

use super::view_model::{FileSlot, SessionPanelViewModel};
use crate::domain::a001_bom_code::ui::configurator::BomConfiguratorViewModel;
use crate::domain::a002_manual_session::store::use_manual_store;
use crate::shared::components::ui::{Badge, Button, Input, OcrStatusBadge, Select};
use crate::shared::icons::icon;

fn file_list(files: Vec<ManualFile>) -> impl IntoView {
    view! {
        <ul class="file-list">
            {files
                .into_iter()
                .map(|file| {
                    let preview = file.preview().or(file.url.as_deref()).map(str::to_string);
                    let is_image = file.mime.as_deref().is_some_and(|m| m.starts_with("image/"));
                    view! {
                        <li class="file-list__item">
                            {match (preview, is_image) {
                                (Some(src), true) => view! { <img class="file-list__thumb" src=src /> }.into_any(),
                                _ => icon("manual"),
                            }}
                            <span>{file.name.clone()}</span>
                            {file.size.map(|s| view! { <span class="text-muted">{format!("{} KB", s / 1024)}</span> })}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

fn ocr_groups(groups: Vec<OcrGroup>) -> impl IntoView {
    view! {
        <div class="ocr-groups">
            {groups
                .into_iter()
                .map(|group| view! {
                    <details class="ocr-group">
                        <summary>
                            {group.source_name.clone()}
                            <Badge>{format!("{} 页", group.pages.len())}</Badge>
                        </summary>
                        {group.pages.into_iter().map(|page| view! {
                            <div class="ocr-page">
                                <strong>{page.page_number.map(|n| format!("第 {} 页", n)).unwrap_or(page.image_stem.clone())}</strong>
                                <ul>
                                    {page.artifacts.into_iter().map(|a| view! {
                                        <li>
                                            {a.url.clone().map(|url| view! { <a href=url target="_blank">{a.name.clone()}</a> }.into_any())
                                                .unwrap_or_else(|| a.name.clone().into_any())}
                                            {a.kind.clone().map(|k| view! { <Badge variant="primary">{k}</Badge> })}
                                        </li>
                                    }).collect_view()}
                                </ul>
                            </div>
                        }).collect_view()}
                    </details>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn SessionPanel() -> impl IntoView {
    let vm = SessionPanelViewModel::new(use_manual_store());
    let store = vm.store;

    let family_options = Signal::derive(|| {
        let mut options = vec![(String::new(), "未指定".to_string())];
        options.extend(BomConfiguratorViewModel::family_options());
        options
    });
    let progress = move || store.state.with(|s| s.ocr_progress.clone());

    view! {
        <section class="card session-panel">
            <h3>"上传与 OCR"</h3>
            {move || vm.error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}

            <div class="form-row">
                <Input
                    label="产品名称"
                    value=vm.product_name
                    on_input=Callback::new(move |v: String| vm.product_name.set(v))
                />
                <Input
                    label="BOM 编码"
                    value=vm.bom_code
                    max_length=22
                    on_input=Callback::new(move |v: String| vm.bom_code.set(v))
                />
                <Select
                    label="产品类型"
                    value=vm.bom_type
                    options=family_options
                    on_change=Callback::new(move |v: String| vm.bom_type.set(v))
                />
            </div>

            <div class="form-row">
                <div class="form__group">
                    <label class="form__label">"产品文件"</label>
                    <input
                        type="file"
                        multiple=true
                        accept="image/*,.pdf"
                        on:change=move |ev| vm.files_selected_command(FileSlot::Product, &ev)
                    />
                    {move || file_list(store.state.with(|s| s.product_files.clone()))}
                </div>
                <div class="form__group">
                    <label class="form__label">"配件文件"</label>
                    <input
                        type="file"
                        multiple=true
                        accept="image/*,.pdf"
                        on:change=move |ev| vm.files_selected_command(FileSlot::Accessory, &ev)
                    />
                    {move || file_list(store.state.with(|s| s.accessory_files.clone()))}
                </div>
            </div>

            <div class="session-panel__actions">
                <Button
                    busy=Signal::derive(move || vm.busy.get())
                    busy_label="上传中..."
                    on_click=Callback::new(move |_| vm.create_session_command())
                >
                    {icon("upload")}
                    "创建会话"
                </Button>
                <Button
                    variant="secondary"
                    disabled=Signal::derive(move || vm.session_id().is_empty())
                    busy=Signal::derive(move || vm.polling.get())
                    busy_label="识别中..."
                    on_click=Callback::new(move |_| vm.run_ocr_command())
                >
                    {icon("scan")}
                    "开始 OCR"
                </Button>
                <Button variant="ghost" on_click=Callback::new(move |_| vm.clear_command())>
                    "清空"
                </Button>
            </div>

            <div class="form-row">
                <Input
                    label="会话 ID"
                    value=vm.session_input
                    on_input=Callback::new(move |v: String| vm.session_input.set(v))
                />
                <Button variant="secondary" on_click=Callback::new(move |_| vm.load_session_command())>
                    "打开会话"
                </Button>
            </div>

            {move || progress().map(|p| {
                let status = p.status;
                view! {
                <div class="ocr-progress">
                    <OcrStatusBadge status=Signal::derive(move || Some(status)) />
                    <span>{format!("{} {}", p.stage, p.detail)}</span>
                    <progress max="100" value=p.percent.to_string()></progress>
                    {p.pages_label().map(|l| view! { <span class="text-muted">{l}</span> })}
                    {p.current_file.clone().map(|f| view! { <span class="text-muted">{f}</span> })}
                </div>
                }
            })}

            {move || {
                let (product, accessory) = store.state.with(|s| {
                    (s.product_ocr_groups.clone(), s.accessory_ocr_groups.clone())
                });
                (!product.is_empty() || !accessory.is_empty()).then(|| view! {
                    <h4>"产品 OCR 结果"</h4>
                    {ocr_groups(product)}
                    <h4>"配件 OCR 结果"</h4>
                    {ocr_groups(accessory)}
                })
            }}
        </section>
    }
}
