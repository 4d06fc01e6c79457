use contracts::domain::a001_bom_code::CodeSection;
use leptos::prelude::*;

use super::super::summary::BomSummaryTable;
use super::view_model::BomConfiguratorViewModel;
use crate::domain::a002_manual_session::store::use_manual_store;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;

/// Поле выбора для одной секции; составная секция рисуется группой
fn section_field(vm: BomConfiguratorViewModel, section: &'static CodeSection) -> AnyView {
    if !section.is_leaf() {
        return view! {
            <fieldset class="bom-group">
                <legend>{section.label.clone()}</legend>
                {section
                    .children()
                    .iter()
                    .map(|child| section_field(vm, child))
                    .collect_view()}
            </fieldset>
        }
        .into_any();
    }

    let key = StoredValue::new(section.key.clone());
    let options = BomConfiguratorViewModel::section_options(section);
    let value = Signal::derive(move || {
        key.with_value(|k| vm.selection.with(|s| s.token(k).unwrap_or_default().to_string()))
    });
    let invalid =
        Signal::derive(move || key.with_value(|k| vm.invalid_key.get().as_deref() == Some(k)));
    let hint = Signal::derive(move || {
        key.with_value(|k| {
            vm.selection.with(|s| match s.get(k) {
                Some(v) if v.is_unresolved() => format!("未识别的编码: {}", v.token()),
                _ => String::new(),
            })
        })
    });

    view! {
        <Select
            id=section.key.clone()
            label=format!("{} ({}位)", section.label, section.digit_width())
            value=value
            options=Signal::derive(move || options.clone())
            invalid=invalid
            hint=hint
            on_change=Callback::new(move |token: String| {
                key.with_value(|k| vm.set_section(k, token))
            })
        />
    }
    .into_any()
}

#[component]
pub fn BomConfigurator() -> impl IntoView {
    let vm = BomConfiguratorViewModel::new(use_manual_store());

    let encoded_state = move || match vm.encoded() {
        Ok(code) => view! { <span class="text-success">{format!("✓ {}", code)}</span> }.into_any(),
        Err(_) => view! { <span class="text-muted">"尚未完成全部字段"</span> }.into_any(),
    };

    view! {
        <div class="page bom-configurator">
            <PageHeader title="BOM 编码配置" subtitle="按字段选择，生成 22 位 BOM 编码">
                <Button variant="ghost" on_click=Callback::new(move |_| vm.reset_command())>
                    {icon("refresh")}
                    "重置"
                </Button>
                <Button
                    variant="secondary"
                    busy=Signal::derive(move || vm.busy.get())
                    on_click=Callback::new(move |_| vm.generate_from_ocr_command())
                >
                    {icon("scan")}
                    "根据 OCR 生成"
                </Button>
                <Button
                    busy=Signal::derive(move || vm.busy.get())
                    busy_label="保存中..."
                    on_click=Callback::new(move |_| vm.save_command())
                >
                    {icon("save")}
                    "保存"
                </Button>
            </PageHeader>

            {move || vm.error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}
            {move || vm.notice.get().map(|n| view! { <div class="info-box">{n}</div> })}

            <div class="bom-configurator__toolbar">
                <Select
                    label="产品类型"
                    value=Signal::derive(move || vm.family.get().code().to_string())
                    options=Signal::derive(BomConfiguratorViewModel::family_options)
                    on_change=Callback::new(move |code: String| vm.select_family_command(code))
                />
                <Input
                    label="产品名称"
                    value=vm.product_name
                    on_input=Callback::new(move |v: String| vm.product_name.set(v))
                />
                <div class="bom-configurator__decode">
                    <Input
                        label="已有编码"
                        placeholder="粘贴编码后点击解析"
                        value=vm.code_input
                        max_length=vm.family.get_untracked().code_width()
                        on_input=Callback::new(move |v: String| vm.code_input.set(v))
                    />
                    <Button variant="secondary" on_click=Callback::new(move |_| vm.load_code_command())>
                        "解析"
                    </Button>
                    <Button variant="ghost" on_click=Callback::new(move |_| vm.restore_from_session_command())>
                        "从会话恢复"
                    </Button>
                </div>
            </div>

            <div class="bom-configurator__preview">
                <code class="bom-code">{move || vm.preview()}</code>
                {encoded_state}
            </div>

            <div class="bom-configurator__sections">
                {move || {
                    vm.schema()
                        .sections()
                        .iter()
                        .map(|section| section_field(vm, section))
                        .collect_view()
                }}
            </div>

            <h3>"编码说明"</h3>
            <BomSummaryTable segments=Signal::derive(move || vm.segments()) />

            <Show when=move || !vm.generated.get().is_empty()>
                <h3>"OCR 生成依据"</h3>
                <BomSummaryTable segments=vm.generated with_reason=true />
            </Show>

            {move || vm.saved.get().map(|saved| view! {
                <div class="info-box">
                    {format!("已保存 {} → {}", saved.code, saved.path)}
                </div>
            })}
        </div>
    }
}
