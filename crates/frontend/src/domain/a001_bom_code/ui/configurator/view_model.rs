use contracts::domain::a001_bom_code::{
    create_default_selection, decode, encode, get_schema, summarize, validate_length,
    BomCodeError, BomGenerationRequest, BomSaveRequest, BomSaveResponse, BomSegment, CodeSchema,
    CodeSection, Selection,
};
use contracts::enums::BomFamily;
use leptos::prelude::*;

use super::super::super::api;
use crate::domain::a002_manual_session::api as session_api;
use crate::domain::a002_manual_session::store::ManualStore;

const PLACEHOLDER: char = '·';

/// ViewModel of the BOM configurator
#[derive(Clone, Copy)]
pub struct BomConfiguratorViewModel {
    pub family: RwSignal<BomFamily>,
    pub selection: RwSignal<Selection>,
    pub product_name: RwSignal<String>,
    /// Код, вставленный пользователем для расшифровки
    pub code_input: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    /// Секция, на которую указывает последняя ошибка
    pub invalid_key: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    pub saved: RwSignal<Option<BomSaveResponse>>,
    /// Сегменты, подобранные бэкендом по OCR (с обоснованием)
    pub generated: RwSignal<Vec<BomSegment>>,
    pub busy: RwSignal<bool>,
    store: ManualStore,
}

impl BomConfiguratorViewModel {
    pub fn new(store: ManualStore) -> Self {
        let family = BomFamily::Outdoor;
        Self {
            family: RwSignal::new(family),
            selection: RwSignal::new(create_default_selection(get_schema(family))),
            product_name: RwSignal::new(store.state.with_untracked(|s| s.product_name.clone())),
            code_input: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            invalid_key: RwSignal::new(None),
            notice: RwSignal::new(None),
            saved: RwSignal::new(None),
            generated: RwSignal::new(Vec::new()),
            busy: RwSignal::new(false),
            store,
        }
    }

    pub fn schema(&self) -> &'static CodeSchema {
        get_schema(self.family.get())
    }

    pub fn family_options() -> Vec<(String, String)> {
        BomFamily::all()
            .into_iter()
            .map(|f| (f.code().to_string(), f.display_name().to_string()))
            .collect()
    }

    /// Пустой пункт + все токены секции в порядке объявления
    pub fn section_options(section: &CodeSection) -> Vec<(String, String)> {
        let mut options = vec![(String::new(), "请选择".to_string())];
        if let Some(table) = section.options() {
            options.extend(
                table
                    .iter()
                    .map(|(token, label)| (token.to_string(), format!("{} - {}", token, label))),
            );
        }
        options
    }

    fn reset_feedback(&self) {
        self.error.set(None);
        self.invalid_key.set(None);
        self.notice.set(None);
    }

    fn show_error(&self, err: &BomCodeError) {
        self.invalid_key.set(err.section_key().map(str::to_string));
        self.error.set(Some(err.to_string()));
    }

    fn apply(&self, family: BomFamily, selection: Selection) {
        self.family.set(family);
        self.selection.set(selection);
    }

    /// Смена семейства сбрасывает выбор
    pub fn select_family_command(&self, code: String) {
        match BomFamily::from_code(&code) {
            Ok(family) => {
                self.reset_feedback();
                self.saved.set(None);
                self.generated.set(Vec::new());
                self.apply(family, create_default_selection(get_schema(family)));
            }
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }

    pub fn set_section(&self, key: &str, token: String) {
        let mut failure = None;
        self.selection.update(|s| {
            if let Err(e) = s.set(key, token) {
                failure = Some(e);
            }
        });
        match failure {
            Some(e) => self.show_error(&e),
            None => {
                if self.invalid_key.get_untracked().as_deref() == Some(key) {
                    self.invalid_key.set(None);
                    self.error.set(None);
                }
            }
        }
    }

    pub fn reset_command(&self) {
        self.reset_feedback();
        self.selection.update(Selection::reset);
    }

    /// Код с точками на месте невыбранных секций
    pub fn preview(&self) -> String {
        let schema = self.schema();
        self.selection.with(|selection| {
            schema
                .leaves()
                .into_iter()
                .map(|section| match selection.token(&section.key) {
                    Some(token) if !token.is_empty() => token.to_string(),
                    _ => PLACEHOLDER.to_string().repeat(section.digit_width()),
                })
                .collect()
        })
    }

    pub fn encoded(&self) -> Result<String, BomCodeError> {
        let schema = self.schema();
        self.selection.with(|selection| encode(schema, selection))
    }

    pub fn segments(&self) -> Vec<BomSegment> {
        let schema = self.schema();
        self.selection.with(|selection| summarize(schema, selection))
    }

    /// Расшифровать вставленный код в текущем семействе
    pub fn load_code_command(&self) {
        self.reset_feedback();
        let code = self.code_input.get_untracked().trim().to_string();
        let family = self.family.get_untracked();
        let schema = get_schema(family);

        if !validate_length(schema, &code) {
            self.error.set(Some(format!(
                "{}编码应为 {} 位，当前 {} 位",
                family.display_name(),
                schema.total_width(),
                code.chars().count()
            )));
            return;
        }
        match decode(schema, &code) {
            Ok(selection) => {
                let unresolved = selection.unresolved_keys().join(", ");
                if !unresolved.is_empty() {
                    self.notice
                        .set(Some(format!("以下字段的编码不在选项表中: {}", unresolved)));
                }
                self.apply(family, selection);
            }
            Err(e) => self.show_error(&e),
        }
    }

    fn session_id(&self) -> Option<String> {
        let id = self.store.state.with_untracked(|s| s.session_id.clone());
        (!id.trim().is_empty()).then_some(id)
    }

    pub fn save_command(&self) {
        self.reset_feedback();
        let family = self.family.get_untracked();
        let schema = get_schema(family);
        let encoded = self.selection.with_untracked(|s| {
            encode(schema, s).map(|code| (code, s.to_token_map(), summarize(schema, s)))
        });
        let (code, selections, segments) = match encoded {
            Ok(parts) => parts,
            Err(e) => {
                self.show_error(&e);
                return;
            }
        };

        let product_name = self.product_name.get_untracked().trim().to_string();
        let request = BomSaveRequest {
            code: code.clone(),
            product_name: (!product_name.is_empty()).then_some(product_name),
            bom_type: Some(family.code().to_string()),
            session_id: self.session_id(),
            selections,
            segments,
        };

        let this = *self;
        this.busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::save_bom_code(&request).await {
                Ok(saved) => {
                    log::info!("BOM code {} saved to {}", saved.code, saved.path);
                    this.store.state.update(|s| {
                        s.bom_code = code;
                        s.bom_type = family.code().to_string();
                    });
                    this.saved.set(Some(saved));
                }
                Err(e) => this.error.set(Some(e)),
            }
            this.busy.set(false);
        });
    }

    /// Подбор кода бэкендом по документам текущей сессии
    pub fn generate_from_ocr_command(&self) {
        self.reset_feedback();
        let Some(session_id) = self.session_id() else {
            self.error
                .set(Some("请先在说明书页面创建会话并完成 OCR".to_string()));
            return;
        };
        let family = self.family.get_untracked();

        let this = *self;
        this.busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let documents = session_api::get_manual_session_inputs(&session_id).await?;
                let request = BomGenerationRequest {
                    bom_type: family.code().to_string(),
                    documents,
                    sections: get_schema(family).to_section_dtos(),
                };
                api::generate_bom_from_ocr(&request).await
            }
            .await;

            match result {
                Ok(response) => {
                    let family = BomFamily::from_code(&response.bom_type).unwrap_or(family);
                    let selection =
                        Selection::from_token_map(get_schema(family), &response.selections);
                    this.apply(family, selection);
                    this.generated.set(response.segments);
                }
                Err(e) => this.error.set(Some(e)),
            }
            this.busy.set(false);
        });
    }

    /// Восстановить код, ранее сохранённый в сессии
    pub fn restore_from_session_command(&self) {
        self.reset_feedback();
        let Some(session_id) = self.session_id() else {
            self.notice.set(Some("当前没有会话".to_string()));
            return;
        };

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::get_saved_bom_by_session(&session_id).await {
                Ok(Some(saved)) => {
                    let family = saved
                        .bom_type
                        .as_deref()
                        .and_then(|t| BomFamily::from_code(t).ok())
                        .unwrap_or_else(|| this.family.get_untracked());
                    let schema = get_schema(family);
                    let selection = decode(schema, &saved.code)
                        .unwrap_or_else(|_| Selection::from_token_map(schema, &saved.selections));
                    if let Some(name) = saved.product_name.clone() {
                        this.product_name.set(name);
                    }
                    this.apply(family, selection);
                    this.saved.set(Some(saved));
                }
                Ok(None) => this.notice.set(Some("该会话还没有保存的 BOM".to_string())),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }
}
