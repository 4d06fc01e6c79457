use contracts::domain::a001_bom_code::{get_schema, summarize, BomSegment};
use contracts::domain::a002_manual_session::ManualSession;
use contracts::usecases::u001_manual_generation::{
    ChunkInfo, ManualSpecsheetSaveRequest, OcrDocument, OcrDocumentsRequest,
    SaveManualBookTruthRequest, SaveManualSpecsheetTruthRequest,
};
use leptos::prelude::*;
use serde_json::Value;

use super::api;
use crate::domain::a002_manual_session::api as session_api;
use crate::domain::a002_manual_session::store::ManualStore;

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Вход генерации: документы + реквизиты текущей сессии
pub fn generation_request(session: &ManualSession, documents: Vec<OcrDocument>) -> OcrDocumentsRequest {
    OcrDocumentsRequest {
        documents,
        product_name: non_empty(&session.product_name),
        session_id: non_empty(&session.session_id),
        bom_code: non_empty(&session.bom_code),
        bom_type: non_empty(&session.bom_type),
    }
}

/// Расшифровка BOM-кода сессии; пустой список, если код или тип не заданы
pub fn decoded_segments(session: &ManualSession) -> Result<Vec<BomSegment>, String> {
    let selection = session.decoded_selection().map_err(|e| e.to_string())?;
    Ok(match selection {
        Some(selection) => summarize(get_schema(selection.family()), &selection),
        None => Vec::new(),
    })
}

pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

pub fn parse_specsheet(text: &str) -> Result<Value, String> {
    if text.trim().is_empty() {
        return Err("规格表为空".to_string());
    }
    serde_json::from_str(text).map_err(|e| format!("规格表不是合法的 JSON: {}", e))
}

pub fn parse_manual_book(text: &str) -> Result<Vec<Value>, String> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(pages)) => Ok(pages),
        Ok(_) => Err("说明书必须是页面数组".to_string()),
        Err(e) => Err(format!("说明书不是合法的 JSON: {}", e)),
    }
}

#[derive(Clone, Copy)]
pub struct ManualGenerationViewModel {
    pub specsheet_text: RwSignal<String>,
    pub manual_book_text: RwSignal<String>,
    pub chunks: RwSignal<Vec<ChunkInfo>>,
    pub prompt_text: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    pub busy: RwSignal<bool>,
    store: ManualStore,
}

impl ManualGenerationViewModel {
    pub fn new(store: ManualStore) -> Self {
        Self {
            specsheet_text: RwSignal::new(String::new()),
            manual_book_text: RwSignal::new(String::new()),
            chunks: RwSignal::new(Vec::new()),
            prompt_text: RwSignal::new(None),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            busy: RwSignal::new(false),
            store,
        }
    }

    pub fn bom_segments(&self) -> Result<Vec<BomSegment>, String> {
        self.store.state.with(decoded_segments)
    }

    fn start(&self) -> Option<ManualSession> {
        self.error.set(None);
        self.notice.set(None);
        let session = self.store.state.get_untracked();
        if session.session_id.is_empty() {
            self.error.set(Some("请先创建或打开会话".to_string()));
            return None;
        }
        self.busy.set(true);
        Some(session)
    }

    fn finish(&self, result: Result<String, String>) {
        match result {
            Ok(notice) => self.notice.set(Some(notice)),
            Err(e) => self.error.set(Some(e)),
        }
        self.busy.set(false);
    }

    pub fn generate_specsheet_command(&self) {
        let Some(session) = self.start() else { return };
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let documents = session_api::get_manual_session_inputs(&session.session_id).await?;
                let response =
                    api::generate_specsheet_from_ocr(&generation_request(&session, documents)).await?;
                this.specsheet_text
                    .set(response.specsheet.as_ref().map(pretty).unwrap_or_default());
                this.chunks.set(response.chunks);
                this.prompt_text.set(response.prompt_text);
                Ok::<_, String>("规格表已生成".to_string())
            }
            .await;
            this.finish(result);
        });
    }

    pub fn generate_manual_book_command(&self) {
        let Some(session) = self.start() else { return };
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let documents = session_api::get_manual_session_inputs(&session.session_id).await?;
                let response =
                    api::generate_manual_book_from_ocr(&generation_request(&session, documents))
                        .await?;
                let pages = response.manual_book.unwrap_or_default();
                this.manual_book_text.set(pretty(&Value::Array(pages)));
                this.prompt_text.set(response.prompt_text);
                Ok::<_, String>("说明书已生成".to_string())
            }
            .await;
            this.finish(result);
        });
    }

    /// Ранее утверждённые результаты для этого продукта и кода
    pub fn load_saved_command(&self) {
        let Some(session) = self.start() else { return };
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let book =
                    api::get_saved_manual_book(&session.product_name, &session.bom_code).await?;
                let specsheet =
                    api::get_saved_manual_specsheet(&session.product_name, &session.bom_code)
                        .await?;
                let found = book.is_some() || specsheet.is_some();
                if let Some(pages) = book.and_then(|b| b.manual_book) {
                    this.manual_book_text.set(pretty(&Value::Array(pages)));
                }
                if let Some(specsheet) = specsheet {
                    this.specsheet_text.set(pretty(&specsheet));
                }
                Ok::<_, String>(if found { "已加载保存的结果" } else { "没有保存的结果" }.to_string())
            }
            .await;
            this.finish(result);
        });
    }

    pub fn save_specsheet_truth_command(&self) {
        let specsheet = match parse_specsheet(&self.specsheet_text.get_untracked()) {
            Ok(v) => v,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };
        let Some(session) = self.start() else { return };
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let request = SaveManualSpecsheetTruthRequest {
                product_name: session.product_name,
                bom_code: session.bom_code,
                specsheet: Some(specsheet),
            };
            let result = api::save_manual_specsheet_truth(&request)
                .await
                .map(|_| "规格表已保存为标准答案".to_string());
            this.finish(result);
        });
    }

    pub fn save_manual_book_truth_command(&self) {
        let pages = match parse_manual_book(&self.manual_book_text.get_untracked()) {
            Ok(pages) => pages,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };
        let Some(session) = self.start() else { return };
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let request = SaveManualBookTruthRequest {
                product_name: session.product_name,
                bom_code: session.bom_code,
                manual_book: pages,
            };
            let result = api::save_manual_book_truth(&request)
                .await
                .map(|_| "说明书已保存为标准答案".to_string());
            this.finish(result);
        });
    }

    /// Записать спецификацию в каталог сессии
    pub fn save_specsheet_to_session_command(&self) {
        let specsheet = match parse_specsheet(&self.specsheet_text.get_untracked()) {
            Ok(v) => v,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };
        let Some(session) = self.start() else { return };
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let request = ManualSpecsheetSaveRequest {
                specsheet,
                bom_code: non_empty(&session.bom_code),
            };
            let result = api::save_manual_specsheet(&session.session_id, &request)
                .await
                .map(|_| "规格表已保存到会话".to_string());
            this.finish(result);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session() -> ManualSession {
        ManualSession {
            product_name: "Alpine".to_string(),
            bom_code: "A11AA1111AAAAAAAAAAAAA".to_string(),
            bom_type: "outdoor".to_string(),
            session_id: "s1".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_generation_request_skips_blank_fields() {
        let mut session = session();
        session.bom_type = "  ".to_string();
        let request = generation_request(&session, Vec::new());
        assert_eq!(request.product_name.as_deref(), Some("Alpine"));
        assert_eq!(request.session_id.as_deref(), Some("s1"));
        assert_eq!(request.bom_type, None);
    }

    #[test]
    fn test_decoded_segments() {
        let segments = decoded_segments(&session()).unwrap();
        assert!(!segments.is_empty());
        assert!(segments.iter().all(|s| s.meaning.is_some()));

        let mut untyped = session();
        untyped.bom_type.clear();
        assert!(decoded_segments(&untyped).unwrap().is_empty());

        let mut short = session();
        short.bom_code = "A11".to_string();
        assert!(decoded_segments(&short).is_err());
    }

    #[test]
    fn test_parse_specsheet() {
        assert_eq!(parse_specsheet(r#"{"a": 1}"#), Ok(json!({"a": 1})));
        assert!(parse_specsheet("   ").is_err());
        assert!(parse_specsheet("{").is_err());
    }

    #[test]
    fn test_parse_manual_book_requires_array() {
        assert_eq!(
            parse_manual_book(r#"[{"page": 1}]"#),
            Ok(vec![json!({"page": 1})])
        );
        assert_eq!(
            parse_manual_book(r#"{"page": 1}"#),
            Err("说明书必须是页面数组".to_string())
        );
    }
}
