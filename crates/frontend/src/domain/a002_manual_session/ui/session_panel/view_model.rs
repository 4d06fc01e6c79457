use contracts::domain::a002_manual_session::{
    ManualFile, ManualSessionData, ManualSessionRecord, OcrGroup, OcrResults, OcrStatus,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use super::super::super::api::{self, NewManualSession};
use super::super::super::store::ManualStore;

// Ключ localStorage с последней открытой сессией
const SESSION_KEY: &str = "manual_session_id";
const POLL_INTERVAL_MS: u32 = 2000;
// ~20 минут
const MAX_POLLS: u32 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileSlot {
    Product,
    Accessory,
}

/// OCR-результаты из записи сессии: изображения страниц становятся файлами превью
pub fn ocr_results(record: &ManualSessionRecord) -> OcrResults {
    let images = |groups: &[OcrGroup]| {
        groups
            .iter()
            .flat_map(|g| &g.pages)
            .flat_map(|p| &p.artifacts)
            .filter(|a| a.kind.as_deref() == Some("image"))
            .map(|a| ManualFile {
                name: a.name.clone(),
                size: a.size,
                mime: a.mime.clone(),
                path: a.path.clone(),
                url: a.url.clone(),
                ..Default::default()
            })
            .collect::<Vec<_>>()
    };

    OcrResults {
        product_ocr_files: images(&record.product_ocr_groups),
        accessory_ocr_files: images(&record.accessory_ocr_groups),
        product_ocr_groups: record.product_ocr_groups.clone(),
        accessory_ocr_groups: record.accessory_ocr_groups.clone(),
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn remember_session(id: &str) {
    if let Some(s) = storage() {
        let _ = s.set_item(SESSION_KEY, id);
    }
}

fn remembered_session() -> Option<String> {
    storage()
        .and_then(|s| s.get_item(SESSION_KEY).ok().flatten())
        .filter(|id| !id.is_empty())
}

fn local_preview(file: &File) -> ManualFile {
    let preview_url = match web_sys::Url::create_object_url_with_blob(file) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("createObjectURL failed for {}: {:?}", file.name(), e);
            None
        }
    };
    ManualFile {
        name: file.name(),
        size: Some(file.size() as u64),
        mime: Some(file.type_()).filter(|t| !t.is_empty()),
        last_modified: Some(file.last_modified() as i64),
        preview_url,
        ..Default::default()
    }
}

/// Загрузка файлов, запуск OCR и опрос прогресса
#[derive(Clone, Copy)]
pub struct SessionPanelViewModel {
    pub product_name: RwSignal<String>,
    pub bom_code: RwSignal<String>,
    pub bom_type: RwSignal<String>,
    /// ID для открытия существующей сессии
    pub session_input: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub busy: RwSignal<bool>,
    pub polling: RwSignal<bool>,
    product_files: StoredValue<Vec<File>, LocalStorage>,
    accessory_files: StoredValue<Vec<File>, LocalStorage>,
    pub store: ManualStore,
}

impl SessionPanelViewModel {
    pub fn new(store: ManualStore) -> Self {
        let (product_name, bom_code, bom_type) = store.state.with_untracked(|s| {
            (s.product_name.clone(), s.bom_code.clone(), s.bom_type.clone())
        });
        Self {
            product_name: RwSignal::new(product_name),
            bom_code: RwSignal::new(bom_code),
            bom_type: RwSignal::new(bom_type),
            session_input: RwSignal::new(remembered_session().unwrap_or_default()),
            error: RwSignal::new(None),
            busy: RwSignal::new(false),
            polling: RwSignal::new(false),
            product_files: StoredValue::new_local(Vec::new()),
            accessory_files: StoredValue::new_local(Vec::new()),
            store,
        }
    }

    pub fn session_id(&self) -> String {
        self.store.state.with(|s| s.session_id.clone())
    }

    /// Новые файлы начинают черновик новой сессии
    pub fn files_selected_command(&self, slot: FileSlot, ev: &leptos::ev::Event) {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let files: Vec<File> = match input.files() {
            Some(list) => (0..list.length()).filter_map(|i| list.get(i)).collect(),
            None => Vec::new(),
        };
        let previews: Vec<ManualFile> = files.iter().map(local_preview).collect();

        let mut data = self.store.state.with_untracked(|s| ManualSessionData {
            product_files: s.product_files.clone(),
            accessory_files: s.accessory_files.clone(),
            ..Default::default()
        });
        data.product_name = self.product_name.get_untracked();
        data.bom_code = self.bom_code.get_untracked();
        data.bom_type = self.bom_type.get_untracked();
        match slot {
            FileSlot::Product => {
                self.product_files.set_value(files);
                data.product_files = previews;
            }
            FileSlot::Accessory => {
                self.accessory_files.set_value(files);
                data.accessory_files = previews;
            }
        }
        self.store.set_data(data);
    }

    fn validate(&self) -> Result<(), String> {
        if self.product_name.get_untracked().trim().is_empty() {
            return Err("请填写产品名称".to_string());
        }
        if self.product_files.with_value(Vec::is_empty) {
            return Err("请至少选择一个产品文件".to_string());
        }
        Ok(())
    }

    pub fn create_session_command(&self) {
        self.error.set(None);
        if let Err(e) = self.validate() {
            self.error.set(Some(e));
            return;
        }

        let this = *self;
        let product_name = self.product_name.get_untracked();
        let bom_code = self.bom_code.get_untracked();
        let bom_type = self.bom_type.get_untracked();
        let product_files = self.product_files.get_value();
        let accessory_files = self.accessory_files.get_value();

        this.busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let request = NewManualSession {
                product_name: &product_name,
                bom_code: &bom_code,
                bom_type: Some(bom_type.as_str()),
                product_files: &product_files,
                accessory_files: &accessory_files,
            };
            match api::create_manual_session(request).await {
                Ok(record) => {
                    log::info!("manual session {} created", record.session_id);
                    remember_session(&record.session_id);
                    this.session_input.set(record.session_id.clone());
                    this.store.set_data(record.into());
                }
                Err(e) => this.error.set(Some(e)),
            }
            this.busy.set(false);
        });
    }

    /// Открыть сохранённую сессию по ID
    pub fn load_session_command(&self) {
        self.error.set(None);
        let session_id = self.session_input.get_untracked().trim().to_string();
        let this = *self;
        this.busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::get_manual_session(&session_id).await {
                Ok(record) => {
                    remember_session(&record.session_id);
                    let results = ocr_results(&record);
                    this.product_name.set(record.product_name.clone());
                    this.bom_code.set(record.bom_code.clone().unwrap_or_default());
                    this.bom_type.set(record.bom_type.clone().unwrap_or_default());
                    this.store.set_data(record.into());
                    this.store.set_ocr_results(results);
                    match api::get_manual_ocr_progress(&session_id).await {
                        Ok(progress) => this.store.set_ocr_progress(progress),
                        Err(e) => log::warn!("progress of {} unavailable: {}", session_id, e),
                    }
                }
                Err(e) => this.error.set(Some(e)),
            }
            this.busy.set(false);
        });
    }

    /// Запустить OCR и опрашивать прогресс до завершения
    pub fn run_ocr_command(&self) {
        self.error.set(None);
        let session_id = self.session_id();
        if session_id.is_empty() {
            self.error.set(Some("请先上传文件创建会话".to_string()));
            return;
        }

        let this = *self;
        this.polling.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = api::run_manual_ocr_session(&session_id).await {
                this.error.set(Some(e));
                this.polling.set(false);
                return;
            }

            let mut polls = 0;
            let status = loop {
                TimeoutFuture::new(POLL_INTERVAL_MS).await;
                polls += 1;
                match api::get_manual_ocr_progress(&session_id).await {
                    Ok(Some(progress)) => {
                        let status = progress.status;
                        let error = progress.error.clone();
                        this.store.set_ocr_progress(Some(progress));
                        if status != OcrStatus::Active {
                            if let Some(e) = error {
                                this.error.set(Some(e));
                            }
                            break Some(status);
                        }
                    }
                    // ещё не зарегистрирован на бэкенде
                    Ok(None) => {}
                    Err(e) => {
                        this.error.set(Some(format!("获取 OCR 进度失败: {}", e)));
                        break None;
                    }
                }
                if polls >= MAX_POLLS {
                    this.error.set(Some("OCR 超时，请稍后刷新会话".to_string()));
                    break None;
                }
            };

            if status == Some(OcrStatus::Success) {
                match api::get_manual_session(&session_id).await {
                    Ok(record) => this.store.set_ocr_results(ocr_results(&record)),
                    Err(e) => this.error.set(Some(e)),
                }
            }
            this.polling.set(false);
        });
    }

    pub fn clear_command(&self) {
        self.product_files.set_value(Vec::new());
        self.accessory_files.set_value(Vec::new());
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ocr_results_keep_only_page_images() {
        let record: ManualSessionRecord = serde_json::from_str(
            r#"{
                "session_id": "s1",
                "product_ocr_groups": [{
                    "source_name": "spec.pdf",
                    "pages": [{
                        "page_number": 1,
                        "image_stem": "spec_p1",
                        "artifacts": [
                            {"name": "spec_p1.png", "kind": "image", "url": "/api/files/s1/spec_p1.png"},
                            {"name": "spec_p1.md", "kind": "markdown"}
                        ]
                    }]
                }]
            }"#,
        )
        .unwrap();

        let results = ocr_results(&record);
        assert_eq!(results.product_ocr_files.len(), 1);
        assert_eq!(results.product_ocr_files[0].name, "spec_p1.png");
        assert!(results.accessory_ocr_files.is_empty());
        assert_eq!(results.product_ocr_groups.len(), 1);
    }
}
