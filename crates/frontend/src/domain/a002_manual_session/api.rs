use contracts::domain::a002_manual_session::{ManualSessionRecord, OcrProgress};
use contracts::usecases::u001_manual_generation::OcrDocument;
use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::shared::api_utils::{api_url, encode_segment, error_text, handle_response, require};

/// Поля формы создания сессии
pub struct NewManualSession<'a> {
    pub product_name: &'a str,
    pub bom_code: &'a str,
    pub bom_type: Option<&'a str>,
    pub product_files: &'a [File],
    pub accessory_files: &'a [File],
}

fn append_files(form: &FormData, field: &str, files: &[File]) -> Result<(), String> {
    for (index, file) in files.iter().enumerate() {
        let name = file.name();
        let filename = if name.is_empty() {
            format!("{}-{}", field, index + 1)
        } else {
            name
        };
        form.append_with_blob_and_filename(field, file, &filename)
            .map_err(|e| format!("Failed to attach {}: {:?}", filename, e))?;
    }
    Ok(())
}

fn build_form(session: &NewManualSession<'_>) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("Failed to create form: {:?}", e))?;
    let append = |key: &str, value: &str| {
        form.append_with_str(key, value)
            .map_err(|e| format!("Failed to fill form field {}: {:?}", key, e))
    };
    append("product_name", session.product_name)?;
    append("bom_code", session.bom_code)?;
    if let Some(bom_type) = session.bom_type.filter(|t| !t.is_empty()) {
        append("bom_type", bom_type)?;
    }
    append_files(&form, "product_files", session.product_files)?;
    append_files(&form, "accessory_files", session.accessory_files)?;
    Ok(form)
}

/// Создать сессию: загрузка файлов изделия и комплектующих (multipart)
pub async fn create_manual_session(
    session: NewManualSession<'_>,
) -> Result<ManualSessionRecord, String> {
    let form = build_form(&session)?;
    let response = Request::post(&api_url("/api/manual-sessions"))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    handle_response(response, "Failed to create manual session").await
}

pub async fn get_manual_session(session_id: &str) -> Result<ManualSessionRecord, String> {
    let session_id = require(session_id, "sessionId")?;
    let response = Request::get(&api_url(&format!(
        "/api/manual-sessions/{}",
        encode_segment(session_id)
    )))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 404 {
        return Err("未找到该 OCR 记录，可能已被删除".to_string());
    }
    handle_response(response, "Failed to fetch manual OCR session").await
}

/// Запустить OCR по файлам сессии; ход выполнения см. `get_manual_ocr_progress`
pub async fn run_manual_ocr_session(session_id: &str) -> Result<(), String> {
    let session_id = require(session_id, "sessionId")?;
    let response = Request::post(&api_url(&format!(
        "/api/manual-sessions/{}/ocr",
        encode_segment(session_id)
    )))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_text(response, "Failed to trigger manual OCR").await);
    }
    Ok(())
}

/// `None`, если бэкенд не знает о прогрессе сессии
pub async fn get_manual_ocr_progress(session_id: &str) -> Result<Option<OcrProgress>, String> {
    let session_id = require(session_id, "sessionId")?;
    let response = Request::get(&api_url(&format!(
        "/api/manual-sessions/{}/progress",
        encode_segment(session_id)
    )))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    handle_response(response, "Failed to fetch manual OCR progress")
        .await
        .map(Some)
}

/// Документы сессии в виде входа для генерации
pub async fn get_manual_session_inputs(session_id: &str) -> Result<Vec<OcrDocument>, String> {
    let record = get_manual_session(session_id).await?;
    Ok(record.collect_documents())
}
