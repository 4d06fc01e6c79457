use contracts::usecases::u001_manual_generation::{
    ManualBookResponse, ManualSpecsheetSaveRequest, OcrDocumentsRequest,
    SaveManualBookTruthRequest, SaveManualSpecsheetTruthRequest, SavedArtifactQuery,
    SpecsheetEnvelope, SpecsheetResponse,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::api_utils::{api_url, encode_segment, handle_response, post_json, require};

/// Спецификация только по OCR-документам
pub async fn generate_specsheet_from_ocr(
    request: &OcrDocumentsRequest,
) -> Result<SpecsheetResponse, String> {
    post_json(
        "/api/specsheet/from_ocr_docs",
        request,
        "Failed to generate specsheet from OCR docs",
    )
    .await
}

/// Инструкция (manual book) только по OCR-документам
pub async fn generate_manual_book_from_ocr(
    request: &OcrDocumentsRequest,
) -> Result<ManualBookResponse, String> {
    post_json(
        "/api/manual/book/from_ocr_docs",
        request,
        "Failed to generate manual book from OCR docs",
    )
    .await
}

async fn get_saved<T: DeserializeOwned>(
    path: &str,
    query: &SavedArtifactQuery,
    context: &str,
) -> Result<Option<T>, String> {
    let query = serde_qs::to_string(query).map_err(|e| format!("Failed to build query: {}", e))?;
    let response = Request::get(&api_url(&format!("{}?{}", path, query)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    handle_response(response, context).await.map(Some)
}

pub async fn get_saved_manual_book(
    product_name: &str,
    bom_code: &str,
) -> Result<Option<ManualBookResponse>, String> {
    let query = SavedArtifactQuery::new(product_name, bom_code)?;
    get_saved(
        "/api/manual/book/saved",
        &query,
        "Failed to fetch saved manual book",
    )
    .await
}

pub async fn get_saved_manual_specsheet(
    product_name: &str,
    bom_code: &str,
) -> Result<Option<Value>, String> {
    let query = SavedArtifactQuery::new(product_name, bom_code)?;
    let envelope: Option<SpecsheetEnvelope> = get_saved(
        "/api/manual/specsheet/saved",
        &query,
        "Failed to fetch saved manual specsheet",
    )
    .await?;
    Ok(envelope.and_then(|e| e.specsheet))
}

/// Сохранить утверждённую пользователем инструкцию как эталон
pub async fn save_manual_book_truth(
    request: &SaveManualBookTruthRequest,
) -> Result<ManualBookResponse, String> {
    SavedArtifactQuery::new(&request.product_name, &request.bom_code)?;
    post_json(
        "/api/manual/book/truth",
        request,
        "Failed to save manual book truth",
    )
    .await
}

pub async fn save_manual_specsheet_truth(
    request: &SaveManualSpecsheetTruthRequest,
) -> Result<Option<Value>, String> {
    SavedArtifactQuery::new(&request.product_name, &request.bom_code)?;
    let envelope: SpecsheetEnvelope = post_json(
        "/api/manual/specsheet/truth",
        request,
        "Failed to save manual specsheet truth",
    )
    .await?;
    Ok(envelope.specsheet)
}

/// Сохранить спецификацию в каталог сессии
pub async fn save_manual_specsheet(
    session_id: &str,
    request: &ManualSpecsheetSaveRequest,
) -> Result<Option<Value>, String> {
    let session_id = require(session_id, "sessionId")?;
    let envelope: SpecsheetEnvelope = post_json(
        &format!("/api/manual/specsheet/{}", encode_segment(session_id)),
        request,
        "Failed to save manual specsheet",
    )
    .await?;
    Ok(envelope.specsheet)
}
