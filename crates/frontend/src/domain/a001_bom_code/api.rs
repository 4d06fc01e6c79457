use contracts::domain::a001_bom_code::{
    BomGenerationRequest, BomGenerationResponse, BomSaveRequest, BomSaveResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, encode_segment, handle_response, post_json, require};

/// Сохранить BOM-код вместе с расшифровкой
pub async fn save_bom_code(request: &BomSaveRequest) -> Result<BomSaveResponse, String> {
    post_json("/api/bom/save", request, "Failed to save BOM code").await
}

/// Последний код, сохранённый в рамках сессии; `None`, если его нет
pub async fn get_saved_bom_by_session(session_id: &str) -> Result<Option<BomSaveResponse>, String> {
    let session_id = require(session_id, "sessionId")?;
    let response = Request::get(&api_url(&format!(
        "/api/bom/session/{}",
        encode_segment(session_id)
    )))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    handle_response(response, "Failed to fetch saved BOM")
        .await
        .map(Some)
}

/// Подбор BOM-кода бэкендом по OCR-документам
pub async fn generate_bom_from_ocr(
    request: &BomGenerationRequest,
) -> Result<BomGenerationResponse, String> {
    post_json(
        "/api/bom/from_ocr_docs",
        request,
        "Failed to generate BOM from OCR docs",
    )
    .await
}
