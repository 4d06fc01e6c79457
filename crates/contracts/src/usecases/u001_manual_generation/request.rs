use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Плоский OCR-документ, передаваемый в генерацию (спецификация, инструкция, BOM)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Путь относительно корня бэкенда, без ведущего `/`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Free-form document kind ("document", "image", "markdown", ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Base64 без префикса `data:`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
}

/// Запрос генерации по OCR-документам
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrDocumentsRequest {
    #[serde(default)]
    pub documents: Vec<OcrDocument>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    /// ID ручной OCR-сессии; бэкенд сохраняет результат в её каталог
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bom_code: Option<String>,

    /// outdoor / pool / iceTub
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bom_type: Option<String>,
}

/// Query string of the `saved` lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedArtifactQuery {
    pub product_name: String,
    pub bom_code: String,
}

impl SavedArtifactQuery {
    /// Both parts are required by the backend
    pub fn new(product_name: &str, bom_code: &str) -> Result<Self, String> {
        if product_name.trim().is_empty() {
            return Err("Missing productName".to_string());
        }
        if bom_code.trim().is_empty() {
            return Err("Missing bomCode".to_string());
        }
        Ok(Self {
            product_name: product_name.to_string(),
            bom_code: bom_code.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveManualBookTruthRequest {
    pub product_name: String,
    pub bom_code: String,
    /// Страницы инструкции в том виде, в каком их утвердил пользователь
    #[serde(default)]
    pub manual_book: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveManualSpecsheetTruthRequest {
    pub product_name: String,
    pub bom_code: String,
    pub specsheet: Option<Value>,
}

/// Сохранение спецификации в каталог сессии
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualSpecsheetSaveRequest {
    pub specsheet: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bom_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ocr_document_type_field() {
        let doc = OcrDocument {
            name: Some("spec.png".into()),
            doc_type: Some("image".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["type"], "image");
        assert!(json.get("text").is_none());
        assert!(json.get("doc_type").is_none());
    }

    #[test]
    fn test_saved_query_requires_both_parts() {
        assert!(SavedArtifactQuery::new("", "A11AA1111AAAAAAAAAAAAA").is_err());
        assert!(SavedArtifactQuery::new("Alpine", " ").is_err());
        let query = SavedArtifactQuery::new("Alpine", "A11AA1111AAAAAAAAAAAAA").unwrap();
        assert_eq!(query.product_name, "Alpine");
    }

    #[test]
    fn test_specsheet_save_omits_missing_bom_code() {
        let request = ManualSpecsheetSaveRequest {
            specsheet: serde_json::json!({"title": "Alpine"}),
            bom_code: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"specsheet":{"title":"Alpine"}}"#);
    }
}
