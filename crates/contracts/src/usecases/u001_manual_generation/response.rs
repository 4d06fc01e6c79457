use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Фрагмент контекста, использованный при генерации спецификации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkInfo {
    pub text: String,
    pub source_path: String,
    #[serde(default)]
    pub similarity: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecsheetResponse {
    #[serde(default)]
    pub specsheet: Option<Value>,
    #[serde(default)]
    pub chunks: Vec<ChunkInfo>,
    #[serde(default)]
    pub prompt_text: Option<String>,
    #[serde(default)]
    pub system_prompt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManualBookResponse {
    /// Страницы инструкции (бэкенд возвращает 13 страниц)
    #[serde(default)]
    pub manual_book: Option<Vec<Value>>,
    #[serde(default)]
    pub prompt_text: Option<String>,
    #[serde(default)]
    pub system_prompt: Option<String>,
}

/// `{ "specsheet": ... }` as returned by the saved/truth/session endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecsheetEnvelope {
    #[serde(default)]
    pub specsheet: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specsheet_response_tolerates_nulls() {
        let json = r#"{"specsheet": null, "chunks": [{"text": "t", "source_path": "a.md", "similarity": 0.9}], "prompt_text": null}"#;
        let response: SpecsheetResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.specsheet, None);
        assert_eq!(response.chunks.len(), 1);
        assert_eq!(response.prompt_text, None);
        assert_eq!(response.system_prompt, None);
    }

    #[test]
    fn test_manual_book_response_pages() {
        let json = r#"{"manual_book": [{"header": "Cover"}, {"header": "Specification"}]}"#;
        let response: ManualBookResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.manual_book.map(|pages| pages.len()), Some(2));
    }
}
