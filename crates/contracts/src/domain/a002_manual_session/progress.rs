use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrStatus {
    #[default]
    Active,
    Success,
    Exception,
}

/// Прогресс OCR по сессии (опрашивается фронтендом)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrProgress {
    pub session_id: String,
    pub product_name: String,
    /// Этап для отображения, например "等待开始"
    pub stage: String,
    pub detail: String,
    pub percent: u32,
    pub status: OcrStatus,
    pub current_file: Option<String>,
    pub current_page: Option<u32>,
    pub processed_files: u32,
    pub total_files: u32,
    pub ocr_completed: u32,
    pub ocr_total: u32,
    pub result: Option<Value>,
    pub error: Option<String>,
    /// Unix time in seconds
    pub updated_at: f64,
}

impl OcrProgress {
    pub fn is_finished(&self) -> bool {
        self.status != OcrStatus::Active
    }

    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis((self.updated_at * 1000.0) as i64)
    }

    /// "3/10" для индикатора страниц; `None`, пока число страниц неизвестно
    pub fn pages_label(&self) -> Option<String> {
        (self.ocr_total > 0).then(|| format!("{}/{}", self.ocr_completed, self.ocr_total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_from_backend_state() {
        let json = r#"{
            "session_id": "s1", "product_name": "Alpine", "stage": "完成",
            "detail": "OCR 已完成", "percent": 100, "status": "success",
            "current_file": null, "current_page": null, "processed_files": 2,
            "total_files": 2, "ocr_completed": 7, "ocr_total": 7, "result": null,
            "updated_at": 1735718400.5
        }"#;
        let progress: OcrProgress = serde_json::from_str(json).unwrap();
        assert!(progress.is_finished());
        assert_eq!(progress.pages_label().as_deref(), Some("7/7"));
        assert_eq!(
            progress.updated_at_utc().map(|t| t.timestamp_millis()),
            Some(1735718400500)
        );
    }

    #[test]
    fn test_active_progress_without_pages() {
        let progress: OcrProgress =
            serde_json::from_str(r#"{"session_id": "s1", "status": "active"}"#).unwrap();
        assert!(!progress.is_finished());
        assert_eq!(progress.pages_label(), None);
    }
}
