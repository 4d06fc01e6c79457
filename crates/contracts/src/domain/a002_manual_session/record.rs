use serde::{Deserialize, Serialize};

use crate::usecases::u001_manual_generation::OcrDocument;

const FILES_API_PREFIX: &str = "/api/files/";

// ============================================================================
// Files
// ============================================================================

/// Файл сессии: загруженный пользователем или сохранённый бэкендом
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// MIME type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,

    #[serde(default, alias = "relative_path", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "lastModified", default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<i64>,

    /// Object URL created in the browser for local previews
    #[serde(rename = "previewUrl", default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

impl ManualFile {
    /// Превью-URL, если он действительно задан (бэкенд отдаёт пустую строку)
    pub fn preview(&self) -> Option<&str> {
        self.preview_url.as_deref().filter(|url| !url.is_empty())
    }

    fn to_document(&self) -> OcrDocument {
        OcrDocument {
            name: Some(self.name.clone()),
            path: Some(storage_path(self.path.as_deref(), self.url.as_deref())),
            doc_type: Some(
                self.mime
                    .clone()
                    .unwrap_or_else(|| "document".to_string()),
            ),
            mime_type: self.mime.clone(),
            ..Default::default()
        }
    }
}

// ============================================================================
// OCR groups
// ============================================================================

/// Результаты OCR одного исходного файла, по страницам
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrGroup {
    #[serde(default)]
    pub source_name: String,
    #[serde(default)]
    pub source_size: u64,
    #[serde(default)]
    pub source_mime: Option<String>,
    #[serde(default)]
    pub pages: Vec<OcrPage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrPage {
    #[serde(default)]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub image_stem: String,
    #[serde(default)]
    pub artifacts: Vec<OcrArtifact>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrArtifact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(rename = "type", default)]
    pub mime: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
    /// image / markdown / diagram / file
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub parent_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl OcrArtifact {
    fn to_document(&self) -> OcrDocument {
        OcrDocument {
            name: Some(self.name.clone()),
            path: Some(storage_path(self.path.as_deref(), self.url.as_deref())),
            doc_type: Some(
                self.kind
                    .clone()
                    .unwrap_or_else(|| "document".to_string()),
            ),
            summary: self.caption.clone(),
            mime_type: self.mime.clone().or_else(|| self.kind.clone()),
            ..Default::default()
        }
    }
}

// ============================================================================
// Session record
// ============================================================================

/// Ручная OCR-сессия в том виде, в каком её хранит бэкенд
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualSessionRecord {
    pub session_id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub bom_code: Option<String>,
    #[serde(default)]
    pub bom_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub product_files: Vec<ManualFile>,
    #[serde(default)]
    pub accessory_files: Vec<ManualFile>,
    #[serde(default)]
    pub product_ocr_groups: Vec<OcrGroup>,
    #[serde(default)]
    pub accessory_ocr_groups: Vec<OcrGroup>,
}

impl ManualSessionRecord {
    /// Flatten the session into the document list the generation endpoints take:
    /// uploaded product files, accessory files, then every OCR artifact page by page.
    pub fn collect_documents(&self) -> Vec<OcrDocument> {
        let files = self
            .product_files
            .iter()
            .chain(&self.accessory_files)
            .map(ManualFile::to_document);

        let artifacts = self
            .product_ocr_groups
            .iter()
            .chain(&self.accessory_ocr_groups)
            .flat_map(|group| &group.pages)
            .flat_map(|page| &page.artifacts)
            .map(OcrArtifact::to_document);

        files.chain(artifacts).collect()
    }
}

/// Путь файла относительно бэкенда: явный `path` или URL без `/api/files/`
fn storage_path(path: Option<&str>, url: Option<&str>) -> String {
    let raw = match path.filter(|p| !p.is_empty()) {
        Some(path) => path,
        None => url
            .map(|u| u.strip_prefix(FILES_API_PREFIX).unwrap_or(u))
            .unwrap_or(""),
    };
    raw.trim_start_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "session_id": "alpine-20250101",
        "product_name": "Alpine",
        "bom_code": "A11AA1111AAAAAAAAAAAAA",
        "bom_type": "outdoor",
        "created_at": "2025-01-01T08:00:00",
        "status": "pending",
        "product_files": [
            {"id": "f1", "name": "spec.pdf", "size": 10, "type": "application/pdf",
             "path": "manual_ocr_results/alpine/products/spec.pdf",
             "url": "/api/files/manual_ocr_results/alpine/products/spec.pdf",
             "lastModified": 1735718400000, "previewUrl": ""}
        ],
        "accessory_files": [
            {"name": "pump.png", "url": "/api/files/manual_ocr_results/alpine/accessories/pump.png"}
        ],
        "product_upload_count": 1,
        "product_ocr_groups": [
            {"source_name": "spec.pdf", "source_size": 10, "source_mime": "application/pdf",
             "pages": [{"page_number": 1, "image_stem": "spec__page001", "artifacts": [
                 {"name": "result.md", "path": "/ocr/spec__page001/result.md", "type": "text/markdown", "kind": "markdown", "caption": "第一页"},
                 {"name": "crop.png", "url": "/api/files/ocr/spec__page001/crop.png", "kind": "image"}
             ]}]}
        ]
    }"#;

    #[test]
    fn test_record_parses_backend_payload() {
        let record: ManualSessionRecord = serde_json::from_str(RECORD).unwrap();
        assert_eq!(record.session_id, "alpine-20250101");
        assert_eq!(record.product_files[0].last_modified, Some(1735718400000));
        assert_eq!(record.product_files[0].preview(), None);
        assert!(record.accessory_ocr_groups.is_empty());
    }

    #[test]
    fn test_collect_documents_order_and_paths() {
        let record: ManualSessionRecord = serde_json::from_str(RECORD).unwrap();
        let docs = record.collect_documents();
        assert_eq!(docs.len(), 4);

        assert_eq!(docs[0].name.as_deref(), Some("spec.pdf"));
        assert_eq!(docs[0].doc_type.as_deref(), Some("application/pdf"));

        // accessory file has no explicit path
        assert_eq!(
            docs[1].path.as_deref(),
            Some("manual_ocr_results/alpine/accessories/pump.png")
        );
        assert_eq!(docs[1].doc_type.as_deref(), Some("document"));

        assert_eq!(docs[2].path.as_deref(), Some("ocr/spec__page001/result.md"));
        assert_eq!(docs[2].summary.as_deref(), Some("第一页"));
        assert_eq!(docs[2].mime_type.as_deref(), Some("text/markdown"));

        assert_eq!(docs[3].path.as_deref(), Some("ocr/spec__page001/crop.png"));
        assert_eq!(docs[3].mime_type.as_deref(), Some("image"));
    }
}
