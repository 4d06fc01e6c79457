use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::usecases::u001_manual_generation::OcrDocument;

use super::schema::CodeSchema;
use super::section::{CodeSection, SectionKind};

// ============================================================================
// Schema export
// ============================================================================

/// Описание секции для бэкенда (генерация BOM по OCR-документам)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomSectionDto {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digits: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BomSectionDto>>,
}

impl From<&CodeSection> for BomSectionDto {
    fn from(section: &CodeSection) -> Self {
        match &section.kind {
            SectionKind::Leaf {
                digit_width,
                options,
            } => Self {
                key: section.key.clone(),
                label: section.label.clone(),
                digits: Some(*digit_width),
                options: Some(
                    options
                        .iter()
                        .map(|(t, l)| (t.to_string(), l.to_string()))
                        .collect(),
                ),
                children: None,
            },
            SectionKind::Composite { children } => Self {
                key: section.key.clone(),
                label: section.label.clone(),
                digits: Some(section.digit_width()),
                options: None,
                children: Some(children.iter().map(BomSectionDto::from).collect()),
            },
        }
    }
}

impl CodeSchema {
    pub fn to_section_dtos(&self) -> Vec<BomSectionDto> {
        self.sections().iter().map(BomSectionDto::from).collect()
    }
}

// ============================================================================
// Segments
// ============================================================================

/// One decoded position of a BOM code, as shown to users and stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomSegment {
    pub key: String,
    pub label: String,
    pub value: String,
    /// Описание токена; `None`, если токен не выбран или не найден в таблице
    #[serde(default)]
    pub meaning: Option<String>,
    #[serde(default)]
    pub digits: Option<usize>,
    /// Обоснование (заполняется бэкендом при генерации по OCR)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

// ============================================================================
// Save / load
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomSaveRequest {
    pub code: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub bom_type: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub selections: BTreeMap<String, String>,
    #[serde(default)]
    pub segments: Vec<BomSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomSaveResponse {
    pub code: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub bom_type: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    pub saved_at: String,
    #[serde(default)]
    pub selections: BTreeMap<String, String>,
    #[serde(default)]
    pub segments: Vec<BomSegment>,
    pub path: String,
    pub absolute_path: String,
}

// ============================================================================
// Generation from OCR documents
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomGenerationRequest {
    pub bom_type: String,
    #[serde(default)]
    pub documents: Vec<OcrDocument>,
    #[serde(default)]
    pub sections: Vec<BomSectionDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomGenerationResponse {
    #[serde(rename = "type")]
    pub bom_type: String,
    #[serde(default)]
    pub selections: BTreeMap<String, String>,
    #[serde(default)]
    pub segments: Vec<BomSegment>,
}

#[cfg(test)]
mod tests {
    use super::super::registry::get_schema;
    use super::*;
    use crate::enums::BomFamily;

    #[test]
    fn test_section_dtos_mirror_schema() {
        let schema = get_schema(BomFamily::Pool);
        let dtos = schema.to_section_dtos();
        assert_eq!(dtos.len(), 19);
        assert_eq!(dtos[0].key, "poolShell");
        assert_eq!(dtos[0].digits, Some(1));
        let options = dtos[0].options.as_ref().unwrap();
        assert_eq!(options.get("N").map(String::as_str), Some("进口云彩白/无支架"));
        assert!(dtos.iter().all(|d| d.children.is_none()));
    }

    #[test]
    fn test_section_dto_keeps_declared_option_order() {
        let schema = get_schema(BomFamily::Outdoor);
        let nozzle = schema.section("nozzle").unwrap();
        let declared: Vec<&str> = nozzle.options().unwrap().tokens().collect();

        let dto = BomSectionDto::from(nozzle);
        let sent: Vec<&str> = dto.options.as_ref().unwrap().keys().map(String::as_str).collect();
        assert_eq!(sent, declared);

        let json = serde_json::to_string(&dto).unwrap();
        let positions: Vec<usize> = declared
            .iter()
            .map(|t| json.find(&format!("\"{}\":", t)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_save_request_uses_camel_case() {
        let request = BomSaveRequest {
            code: "A11AA1111AAAAAAAAAAAAA".into(),
            product_name: Some("Alpine".into()),
            bom_type: Some("outdoor".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["productName"], "Alpine");
        assert_eq!(json["bomType"], "outdoor");
        assert!(json["sessionId"].is_null());
    }

    #[test]
    fn test_generation_response_parses_type_field() {
        let json = r#"{
            "type": "iceTub",
            "selections": {"nozzle": "1A"},
            "segments": [{"key": "nozzle", "label": "喷嘴", "value": "1A", "reason": "图纸"}]
        }"#;
        let response: BomGenerationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.bom_type, "iceTub");
        assert_eq!(response.segments[0].reason.as_deref(), Some("图纸"));
        assert_eq!(response.segments[0].meaning, None);
    }
}
