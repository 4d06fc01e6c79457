use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_bom_code::{decode, get_schema, BomCodeError, Selection};
use crate::enums::BomFamily;

use super::progress::OcrProgress;
use super::record::{ManualFile, ManualSessionRecord, OcrGroup};

/// Данные для полной замены состояния сессии
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManualSessionData {
    pub product_name: String,
    pub bom_code: String,
    pub bom_type: String,
    pub product_files: Vec<ManualFile>,
    pub accessory_files: Vec<ManualFile>,
    pub product_ocr_files: Vec<ManualFile>,
    pub accessory_ocr_files: Vec<ManualFile>,
    pub product_ocr_groups: Vec<OcrGroup>,
    pub accessory_ocr_groups: Vec<OcrGroup>,
    pub session_id: String,
    pub ocr_progress: Option<OcrProgress>,
}

impl From<ManualSessionRecord> for ManualSessionData {
    fn from(record: ManualSessionRecord) -> Self {
        Self {
            product_name: record.product_name,
            bom_code: record.bom_code.unwrap_or_default(),
            bom_type: record.bom_type.unwrap_or_default(),
            product_files: record.product_files,
            accessory_files: record.accessory_files,
            product_ocr_groups: record.product_ocr_groups,
            accessory_ocr_groups: record.accessory_ocr_groups,
            session_id: record.session_id,
            ..Default::default()
        }
    }
}

/// Результаты OCR: заменяют только OCR-часть состояния
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OcrResults {
    pub product_ocr_files: Vec<ManualFile>,
    pub accessory_ocr_files: Vec<ManualFile>,
    pub product_ocr_groups: Vec<OcrGroup>,
    pub accessory_ocr_groups: Vec<OcrGroup>,
}

/// Client-side state of the manual generation workflow, carried across
/// upload → OCR → generation → review.
///
/// Mutators return the preview URLs that are no longer referenced so the
/// browser layer can revoke them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManualSession {
    pub product_name: String,
    pub bom_code: String,
    pub bom_type: String,
    pub created_at: Option<DateTime<Utc>>,
    pub product_files: Vec<ManualFile>,
    pub accessory_files: Vec<ManualFile>,
    pub product_ocr_files: Vec<ManualFile>,
    pub accessory_ocr_files: Vec<ManualFile>,
    pub product_ocr_groups: Vec<OcrGroup>,
    pub accessory_ocr_groups: Vec<OcrGroup>,
    pub session_id: String,
    pub ocr_progress: Option<OcrProgress>,
}

impl ManualSession {
    /// Overwrite the whole state and stamp `created_at`
    pub fn replace(&mut self, data: ManualSessionData, now: DateTime<Utc>) -> Vec<String> {
        let before = preview_urls(self.all_files());

        self.product_name = data.product_name;
        self.bom_code = data.bom_code;
        self.bom_type = data.bom_type;
        self.product_files = data.product_files;
        self.accessory_files = data.accessory_files;
        self.product_ocr_files = data.product_ocr_files;
        self.accessory_ocr_files = data.accessory_ocr_files;
        self.product_ocr_groups = data.product_ocr_groups;
        self.accessory_ocr_groups = data.accessory_ocr_groups;
        self.session_id = data.session_id;
        self.ocr_progress = data.ocr_progress;
        self.created_at = Some(now);

        released(before, preview_urls(self.all_files()))
    }

    pub fn clear(&mut self, now: DateTime<Utc>) -> Vec<String> {
        self.replace(ManualSessionData::default(), now)
    }

    pub fn set_ocr_results(&mut self, results: OcrResults) -> Vec<String> {
        let before = preview_urls(self.ocr_files());

        self.product_ocr_files = results.product_ocr_files;
        self.accessory_ocr_files = results.accessory_ocr_files;
        self.product_ocr_groups = results.product_ocr_groups;
        self.accessory_ocr_groups = results.accessory_ocr_groups;

        released(before, preview_urls(self.all_files()))
    }

    pub fn set_session_id(&mut self, session_id: impl Into<String>) {
        self.session_id = session_id.into();
    }

    pub fn set_ocr_progress(&mut self, progress: Option<OcrProgress>) {
        self.ocr_progress = progress;
    }

    /// Семейство BOM из `bom_type`; `None`, если тип не задан
    pub fn family(&self) -> Result<Option<BomFamily>, BomCodeError> {
        let bom_type = self.bom_type.trim();
        if bom_type.is_empty() {
            return Ok(None);
        }
        BomFamily::from_code(bom_type).map(Some)
    }

    /// Tolerant decode of `bom_code` against the session's family.
    ///
    /// `Ok(None)` when either the family or the code is missing.
    pub fn decoded_selection(&self) -> Result<Option<Selection>, BomCodeError> {
        let code = self.bom_code.trim();
        match self.family()? {
            Some(family) if !code.is_empty() => decode(get_schema(family), code).map(Some),
            _ => Ok(None),
        }
    }

    fn all_files(&self) -> impl Iterator<Item = &ManualFile> {
        self.product_files
            .iter()
            .chain(&self.accessory_files)
            .chain(self.ocr_files())
    }

    fn ocr_files(&self) -> impl Iterator<Item = &ManualFile> {
        self.product_ocr_files.iter().chain(&self.accessory_ocr_files)
    }
}

fn preview_urls<'a>(files: impl Iterator<Item = &'a ManualFile>) -> Vec<String> {
    files
        .filter_map(ManualFile::preview)
        .map(str::to_string)
        .collect()
}

/// URLs from `before` that are not kept in `after`, without duplicates
fn released(before: Vec<String>, after: Vec<String>) -> Vec<String> {
    let kept: HashSet<String> = after.into_iter().collect();
    let mut seen = HashSet::new();
    before
        .into_iter()
        .filter(|url| !kept.contains(url) && seen.insert(url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::domain::a001_bom_code::SectionValue;

    fn file(name: &str, preview: &str) -> ManualFile {
        ManualFile {
            name: name.to_string(),
            preview_url: Some(preview.to_string()),
            ..Default::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_replace_releases_previous_previews() {
        let mut session = ManualSession::default();
        let released = session.replace(
            ManualSessionData {
                product_name: "Alpine".into(),
                product_files: vec![file("a.pdf", "blob:a"), file("b.pdf", "")],
                accessory_files: vec![file("c.png", "blob:c")],
                ..Default::default()
            },
            now(),
        );
        assert!(released.is_empty());
        assert_eq!(session.created_at, Some(now()));

        // blob:c survives into the new state and must not be revoked
        let released = session.replace(
            ManualSessionData {
                accessory_files: vec![file("c.png", "blob:c")],
                ..Default::default()
            },
            now(),
        );
        assert_eq!(released, vec!["blob:a".to_string()]);
        assert_eq!(session.product_name, "");
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut session = ManualSession::default();
        session.replace(
            ManualSessionData {
                product_files: vec![file("a.pdf", "blob:a")],
                product_ocr_files: vec![file("p1.png", "blob:p1")],
                session_id: "s1".into(),
                ..Default::default()
            },
            now(),
        );
        let mut released = session.clear(now());
        released.sort();
        assert_eq!(released, vec!["blob:a".to_string(), "blob:p1".to_string()]);
        assert_eq!(session.session_id, "");
    }

    #[test]
    fn test_set_ocr_results_keeps_uploads() {
        let mut session = ManualSession::default();
        session.replace(
            ManualSessionData {
                product_files: vec![file("a.pdf", "blob:a")],
                accessory_ocr_files: vec![file("x.png", "blob:x")],
                ..Default::default()
            },
            now(),
        );
        let released = session.set_ocr_results(OcrResults {
            product_ocr_files: vec![file("p1.png", "blob:p1")],
            ..Default::default()
        });
        assert_eq!(released, vec!["blob:x".to_string()]);
        assert_eq!(session.product_files.len(), 1);
        assert_eq!(session.product_ocr_files[0].name, "p1.png");
    }

    #[test]
    fn test_family_and_decoded_selection() {
        let mut session = ManualSession::default();
        assert_eq!(session.family(), Ok(None));
        assert_eq!(session.decoded_selection(), Ok(None));

        session.bom_type = "outdoor".into();
        session.bom_code = "A1ZZA1111AAAAAAAAAAAAA".into();
        assert_eq!(session.family(), Ok(Some(BomFamily::Outdoor)));
        let selection = session.decoded_selection().unwrap().unwrap();
        assert_eq!(
            selection.get("nozzle"),
            Some(&SectionValue::Unresolved("ZZ".into()))
        );

        session.bom_code = "A1".into();
        assert!(matches!(
            session.decoded_selection(),
            Err(BomCodeError::LengthMismatch { .. })
        ));

        session.bom_type = "spa".into();
        assert_eq!(
            session.family(),
            Err(BomCodeError::UnknownFamily("spa".into()))
        );
    }

    #[test]
    fn test_data_from_record() {
        let record = ManualSessionRecord {
            session_id: "s1".into(),
            product_name: "Alpine".into(),
            bom_code: Some("A11AA1111AAAAAAAAAAAAA".into()),
            bom_type: None,
            ..Default::default()
        };
        let data = ManualSessionData::from(record);
        assert_eq!(data.session_id, "s1");
        assert_eq!(data.bom_type, "");
        assert_eq!(data.bom_code, "A11AA1111AAAAAAAAAAAAA");
    }
}
