use contracts::domain::a001_bom_code::{decode, decode_strict, get_schema, summarize, BomSegment};
use contracts::enums::BomFamily;
use leptos::prelude::*;

/// Первое семейство, в котором код раскладывается без нераспознанных секций
pub fn guess_family(code: &str) -> Option<BomFamily> {
    BomFamily::all()
        .into_iter()
        .find(|family| decode_strict(get_schema(*family), code).is_ok())
}

/// Расшифровка кода в выбранном семействе
pub fn describe(family: BomFamily, code: &str) -> Result<Vec<BomSegment>, String> {
    let schema = get_schema(family);
    decode(schema, code)
        .map(|selection| summarize(schema, &selection))
        .map_err(|e| e.to_string())
}

#[derive(Clone, Copy)]
pub struct BomDetailViewModel {
    pub code: RwSignal<String>,
    pub family: RwSignal<BomFamily>,
}

impl BomDetailViewModel {
    pub fn new(code: String) -> Self {
        let family = guess_family(&code).unwrap_or(BomFamily::Outdoor);
        log::debug!("BOM detail {} opened as {}", code, family);
        Self {
            code: RwSignal::new(code),
            family: RwSignal::new(family),
        }
    }

    pub fn select_family_command(&self, code: String) {
        if let Ok(family) = BomFamily::from_code(&code) {
            self.family.set(family);
        }
    }

    pub fn segments(&self) -> Result<Vec<BomSegment>, String> {
        let family = self.family.get();
        self.code.with(|code| describe(family, code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_family_prefers_strictly_decodable() {
        assert_eq!(guess_family("A11AA1111AAAAAAAAAAAAA"), Some(BomFamily::Outdoor));
        assert_eq!(guess_family("short"), None);
    }

    #[test]
    fn test_describe_reports_length_error() {
        let err = describe(BomFamily::Outdoor, "A11").unwrap_err();
        assert!(err.contains("expected 22"));
    }

    #[test]
    fn test_describe_lists_every_leaf() {
        let segments = describe(BomFamily::Outdoor, "A11AA1111AAAAAAAAAAAAA").unwrap();
        let leaves = get_schema(BomFamily::Outdoor).leaves().len();
        assert_eq!(segments.len(), leaves);
        assert!(segments.iter().all(|s| !s.value.is_empty()));
    }
}
