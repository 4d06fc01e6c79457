use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::BomFamily;

use super::codec::create_default_selection;
use super::error::BomCodeError;
use super::schema::CodeSchema;

/// Значение одной секции в выборе пользователя
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "token", rename_all = "camelCase")]
pub enum SectionValue {
    Unselected,
    /// Token picked in the configurator (or decoded from a known code)
    Chosen(String),
    /// Well-formed token that is missing from the option table.
    /// Produced only by tolerant decode; re-encoded verbatim.
    Unresolved(String),
}

impl SectionValue {
    /// Сырой токен; пустая строка для невыбранной секции
    pub fn token(&self) -> &str {
        match self {
            SectionValue::Unselected => "",
            SectionValue::Chosen(token) | SectionValue::Unresolved(token) => token,
        }
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, SectionValue::Unselected)
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, SectionValue::Unresolved(_))
    }
}

/// Section key → chosen value for one family.
///
/// Always holds exactly one entry per leaf section of the schema it was
/// created from. Travels as a token map; rebuild with `from_token_map`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    family: BomFamily,
    entries: BTreeMap<String, SectionValue>,
}

impl Selection {
    pub(crate) fn new(family: BomFamily, entries: BTreeMap<String, SectionValue>) -> Self {
        Self { family, entries }
    }

    pub fn family(&self) -> BomFamily {
        self.family
    }

    pub fn get(&self, key: &str) -> Option<&SectionValue> {
        self.entries.get(key)
    }

    /// Сырой токен секции (пустая строка, если не выбрано)
    pub fn token(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(SectionValue::token)
    }

    /// Set one section; an empty token resets it to `Unselected`
    pub fn set(&mut self, key: &str, token: impl Into<String>) -> Result<(), BomCodeError> {
        let token = token.into();
        let slot = self
            .entries
            .get_mut(key)
            .ok_or_else(|| BomCodeError::UnknownSection {
                key: key.to_string(),
            })?;
        *slot = if token.is_empty() {
            SectionValue::Unselected
        } else {
            SectionValue::Chosen(token)
        };
        Ok(())
    }

    pub(crate) fn put(&mut self, key: &str, value: SectionValue) {
        if let Some(slot) = self.entries.get_mut(key) {
            *slot = value;
        }
    }

    pub fn clear(&mut self, key: &str) -> Result<(), BomCodeError> {
        self.set(key, String::new())
    }

    /// Сбросить все секции
    pub fn reset(&mut self) {
        for value in self.entries.values_mut() {
            *value = SectionValue::Unselected;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.entries.values().all(SectionValue::is_selected)
    }

    /// Keys of sections that hold a token missing from the option tables
    pub fn unresolved_keys(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, v)| v.is_unresolved())
            .map(|(k, _)| k.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SectionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Плоская карта key → token в формате бэкенда (`selections`)
    pub fn to_token_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.token().to_string()))
            .collect()
    }

    /// Build a selection from a backend `selections` map.
    ///
    /// Starts from a blank selection; keys unknown to the schema are dropped.
    /// Tokens are taken as chosen without lookup, so `encode` still reports
    /// stale ones as `InvalidToken`.
    pub fn from_token_map<'a, I>(schema: &CodeSchema, map: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut selection = create_default_selection(schema);
        for (key, token) in map {
            if selection.set(key, token.clone()).is_err() {
                log::warn!(
                    "ignoring selection key '{}' unknown to the {} schema",
                    key,
                    schema.family()
                );
            }
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::super::registry::get_schema;
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let schema = get_schema(BomFamily::Outdoor);
        let mut selection = create_default_selection(schema);

        selection.set("nozzle", "1A").unwrap();
        assert_eq!(selection.get("nozzle"), Some(&SectionValue::Chosen("1A".into())));
        assert_eq!(selection.token("nozzle"), Some("1A"));

        selection.clear("nozzle").unwrap();
        assert_eq!(selection.get("nozzle"), Some(&SectionValue::Unselected));
        assert_eq!(selection.token("nozzle"), Some(""));
    }

    #[test]
    fn test_set_unknown_key() {
        let schema = get_schema(BomFamily::IceTub);
        let mut selection = create_default_selection(schema);
        // ice tubs have no glass window section
        let err = selection.set("glassWindow", "A").unwrap_err();
        assert_eq!(
            err,
            BomCodeError::UnknownSection {
                key: "glassWindow".into()
            }
        );
        assert_eq!(selection.len(), 18);
    }

    #[test]
    fn test_token_map_round_trip() {
        let schema = get_schema(BomFamily::Pool);
        let mut selection = create_default_selection(schema);
        selection.set("poolShell", "A").unwrap();
        selection.set("glassWindow", "0").unwrap();

        let map = selection.to_token_map();
        assert_eq!(map.len(), 19);
        assert_eq!(map.get("poolShell").map(String::as_str), Some("A"));
        assert_eq!(map.get("nozzle").map(String::as_str), Some(""));

        let rebuilt = Selection::from_token_map(schema, &map);
        assert_eq!(rebuilt, selection);
    }

    #[test]
    fn test_from_token_map_drops_unknown_keys() {
        let schema = get_schema(BomFamily::Outdoor);
        let mut map = BTreeMap::new();
        map.insert("shellColor".to_string(), "A".to_string());
        map.insert("skirt".to_string(), "S".to_string());

        let selection = Selection::from_token_map(schema, &map);
        assert_eq!(selection.len(), 18);
        assert!(selection.get("shellColor").is_none());
        assert_eq!(selection.token("skirt"), Some("S"));
    }

    #[test]
    fn test_partial_wire_map_rebuilds_every_leaf() {
        let schema = get_schema(BomFamily::Outdoor);
        let map: BTreeMap<String, String> =
            serde_json::from_str(r#"{"nozzle": "1A", "legacyField": "X"}"#).unwrap();

        let selection = Selection::from_token_map(schema, &map);
        assert_eq!(selection.len(), schema.leaves().len());
        assert_eq!(selection.token("nozzle"), Some("1A"));
        assert_eq!(selection.get("colorHole"), Some(&SectionValue::Unselected));
    }

    #[test]
    fn test_reset_and_completeness() {
        let schema = get_schema(BomFamily::IceTub);
        let mut selection = create_default_selection(schema);
        assert!(!selection.is_complete());
        for section in schema.leaves() {
            let token = section.options().unwrap().tokens().next().unwrap().to_string();
            selection.set(&section.key, token).unwrap();
        }
        assert!(selection.is_complete());
        selection.reset();
        assert!(selection.iter().all(|(_, v)| !v.is_selected()));
    }
}
