use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::a001_bom_code::BomCodeError;

/// Семейства продукции, для которых определена схема BOM-кода
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BomFamily {
    #[serde(rename = "outdoor")]
    Outdoor,
    #[serde(rename = "pool")]
    Pool,
    #[serde(rename = "iceTub")]
    IceTub,
}

impl BomFamily {
    /// Идентификатор семейства, который передаётся бэкенду вместе с кодом
    pub fn code(&self) -> &'static str {
        match self {
            BomFamily::Outdoor => "outdoor",
            BomFamily::Pool => "pool",
            BomFamily::IceTub => "iceTub",
        }
    }

    /// Человекочитаемое название (для выпадающего списка)
    pub fn display_name(&self) -> &'static str {
        match self {
            BomFamily::Outdoor => "户外缸",
            BomFamily::Pool => "泳池",
            BomFamily::IceTub => "冰水缸",
        }
    }

    /// Документированная длина BOM-кода семейства
    pub fn code_width(&self) -> usize {
        match self {
            BomFamily::Outdoor | BomFamily::Pool | BomFamily::IceTub => 22,
        }
    }

    /// Все семейства в порядке отображения
    pub fn all() -> Vec<BomFamily> {
        vec![BomFamily::Outdoor, BomFamily::Pool, BomFamily::IceTub]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Result<Self, BomCodeError> {
        match code {
            "outdoor" => Ok(BomFamily::Outdoor),
            "pool" => Ok(BomFamily::Pool),
            "iceTub" => Ok(BomFamily::IceTub),
            other => Err(BomCodeError::UnknownFamily(other.to_string())),
        }
    }
}

impl fmt::Display for BomFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for BomFamily {
    type Err = BomCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for family in BomFamily::all() {
            assert_eq!(BomFamily::from_code(family.code()), Ok(family));
            assert_eq!(family.to_string(), family.code());
        }
    }

    #[test]
    fn test_unknown_family() {
        assert_eq!(
            "spa".parse::<BomFamily>(),
            Err(BomCodeError::UnknownFamily("spa".to_string()))
        );
        // регистр важен
        assert!(BomFamily::from_code("icetub").is_err());
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&BomFamily::IceTub).unwrap();
        assert_eq!(json, "\"iceTub\"");
        let back: BomFamily = serde_json::from_str("\"pool\"").unwrap();
        assert_eq!(back, BomFamily::Pool);
    }
}
