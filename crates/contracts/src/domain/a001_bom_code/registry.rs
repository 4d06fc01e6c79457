//! Реестр схем BOM-кодов.
//!
//! Собирается один раз при первом обращении и дальше только читается.

use once_cell::sync::Lazy;

use crate::enums::BomFamily;

use super::error::BomCodeError;
use super::schema::CodeSchema;
use super::section::OptionTable;
use super::tables::{ice_tub, outdoor, pool, power_standard::POWER_STANDARD_CODES};

// ─── Структуры ──────────────────────────────────────────────────────────────

pub struct BomRegistry {
    outdoor: CodeSchema,
    pool: CodeSchema,
    ice_tub: CodeSchema,
    /// Справочник стандартов питания (для документов, не входит в схемы)
    power_standards: OptionTable,
}

// ─── Глобальный экземпляр ───────────────────────────────────────────────────

pub static BOM_REGISTRY: Lazy<BomRegistry> = Lazy::new(BomRegistry::build);

// ─── Реализация ─────────────────────────────────────────────────────────────

impl BomRegistry {
    fn build() -> Self {
        let registry = Self {
            outdoor: outdoor::schema(),
            pool: pool::schema(),
            ice_tub: ice_tub::schema(),
            power_standards: OptionTable::from_static(POWER_STANDARD_CODES),
        };

        for family in BomFamily::all() {
            let schema = registry.schema(family);
            match schema.validate() {
                Ok(()) => log::debug!(
                    "BOM schema {}: {} sections, {} characters",
                    family,
                    schema.leaves().len(),
                    schema.total_width()
                ),
                Err(issues) => {
                    for issue in issues {
                        log::error!("BOM schema {}: {}", family, issue);
                    }
                }
            }
        }

        registry
    }

    pub fn schema(&self, family: BomFamily) -> &CodeSchema {
        match family {
            BomFamily::Outdoor => &self.outdoor,
            BomFamily::Pool => &self.pool,
            BomFamily::IceTub => &self.ice_tub,
        }
    }

    pub fn power_standard_label(&self, token: &str) -> Option<&str> {
        self.power_standards.label(token)
    }

    pub fn power_standards(&self) -> &OptionTable {
        &self.power_standards
    }
}

// ─── Точки входа ────────────────────────────────────────────────────────────

/// Схема семейства
pub fn get_schema(family: BomFamily) -> &'static CodeSchema {
    BOM_REGISTRY.schema(family)
}

/// String entry point; fails with `UnknownFamily` for identifiers outside the registry
pub fn get_schema_by_code(code: &str) -> Result<&'static CodeSchema, BomCodeError> {
    BomFamily::from_code(code).map(get_schema)
}

/// Семейства в порядке отображения вместе с подписью
pub fn list_families() -> Vec<(BomFamily, &'static str)> {
    BomFamily::all()
        .into_iter()
        .map(|family| (family, family.display_name()))
        .collect()
}

pub fn power_standard_label(token: &str) -> Option<&'static str> {
    BOM_REGISTRY.power_standard_label(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_is_22_wide() {
        for family in BomFamily::all() {
            let schema = get_schema(family);
            assert_eq!(schema.family(), family);
            assert_eq!(schema.total_width(), 22, "{}", family);
            assert_eq!(schema.expected_width(), 22);
        }
    }

    #[test]
    fn test_option_tokens_match_section_width() {
        for family in BomFamily::all() {
            for section in get_schema(family).leaves() {
                let width = section.digit_width();
                for token in section.options().unwrap().tokens() {
                    assert_eq!(token.chars().count(), width, "{}.{}", family, section.key);
                }
            }
        }
    }

    #[test]
    fn test_built_in_schemas_are_clean() {
        for family in BomFamily::all() {
            assert_eq!(get_schema(family).validate(), Ok(()), "{}", family);
        }
    }

    #[test]
    fn test_color_hole_is_cross_join() {
        let section = get_schema(BomFamily::Outdoor).section("colorHole").unwrap();
        let options = section.options().unwrap();
        assert_eq!(options.len(), 20 * 6);
        assert_eq!(options.label("T6"), Some("进口海洋蓝+孔位6"));
    }

    #[test]
    fn test_list_families_order_is_stable() {
        let first = list_families();
        assert_eq!(
            first,
            vec![
                (BomFamily::Outdoor, "户外缸"),
                (BomFamily::Pool, "泳池"),
                (BomFamily::IceTub, "冰水缸"),
            ]
        );
        assert_eq!(list_families(), first);
    }

    #[test]
    fn test_get_schema_by_code() {
        assert_eq!(
            get_schema_by_code("iceTub").map(CodeSchema::family),
            Ok(BomFamily::IceTub)
        );
        assert_eq!(
            get_schema_by_code("spa").err(),
            Some(BomCodeError::UnknownFamily("spa".into()))
        );
    }

    #[test]
    fn test_power_standard_lookup() {
        let first = BOM_REGISTRY.power_standards().tokens().next().unwrap();
        assert!(power_standard_label(first).is_some());
        assert_eq!(power_standard_label("不存在"), None);
    }
}
