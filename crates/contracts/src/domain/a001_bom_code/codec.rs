use std::collections::BTreeMap;

use super::dto::BomSegment;
use super::error::BomCodeError;
use super::schema::CodeSchema;
use super::section::{is_well_formed, CodeSection, SectionKind};
use super::selection::{SectionValue, Selection};

// ============================================================================
// Default selection
// ============================================================================

/// Пустой выбор: по одной записи `Unselected` на каждую листовую секцию
pub fn create_default_selection(schema: &CodeSchema) -> Selection {
    let entries: BTreeMap<String, SectionValue> = schema
        .leaves()
        .into_iter()
        .map(|section| (section.key.clone(), SectionValue::Unselected))
        .collect();
    Selection::new(schema.family(), entries)
}

// ============================================================================
// Encode
// ============================================================================

/// Compose a selection into the flat code string.
///
/// Sections are checked in schema order and the first offending one is
/// reported. `Unresolved` tokens are written back verbatim once their width
/// and charset are confirmed.
pub fn encode(schema: &CodeSchema, selection: &Selection) -> Result<String, BomCodeError> {
    let mut code = String::with_capacity(schema.total_width());
    for section in schema.sections() {
        encode_section(section, selection, &mut code)?;
    }
    Ok(code)
}

fn encode_section(
    section: &CodeSection,
    selection: &Selection,
    out: &mut String,
) -> Result<(), BomCodeError> {
    match &section.kind {
        SectionKind::Composite { children } => {
            for child in children {
                encode_section(child, selection, out)?;
            }
            Ok(())
        }
        SectionKind::Leaf {
            digit_width,
            options,
        } => {
            let token = match selection.get(&section.key) {
                None | Some(SectionValue::Unselected) => {
                    return Err(BomCodeError::IncompleteSelection {
                        key: section.key.clone(),
                    })
                }
                Some(SectionValue::Chosen(token)) if options.contains(token) => token,
                Some(SectionValue::Unresolved(token)) if is_well_formed(token, *digit_width) => {
                    token
                }
                Some(SectionValue::Chosen(token)) | Some(SectionValue::Unresolved(token)) => {
                    return Err(BomCodeError::InvalidToken {
                        key: section.key.clone(),
                        token: token.clone(),
                    })
                }
            };
            out.push_str(token);
            Ok(())
        }
    }
}

// ============================================================================
// Decode / validate
// ============================================================================

/// Длина кода совпадает с шириной схемы (считаются символы, не байты)
pub fn validate_length(schema: &CodeSchema, code: &str) -> bool {
    code.chars().count() == schema.total_width()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodePolicy {
    Tolerant,
    Strict,
}

/// Split a code into a selection.
///
/// Well-formed tokens missing from the option tables are kept as
/// `SectionValue::Unresolved`, so archived codes always re-encode to the same
/// string. Malformed chunks still fail with `UnrecognizedToken`.
pub fn decode(schema: &CodeSchema, code: &str) -> Result<Selection, BomCodeError> {
    decode_with(schema, code, DecodePolicy::Tolerant)
}

/// Как `decode`, но любой токен вне таблицы даёт ошибку `UnrecognizedToken`
pub fn decode_strict(schema: &CodeSchema, code: &str) -> Result<Selection, BomCodeError> {
    decode_with(schema, code, DecodePolicy::Strict)
}

fn decode_with(
    schema: &CodeSchema,
    code: &str,
    policy: DecodePolicy,
) -> Result<Selection, BomCodeError> {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() != schema.total_width() {
        return Err(BomCodeError::LengthMismatch {
            expected: schema.total_width(),
            actual: chars.len(),
        });
    }

    let mut selection = create_default_selection(schema);
    let mut offset = 0;
    for section in schema.leaves() {
        let width = section.digit_width();
        let token: String = chars[offset..offset + width].iter().collect();
        offset += width;

        let known = section
            .options()
            .map(|options| options.contains(&token))
            .unwrap_or(false);

        let value = if known {
            SectionValue::Chosen(token)
        } else if policy == DecodePolicy::Tolerant && is_well_formed(&token, width) {
            log::warn!(
                "{}: token `{}` in section `{}` is not in the option table",
                schema.family(),
                token,
                section.key
            );
            SectionValue::Unresolved(token)
        } else {
            return Err(BomCodeError::UnrecognizedToken {
                key: section.key.clone(),
                token,
            });
        };
        selection.put(&section.key, value);
    }

    Ok(selection)
}

// ============================================================================
// Summary
// ============================================================================

/// Human-readable read-out of a selection, one segment per leaf in schema order.
///
/// The same list is sent to the backend as `segments` when a code is saved.
pub fn summarize(schema: &CodeSchema, selection: &Selection) -> Vec<BomSegment> {
    schema
        .leaves()
        .into_iter()
        .map(|section| {
            let value = selection.get(&section.key);
            let meaning = match value {
                Some(SectionValue::Chosen(token)) => {
                    section.option_label(token).map(str::to_string)
                }
                _ => None,
            };
            BomSegment {
                key: section.key.clone(),
                label: section.label.clone(),
                value: value.map(SectionValue::token).unwrap_or_default().to_string(),
                meaning,
                digits: Some(section.digit_width()),
                reason: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use proptest::sample::Index;

    use super::super::registry::get_schema;
    use super::super::section::OptionTable;
    use super::*;
    use crate::enums::BomFamily;

    const SCENARIO: &[(&str, &str)] = &[
        ("colorHole", "A1"),
        ("nozzle", "1A"),
        ("powerStandard", "A"),
        ("controlSystem", "11"),
        ("waterPump", "11"),
        ("airPump", "A"),
        ("sanitation", "A"),
        ("multimedia", "A"),
        ("lighting", "A"),
        ("bottomInsulation", "A"),
        ("sideInsulation", "A"),
        ("bodyInsulation", "A"),
        ("skirt", "A"),
        ("corner", "A"),
        ("stairs", "A"),
        ("cover", "A"),
        ("externalHeating", "A"),
        ("packaging", "A"),
    ];

    fn scenario_selection() -> Selection {
        let schema = get_schema(BomFamily::Outdoor);
        let mut selection = create_default_selection(schema);
        for (key, token) in SCENARIO {
            selection.set(key, *token).unwrap();
        }
        selection
    }

    /// Pick one enumerated option per leaf, driven by proptest indices
    fn pick_selection(schema: &CodeSchema, picks: &[Index]) -> Selection {
        let mut selection = create_default_selection(schema);
        for (section, pick) in schema.leaves().into_iter().zip(picks) {
            let options = section.options().unwrap();
            let (token, _) = options.iter().nth(pick.index(options.len())).unwrap();
            selection.set(&section.key, token).unwrap();
        }
        selection
    }

    #[test]
    fn test_default_selection_has_every_leaf() {
        for family in BomFamily::all() {
            let schema = get_schema(family);
            let selection = create_default_selection(schema);
            assert_eq!(selection.family(), family);
            assert_eq!(selection.len(), schema.leaves().len());
            for key in schema.leaf_keys() {
                assert_eq!(selection.get(key), Some(&SectionValue::Unselected));
            }
        }
    }

    #[test]
    fn test_outdoor_scenario() {
        let schema = get_schema(BomFamily::Outdoor);
        let selection = scenario_selection();

        let code = encode(schema, &selection).unwrap();
        assert_eq!(code, "A11AA1111AAAAAAAAAAAAA");
        assert_eq!(code.len(), 22);
        assert!(code.starts_with("A11AA1111A"));

        let decoded = decode(schema, &code).unwrap();
        assert_eq!(decoded, selection);
        assert!(decoded.unresolved_keys().is_empty());
    }

    #[test]
    fn test_encode_missing_nozzle() {
        let schema = get_schema(BomFamily::Outdoor);
        let mut selection = scenario_selection();
        selection.clear("nozzle").unwrap();

        assert_eq!(
            encode(schema, &selection),
            Err(BomCodeError::IncompleteSelection {
                key: "nozzle".into()
            })
        );
    }

    #[test]
    fn test_encode_reports_first_section_in_schema_order() {
        let schema = get_schema(BomFamily::Outdoor);
        let mut selection = scenario_selection();
        selection.clear("packaging").unwrap();
        selection.set("waterPump", "ZZ").unwrap();

        let err = encode(schema, &selection).unwrap_err();
        assert_eq!(
            err,
            BomCodeError::InvalidToken {
                key: "waterPump".into(),
                token: "ZZ".into()
            }
        );
        assert_eq!(err.section_key(), Some("waterPump"));
    }

    #[test]
    fn test_decode_short_code() {
        let schema = get_schema(BomFamily::Outdoor);
        let code = "A11AA1111AAAAAAAAAAAA";
        assert_eq!(code.len(), 21);
        assert!(!validate_length(schema, code));
        assert_eq!(
            decode(schema, code),
            Err(BomCodeError::LengthMismatch {
                expected: 22,
                actual: 21
            })
        );
    }

    #[test]
    fn test_validate_length_counts_chars() {
        let schema = get_schema(BomFamily::Pool);
        let code = "啊".repeat(22);
        assert!(validate_length(schema, &code));
        assert!(matches!(
            decode(schema, &code),
            Err(BomCodeError::UnrecognizedToken { .. })
        ));
    }

    #[test]
    fn test_legacy_token_round_trip() {
        let schema = get_schema(BomFamily::Outdoor);
        let code = "A1ZZA1111AAAAAAAAAAAAA";

        let selection = decode(schema, code).unwrap();
        assert_eq!(
            selection.get("nozzle"),
            Some(&SectionValue::Unresolved("ZZ".into()))
        );
        assert_eq!(selection.unresolved_keys(), vec!["nozzle"]);
        assert_eq!(encode(schema, &selection).unwrap(), code);

        assert_eq!(
            decode_strict(schema, code),
            Err(BomCodeError::UnrecognizedToken {
                key: "nozzle".into(),
                token: "ZZ".into()
            })
        );
    }

    #[test]
    fn test_encode_rejects_malformed_unresolved_token() {
        let schema = get_schema(BomFamily::Outdoor);

        for bad in ["Z", "ZZZ", "z1"] {
            let mut selection = scenario_selection();
            selection.put("nozzle", SectionValue::Unresolved(bad.into()));
            assert_eq!(
                encode(schema, &selection),
                Err(BomCodeError::InvalidToken {
                    key: "nozzle".into(),
                    token: bad.into()
                })
            );
        }
    }

    #[test]
    fn test_decode_rejects_malformed_chunk() {
        let schema = get_schema(BomFamily::Outdoor);
        assert_eq!(
            decode(schema, "A11a1111AAAAAAAAAAAAAA"),
            Err(BomCodeError::UnrecognizedToken {
                key: "nozzle".into(),
                token: "1a".into()
            })
        );
    }

    #[test]
    fn test_summarize_scenario() {
        let schema = get_schema(BomFamily::Outdoor);
        let segments = summarize(schema, &scenario_selection());

        assert_eq!(segments.len(), 18);
        assert_eq!(segments[0].key, "colorHole");
        assert_eq!(segments[0].value, "A1");
        assert_eq!(segments[0].meaning.as_deref(), Some("进口云彩白+无喷嘴"));
        assert_eq!(segments[0].digits, Some(2));
        assert_eq!(segments[17].key, "packaging");
    }

    #[test]
    fn test_summarize_blank_and_unresolved() {
        let schema = get_schema(BomFamily::Outdoor);
        let mut selection = decode(schema, "A1ZZA1111AAAAAAAAAAAAA").unwrap();
        selection.clear("skirt").unwrap();

        let segments = summarize(schema, &selection);
        let nozzle = segments.iter().find(|s| s.key == "nozzle").unwrap();
        assert_eq!(nozzle.value, "ZZ");
        assert_eq!(nozzle.meaning, None);
        let skirt = segments.iter().find(|s| s.key == "skirt").unwrap();
        assert_eq!(skirt.value, "");
        assert_eq!(skirt.meaning, None);
    }

    #[test]
    fn test_composite_sections_round_trip() {
        let schema = CodeSchema::with_expected_width(
            BomFamily::Pool,
            vec![
                CodeSection::composite(
                    "shell",
                    "缸体",
                    vec![
                        CodeSection::leaf("color", "颜色", 1, OptionTable::from_static(&[("A", "白")])),
                        CodeSection::leaf("hole", "开孔", 2, OptionTable::from_static(&[("01", "标准")])),
                    ],
                ),
                CodeSection::leaf("pack", "包装", 1, OptionTable::from_static(&[("Z", "木箱")])),
            ],
            4,
        );
        let mut selection = create_default_selection(&schema);
        assert_eq!(selection.len(), 3);
        selection.set("color", "A").unwrap();
        selection.set("hole", "01").unwrap();
        selection.set("pack", "Z").unwrap();

        let code = encode(&schema, &selection).unwrap();
        assert_eq!(code, "A01Z");
        assert_eq!(decode(&schema, &code).unwrap(), selection);
    }

    proptest! {
        #[test]
        fn prop_encode_decode_round_trip(
            family_pick in any::<Index>(),
            picks in prop::collection::vec(any::<Index>(), 19),
        ) {
            let families = BomFamily::all();
            let family = families[family_pick.index(families.len())];
            let schema = get_schema(family);
            let selection = pick_selection(schema, &picks);

            let code = encode(schema, &selection).unwrap();
            prop_assert_eq!(code.chars().count(), schema.total_width());
            prop_assert_eq!(decode(schema, &code).unwrap(), selection.clone());
            prop_assert_eq!(decode_strict(schema, &code).unwrap(), selection);
        }

        #[test]
        fn prop_tolerant_decode_is_byte_exact(code in "[0-9A-Z]{22}") {
            for family in BomFamily::all() {
                let schema = get_schema(family);
                let selection = decode(schema, &code).unwrap();
                prop_assert_eq!(encode(schema, &selection).unwrap(), code.clone());
            }
        }
    }
}
