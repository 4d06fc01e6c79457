use std::collections::HashSet;

use thiserror::Error;

use crate::enums::BomFamily;

use super::section::{is_token_char, CodeSection, SectionKind};

/// Нарушение инварианта схемы
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaIssue {
    #[error("section `{key}` has zero width")]
    ZeroWidth { key: String },

    #[error("section key `{key}` is used more than once")]
    DuplicateKey { key: String },

    #[error("composite section `{key}` has no children")]
    EmptyComposite { key: String },

    #[error("section `{key}` has no options")]
    EmptyOptions { key: String },

    #[error("section `{key}`: token `{token}` must be {expected} characters wide")]
    TokenWidth {
        key: String,
        token: String,
        expected: usize,
    },

    #[error("section `{key}`: token `{token}` contains characters outside [0-9A-Z]")]
    TokenCharset { key: String, token: String },

    #[error("total width is {actual}, expected {expected}")]
    TotalWidth { expected: usize, actual: usize },
}

/// Упорядоченный список секций одного семейства.
///
/// Section order defines both how a code is composed and how it is parsed.
/// Schemas are built once and only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSchema {
    family: BomFamily,
    sections: Vec<CodeSection>,
    expected_width: usize,
}

impl CodeSchema {
    pub fn new(family: BomFamily, sections: Vec<CodeSection>) -> Self {
        Self::with_expected_width(family, sections, family.code_width())
    }

    pub fn with_expected_width(
        family: BomFamily,
        sections: Vec<CodeSection>,
        expected_width: usize,
    ) -> Self {
        Self {
            family,
            sections,
            expected_width,
        }
    }

    pub fn family(&self) -> BomFamily {
        self.family
    }

    /// Top-level sections in schema order
    pub fn sections(&self) -> &[CodeSection] {
        &self.sections
    }

    /// Длина составного кода: сумма ширин всех секций
    pub fn total_width(&self) -> usize {
        self.sections.iter().map(CodeSection::digit_width).sum()
    }

    pub fn expected_width(&self) -> usize {
        self.expected_width
    }

    /// Leaf sections, depth-first in schema order
    pub fn leaves(&self) -> Vec<&CodeSection> {
        let mut out = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            section.collect_leaves(&mut out);
        }
        out
    }

    pub fn leaf_keys(&self) -> Vec<&str> {
        self.leaves().into_iter().map(|s| s.key.as_str()).collect()
    }

    /// Найти листовую секцию по ключу
    pub fn section(&self, key: &str) -> Option<&CodeSection> {
        self.leaves().into_iter().find(|s| s.key == key)
    }

    /// Check every structural invariant; returns all issues found, not just the first
    pub fn validate(&self) -> Result<(), Vec<SchemaIssue>> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for section in &self.sections {
            check_section(section, &mut seen, &mut issues);
        }

        let actual = self.total_width();
        if actual != self.expected_width {
            issues.push(SchemaIssue::TotalWidth {
                expected: self.expected_width,
                actual,
            });
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

fn check_section<'a>(
    section: &'a CodeSection,
    seen: &mut HashSet<&'a str>,
    issues: &mut Vec<SchemaIssue>,
) {
    if !seen.insert(section.key.as_str()) {
        issues.push(SchemaIssue::DuplicateKey {
            key: section.key.clone(),
        });
    }

    match &section.kind {
        SectionKind::Leaf {
            digit_width,
            options,
        } => {
            if *digit_width == 0 {
                issues.push(SchemaIssue::ZeroWidth {
                    key: section.key.clone(),
                });
            }
            if options.is_empty() {
                issues.push(SchemaIssue::EmptyOptions {
                    key: section.key.clone(),
                });
            }
            for token in options.tokens() {
                if token.chars().count() != *digit_width {
                    issues.push(SchemaIssue::TokenWidth {
                        key: section.key.clone(),
                        token: token.to_string(),
                        expected: *digit_width,
                    });
                } else if !token.chars().all(is_token_char) {
                    issues.push(SchemaIssue::TokenCharset {
                        key: section.key.clone(),
                        token: token.to_string(),
                    });
                }
            }
        }
        SectionKind::Composite { children } => {
            if children.is_empty() {
                issues.push(SchemaIssue::EmptyComposite {
                    key: section.key.clone(),
                });
            }
            for child in children {
                check_section(child, seen, issues);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::section::OptionTable;
    use super::*;

    fn leaf(key: &str, width: usize, tokens: &[(&str, &str)]) -> CodeSection {
        CodeSection::leaf(key, key, width, OptionTable::from_static(tokens))
    }

    #[test]
    fn test_leaves_flatten_composites() {
        let schema = CodeSchema::with_expected_width(
            BomFamily::Pool,
            vec![
                leaf("a", 1, &[("A", "a")]),
                CodeSection::composite(
                    "group",
                    "group",
                    vec![leaf("b", 1, &[("B", "b")]), leaf("c", 2, &[("0C", "c")])],
                ),
            ],
            4,
        );
        assert_eq!(schema.leaf_keys(), vec!["a", "b", "c"]);
        assert_eq!(schema.total_width(), 4);
        assert!(schema.section("group").is_none());
        assert!(schema.section("c").is_some());
        assert_eq!(schema.validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let schema = CodeSchema::with_expected_width(
            BomFamily::Outdoor,
            vec![
                leaf("a", 2, &[("A", "short"), ("a1", "lower")]),
                leaf("a", 1, &[("B", "dup")]),
                CodeSection::composite("empty", "empty", vec![]),
                leaf("z", 0, &[]),
            ],
            5,
        );
        let issues = schema.validate().unwrap_err();
        assert!(issues.contains(&SchemaIssue::TokenWidth {
            key: "a".into(),
            token: "A".into(),
            expected: 2,
        }));
        assert!(issues.contains(&SchemaIssue::TokenCharset {
            key: "a".into(),
            token: "a1".into(),
        }));
        assert!(issues.contains(&SchemaIssue::DuplicateKey { key: "a".into() }));
        assert!(issues.contains(&SchemaIssue::EmptyComposite {
            key: "empty".into()
        }));
        assert!(issues.contains(&SchemaIssue::ZeroWidth { key: "z".into() }));
        assert!(issues.contains(&SchemaIssue::EmptyOptions { key: "z".into() }));
        assert!(issues.contains(&SchemaIssue::TotalWidth {
            expected: 5,
            actual: 3,
        }));
    }
}
