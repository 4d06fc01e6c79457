use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Tokens
// ============================================================================

/// Символ, допустимый в BOM-коде: цифра или заглавная латинская буква
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_uppercase()
}

/// Token of exactly `width` characters drawn from `[0-9A-Z]`
pub fn is_well_formed(token: &str, width: usize) -> bool {
    token.chars().count() == width && token.chars().all(is_token_char)
}

// ============================================================================
// Option table
// ============================================================================

/// Ordered token → label map of a leaf section.
///
/// Declaration order is kept: it is the order the configurator lists options in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionTable(IndexMap<String, String>);

impl OptionTable {
    pub fn from_static(entries: &[(&str, &str)]) -> Self {
        entries
            .iter()
            .map(|(token, label)| (token.to_string(), label.to_string()))
            .collect()
    }

    /// Декартово произведение двух таблиц: токен `"{left}{right}"`,
    /// описание `"{left_label}{separator}{right_label}"`
    pub fn cross_join(left: &[(&str, &str)], right: &[(&str, &str)], separator: &str) -> Self {
        left.iter()
            .flat_map(|(left_token, left_label)| {
                right.iter().map(move |(right_token, right_label)| {
                    (
                        format!("{}{}", left_token, right_token),
                        format!("{}{}{}", left_label, separator, right_label),
                    )
                })
            })
            .collect()
    }

    pub fn label(&self, token: &str) -> Option<&str> {
        self.0.get(token).map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains_key(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(t, l)| (t.as_str(), l.as_str()))
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &IndexMap<String, String> {
        &self.0
    }
}

impl FromIterator<(String, String)> for OptionTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ============================================================================
// Section
// ============================================================================

/// Одна позиционная секция BOM-кода
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSection {
    /// Stable field identifier, unique within a family (e.g. "nozzle")
    pub key: String,
    /// Описание того, что кодирует секция (только для отображения)
    pub label: String,
    pub kind: SectionKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    /// Fixed-width field with an enumerated token table
    Leaf {
        digit_width: usize,
        options: OptionTable,
    },
    /// Ordered group of child sections; occupies the sum of the children's widths
    Composite { children: Vec<CodeSection> },
}

impl CodeSection {
    pub fn leaf(
        key: impl Into<String>,
        label: impl Into<String>,
        digit_width: usize,
        options: OptionTable,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: SectionKind::Leaf {
                digit_width,
                options,
            },
        }
    }

    pub fn composite(
        key: impl Into<String>,
        label: impl Into<String>,
        children: Vec<CodeSection>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: SectionKind::Composite { children },
        }
    }

    /// Количество символов, которое секция занимает в коде
    pub fn digit_width(&self) -> usize {
        match &self.kind {
            SectionKind::Leaf { digit_width, .. } => *digit_width,
            SectionKind::Composite { children } => {
                children.iter().map(CodeSection::digit_width).sum()
            }
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, SectionKind::Leaf { .. })
    }

    /// Option table of a leaf; `None` for composites
    pub fn options(&self) -> Option<&OptionTable> {
        match &self.kind {
            SectionKind::Leaf { options, .. } => Some(options),
            SectionKind::Composite { .. } => None,
        }
    }

    /// Child sections of a composite; empty for leaves
    pub fn children(&self) -> &[CodeSection] {
        match &self.kind {
            SectionKind::Leaf { .. } => &[],
            SectionKind::Composite { children } => children,
        }
    }

    /// Описание токена, если он есть в таблице секции
    pub fn option_label(&self, token: &str) -> Option<&str> {
        self.options().and_then(|o| o.label(token))
    }

    pub(crate) fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a CodeSection>) {
        match &self.kind {
            SectionKind::Leaf { .. } => out.push(self),
            SectionKind::Composite { children } => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_charset() {
        assert!(is_well_formed("1A", 2));
        assert!(is_well_formed("00", 2));
        assert!(!is_well_formed("1a", 2));
        assert!(!is_well_formed("1-", 2));
        assert!(!is_well_formed("A", 2));
        assert!(!is_well_formed("啊A", 2));
    }

    #[test]
    fn test_cross_join_keeps_order() {
        let table = OptionTable::cross_join(
            &[("A", "白"), ("B", "黑")],
            &[("1", "无喷嘴"), ("2", "标准孔")],
            "+",
        );
        let tokens: Vec<&str> = table.tokens().collect();
        assert_eq!(tokens, vec!["A1", "A2", "B1", "B2"]);
        assert_eq!(table.label("B2"), Some("黑+标准孔"));
    }

    #[test]
    fn test_composite_width_is_sum_of_children() {
        let section = CodeSection::composite(
            "shell",
            "缸体",
            vec![
                CodeSection::leaf("color", "颜色", 1, OptionTable::from_static(&[("A", "白")])),
                CodeSection::leaf("hole", "开孔", 2, OptionTable::from_static(&[("01", "标准")])),
            ],
        );
        assert_eq!(section.digit_width(), 3);
        assert!(!section.is_leaf());
        assert!(section.options().is_none());

        let mut leaves = Vec::new();
        section.collect_leaves(&mut leaves);
        let keys: Vec<&str> = leaves.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["color", "hole"]);
    }
}
