//! Table definition file: declarative columns plus records.

use std::cmp::Ordering;
use std::path::Path;

use serde::Deserialize;
use sortgrid::column::{ColumnRegistry, ColumnSpec, ColumnWidth};
use sortgrid::model::{Record, Value, ValueKind};

use crate::error::CliError;

/// A table loaded from JSON.
///
/// ```json
/// {
///   "columns": [
///     { "field": "name", "label": "名前" },
///     { "field": "age", "label": "年齢", "format": { "suffix": "歳" }, "kind": "int" }
///   ],
///   "records": [{ "name": "hoge", "age": 12 }]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableDefinition {
    pub columns: Vec<ColumnDefinition>,
    #[serde(default)]
    pub records: Vec<Record>,
    /// Explicit field list; required when `records` is empty.
    #[serde(default)]
    pub fields: Option<Vec<String>>,
}

/// One column of a [`TableDefinition`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnDefinition {
    pub field: String,
    pub label: String,
    #[serde(default)]
    pub format: Option<FormatRule>,
    #[serde(default)]
    pub compare: Option<CompareRule>,
    #[serde(default)]
    pub kind: Option<ValueKind>,
    /// Fixed width in display columns; omitted means auto.
    #[serde(default)]
    pub width: Option<u16>,
}

/// Declarative value formatter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatRule {
    /// Append text: `{ "suffix": "歳" }`.
    Suffix(String),
    /// Prepend text: `{ "prefix": "$" }`.
    Prefix(String),
    /// Display booleans as one of two strings: `{ "bool": ["o", "x"] }`.
    Bool(String, String),
    /// Numbers with a fixed number of decimals: `{ "fixed": 2 }`.
    Fixed(usize),
}

impl FormatRule {
    fn apply(&self, value: &Value) -> String {
        if value.is_null() {
            return String::new();
        }
        match self {
            FormatRule::Suffix(s) => format!("{}{}", value, s),
            FormatRule::Prefix(s) => format!("{}{}", s, value),
            FormatRule::Bool(yes, no) => match value.as_bool() {
                Some(true) => yes.clone(),
                Some(false) => no.clone(),
                None => value.to_string(),
            },
            FormatRule::Fixed(places) => match value.as_f64() {
                Some(n) => format!("{:.*}", places, n),
                None => value.to_string(),
            },
        }
    }
}

/// Declarative comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareRule {
    Natural,
    Reverse,
    CaseInsensitive,
    Length,
}

impl CompareRule {
    fn apply(self, a: &Value, b: &Value) -> Ordering {
        match self {
            CompareRule::Natural => a.natural_cmp(b),
            CompareRule::Reverse => b.natural_cmp(a),
            CompareRule::CaseInsensitive => match (a.as_str(), b.as_str()) {
                (Some(x), Some(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
                _ => a.natural_cmp(b),
            },
            CompareRule::Length => a
                .to_string()
                .chars()
                .count()
                .cmp(&b.to_string().chars().count()),
        }
    }
}

impl ColumnDefinition {
    fn to_spec(&self) -> ColumnSpec {
        let mut spec = ColumnSpec::new(self.label.as_str());
        if let Some(rule) = self.format.clone() {
            spec = spec.formatter(move |v| rule.apply(v));
        }
        if let Some(rule) = self.compare {
            spec = spec.comparator(move |a, b| rule.apply(a, b));
        }
        if let Some(kind) = self.kind {
            spec = spec.kind(kind);
        }
        if let Some(width) = self.width {
            spec = spec.width(ColumnWidth::Fixed(width));
        }
        spec
    }
}

impl TableDefinition {
    /// Read a definition from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let definition: Self = serde_json::from_str(&text)?;
        log::info!(
            "Loaded {} columns and {} records from {}",
            definition.columns.len(),
            definition.records.len(),
            path.display()
        );
        Ok(definition)
    }

    /// The two-person sample table shown when no file is given.
    pub fn sample() -> Self {
        Self {
            columns: vec![
                ColumnDefinition {
                    field: "name".to_string(),
                    label: "名前".to_string(),
                    format: None,
                    compare: None,
                    kind: None,
                    width: None,
                },
                ColumnDefinition {
                    field: "age".to_string(),
                    label: "年齢".to_string(),
                    format: Some(FormatRule::Suffix("歳".to_string())),
                    compare: None,
                    kind: Some(ValueKind::Int),
                    width: None,
                },
            ],
            records: vec![
                Record::new().set("name", "hoge").set("age", 12),
                Record::new().set("name", "fuga").set("age", 23),
            ],
            fields: None,
        }
    }

    /// Build the column registry in definition order.
    pub fn registry(&self) -> ColumnRegistry {
        self.columns
            .iter()
            .fold(ColumnRegistry::new(), |registry, column| {
                registry.column(column.field.as_str(), column.to_spec())
            })
    }

    /// Resolve a header name typed by the user: a field name, else a label.
    pub fn resolve_header<'a>(&'a self, input: &'a str) -> &'a str {
        if self.columns.iter().any(|c| c.field == input) {
            return input;
        }
        self.columns
            .iter()
            .find(|c| c.label == input)
            .map(|c| c.field.as_str())
            .unwrap_or(input)
    }
}
