//! ColumnSpec: display configuration for one field.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::model::Value;
use crate::model::ValueKind;

/// Converts a field value into display text.
pub type Formatter = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// Orders two values of one field.
pub type Comparator = Arc<dyn Fn(&Value, &Value) -> Ordering + Send + Sync>;

/// Column width hint for renderers. The core never interprets it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Size to content.
    #[default]
    Auto,
    /// Fixed width in display columns.
    Fixed(u16),
}

/// Display configuration for a single field.
///
/// Only the label is required. Without a formatter the raw value is displayed
/// through its [`Display`](std::fmt::Display) impl; without a comparator the
/// column sorts by [`Value::natural_cmp`].
///
/// # Examples
///
/// ```
/// use sortgrid::column::ColumnSpec;
/// use sortgrid::model::{Value, ValueKind};
///
/// let name = ColumnSpec::new("名前");
/// let age = ColumnSpec::new("年齢")
///     .kind(ValueKind::Int)
///     .formatter(|v| format!("{}歳", v));
///
/// assert_eq!(name.format(&Value::from("hoge")), "hoge");
/// assert_eq!(age.format(&Value::from(12)), "12歳");
/// ```
#[derive(Clone)]
pub struct ColumnSpec {
    /// Header text.
    pub label: String,
    formatter: Option<Formatter>,
    comparator: Option<Comparator>,
    kind: Option<ValueKind>,
    width: ColumnWidth,
}

impl ColumnSpec {
    /// Create a column spec with the given header label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            formatter: None,
            comparator: None,
            kind: None,
            width: ColumnWidth::Auto,
        }
    }

    /// Set the value formatter.
    pub fn formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(f));
        self
    }

    /// Set the comparator used when this column is the active sort column.
    pub fn comparator<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value, &Value) -> Ordering + Send + Sync + 'static,
    {
        self.comparator = Some(Arc::new(f));
        self
    }

    /// Declare the kind every non-null value of this field must have.
    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the width hint.
    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = width;
        self
    }

    /// Format a value for display.
    pub fn format(&self, value: &Value) -> String {
        match &self.formatter {
            Some(f) => f(value),
            None => value.to_string(),
        }
    }

    /// Compare two values of this column.
    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        match &self.comparator {
            Some(f) => f(a, b),
            None => a.natural_cmp(b),
        }
    }

    /// The declared value kind, if any.
    pub fn declared_kind(&self) -> Option<ValueKind> {
        self.kind
    }

    /// The width hint.
    pub fn width_hint(&self) -> ColumnWidth {
        self.width
    }

    /// Returns `true` if a custom formatter is set.
    pub fn has_formatter(&self) -> bool {
        self.formatter.is_some()
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("label", &self.label)
            .field("formatter", &self.formatter.is_some())
            .field("comparator", &self.comparator.is_some())
            .field("kind", &self.kind)
            .field("width", &self.width)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_raw_display() {
        let spec = ColumnSpec::new("名前");
        assert_eq!(spec.format(&Value::from("hoge")), "hoge");
        assert_eq!(spec.format(&Value::from(12)), "12");
        assert!(!spec.has_formatter());
    }

    #[test]
    fn test_custom_comparator() {
        let spec = ColumnSpec::new("長さ").comparator(|a, b| {
            let len = |v: &Value| v.as_str().map_or(0, str::len);
            len(a).cmp(&len(b))
        });
        assert_eq!(spec.compare(&Value::from("zz"), &Value::from("aaa")), Ordering::Less);
        assert_eq!(spec.compare(&Value::from("ab"), &Value::from("zz")), Ordering::Equal);
    }

    #[test]
    fn test_default_comparator_is_natural() {
        let spec = ColumnSpec::new("年齢");
        assert_eq!(spec.compare(&Value::from(23), &Value::from(12)), Ordering::Greater);
    }
}
