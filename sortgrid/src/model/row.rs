//! Row trait: the record contract tables are generic over.

use super::Value;

/// A record that can be displayed by a [`Table`](crate::Table).
///
/// Every row of one dataset must report the same [`field_names`](Row::field_names).
/// The table checks this once at construction.
///
/// # Example
///
/// ```
/// use sortgrid::model::{Row, Value};
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl Row for Person {
///     fn field_names(&self) -> Vec<&str> {
///         vec!["name", "age"]
///     }
///
///     fn value(&self, field: &str) -> Option<Value> {
///         match field {
///             "name" => Some(self.name.as_str().into()),
///             "age" => Some(self.age.into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Row {
    /// The record's field names, in shape order.
    fn field_names(&self) -> Vec<&str>;

    /// The value of a field, or `None` if the record has no such field.
    fn value(&self, field: &str) -> Option<Value>;
}

impl<R: Row + ?Sized> Row for &R {
    fn field_names(&self) -> Vec<&str> {
        (**self).field_names()
    }

    fn value(&self, field: &str) -> Option<Value> {
        (**self).value(field)
    }
}
