//! SortEngine: tracks the active column and the materialized row order.

use crate::column::Column;
use crate::error::SortError;
use crate::model::Row;
use crate::model::Value;

use super::Direction;
use super::SortStatus;

/// Sort state of one table.
///
/// The row order is a permutation of indices into the original dataset. With
/// no active field it is the identity permutation.
///
/// Selecting a field sorts the *original* dataset with a stable sort, so ties
/// keep their input order. Toggling the direction reverses the current order
/// without consulting the comparator again, which also reverses the relative
/// order of ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortEngine {
    status: SortStatus,
    order: Vec<usize>,
}

impl SortEngine {
    /// Create an unsorted engine over `len` rows.
    pub fn new(len: usize) -> Self {
        Self {
            status: SortStatus::Unsorted,
            order: (0..len).collect(),
        }
    }

    /// Current sort status.
    pub fn status(&self) -> &SortStatus {
        &self.status
    }

    /// Active sort field.
    pub fn active_field(&self) -> Option<&str> {
        self.status.field()
    }

    /// Current direction.
    pub fn direction(&self) -> Direction {
        self.status.direction()
    }

    /// Row indices into the original dataset, in display order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Make `field` the active column, sorted ascending.
    ///
    /// Returns `Ok(false)` without touching the order if `field` is already
    /// active, in either direction.
    pub fn select_field<R: Row>(
        &mut self,
        field: &str,
        columns: &[Column],
        records: &[R],
    ) -> Result<bool, SortError> {
        let column = columns
            .iter()
            .find(|c| c.field == field)
            .ok_or_else(|| SortError::unknown_field(field))?;

        if self.status.is_active(field) {
            log::debug!("[sort] '{}' already active, ignoring select", field);
            return Ok(false);
        }

        let keys: Vec<Value> = records
            .iter()
            .map(|record| record.value(field).unwrap_or_default())
            .collect();

        let mut order: Vec<usize> = (0..records.len()).collect();
        order.sort_by(|&a, &b| column.spec.compare(&keys[a], &keys[b]));

        log::debug!("[sort] Sorted {} rows by '{}' ascending", order.len(), field);

        self.order = order;
        self.status = SortStatus::Sorted {
            field: field.to_string(),
            direction: Direction::Ascending,
        };
        Ok(true)
    }

    /// Flip the direction of the active column by reversing the current order.
    ///
    /// Returns `false` and does nothing if no field is active.
    pub fn toggle_direction(&mut self) -> bool {
        let SortStatus::Sorted { field, direction } = &mut self.status else {
            log::debug!("[sort] No active field, ignoring toggle");
            return false;
        };

        *direction = direction.toggled();
        self.order.reverse();

        log::debug!("[sort] Toggled '{}' to {}", field, direction);
        true
    }

    /// Return to natural order with no active field.
    pub fn reset(&mut self) {
        let len = self.order.len();
        self.order = (0..len).collect();
        self.status = SortStatus::Unsorted;
        log::debug!("[sort] Reset to natural order");
    }
}
