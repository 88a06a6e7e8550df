//! Sort direction and sort status.

use std::fmt;

/// Sort direction of the active column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Header indicator glyph.
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Ascending => "▲",
            Direction::Descending => "▼",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => f.write_str("asc"),
            Direction::Descending => f.write_str("desc"),
        }
    }
}

/// Which column, if any, the rows are sorted by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SortStatus {
    /// Natural (insertion) order.
    #[default]
    Unsorted,
    /// Sorted by `field` in `direction`.
    Sorted { field: String, direction: Direction },
}

impl SortStatus {
    /// The active sort field.
    pub fn field(&self) -> Option<&str> {
        match self {
            SortStatus::Unsorted => None,
            SortStatus::Sorted { field, .. } => Some(field),
        }
    }

    /// The current direction. `Ascending` while unsorted.
    pub fn direction(&self) -> Direction {
        match self {
            SortStatus::Unsorted => Direction::Ascending,
            SortStatus::Sorted { direction, .. } => *direction,
        }
    }

    /// Returns `true` if `field` is the active sort field.
    pub fn is_active(&self, field: &str) -> bool {
        self.field() == Some(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_round_trip() {
        assert_eq!(Direction::Ascending.toggled(), Direction::Descending);
        assert_eq!(Direction::Ascending.toggled().toggled(), Direction::Ascending);
    }

    #[test]
    fn test_unsorted_status() {
        let status = SortStatus::default();
        assert_eq!(status.field(), None);
        assert_eq!(status.direction(), Direction::Ascending);
        assert!(!status.is_active("age"));
    }
}
