//! Sort criteria for service listings.

use crate::constants;

/// Ordering criterion for `sort_services_by`.
///
/// `"service"` selects lexicographic order; every other key falls back to
/// creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Service,
    AddedOn,
}

impl From<&str> for SortKey {
    fn from(key: &str) -> Self {
        if key == constants::SORT_KEY_SERVICE {
            SortKey::Service
        } else {
            SortKey::AddedOn
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Service => f.write_str(constants::SORT_KEY_SERVICE),
            SortKey::AddedOn => f.write_str(constants::SORT_KEY_ADDED_ON),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    /// The ascending result, reversed end to end.
    Reversed,
}

impl SortOrder {
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            SortOrder::Reversed
        } else {
            SortOrder::Ascending
        }
    }
}
