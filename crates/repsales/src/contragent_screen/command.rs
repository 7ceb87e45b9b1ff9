//! Synchronous mutations for the contragent directory.

use crate::view::contragents::ContragentSort;

/// Mutations the directory accepts; each one triggers a view recomputation.
#[derive(Debug, Clone)]
pub enum ContragentCommand {
    /// Free-text search over name and address.
    SetQuery(String),
    /// Exact legal-form filter; `None` lifts the restriction.
    SetKindFilter(Option<String>),
    /// Exact segment filter; `None` lifts the restriction.
    SetSegmentFilter(Option<String>),
    SetSort(ContragentSort),
    /// Clears the query and both categorical filters; the sort key stays.
    ClearFilters,
}
