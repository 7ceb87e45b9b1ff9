//! Filtering and sorting for the contragent directory.

use crate::model::Contragent;

/// Sort keys for the contragent directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContragentSort {
    /// Ascending by name.
    #[default]
    Name,
    /// Most orders first.
    OrdersCount,
    /// Highest lifetime order sum first.
    TotalSum,
    /// Highest average check first.
    AverageCheck,
}

/// Active search/filter/sort criteria for the directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContragentCriteria {
    /// Free-text search over name and address. Blank means no restriction.
    pub query: String,
    /// Exact legal-form filter; `None` means no restriction.
    pub kind: Option<String>,
    /// Exact segment filter; `None` means no restriction.
    pub segment: Option<String>,
    pub sort: ContragentSort,
}

impl ContragentCriteria {
    /// Drops the query and both categorical filters. The sort key is kept.
    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.kind = None;
        self.segment = None;
    }
}

/// Derives the visible directory from the full collection and the criteria.
///
/// Steps run in a fixed order: free-text query (case-insensitive substring
/// over name and address), exact categorical filters, then a stable sort by
/// the active key. Records that compare equal keep their input order. The
/// base collection is never modified.
pub fn compute_view(base: &[Contragent], criteria: &ContragentCriteria) -> Vec<Contragent> {
    let mut view: Vec<Contragent> = base
        .iter()
        .filter(|c| matches_query(c, &criteria.query))
        .filter(|c| criteria.kind.as_deref().map_or(true, |kind| c.kind == kind))
        .filter(|c| {
            criteria
                .segment
                .as_deref()
                .map_or(true, |segment| c.segment == segment)
        })
        .cloned()
        .collect();

    match criteria.sort {
        ContragentSort::Name => view.sort_by(|a, b| a.name.cmp(&b.name)),
        ContragentSort::OrdersCount => view.sort_by(|a, b| b.orders_count.cmp(&a.orders_count)),
        ContragentSort::TotalSum => {
            view.sort_by(|a, b| b.total_orders_sum.total_cmp(&a.total_orders_sum))
        }
        ContragentSort::AverageCheck => {
            view.sort_by(|a, b| b.average_check.total_cmp(&a.average_check))
        }
    }

    view
}

fn matches_query(contragent: &Contragent, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    contragent.name.to_lowercase().contains(&needle)
        || contragent.address.to_lowercase().contains(&needle)
}

/// Distinct legal forms present in the collection, sorted.
pub fn available_kinds(base: &[Contragent]) -> Vec<String> {
    let mut kinds: Vec<String> = base.iter().map(|c| c.kind.clone()).collect();
    kinds.sort();
    kinds.dedup();
    kinds
}

/// Distinct segments present in the collection, sorted.
pub fn available_segments(base: &[Contragent]) -> Vec<String> {
    let mut segments: Vec<String> = base.iter().map(|c| c.segment.clone()).collect();
    segments.sort();
    segments.dedup();
    segments
}
