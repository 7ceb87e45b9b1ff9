//! Filtering for the product catalog.

use crate::model::Product;

/// Category restriction for the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Products whose category field is blank.
    Uncategorized,
    /// Exact category match.
    Named(String),
}

/// Active search/filter criteria for the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCriteria {
    /// Free-text search over name and article. Blank means no restriction.
    pub query: String,
    /// Category restriction; `None` means no restriction.
    pub category: Option<CategoryFilter>,
}

impl ProductCriteria {
    /// Drops the query and the category restriction.
    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.category = None;
    }
}

/// Derives the visible catalog from the full collection and the criteria.
///
/// The query matches case-insensitively as a substring of the product name
/// or its article; the category filter matches exactly, with
/// [`CategoryFilter::Uncategorized`] standing in for a blank category field.
/// Input order is preserved and the base collection is never modified.
pub fn compute_view(base: &[Product], criteria: &ProductCriteria) -> Vec<Product> {
    base.iter()
        .filter(|p| matches_query(p, &criteria.query))
        .filter(|p| match &criteria.category {
            None => true,
            Some(CategoryFilter::Uncategorized) => p.is_uncategorized(),
            Some(CategoryFilter::Named(name)) => p.category == *name,
        })
        .cloned()
        .collect()
}

fn matches_query(product: &Product, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    product.name.to_lowercase().contains(&needle)
        || product.article.to_lowercase().contains(&needle)
}

/// Distinct non-blank categories present in the collection, sorted.
pub fn categories(base: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = base
        .iter()
        .filter(|p| !p.is_uncategorized())
        .map(|p| p.category.clone())
        .collect();
    categories.sort();
    categories.dedup();
    categories
}
