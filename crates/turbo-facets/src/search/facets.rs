//! "What-if" facet counts.
//!
//! The count shown next to a facet option is the result size if that option
//! were the only selection of its dimension, with every other dimension held
//! at its active constraints. The dimension's own active selection is
//! ignored, so ticking one size never zeroes the counts of its siblings.

use crate::catalog::Catalog;
use crate::config::Vocabulary;
use crate::filter::{CategoryFilter, Dimension, FilterState, FilterValue};
use crate::search::predicate::{matches_ignoring, matches_with_only, Predicate};
use serde::Serialize;

/// Result count if `value` were the only active selection of `dimension`.
///
/// A value that does not belong to `dimension` counts zero.
pub fn facet_count(
    catalog: &Catalog,
    state: &FilterState,
    dimension: Dimension,
    value: &FilterValue,
) -> usize {
    if value.dimension() != dimension {
        return 0;
    }
    catalog
        .iter()
        .filter(|p| matches_with_only(p, state, value))
        .count()
}

/// Result count if the category selector were `category`.
pub fn category_count(catalog: &Catalog, state: &FilterState, category: CategoryFilter) -> usize {
    catalog
        .iter()
        .filter(|p| category.matches(p) && matches_ignoring(p, state, Predicate::Category))
        .count()
}

/// One selectable option of a facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: FilterValue,
    /// What-if result count.
    pub count: usize,
    /// Currently applied.
    pub active: bool,
    /// Currently staged.
    pub pending: bool,
}

/// A steerable dimension with its options, in vocabulary order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facet {
    pub dimension: Dimension,
    pub options: Vec<FacetOption>,
}

impl Facet {
    /// Build a facet listing for `dimension`.
    ///
    /// Size options are limited to the families the category selector admits.
    pub fn build(
        catalog: &Catalog,
        state: &FilterState,
        vocabulary: &Vocabulary,
        dimension: Dimension,
    ) -> Self {
        Self::build_with(state, vocabulary, dimension, |value| {
            facet_count(catalog, state, dimension, value)
        })
    }

    /// Like [`Facet::build`], with counts supplied by `count`.
    pub fn build_with(
        state: &FilterState,
        vocabulary: &Vocabulary,
        dimension: Dimension,
        mut count: impl FnMut(&FilterValue) -> usize,
    ) -> Self {
        let options = vocabulary
            .values(dimension, state.category.families())
            .into_iter()
            .map(|value| FacetOption {
                count: count(&value),
                active: state.active.contains(&value),
                pending: state.pending.contains(&value),
                value,
            })
            .collect();

        Self { dimension, options }
    }

    /// Look up the option for `value`.
    pub fn option(&self, value: &FilterValue) -> Option<&FacetOption> {
        self.options.iter().find(|o| &o.value == value)
    }

    /// Options that would produce at least one result.
    pub fn available(&self) -> impl Iterator<Item = &FacetOption> {
        self.options.iter().filter(|o| o.count > 0)
    }
}
