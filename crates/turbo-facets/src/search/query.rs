//! Query engine: filter then stable sort.

use crate::catalog::{Catalog, Product};
use crate::filter::{FilterState, SortMode};
use crate::search::predicate::matches;
use std::cmp::Ordering;

impl SortMode {
    /// Compare two products under this mode.
    ///
    /// Products that compare `Equal` keep their catalog order, because the
    /// engine always sorts with a stable sort.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortMode::Popularity => b.popularity().total_cmp(&a.popularity()),
            SortMode::Rating => b
                .rating
                .total_cmp(&a.rating)
                .then_with(|| b.review_count.cmp(&a.review_count)),
            SortMode::PriceAscending => a.price_numeric.cmp(&b.price_numeric),
            SortMode::PriceDescending => b.price_numeric.cmp(&a.price_numeric),
            // Undated products sort last.
            SortMode::Newest => b.added_date.cmp(&a.added_date),
        }
    }
}

/// Catalog positions of matching products, in result order.
pub fn query_indices(catalog: &Catalog, state: &FilterState) -> Vec<usize> {
    let products = catalog.products();
    let mut indices: Vec<usize> = products
        .iter()
        .enumerate()
        .filter(|(_, p)| matches(p, state))
        .map(|(i, _)| i)
        .collect();

    // `sort_by` is stable.
    indices.sort_by(|&a, &b| state.sort.compare(&products[a], &products[b]));
    indices
}

/// Matching products, in result order.
pub fn query<'a>(catalog: &'a Catalog, state: &FilterState) -> Vec<&'a Product> {
    let products = catalog.products();
    query_indices(catalog, state)
        .into_iter()
        .map(|i| &products[i])
        .collect()
}

/// Number of matching products. Sort order does not affect the count.
pub fn count(catalog: &Catalog, state: &FilterState) -> usize {
    catalog.iter().filter(|p| matches(p, state)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductFamily;
    use crate::filter::{FilterValue, SizeKey};
    use chrono::NaiveDate;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    fn scenario_catalog() -> Catalog {
        Catalog::new(vec![
            Product::new(1u64, ProductFamily::Mousepad, 2500u64)
                .with_sizes("L")
                .with_rating(5.0, 29),
            Product::new(2u64, ProductFamily::Mousepad, 3000u64)
                .with_sizes("XL")
                .with_rating(4.0, 8),
        ])
    }

    #[test]
    fn test_size_filter_scenario() {
        let catalog = scenario_catalog();
        let mut state = FilterState::default();
        state.active.insert(FilterValue::Size(SizeKey::new(ProductFamily::Mousepad, "L")));

        let results = query(&catalog, &state);
        assert_eq!(ids(&results), vec!["1"]);
        assert_eq!(count(&catalog, &state), 1);
    }

    #[test]
    fn test_price_sorts() {
        let catalog = scenario_catalog();
        let mut state = FilterState::default();

        state.sort = SortMode::PriceDescending;
        assert_eq!(ids(&query(&catalog, &state)), vec!["2", "1"]);

        state.sort = SortMode::PriceAscending;
        assert_eq!(ids(&query(&catalog, &state)), vec!["1", "2"]);
    }

    #[test]
    fn test_rating_tie_break_on_reviews() {
        let catalog = Catalog::new(vec![
            Product::new("a", ProductFamily::Mousepad, 100u64).with_rating(4.0, 3),
            Product::new("b", ProductFamily::Mousepad, 100u64).with_rating(4.0, 30),
            Product::new("c", ProductFamily::Mousepad, 100u64).with_rating(4.5, 1),
        ]);
        let mut state = FilterState::default();
        state.sort = SortMode::Rating;
        assert_eq!(ids(&query(&catalog, &state)), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_popularity_is_rating_times_reviews() {
        let catalog = Catalog::new(vec![
            // 4.5 * 1 = 4.5
            Product::new("a", ProductFamily::Mousepad, 100u64).with_rating(4.5, 1),
            // 3.0 * 10 = 30
            Product::new("b", ProductFamily::Mousepad, 100u64).with_rating(3.0, 10),
            // 5.0 * 4 = 20
            Product::new("c", ProductFamily::Mousepad, 100u64).with_rating(5.0, 4),
        ]);
        let state = FilterState::default();
        assert_eq!(ids(&query(&catalog, &state)), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = Catalog::new(vec![
            Product::new("x", ProductFamily::Mousepad, 500u64).with_rating(4.0, 10),
            Product::new("y", ProductFamily::Apparel, 500u64).with_rating(4.0, 10),
            Product::new("z", ProductFamily::Mousepad, 500u64).with_rating(4.0, 10),
        ]);
        let mut state = FilterState::default();
        for mode in SortMode::ALL {
            state.sort = mode;
            assert_eq!(ids(&query(&catalog, &state)), vec!["x", "y", "z"], "{:?}", mode);
        }
    }

    #[test]
    fn test_newest_undated_last() {
        let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let catalog = Catalog::new(vec![
            Product::new("old", ProductFamily::Mousepad, 100u64).with_added_date(date(1)),
            Product::new("undated", ProductFamily::Mousepad, 100u64),
            Product::new("new", ProductFamily::Mousepad, 100u64).with_added_date(date(20)),
        ]);
        let mut state = FilterState::default();
        state.sort = SortMode::Newest;
        assert_eq!(ids(&query(&catalog, &state)), vec!["new", "old", "undated"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(query(&catalog, &FilterState::default()).is_empty());
    }
}
