//! Per-dimension product predicates.
//!
//! A product matches a filter state when every predicate passes (AND across
//! dimensions). Within a steerable dimension the selected values are OR-ed.
//! Predicates only read the active selections, never the pending ones.

use crate::catalog::Product;
use crate::filter::{Dimension, FilterSets, FilterState, FilterValue};

/// One independent filter predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    Category,
    Steerable(Dimension),
    Price,
    Rating,
}

impl Predicate {
    pub const ALL: [Predicate; 7] = [
        Predicate::Category,
        Predicate::Steerable(Dimension::Color),
        Predicate::Steerable(Dimension::Size),
        Predicate::Steerable(Dimension::ApparelType),
        Predicate::Steerable(Dimension::Collection),
        Predicate::Price,
        Predicate::Rating,
    ];

    /// Evaluate this predicate against the active part of `state`.
    pub fn evaluate(&self, product: &Product, state: &FilterState) -> bool {
        match self {
            Predicate::Category => state.category.matches(product),
            Predicate::Steerable(dimension) => matches_selection(product, &state.active, *dimension),
            Predicate::Price => state.price_range.contains(product.price_numeric),
            Predicate::Rating => product.rating >= state.min_rating,
        }
    }
}

/// Empty selection passes; otherwise the product must carry any selected value.
pub fn matches_selection(product: &Product, sets: &FilterSets, dimension: Dimension) -> bool {
    if sets.is_unconstrained(dimension) {
        return true;
    }
    match dimension {
        Dimension::Color => product
            .color
            .as_ref()
            .is_some_and(|c| sets.colors.contains(c)),
        Dimension::Size => sets.sizes.iter().any(|key| key.matches(product)),
        Dimension::ApparelType => product
            .garment_type()
            .is_some_and(|t| sets.apparel_types.contains(&t)),
        Dimension::Collection => product
            .collection
            .as_ref()
            .is_some_and(|c| sets.collections.contains(c)),
    }
}

/// Conjunction of every predicate.
pub fn matches(product: &Product, state: &FilterState) -> bool {
    Predicate::ALL.iter().all(|p| p.evaluate(product, state))
}

/// Conjunction of every predicate except `skip`.
pub fn matches_ignoring(product: &Product, state: &FilterState, skip: Predicate) -> bool {
    Predicate::ALL
        .iter()
        .filter(|p| **p != skip)
        .all(|p| p.evaluate(product, state))
}

/// Would `product` match if `value` were the only selection of its dimension?
pub fn matches_with_only(product: &Product, state: &FilterState, value: &FilterValue) -> bool {
    value.matches(product)
        && matches_ignoring(product, state, Predicate::Steerable(value.dimension()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ApparelType, ProductFamily};
    use crate::filter::{CategoryFilter, SizeKey};
    use crate::keys::{Collection, Color};
    use crate::money::PriceRange;

    fn hoodie() -> Product {
        Product::new("h", ProductFamily::Apparel, 6000u64)
            .with_apparel_type(ApparelType::Hoodie)
            .with_color("black")
            .with_sizes("M, L")
            .with_rating(4.0, 10)
            .with_collection("standard")
    }

    fn mousepad() -> Product {
        Product::new("p", ProductFamily::Mousepad, 2500u64)
            .with_color("white")
            .with_sizes("L")
            .with_rating(5.0, 29)
    }

    #[test]
    fn test_empty_state_matches_everything() {
        let state = FilterState::default();
        assert!(matches(&hoodie(), &state));
        assert!(matches(&mousepad(), &state));
    }

    #[test]
    fn test_color_or_within_dimension() {
        let mut state = FilterState::default();
        state.active.insert(FilterValue::Color(Color::from("black")));
        assert!(matches(&hoodie(), &state));
        assert!(!matches(&mousepad(), &state));

        state.active.insert(FilterValue::Color(Color::from("white")));
        assert!(matches(&mousepad(), &state));
    }

    #[test]
    fn test_and_across_dimensions() {
        let mut state = FilterState::default();
        state.active.insert(FilterValue::Color(Color::from("black")));
        state.active.insert(FilterValue::Collection(Collection::from("limited")));
        assert!(!matches(&hoodie(), &state));
    }

    #[test]
    fn test_size_is_family_scoped() {
        let mut state = FilterState::default();
        state.active.insert(FilterValue::Size(SizeKey::new(ProductFamily::Mousepad, "L")));
        assert!(matches(&mousepad(), &state));
        assert!(!matches(&hoodie(), &state));

        state.active.insert(FilterValue::Size(SizeKey::new(ProductFamily::Apparel, "L")));
        assert!(matches(&hoodie(), &state));
    }

    #[test]
    fn test_missing_attributes_never_match_active_filter() {
        let bare = Product::new("b", ProductFamily::Mousepad, 100u64);
        let mut state = FilterState::default();
        assert!(matches(&bare, &state));

        state.active.insert(FilterValue::Size(SizeKey::new(ProductFamily::Mousepad, "L")));
        assert!(!matches(&bare, &state));

        let mut state = FilterState::default();
        state.active.insert(FilterValue::Collection(Collection::from("standard")));
        assert!(!matches(&bare, &state));
    }

    #[test]
    fn test_apparel_type_requires_apparel_family() {
        let stray = mousepad().with_apparel_type(ApparelType::Hoodie);
        let mut state = FilterState::default();
        state.active.insert(FilterValue::ApparelType(ApparelType::Hoodie));
        assert!(!matches(&stray, &state));
        assert!(matches(&hoodie(), &state));

        let hoodies = FilterValue::ApparelType(ApparelType::Hoodie);
        assert!(!matches_with_only(&stray, &FilterState::default(), &hoodies));
    }

    #[test]
    fn test_price_inclusive() {
        let mut state = FilterState::default();
        state.price_range = PriceRange::new(2500u64, 2500u64);
        assert!(matches(&mousepad(), &state));
        assert!(!matches(&hoodie(), &state));
    }

    #[test]
    fn test_min_rating() {
        let mut state = FilterState::default();
        state.min_rating = 4.5;
        assert!(matches(&mousepad(), &state));
        assert!(!matches(&hoodie(), &state));
    }

    #[test]
    fn test_category_predicate() {
        let mut state = FilterState::default();
        state.category = CategoryFilter::ApparelType(ApparelType::Hoodie);
        assert!(matches(&hoodie(), &state));
        assert!(!matches(&mousepad(), &state));
        assert!(matches_ignoring(&mousepad(), &state, Predicate::Category));
    }

    #[test]
    fn test_pending_is_ignored() {
        let mut state = FilterState::default();
        state.pending.insert(FilterValue::Color(Color::from("red")));
        assert!(matches(&hoodie(), &state));
    }

    #[test]
    fn test_matches_with_only() {
        let mut state = FilterState::default();
        state.active.insert(FilterValue::Size(SizeKey::new(ProductFamily::Mousepad, "XL")));
        let l_pad = FilterValue::Size(SizeKey::new(ProductFamily::Mousepad, "L"));
        assert!(!matches(&mousepad(), &state));
        assert!(matches_with_only(&mousepad(), &state, &l_pad));
    }
}
