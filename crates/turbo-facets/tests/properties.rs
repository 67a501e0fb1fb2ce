//! Property-based tests for the query engine and facet counts.
//!
//! 1. Results are a duplicate-free subset of the catalog, all matching.
//! 2. Adding a constraint never grows the result count.
//! 3. A facet count ignores its own dimension's active selection.
//! 4. Applying twice without staging in between changes nothing.
//! 5. Sorting is ordered and stable under every sort mode.

use proptest::prelude::*;
use turbo_facets::prelude::*;
use turbo_facets::filter::MAX_RATING;
use turbo_facets::search::{count, facet_count, matches, query_indices};

const COLORS: [&str; 3] = ["black", "white", "red"];
const COLLECTIONS: [&str; 2] = ["standard", "limited"];
const SIZES: [&str; 3] = ["M", "L", "XL"];

// ═══════════════════════════════════════════════════════════════════════════
// Strategy helpers
// ═══════════════════════════════════════════════════════════════════════════

fn family_strategy() -> impl Strategy<Value = ProductFamily> {
    prop_oneof![Just(ProductFamily::Mousepad), Just(ProductFamily::Apparel)]
}

fn apparel_type_strategy() -> impl Strategy<Value = ApparelType> {
    prop::sample::select(ApparelType::ALL.to_vec())
}

fn product_strategy() -> impl Strategy<Value = (ProductFamily, ApparelType, Option<usize>, Option<Vec<bool>>, u64, u8, u32, Option<usize>)> {
    (
        family_strategy(),
        apparel_type_strategy(),
        prop::option::of(0..COLORS.len()),
        prop::option::of(prop::collection::vec(any::<bool>(), SIZES.len())),
        0u64..50,
        0u8..=10,
        0u32..20,
        prop::option::of(0..COLLECTIONS.len()),
    )
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(product_strategy(), 0..25).prop_map(|raw| {
        let products = raw
            .into_iter()
            .enumerate()
            .map(|(i, (family, apparel_type, color, sizes, price, half_stars, reviews, collection))| {
                // Coarse prices and half-star ratings force plenty of ties.
                let mut product = Product::new(i as u64, family, price * 100)
                    .with_rating(f64::from(half_stars) / 2.0, reviews);
                if family == ProductFamily::Apparel {
                    product = product.with_apparel_type(apparel_type);
                }
                if let Some(c) = color {
                    product = product.with_color(COLORS[c]);
                }
                if let Some(mask) = sizes {
                    let tokens: Vec<&str> = SIZES
                        .iter()
                        .zip(mask)
                        .filter(|(_, on)| *on)
                        .map(|(t, _)| *t)
                        .collect();
                    product = product.with_sizes(tokens.join(", "));
                }
                if let Some(c) = collection {
                    product = product.with_collection(COLLECTIONS[c]);
                }
                product
            })
            .collect::<Vec<_>>();
        Catalog::new(products)
    })
}

fn filter_value_strategy() -> impl Strategy<Value = FilterValue> {
    prop_oneof![
        prop::sample::select(COLORS.to_vec()).prop_map(|c| FilterValue::Color(Color::from(c))),
        (family_strategy(), prop::sample::select(SIZES.to_vec()))
            .prop_map(|(f, t)| FilterValue::Size(SizeKey::new(f, t))),
        apparel_type_strategy().prop_map(FilterValue::ApparelType),
        prop::sample::select(COLLECTIONS.to_vec())
            .prop_map(|c| FilterValue::Collection(Collection::from(c))),
    ]
}

fn category_strategy() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        Just(CategoryFilter::Mousepad),
        Just(CategoryFilter::Apparel),
        apparel_type_strategy().prop_map(CategoryFilter::ApparelType),
    ]
}

fn state_strategy() -> impl Strategy<Value = FilterState> {
    (
        prop::sample::select(SortMode::ALL.to_vec()),
        category_strategy(),
        prop::collection::vec(filter_value_strategy(), 0..4),
        0u64..5000,
        0u64..5000,
        0u8..=10,
    )
        .prop_map(|(sort, category, values, lo, hi, half_stars)| {
            let mut state = FilterState::new(PriceRange::new(0u64, 5000u64));
            state.sort = sort;
            state.category = category;
            for value in values {
                state.active.insert(value);
            }
            state.pending = state.active.clone();
            state.price_range = PriceRange::new(lo, hi);
            state.min_rating = f64::from(half_stars) / 2.0;
            state
        })
}

// ═══════════════════════════════════════════════════════════════════════════
// 1. Subset
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]
    #[test]
    fn results_are_matching_subset(catalog in catalog_strategy(), state in state_strategy()) {
        let indices = query_indices(&catalog, &state);
        let mut seen = std::collections::HashSet::new();
        for &i in &indices {
            prop_assert!(i < catalog.len());
            prop_assert!(seen.insert(i), "duplicate index {}", i);
            prop_assert!(matches(&catalog.products()[i], &state));
        }
        let expected = catalog.iter().filter(|p| matches(p, &state)).count();
        prop_assert_eq!(indices.len(), expected);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 2. Monotonic narrowing
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]
    #[test]
    fn constraining_free_dimension_never_grows(
        catalog in catalog_strategy(),
        state in state_strategy(),
        value in filter_value_strategy(),
    ) {
        let mut narrowed = state.clone();
        narrowed.active.clear(value.dimension());
        let before = count(&catalog, &narrowed);
        narrowed.active.insert(value);
        prop_assert!(count(&catalog, &narrowed) <= before);
    }

    #[test]
    fn narrowing_price_never_grows(
        catalog in catalog_strategy(),
        state in state_strategy(),
        shrink_lo in 0u64..2000,
        shrink_hi in 0u64..2000,
    ) {
        let before = count(&catalog, &state);
        let range = state.price_range;
        let lo = range.min().amount().saturating_add(shrink_lo).min(range.max().amount());
        let hi = range.max().amount().saturating_sub(shrink_hi).max(lo);
        let mut narrowed = state.clone();
        narrowed.price_range = PriceRange::new(lo, hi);
        prop_assert!(range.encloses(&narrowed.price_range));
        prop_assert!(count(&catalog, &narrowed) <= before);
    }

    #[test]
    fn raising_min_rating_never_grows(
        catalog in catalog_strategy(),
        state in state_strategy(),
        bump in 0u8..=10,
    ) {
        let before = count(&catalog, &state);
        let mut narrowed = state.clone();
        narrowed.min_rating = (state.min_rating + f64::from(bump) / 2.0).min(MAX_RATING);
        prop_assert!(count(&catalog, &narrowed) <= before);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 3. Facet self-exclusion
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]
    #[test]
    fn facet_count_ignores_own_selection(
        catalog in catalog_strategy(),
        state in state_strategy(),
        value in filter_value_strategy(),
    ) {
        let dimension = value.dimension();
        let with_selection = facet_count(&catalog, &state, dimension, &value);

        let mut cleared = state.clone();
        cleared.active.clear(dimension);
        prop_assert_eq!(with_selection, facet_count(&catalog, &cleared, dimension, &value));

        let mut what_if = state.clone();
        what_if.active = state.active.with_only(&value);
        prop_assert_eq!(with_selection, count(&catalog, &what_if));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 4. Idempotent apply
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]
    #[test]
    fn apply_filters_is_idempotent(
        state in state_strategy(),
        toggles in prop::collection::vec(filter_value_strategy(), 0..6),
    ) {
        let vocab = Vocabulary::default()
            .with_colors(COLORS)
            .with_collections(COLLECTIONS)
            .with_sizes(ProductFamily::Mousepad, SIZES)
            .with_sizes(ProductFamily::Apparel, SIZES);
        let staged = toggles
            .into_iter()
            .fold(state, |s, v| apply(&s, &Action::toggle(v), &vocab));

        let once = apply(&staged, &Action::ApplyFilters, &vocab);
        let twice = apply(&once, &Action::ApplyFilters, &vocab);
        prop_assert_eq!(&once, &twice);
        prop_assert!(!once.has_pending_changes());
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 5. Sort order and stability
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]
    #[test]
    fn sort_is_ordered_and_stable(catalog in catalog_strategy(), state in state_strategy()) {
        let products = catalog.products();
        for mode in SortMode::ALL {
            let mut sorted = state.clone();
            sorted.sort = mode;
            let indices = query_indices(&catalog, &sorted);
            for pair in indices.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let ord = mode.compare(&products[a], &products[b]);
                prop_assert_ne!(ord, std::cmp::Ordering::Greater);
                if ord == std::cmp::Ordering::Equal {
                    prop_assert!(a < b, "{:?}: tie between {} and {} out of catalog order", mode, a, b);
                }
            }
        }
    }
}
