//! The facet engine store.
//!
//! Owns the catalog, the filter state, the reveal cursor and the memoized
//! query output. All edits go through [`FacetEngine::dispatch`].

use crate::catalog::{Catalog, Product};
use crate::config::{EngineConfig, Vocabulary};
use crate::filter::{apply, Action, CategoryFilter, Dimension, FilterState, FilterValue};
use crate::search::{self, Facet, StagedReveal};
use std::collections::HashMap;

/// Faceted filtering engine for one browsing session.
#[derive(Debug, Clone)]
pub struct FacetEngine {
    catalog: Catalog,
    config: EngineConfig,
    vocabulary: Vocabulary,
    state: FilterState,
    reveal: StagedReveal,
    /// Catalog positions of the current results, in result order.
    results: Vec<usize>,
    facet_counts: HashMap<FilterValue, usize>,
    category_counts: HashMap<CategoryFilter, usize>,
}

impl FacetEngine {
    /// Create an engine in its initial state.
    pub fn new(catalog: Catalog, config: EngineConfig) -> Self {
        let bounds = config.price_bounds.unwrap_or_else(|| catalog.price_span());
        let vocabulary = config.vocabulary.resolve(&catalog);
        let state = FilterState::new(bounds);
        let reveal = StagedReveal::new(config.page_size);
        let results = search::query_indices(&catalog, &state);

        tracing::debug!(
            products = catalog.len(),
            page_size = reveal.page_size(),
            price_bounds = %bounds,
            colors = vocabulary.colors.len(),
            collections = vocabulary.collections.len(),
            "Initialized facet engine"
        );

        Self {
            catalog,
            config,
            vocabulary,
            state,
            reveal,
            results,
            facet_counts: HashMap::new(),
            category_counts: HashMap::new(),
        }
    }

    /// Create an engine with default configuration, deriving price bounds and
    /// vocabulary from the catalog.
    pub fn with_defaults(catalog: Catalog) -> Self {
        Self::new(catalog, EngineConfig::default())
    }

    /// Apply an action and refresh derived output.
    ///
    /// Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = apply(&self.state, &action, &self.vocabulary);
        let changed = next != self.state;
        let query_changed = next.query_differs(&self.state);
        let sort_changed = next.sort != self.state.sort;
        let reset = query_changed
            || sort_changed
            || matches!(action, Action::ApplyFilters | Action::ResetFilters);

        self.state = next;

        if query_changed {
            self.facet_counts.clear();
            self.category_counts.clear();
        }
        if query_changed || sort_changed {
            self.results = search::query_indices(&self.catalog, &self.state);
        }
        if reset {
            self.reveal.reset();
        }

        tracing::debug!(
            action = action.name(),
            changed,
            query_changed,
            reveal_reset = reset,
            results = self.results.len(),
            "Dispatched filter action"
        );

        changed
    }

    /// Replace the whole state, e.g. one restored by a persistence layer.
    pub fn restore(&mut self, state: FilterState) {
        self.state = state;
        self.results = search::query_indices(&self.catalog, &self.state);
        self.facet_counts.clear();
        self.category_counts.clear();
        self.reveal.reset();
        tracing::debug!(results = self.results.len(), "Restored filter state");
    }

    pub fn current_state(&self) -> &FilterState {
        &self.state
    }

    pub fn has_pending_changes(&self) -> bool {
        self.state.has_pending_changes()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The resolved selectable values.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Every matching product, in result order.
    pub fn results(&self) -> Vec<&Product> {
        self.results
            .iter()
            .filter_map(|&i| self.catalog.get(i))
            .collect()
    }

    /// The revealed prefix of the results.
    pub fn visible_results(&self) -> Vec<&Product> {
        self.reveal
            .window(&self.results)
            .iter()
            .filter_map(|&i| self.catalog.get(i))
            .collect()
    }

    pub fn total_results(&self) -> usize {
        self.results.len()
    }

    pub fn visible_count(&self) -> usize {
        self.reveal.visible_count(self.results.len())
    }

    pub fn has_more(&self) -> bool {
        self.reveal.has_more(self.results.len())
    }

    /// Reveal one more page of results.
    pub fn load_more(&mut self) {
        self.reveal.load_more();
        tracing::trace!(cursor = self.reveal.cursor(), "Revealed more results");
    }

    /// What-if count for `value` in `dimension`, memoized until a predicate input changes.
    pub fn facet_count(&mut self, dimension: Dimension, value: &FilterValue) -> usize {
        if value.dimension() != dimension {
            return 0;
        }
        if let Some(&count) = self.facet_counts.get(value) {
            return count;
        }
        let count = search::facet_count(&self.catalog, &self.state, dimension, value);
        self.facet_counts.insert(value.clone(), count);
        count
    }

    /// What-if count for switching the category selector to `category`.
    pub fn category_count(&mut self, category: CategoryFilter) -> usize {
        if let Some(&count) = self.category_counts.get(&category) {
            return count;
        }
        let count = search::category_count(&self.catalog, &self.state, category);
        self.category_counts.insert(category, count);
        count
    }

    /// Facet listing for `dimension`, using memoized counts.
    pub fn facet(&mut self, dimension: Dimension) -> Facet {
        let FacetEngine {
            ref catalog,
            ref vocabulary,
            ref state,
            ref mut facet_counts,
            ..
        } = *self;

        Facet::build_with(state, vocabulary, dimension, |value| {
            *facet_counts
                .entry(value.clone())
                .or_insert_with(|| search::facet_count(catalog, state, dimension, value))
        })
    }
}
