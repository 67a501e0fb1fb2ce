//! Faceted product filtering and sorting for TurboCommerce listings.
//!
//! This crate turns a product catalog and a filter state into an ordered
//! result list, computes "what-if" facet counts, and manages the two-phase
//! "stage then apply" editing model:
//!
//! - **Catalog**: Products from two families (mousepads and apparel)
//! - **Filter**: Filter state, actions and the pure transition function
//! - **Search**: Predicates, query engine, facet counts, staged reveal
//! - **Engine**: A store that owns the state and memoizes derived output
//!
//! # Example
//!
//! ```rust
//! use turbo_facets::prelude::*;
//!
//! let catalog = Catalog::new(vec![
//!     Product::new(1u64, ProductFamily::Mousepad, 2500u64)
//!         .with_sizes("L")
//!         .with_rating(5.0, 29),
//!     Product::new(2u64, ProductFamily::Mousepad, 3000u64)
//!         .with_sizes("XL")
//!         .with_rating(4.0, 8),
//! ]);
//! let mut engine = FacetEngine::with_defaults(catalog);
//!
//! let l_pad = FilterValue::Size(SizeKey::new(ProductFamily::Mousepad, "L"));
//! engine.dispatch(Action::toggle(l_pad));
//! engine.dispatch(Action::ApplyFilters);
//!
//! assert_eq!(engine.visible_results().len(), 1);
//!
//! let xl_pad = FilterValue::Size(SizeKey::new(ProductFamily::Mousepad, "XL"));
//! assert_eq!(engine.facet_count(Dimension::Size, &xl_pad), 1);
//! ```

pub mod config;
pub mod error;
pub mod keys;
pub mod money;

pub mod catalog;
pub mod engine;
pub mod filter;
pub mod search;

pub use config::{EngineConfig, Vocabulary, VocabularyConfig};
pub use engine::FacetEngine;
pub use error::FacetError;
pub use keys::*;
pub use money::{Price, PriceRange};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{EngineConfig, Vocabulary, VocabularyConfig};
    pub use crate::engine::FacetEngine;
    pub use crate::error::FacetError;
    pub use crate::keys::*;
    pub use crate::money::{Price, PriceRange};

    // Catalog
    pub use crate::catalog::{ApparelType, Catalog, Product, ProductFamily};

    // Filter
    pub use crate::filter::{
        apply, Action, CategoryFilter, Dimension, FilterSets, FilterState, FilterValue, SizeKey,
        SortMode,
    };

    // Search
    pub use crate::search::{Facet, FacetOption, StagedReveal};
}
