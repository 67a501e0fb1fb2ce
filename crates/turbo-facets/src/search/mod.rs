//! Search module.
//!
//! Contains the predicate library, the query engine, facet counting and the
//! staged reveal window over results.

mod facets;
mod predicate;
mod query;
mod reveal;

pub use facets::{category_count, facet_count, Facet, FacetOption};
pub use predicate::{matches, matches_ignoring, matches_selection, matches_with_only, Predicate};
pub use query::{count, query, query_indices};
pub use reveal::StagedReveal;
