//! Filter state module.
//!
//! Contains the filter state value, the actions that edit it, and the pure
//! transition function between them.

mod action;
mod state;
mod value;

pub use action::{apply, Action};
pub use state::{FilterSets, FilterState, MAX_RATING};
pub use value::{CategoryFilter, Dimension, FilterValue, SizeKey, SortMode};
