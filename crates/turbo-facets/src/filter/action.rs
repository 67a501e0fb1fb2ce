//! Filter actions and the transition function.

use crate::config::Vocabulary;
use crate::filter::state::MAX_RATING;
use crate::filter::{CategoryFilter, Dimension, FilterState, FilterValue, SortMode};
use crate::money::{Price, PriceRange};
use serde::{Deserialize, Serialize};

/// An edit dispatched by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Replace the sort mode.
    SetSort { mode: SortMode },
    /// Replace the category selector. Clears active and pending sizes.
    SetCategory { category: CategoryFilter },
    /// Stage or unstage one value.
    TogglePending { dimension: Dimension, value: FilterValue },
    /// Commit every pending set to the active set.
    ApplyFilters,
    /// Throw away staged edits, pending := active.
    DiscardPending,
    /// Set the active price range, swapping inverted bounds.
    SetPriceRange { min: Price, max: Price },
    /// Set the active minimum rating.
    SetMinRating { rating: f64 },
    /// Remove one value from both active and pending sets immediately.
    RemoveActiveFilter { dimension: Dimension, value: FilterValue },
    /// Restore every field to its initial value.
    ResetFilters,
}

impl Action {
    pub fn set_sort(mode: SortMode) -> Self {
        Action::SetSort { mode }
    }

    pub fn set_category(category: CategoryFilter) -> Self {
        Action::SetCategory { category }
    }

    /// Toggle a value, dimension taken from the value itself.
    pub fn toggle(value: impl Into<FilterValue>) -> Self {
        let value = value.into();
        Action::TogglePending {
            dimension: value.dimension(),
            value,
        }
    }

    /// Remove an active value, dimension taken from the value itself.
    pub fn remove(value: impl Into<FilterValue>) -> Self {
        let value = value.into();
        Action::RemoveActiveFilter {
            dimension: value.dimension(),
            value,
        }
    }

    pub fn set_price_range(min: impl Into<Price>, max: impl Into<Price>) -> Self {
        Action::SetPriceRange {
            min: min.into(),
            max: max.into(),
        }
    }

    pub fn set_min_rating(rating: f64) -> Self {
        Action::SetMinRating { rating }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::SetSort { .. } => "set_sort",
            Action::SetCategory { .. } => "set_category",
            Action::TogglePending { .. } => "toggle_pending",
            Action::ApplyFilters => "apply_filters",
            Action::DiscardPending => "discard_pending",
            Action::SetPriceRange { .. } => "set_price_range",
            Action::SetMinRating { .. } => "set_min_rating",
            Action::RemoveActiveFilter { .. } => "remove_active_filter",
            Action::ResetFilters => "reset_filters",
        }
    }
}

/// Check that a dimension/value pair refers to something selectable.
fn is_selectable(dimension: Dimension, value: &FilterValue, vocabulary: &Vocabulary) -> bool {
    value.dimension() == dimension && vocabulary.contains(value)
}

/// Compute the state that follows `action`.
///
/// Never fails: actions naming an unknown dimension/value pair or an
/// unusable rating return an unchanged copy of `state`.
pub fn apply(state: &FilterState, action: &Action, vocabulary: &Vocabulary) -> FilterState {
    let mut next = state.clone();

    match action {
        Action::SetSort { mode } => {
            next.sort = *mode;
        }
        Action::SetCategory { category } => {
            next.category = *category;
            next.active.clear(Dimension::Size);
            next.pending.clear(Dimension::Size);
        }
        Action::TogglePending { dimension, value } => {
            if is_selectable(*dimension, value, vocabulary) {
                next.pending.toggle(value.clone());
            } else {
                tracing::debug!(%dimension, %value, "Ignoring toggle of unknown filter value");
            }
        }
        Action::ApplyFilters => {
            next.active = next.pending.clone();
        }
        Action::DiscardPending => {
            next.pending = next.active.clone();
        }
        Action::SetPriceRange { min, max } => {
            next.price_range = PriceRange::new(*min, *max);
        }
        Action::SetMinRating { rating } => {
            if rating.is_finite() {
                next.min_rating = rating.clamp(0.0, MAX_RATING);
            } else {
                tracing::debug!(rating, "Ignoring non-finite minimum rating");
            }
        }
        Action::RemoveActiveFilter { dimension, value } => {
            if value.dimension() == *dimension {
                next.active.remove(value);
                next.pending.remove(value);
            } else {
                tracing::debug!(%dimension, %value, "Ignoring removal with mismatched dimension");
            }
        }
        Action::ResetFilters => {
            next = FilterState::new(state.price_bounds);
        }
    }

    next
}

impl FilterState {
    /// Method form of [`apply`].
    pub fn apply(&self, action: &Action, vocabulary: &Vocabulary) -> FilterState {
        apply(self, action, vocabulary)
    }
}
