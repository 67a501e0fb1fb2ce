//! Staged reveal of the result list.

use crate::config::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Visible-count cursor over the result list.
///
/// Starts at one page, grows a page per [`StagedReveal::load_more`], and
/// goes back to one page whenever the result list changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StagedReveal {
    page_size: usize,
    visible: usize,
}

impl StagedReveal {
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            visible: page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Cursor position, which may exceed the number of results.
    pub fn cursor(&self) -> usize {
        self.visible
    }

    pub fn load_more(&mut self) {
        self.visible = self.visible.saturating_add(self.page_size);
    }

    pub fn reset(&mut self) {
        self.visible = self.page_size;
    }

    /// Number of results shown out of `total`.
    pub fn visible_count(&self, total: usize) -> usize {
        self.visible.min(total)
    }

    /// Check whether results remain hidden.
    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    /// Number of results still hidden.
    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.visible)
    }

    /// The visible prefix of `items`.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible_count(items.len())]
    }
}

impl Default for StagedReveal {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
