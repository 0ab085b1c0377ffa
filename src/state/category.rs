//! Selected note category.
//!
//! SYSTEM CONTEXT
//! ==============
//! Note lists filter on this value; the category picker writes it.

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

use leptos::prelude::*;

/// Currently selected category. Empty means no filter.
#[derive(Clone, Copy, Debug)]
pub struct CategoryStore {
    selected_category: RwSignal<String>,
}

impl Default for CategoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryStore {
    pub fn new() -> Self {
        Self { selected_category: RwSignal::new(String::new()) }
    }

    /// Overwrite the selection. Any string is accepted, including empty.
    pub fn set_category(&self, category: impl Into<String>) {
        self.selected_category.set(category.into());
    }

    pub fn selected_category(&self) -> String {
        self.selected_category.get_untracked()
    }

    /// Reactive handle for views.
    pub fn selected_category_signal(&self) -> ReadSignal<String> {
        self.selected_category.read_only()
    }
}
