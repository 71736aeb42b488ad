//! Public gallery filters.
//!
//! The gallery fetches every public tale once and narrows the list locally:
//! a free-text term over title and content, plus exact-match age range and
//! topic facets. An empty term or facet matches everything.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::net::types::Tale;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryFilters {
    pub search: String,
    pub age_range: String,
    pub topic: String,
}

impl GalleryFilters {
    pub fn matches(&self, tale: &Tale) -> bool {
        self.matches_search(tale)
            && (self.age_range.is_empty() || tale.age_range == self.age_range)
            && (self.topic.is_empty() || tale.topic == self.topic)
    }

    fn matches_search(&self, tale: &Tale) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        tale.title.to_lowercase().contains(&needle) || tale.content.to_lowercase().contains(&needle)
    }

    pub fn is_active(&self) -> bool {
        !(self.search.is_empty() && self.age_range.is_empty() && self.topic.is_empty())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Tales passing `filters`, in their original order.
pub fn filter_tales(tales: &[Tale], filters: &GalleryFilters) -> Vec<Tale> {
    tales.iter().filter(|t| filters.matches(t)).cloned().collect()
}

/// Gallery page state.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    pub tales: Vec<Tale>,
    pub filters: GalleryFilters,
    pub loading: bool,
    pub show_filters: bool,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self { tales: Vec::new(), filters: GalleryFilters::default(), loading: true, show_filters: false }
    }
}

impl GalleryState {
    pub fn visible(&self) -> Vec<Tale> {
        filter_tales(&self.tales, &self.filters)
    }
}
