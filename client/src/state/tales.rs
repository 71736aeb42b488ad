//! Dashboard list state: the signed-in user's tales and their counters.
//!
//! DESIGN
//! ======
//! Stats are computed once when the list loads and then adjusted in place after
//! each successful mutation, so the counters never need a refetch.

#[cfg(test)]
#[path = "tales_test.rs"]
mod tales_test;

use crate::net::types::Tale;

/// Aggregate counters shown above the dashboard list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaleStats {
    pub total_tales: usize,
    pub public_tales: usize,
    pub likes_received: u64,
}

impl TaleStats {
    pub fn from_tales(tales: &[Tale]) -> Self {
        Self {
            total_tales: tales.len(),
            public_tales: tales.iter().filter(|t| t.is_public).count(),
            likes_received: tales.iter().map(|t| t.likes).sum(),
        }
    }
}

/// Shared dashboard state backed by REST calls.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub items: Vec<Tale>,
    pub stats: TaleStats,
    pub loading: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self { items: Vec::new(), stats: TaleStats::default(), loading: true }
    }
}

impl DashboardState {
    /// Replace the list after a fetch and recompute counters.
    pub fn set_items(&mut self, tales: Vec<Tale>) {
        self.stats = TaleStats::from_tales(&tales);
        self.items = tales;
        self.loading = false;
    }

    pub fn find(&self, id: &str) -> Option<&Tale> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Record a confirmed visibility change. Returns `false` if the tale is
    /// unknown or already had that visibility.
    pub fn apply_visibility(&mut self, id: &str, is_public: bool) -> bool {
        let Some(tale) = self.items.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if tale.is_public == is_public {
            return false;
        }
        tale.is_public = is_public;
        if is_public {
            self.stats.public_tales += 1;
        } else {
            self.stats.public_tales = self.stats.public_tales.saturating_sub(1);
        }
        true
    }

    /// Remove a deleted tale and subtract it from the counters.
    pub fn remove(&mut self, id: &str) -> Option<Tale> {
        let index = self.items.iter().position(|t| t.id == id)?;
        let tale = self.items.remove(index);
        self.stats.total_tales = self.stats.total_tales.saturating_sub(1);
        if tale.is_public {
            self.stats.public_tales = self.stats.public_tales.saturating_sub(1);
        }
        self.stats.likes_received = self.stats.likes_received.saturating_sub(tale.likes);
        Some(tale)
    }
}
