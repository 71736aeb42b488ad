//! Tale detail state: the loaded tale and the viewer's like.

#[cfg(test)]
#[path = "tale_view_test.rs"]
mod tale_view_test;

use crate::net::types::Tale;
use crate::session::IdentityClaims;

#[derive(Clone, Debug, PartialEq)]
pub struct TaleViewState {
    pub tale: Option<Tale>,
    pub liked: bool,
    pub loading: bool,
}

impl Default for TaleViewState {
    fn default() -> Self {
        Self { tale: None, liked: false, loading: true }
    }
}

impl TaleViewState {
    pub fn loaded(&mut self, tale: Option<Tale>) {
        self.tale = tale;
        self.loading = false;
    }

    /// Record the liked flag returned by a like toggle. The API reports the
    /// new state, so the counter moves by one in that direction.
    pub fn apply_like_toggle(&mut self, liked: bool) {
        self.liked = liked;
        if let Some(tale) = self.tale.as_mut() {
            tale.likes = if liked { tale.likes + 1 } else { tale.likes.saturating_sub(1) };
        }
    }

    /// Whether `viewer` wrote the loaded tale.
    pub fn is_authored_by(&self, viewer: Option<&IdentityClaims>) -> bool {
        match (viewer, self.tale.as_ref().and_then(|t| t.author.as_ref())) {
            (Some(viewer), Some(author)) => viewer.id == author.id(),
            _ => false,
        }
    }
}
