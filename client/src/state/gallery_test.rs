use super::*;
use crate::state::test_support::described;

fn library() -> Vec<Tale> {
    vec![
        described("1", "The Brave Fox", "A fox crosses the river.", "5-7", "animals"),
        described("2", "Moon Base", "Astronauts find a FOX-shaped rock.", "8-10", "space"),
        described("3", "Castle Dreams", "A knight and a dragon.", "5-7", "fantasy"),
    ]
}

fn ids(tales: &[Tale]) -> Vec<&str> {
    tales.iter().map(|t| t.id.as_str()).collect()
}

// =============================================================
// GalleryFilters
// =============================================================

#[test]
fn empty_filters_match_everything() {
    let tales = library();
    assert_eq!(ids(&filter_tales(&tales, &GalleryFilters::default())), vec!["1", "2", "3"]);
}

#[test]
fn search_is_case_insensitive_over_title_and_content() {
    let tales = library();
    let filters = GalleryFilters { search: "fox".to_owned(), ..GalleryFilters::default() };
    assert_eq!(ids(&filter_tales(&tales, &filters)), vec!["1", "2"]);
}

#[test]
fn age_range_facet_is_exact() {
    let tales = library();
    let filters = GalleryFilters { age_range: "5-7".to_owned(), ..GalleryFilters::default() };
    assert_eq!(ids(&filter_tales(&tales, &filters)), vec!["1", "3"]);
}

#[test]
fn facets_and_search_combine() {
    let tales = library();
    let filters = GalleryFilters {
        search: "FOX".to_owned(),
        age_range: "8-10".to_owned(),
        topic: "space".to_owned(),
    };
    assert_eq!(ids(&filter_tales(&tales, &filters)), vec!["2"]);
}

#[test]
fn unmatched_topic_yields_nothing() {
    let tales = library();
    let filters = GalleryFilters { topic: "sports".to_owned(), ..GalleryFilters::default() };
    assert!(filter_tales(&tales, &filters).is_empty());
}

#[test]
fn reset_clears_all_filters() {
    let mut filters = GalleryFilters {
        search: "x".to_owned(),
        age_range: "2-4".to_owned(),
        topic: "nature".to_owned(),
    };
    assert!(filters.is_active());
    filters.reset();
    assert!(!filters.is_active());
    assert_eq!(filters, GalleryFilters::default());
}

// =============================================================
// GalleryState
// =============================================================

#[test]
fn gallery_defaults_to_loading_with_hidden_filters() {
    let state = GalleryState::default();
    assert!(state.loading);
    assert!(!state.show_filters);
}

#[test]
fn visible_applies_filters() {
    let state = GalleryState {
        tales: library(),
        filters: GalleryFilters { topic: "fantasy".to_owned(), ..GalleryFilters::default() },
        loading: false,
        show_filters: true,
    };
    assert_eq!(ids(&state.visible()), vec!["3"]);
}
