//! Fixed option lists shared by the generate form and gallery facets.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// `(value, label)` pairs for the child age ranges the generator supports.
pub const AGE_RANGES: &[(&str, &str)] = &[
    ("2-4", "2-4 years (Toddlers)"),
    ("5-7", "5-7 years (Early readers)"),
    ("8-10", "8-10 years (Middle childhood)"),
    ("11-13", "11-13 years (Pre-teens)"),
];

/// `(value, label)` pairs for story topics.
pub const TOPICS: &[(&str, &str)] = &[
    ("adventure", "Adventure"),
    ("fantasy", "Fantasy"),
    ("animals", "Animals"),
    ("friendship", "Friendship"),
    ("nature", "Nature"),
    ("space", "Space"),
    ("science", "Science"),
    ("history", "History"),
    ("sports", "Sports"),
];

pub fn is_age_range(value: &str) -> bool {
    AGE_RANGES.iter().any(|(v, _)| *v == value)
}

pub fn is_topic(value: &str) -> bool {
    TOPICS.iter().any(|(v, _)| *v == value)
}

/// Short facet label for an age range: `"5-7"` becomes `"5-7 years"`.
pub fn age_facet_label(value: &str) -> String {
    format!("{value} years")
}
