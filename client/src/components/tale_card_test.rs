use super::*;
use crate::net::types::TaleAuthor;

fn sample() -> Tale {
    Tale {
        id: "t1".to_owned(),
        title: "The Brave Fox".to_owned(),
        content: "x".repeat(200),
        age_range: "5-7".to_owned(),
        topic: "animals".to_owned(),
        is_public: true,
        likes: 1,
        created_at: Some("2024-03-05T10:00:00Z".to_owned()),
        author: Some(TaleAuthor::Profile { id: "u1".to_owned(), name: Some("Alice".to_owned()) }),
    }
}

#[test]
fn summary_formats_display_fields() {
    let s = TaleCardSummary::from_tale(&sample());
    assert_eq!(s.href, "/tale/t1");
    assert_eq!(s.age, "5-7 years");
    assert_eq!(s.topic, "Animals");
    assert_eq!(s.likes, "1 like");
    assert_eq!(s.created.as_deref(), Some("Mar 5, 2024"));
    assert_eq!(s.author, "Alice");
    assert_eq!(s.visibility, "Public");
}

#[test]
fn summary_truncates_preview() {
    let s = TaleCardSummary::from_tale(&sample());
    assert_eq!(s.preview.chars().count(), PREVIEW_CHARS + 3);
    assert!(s.preview.ends_with("..."));
}

#[test]
fn summary_handles_missing_optional_fields() {
    let mut tale = sample();
    tale.is_public = false;
    tale.created_at = Some("not a date".to_owned());
    tale.author = Some(TaleAuthor::Id("u1".to_owned()));
    let s = TaleCardSummary::from_tale(&tale);
    assert_eq!(s.created, None);
    assert_eq!(s.author, "Anonymous");
    assert_eq!(s.visibility, "Private");
}
