use super::*;

// =============================================================
// format_date
// =============================================================

#[test]
fn format_date_reads_rfc3339() {
    assert_eq!(format_date("2024-03-05T10:00:00.000Z").as_deref(), Some("Mar 5, 2024"));
}

#[test]
fn format_date_reads_plain_date() {
    assert_eq!(format_date("2023-12-25").as_deref(), Some("Dec 25, 2023"));
}

#[test]
fn format_date_rejects_garbage() {
    assert_eq!(format_date("yesterday"), None);
    assert_eq!(format_date(""), None);
}

// =============================================================
// truncate_content
// =============================================================

#[test]
fn short_content_is_untouched() {
    assert_eq!(truncate_content("Short tale.", PREVIEW_CHARS), "Short tale.");
}

#[test]
fn content_at_limit_is_untouched() {
    let exact = "a".repeat(PREVIEW_CHARS);
    assert_eq!(truncate_content(&exact, PREVIEW_CHARS), exact);
}

#[test]
fn long_content_is_cut_with_ellipsis() {
    let long = "b".repeat(PREVIEW_CHARS + 10);
    let cut = truncate_content(&long, PREVIEW_CHARS);
    assert_eq!(cut.len(), PREVIEW_CHARS + 3);
    assert!(cut.ends_with("..."));
}

#[test]
fn truncation_respects_char_boundaries() {
    assert_eq!(truncate_content("ééééé", 2), "éé...");
}

// =============================================================
// capitalize / like_label / paragraphs
// =============================================================

#[test]
fn capitalize_first_letter() {
    assert_eq!(capitalize("friendship"), "Friendship");
    assert_eq!(capitalize(""), "");
}

#[test]
fn like_label_pluralizes() {
    assert_eq!(like_label(0), "0 likes");
    assert_eq!(like_label(1), "1 like");
    assert_eq!(like_label(12), "12 likes");
}

#[test]
fn paragraphs_split_on_blank_lines() {
    assert_eq!(
        paragraphs("Once upon a time.\n\nThe end.\n\n\n\n"),
        vec!["Once upon a time.", "The end."]
    );
}

#[test]
fn paragraphs_split_on_crlf_blank_lines() {
    assert_eq!(
        paragraphs("Once upon a time.\r\nThere was a fox.\r\n\r\nThe end.\r\n"),
        vec!["Once upon a time.\nThere was a fox.", "The end."]
    );
}
