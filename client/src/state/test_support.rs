//! Tale fixtures shared by state tests.

use crate::net::types::Tale;

pub(crate) fn tale(id: &str, is_public: bool, likes: u64) -> Tale {
    Tale {
        id: id.to_owned(),
        title: format!("Tale {id}"),
        content: String::new(),
        age_range: "5-7".to_owned(),
        topic: "adventure".to_owned(),
        is_public,
        likes,
        created_at: None,
        author: None,
    }
}

pub(crate) fn described(id: &str, title: &str, content: &str, age_range: &str, topic: &str) -> Tale {
    Tale {
        title: title.to_owned(),
        content: content.to_owned(),
        age_range: age_range.to_owned(),
        topic: topic.to_owned(),
        ..tale(id, true, 0)
    }
}
