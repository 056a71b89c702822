use crate::model::{Document, Draft, Id};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Characters per minute of reading used for the time estimate.
pub const READING_PACE_CHARS: usize = 200;
/// Estimate shown for bodies too short to round up to a minute.
pub const FALLBACK_READ_MINUTES: usize = 3;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize, Deserialize)]
pub struct Post {
    pub id: Id<PostMarker>,
    pub title: String,
    pub body: String,
    /// Email of the operator who published the post.
    pub author: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Serialize, Deserialize)]
pub struct PostContent {
    pub title: String,
    pub body: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash)]
pub struct NewPost {
    pub content: PostContent,
    pub author: String,
}

impl Post {
    #[must_use]
    pub fn read_time_minutes(&self) -> usize {
        match self.body.chars().count().div_ceil(READING_PACE_CHARS) {
            0 => FALLBACK_READ_MINUTES,
            minutes => minutes,
        }
    }

    /// The body cut to `max_chars` characters, with an ellipsis when cut.
    #[must_use]
    pub fn excerpt(&self, max_chars: usize) -> String {
        match self.body.char_indices().nth(max_chars) {
            Some((end, _)) => format!("{}...", &self.body[..end]),
            None => self.body.clone(),
        }
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.body.lines().filter(|line| !line.trim().is_empty())
    }
}

impl Draft for NewPost {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("title", self.content.title.as_str()),
            ("body", self.content.body.as_str()),
        ]
    }
}

impl Document for Post {
    type Marker = PostMarker;
    type Draft = NewPost;

    const COLLECTION: &'static str = "blogs";

    fn id(&self) -> Id<PostMarker> {
        self.id
    }

    fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{
        Draft, IncompleteDraftError,
        post::{NewPost, Post, PostContent},
    };
    use time::macros::datetime;

    fn post(body: &str) -> Post {
        Post {
            id: 1.into(),
            title: "Ansiedad".to_owned(),
            body: body.to_owned(),
            author: "lorena@example.com".to_owned(),
            created_at: datetime!(2026-03-02 10:00 UTC),
        }
    }

    #[test]
    fn read_time() {
        assert_eq!(post("").read_time_minutes(), 3);
        assert_eq!(post(&"a".repeat(1)).read_time_minutes(), 1);
        assert_eq!(post(&"a".repeat(200)).read_time_minutes(), 1);
        assert_eq!(post(&"a".repeat(201)).read_time_minutes(), 2);
        assert_eq!(post(&"ñ".repeat(400)).read_time_minutes(), 2);
    }

    #[test]
    fn excerpt_truncates_on_characters() {
        assert_eq!(post("short").excerpt(120), "short");
        assert_eq!(post(&"é".repeat(120)).excerpt(120), "é".repeat(120));
        assert_eq!(
            post(&"é".repeat(121)).excerpt(120),
            format!("{}...", "é".repeat(120))
        );
    }

    #[test]
    fn paragraphs_split_on_lines() {
        let post = post("Primero.\n\nSegundo.\nTercero.");
        assert_eq!(
            post.paragraphs().collect::<Vec<_>>(),
            ["Primero.", "Segundo.", "Tercero."]
        );
    }

    #[test]
    fn new_post_requires_title_and_body() {
        let draft = NewPost {
            content: PostContent {
                title: "  ".to_owned(),
                body: "Texto".to_owned(),
            },
            author: "lorena@example.com".to_owned(),
        };
        assert_eq!(
            draft.ensure_complete(),
            Err(IncompleteDraftError(vec!["title"]))
        );
    }

    #[test]
    fn serializes_timestamp_as_rfc3339() {
        let json = serde_json::to_value(post("x")).unwrap();
        assert_eq!(json["created_at"], "2026-03-02T10:00:00Z");
        assert_eq!(json["id"], 1);
    }
}
