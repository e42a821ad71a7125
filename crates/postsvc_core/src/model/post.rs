//! Post domain model.
//!
//! # Responsibility
//! - Define the record shape returned by post lookups.
//! - Name the placeholder literals used until real storage is wired in.
//!
//! # Invariants
//! - `id`, `title` and `content` are always present.
//! - Identifiers carry no format constraint; any string is a valid `PostId`.

use serde::{Deserialize, Serialize};

/// Identifier of a post, kept as a type alias so signatures read by intent.
pub type PostId = String;

/// Title returned for every post by the placeholder service.
pub const PLACEHOLDER_TITLE: &str = "Hello";

/// Body returned for every post by the placeholder service.
pub const PLACEHOLDER_CONTENT: &str = "World";

/// Post record with identifier, title and content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Post {
    /// Caller-facing identifier, echoed back unchanged.
    pub id: PostId,
    /// Headline shown for the post.
    pub title: String,
    /// Post body text.
    pub content: String,
}

impl Post {
    /// Builds a post from its three fields.
    ///
    /// Never validates; any string is accepted for every field.
    pub fn new(
        id: impl Into<PostId>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Builds the placeholder post for `id`.
    pub fn placeholder(id: impl Into<PostId>) -> Self {
        Self::new(id, PLACEHOLDER_TITLE, PLACEHOLDER_CONTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::{Post, PLACEHOLDER_CONTENT, PLACEHOLDER_TITLE};

    #[test]
    fn new_keeps_fields_verbatim() {
        let post = Post::new(" padded ", "", "line1\nline2");
        assert_eq!(post.id, " padded ");
        assert_eq!(post.title, "");
        assert_eq!(post.content, "line1\nline2");
    }

    #[test]
    fn placeholder_uses_fixed_literals() {
        let post = Post::placeholder("7");
        assert_eq!(post.id, "7");
        assert_eq!(post.title, PLACEHOLDER_TITLE);
        assert_eq!(post.content, PLACEHOLDER_CONTENT);
    }
}
