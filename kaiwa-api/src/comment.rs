use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{Time, UserId, Vote, VoteTally, STUB_UUID};

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    bolero::generator::TypeGenerator,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct CommentId(#[generator(bolero::generator::gen_arbitrary())] pub Uuid);

impl CommentId {
    pub fn stub() -> CommentId {
        CommentId(STUB_UUID)
    }
}

/// One node of a post's comment tree.
///
/// A comment is owned exactly once, by its parent's `children` list (or by
/// the post's top-level list); the tree has no cycles. Depth is not stored:
/// it is the length of the index path from the top-level list down to the
/// node, so it can never disagree with the tree shape.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub author_id: UserId,

    /// Immutable once created; there is no comment-edit operation.
    pub content: String,
    pub created_at: Time,

    pub votes: VoteTally,
    pub viewer_vote: Option<Vote>,

    /// Display-only flag: a collapsed comment keeps all of its data,
    /// including `children`.
    pub is_collapsed: bool,

    /// Replies, in insertion order. Append-only: replies are never
    /// reordered or inserted mid-list.
    pub children: Vec<Arc<Comment>>,
}

impl Comment {
    pub fn new(id: CommentId, author_id: UserId, content: String, created_at: Time) -> Comment {
        Comment {
            id,
            author_id,
            content,
            created_at,
            votes: VoteTally::zero(),
            viewer_vote: None,
            is_collapsed: false,
            children: Vec::new(),
        }
    }

    pub fn now(author_id: UserId, content: String) -> Comment {
        Comment::new(CommentId(Uuid::new_v4()), author_id, content, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_comment_starts_blank() {
        let c = Comment::now(UserId::stub(), String::from("hello"));
        assert_eq!(c.votes, VoteTally::zero());
        assert_eq!(c.viewer_vote, None);
        assert!(!c.is_collapsed);
        assert!(c.children.is_empty());
    }
}
