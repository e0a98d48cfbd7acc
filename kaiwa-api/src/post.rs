use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{Comment, Time, UserId, Vote, VoteTally, STUB_UUID};

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
pub struct PostId(#[generator(bolero::generator::gen_arbitrary())] pub Uuid);

impl PostId {
    pub fn stub() -> PostId {
        PostId(STUB_UUID)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub content: String,
    pub created_at: Time,

    pub votes: VoteTally,
    pub viewer_vote: Option<Vote>,
    pub is_bookmarked: bool,

    /// Denormalized total number of comments in `comments`, at every depth.
    /// Must equal `thread::count_all(&self.comments)` after every mutation.
    pub comment_count: usize,

    /// Top-level comments only; replies live in each comment's `children`.
    pub comments: Vec<Arc<Comment>>,
}

impl Post {
    pub fn new(id: PostId, author_id: UserId, content: String, created_at: Time) -> Post {
        Post {
            id,
            author_id,
            content,
            created_at,
            votes: VoteTally::zero(),
            viewer_vote: None,
            is_bookmarked: false,
            comment_count: 0,
            comments: Vec::new(),
        }
    }

    pub fn now(author_id: UserId, content: String) -> Post {
        Post::new(PostId(Uuid::new_v4()), author_id, content, Utc::now())
    }
}
