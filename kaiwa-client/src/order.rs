use std::{cmp::Reverse, sync::Arc};

use crate::api::{Comment, SortMode};

pub trait SortExt {
    fn sort(&self, comments: &mut [Arc<Comment>]);
}

impl SortExt for SortMode {
    /// Reorders the given top-level slice only; each comment's own replies
    /// keep their insertion order. The sort is stable, so comments with
    /// equal keys keep their current relative order.
    fn sort(&self, comments: &mut [Arc<Comment>]) {
        match self {
            // Two names for one ranking; do not invent a difference.
            SortMode::Best | SortMode::Top => {
                comments.sort_by_key(|c| Reverse(c.votes.score()))
            }
            SortMode::New => comments.sort_by_key(|c| Reverse(c.created_at)),
            // Large, closely balanced tallies rank highest.
            SortMode::Controversial => {
                comments.sort_by_key(|c| Reverse(c.votes.up.min(c.votes.down)))
            }
        }
    }
}
