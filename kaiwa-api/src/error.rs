use crate::{CommentId, PollId, PollOptionId, PostId};

#[derive(
    Clone,
    Debug,
    Eq,
    PartialEq,
    bolero::generator::TypeGenerator,
    serde::Deserialize,
    serde::Serialize,
    thiserror::Error,
)]
pub enum Error {
    /// Stale reference: the snapshot the caller holds no longer contains
    /// this post. Refresh and retry rather than crash.
    #[error("post {0:?} is not in this snapshot")]
    UnknownPost(PostId),

    #[error("comment {0:?} is not in this snapshot")]
    UnknownComment(CommentId),

    #[error("poll {0:?} is not in this snapshot")]
    UnknownPoll(PollId),

    #[error("option {0:?} is not part of this poll")]
    UnknownOption(PollOptionId),

    /// Expected, user-facing: poll votes are one-shot.
    #[error("already voted on poll {0:?}")]
    AlreadyVoted(PollId),

    /// Caller bug: the snapshot violates one of its own invariants.
    #[error("snapshot state is inconsistent: {0}")]
    InvalidState(String),

    #[error("null byte in string is not allowed {0:?}")]
    NullByteInString(String),

    #[error("content must not be empty")]
    EmptyContent,

    #[error("a poll needs at least two options, got {0}")]
    NotEnoughOptions(usize),

    #[error("duplicate poll option {0:?}")]
    DuplicateOption(PollOptionId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_error_round_trips_through_json() {
        bolero::check!().with_type::<Error>().cloned().for_each(|e| {
            let json = serde_json::to_string(&e).expect("serializing error");
            let back: Error = serde_json::from_str(&json).expect("parsing error back");
            assert_eq!(e, back);
        })
    }
}
