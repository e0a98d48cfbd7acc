mod comment;
pub use comment::{Comment, CommentId};

mod error;
pub use error::Error;

mod order;
pub use order::SortMode;

mod poll;
pub use poll::{Poll, PollId, PollOption, PollOptionId};

mod post;
pub use post::{Post, PostId};

mod user;
pub use user::UserId;

mod vote;
pub use vote::{Vote, VoteTally};

pub use uuid::{uuid, Uuid};
pub type Time = chrono::DateTime<chrono::Utc>;

pub const STUB_UUID: Uuid = uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");

// See comments on the `validate` functions that call into this: user-provided
// text is checked once, at the mutation boundary, and never again after it is
// in a snapshot.
pub fn validate_string(s: &str) -> Result<(), Error> {
    if s.contains('\0') {
        return Err(Error::NullByteInString(String::from(s)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_string_rejects_null_bytes() {
        assert_eq!(validate_string("hello"), Ok(()));
        assert_eq!(
            validate_string("he\0llo"),
            Err(Error::NullByteInString(String::from("he\0llo"))),
        );
    }
}
