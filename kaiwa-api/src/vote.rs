/// One direction of the viewer's vote on a post or comment.
///
/// "No vote" is `Option::<Vote>::None` on the entity; a vote *request* is
/// always a concrete direction, so functions taking a requested vote take
/// `Vote` bare.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    bolero::generator::TypeGenerator,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum Vote {
    Up,
    Down,
}

/// Aggregate vote counters for one post or comment. Counters are unsigned:
/// a state where a decrement would underflow is snapshot corruption, not a
/// value this type can represent.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    bolero::generator::TypeGenerator,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct VoteTally {
    pub up: u32,
    pub down: u32,
}

impl VoteTally {
    pub fn zero() -> VoteTally {
        VoteTally { up: 0, down: 0 }
    }

    /// Net score, used by the `Best` and `Top` orderings.
    pub fn score(&self) -> i64 {
        i64::from(self.up) - i64::from(self.down)
    }

    pub fn total(&self) -> u64 {
        u64::from(self.up) + u64::from(self.down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_can_go_negative() {
        let t = VoteTally { up: 2, down: 5 };
        assert_eq!(t.score(), -3);
        assert_eq!(t.total(), 7);
        assert_eq!(VoteTally::zero().score(), 0);
    }
}
