use std::collections::HashSet;

use uuid::Uuid;

use crate::{Error, STUB_UUID};

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
pub struct PollId(#[generator(bolero::generator::gen_arbitrary())] pub Uuid);

impl PollId {
    pub fn stub() -> PollId {
        PollId(STUB_UUID)
    }
}

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
pub struct PollOptionId(#[generator(bolero::generator::gen_arbitrary())] pub Uuid);

impl PollOptionId {
    pub fn stub() -> PollOptionId {
        PollOptionId(STUB_UUID)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PollOption {
    pub id: PollOptionId,
    pub text: String,
    pub votes: u32,

    /// Derived: `votes / poll.total_votes * 100` whenever `total_votes > 0`,
    /// else 0. Never rounded here; rounding is a display concern.
    pub percentage: f32,
}

/// A poll with one-shot voting: once `has_voted` is set it never reverts,
/// and no second vote is accepted.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Poll {
    pub id: PollId,
    pub question: String,

    /// Unique option ids; the order is the display order, fixed at creation.
    pub options: Vec<PollOption>,

    /// Always equals the sum of all option votes.
    pub total_votes: u32,

    pub has_voted: bool,

    /// Present iff `has_voted`.
    pub user_vote: Option<PollOptionId>,
}

impl Poll {
    pub fn new(
        id: PollId,
        question: String,
        options: Vec<(PollOptionId, String)>,
    ) -> Result<Poll, Error> {
        crate::validate_string(&question)?;
        if options.len() < 2 {
            return Err(Error::NotEnoughOptions(options.len()));
        }
        let mut seen = HashSet::new();
        for (option_id, text) in options.iter() {
            crate::validate_string(text)?;
            if text.trim().is_empty() {
                return Err(Error::EmptyContent);
            }
            if !seen.insert(*option_id) {
                return Err(Error::DuplicateOption(*option_id));
            }
        }
        Ok(Poll {
            id,
            question,
            options: options
                .into_iter()
                .map(|(option_id, text)| PollOption {
                    id: option_id,
                    text,
                    votes: 0,
                    percentage: 0.0,
                })
                .collect(),
            total_votes: 0,
            has_voted: false,
            user_vote: None,
        })
    }
}
