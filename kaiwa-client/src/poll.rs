use crate::api::{Error, Poll, PollOptionId};

pub trait PollExt {
    fn vote(&self, option: PollOptionId) -> Result<Poll, Error>;
}

impl PollExt for Poll {
    /// Casts the viewer's one-shot vote and returns the new poll.
    ///
    /// Every option's percentage is recomputed against the new total, not
    /// just the voted one. A second vote fails with `AlreadyVoted` so the
    /// caller can surface feedback; it is never a silent no-op.
    fn vote(&self, option: PollOptionId) -> Result<Poll, Error> {
        if self.has_voted {
            return Err(Error::AlreadyVoted(self.id));
        }
        let tallied: u64 = self.options.iter().map(|o| u64::from(o.votes)).sum();
        if tallied != u64::from(self.total_votes) {
            return Err(Error::InvalidState(format!(
                "poll {:?} total is {} but its options sum to {tallied}",
                self.id, self.total_votes,
            )));
        }

        let mut poll = self.clone();
        match poll.options.iter_mut().find(|o| o.id == option) {
            None => return Err(Error::UnknownOption(option)),
            Some(o) => o.votes += 1,
        }
        poll.total_votes += 1;
        let total = poll.total_votes;
        for o in poll.options.iter_mut() {
            o.percentage = percentage(o.votes, total);
        }
        poll.has_voted = true;
        poll.user_vote = Some(option);
        Ok(poll)
    }
}

fn percentage(votes: u32, total: u32) -> f32 {
    if total == 0 {
        return 0.0;
    }
    votes as f32 / total as f32 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{PollId, Uuid};

    fn language_poll() -> (Poll, PollOptionId, PollOptionId) {
        let js = PollOptionId(Uuid::new_v4());
        let py = PollOptionId(Uuid::new_v4());
        let poll = Poll::new(
            PollId::stub(),
            String::from("which language?"),
            vec![(js, String::from("js")), (py, String::from("py"))],
        )
        .unwrap();
        (poll, js, py)
    }

    #[test]
    fn first_vote_takes_the_whole_percentage() {
        let (poll, js, _) = language_poll();
        let voted = poll.vote(js).unwrap();
        assert_eq!(voted.total_votes, 1);
        assert!(voted.has_voted);
        assert_eq!(voted.user_vote, Some(js));
        assert_eq!(voted.options[0].votes, 1);
        assert_eq!(voted.options[0].percentage, 100.0);
        assert_eq!(voted.options[1].votes, 0);
        assert_eq!(voted.options[1].percentage, 0.0);
        // The input poll is a snapshot; it is unchanged.
        assert!(!poll.has_voted);
        assert_eq!(poll.total_votes, 0);
    }

    #[test]
    fn second_vote_fails_and_changes_nothing() {
        let (poll, js, py) = language_poll();
        let voted = poll.vote(js).unwrap();
        assert_eq!(voted.vote(py), Err(Error::AlreadyVoted(poll.id)));
        assert_eq!(voted.vote(js), Err(Error::AlreadyVoted(poll.id)));
    }

    #[test]
    fn unknown_option_fails() {
        let (poll, _, _) = language_poll();
        let bogus = PollOptionId(Uuid::new_v4());
        assert_eq!(poll.vote(bogus), Err(Error::UnknownOption(bogus)));
    }

    #[test]
    fn percentages_are_relative_to_the_new_total() {
        let (poll, _, py) = language_poll();
        // Seed pre-existing votes from other viewers.
        let mut poll = poll;
        poll.options[0].votes = 2;
        poll.options[1].votes = 1;
        poll.total_votes = 3;

        let voted = poll.vote(py).unwrap();
        assert_eq!(voted.total_votes, 4);
        assert_eq!(voted.options[0].percentage, 50.0);
        assert_eq!(voted.options[1].percentage, 50.0);
        let total: f32 = voted.options.iter().map(|o| o.percentage).sum();
        assert!((total - 100.0).abs() < 1e-3);
    }

    #[test]
    fn corrupt_totals_are_loud() {
        let (mut poll, js, _) = language_poll();
        poll.total_votes = 7;
        match poll.vote(js) {
            Err(Error::InvalidState(_)) => (),
            r => panic!("expected InvalidState, got {r:?}"),
        }
    }
}
