use crate::api::{Error, Vote, VoteTally};

/// Applies the viewer's vote request to a tally, returning the new tally
/// and the new viewer mark.
///
/// Voting the direction already held withdraws the vote; voting the other
/// direction moves it. A request is always a concrete direction:
/// cancellation only ever happens through the withdraw path. The same
/// algorithm backs post voting and comment voting.
pub fn apply_vote(
    tally: &VoteTally,
    current: Option<Vote>,
    requested: Vote,
) -> Result<(VoteTally, Option<Vote>), Error> {
    let mut tally = *tally;
    if let Some(current) = current {
        withdraw(&mut tally, current)?;
        if current == requested {
            return Ok((tally, None));
        }
    }
    match requested {
        Vote::Up => tally.up += 1,
        Vote::Down => tally.down += 1,
    }
    Ok((tally, Some(requested)))
}

fn withdraw(tally: &mut VoteTally, vote: Vote) -> Result<(), Error> {
    let counter = match vote {
        Vote::Up => &mut tally.up,
        Vote::Down => &mut tally.down,
    };
    *counter = counter.checked_sub(1).ok_or_else(|| {
        Error::InvalidState(format!(
            "viewer mark is {vote:?} but the matching counter is already 0"
        ))
    })?;
    Ok(())
}
