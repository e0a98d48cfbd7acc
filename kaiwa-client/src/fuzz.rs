#![cfg(test)]

use std::sync::Arc;

use crate::{
    api::{
        Comment, CommentId, Error, Poll, PollId, PollOptionId, Post, PostId, SortMode, UserId,
        Uuid, Vote, VoteTally,
    },
    count_all, Feed,
};

/// One step of a generated engagement script. Entity indices are resolved
/// modulo the live counts so scripts always target something that exists;
/// stale-reference failures have their own deterministic tests.
#[derive(Clone, Debug, bolero::generator::TypeGenerator)]
enum FuzzOp {
    VotePost {
        post: usize,
        vote: Vote,
    },
    VoteComment {
        post: usize,
        comment: usize,
        vote: Vote,
    },
    AddComment {
        post: usize,
        parent: Option<usize>,
        #[generator(bolero::generator::gen_with::<String>().len(1..30usize))]
        text: String,
    },
    ToggleCollapse {
        post: usize,
        comment: usize,
    },
    ToggleBookmark {
        post: usize,
    },
    SortComments {
        post: usize,
        mode: SortMode,
    },
    VotePoll {
        poll: usize,
        option: usize,
    },
}

fn seed_feed() -> Feed {
    let mut feed = Feed::stub();
    feed.add_posts(vec![
        Post::now(UserId::stub(), String::from("first post")),
        Post::now(UserId::stub(), String::from("second post")),
    ]);
    feed.add_polls(vec![Poll::new(
        PollId(Uuid::new_v4()),
        String::from("which language?"),
        vec![
            (PollOptionId(Uuid::new_v4()), String::from("js")),
            (PollOptionId(Uuid::new_v4()), String::from("py")),
            (PollOptionId(Uuid::new_v4()), String::from("rs")),
        ],
    )
    .expect("seed poll is valid")]);
    feed
}

fn comment_ids(comments: &[Arc<Comment>], out: &mut Vec<CommentId>) {
    for c in comments.iter() {
        out.push(c.id);
        comment_ids(&c.children, out);
    }
}

fn pick_comment(post: &Post, idx: usize) -> Option<CommentId> {
    let mut ids = Vec::new();
    comment_ids(&post.comments, &mut ids);
    if ids.is_empty() {
        None
    } else {
        Some(ids[idx % ids.len()])
    }
}

fn pick_post(feed: &Feed, idx: usize) -> PostId {
    feed.posts[idx % feed.posts.len()].id
}

fn apply(feed: &Feed, op: FuzzOp) -> Result<Feed, Error> {
    match op {
        FuzzOp::VotePost { post, vote } => feed.vote_post(pick_post(feed, post), vote),
        FuzzOp::VoteComment {
            post,
            comment,
            vote,
        } => {
            let post = &feed.posts[post % feed.posts.len()];
            match pick_comment(post, comment) {
                // Nothing to vote on yet.
                None => Ok(feed.clone()),
                Some(comment) => feed.vote_comment(post.id, comment, vote),
            }
        }
        FuzzOp::AddComment { post, parent, text } => {
            let post = &feed.posts[post % feed.posts.len()];
            let parent = parent.and_then(|idx| pick_comment(post, idx));
            feed.add_comment(post.id, UserId::stub(), text, parent)
        }
        FuzzOp::ToggleCollapse { post, comment } => {
            let post = &feed.posts[post % feed.posts.len()];
            match pick_comment(post, comment) {
                None => Ok(feed.clone()),
                Some(comment) => feed.toggle_collapse(post.id, comment),
            }
        }
        FuzzOp::ToggleBookmark { post } => feed.toggle_bookmark(pick_post(feed, post)),
        FuzzOp::SortComments { post, mode } => feed.sort_comments(pick_post(feed, post), mode),
        FuzzOp::VotePoll { poll, option } => {
            let poll = &feed.polls[poll % feed.polls.len()];
            let option = poll.options[option % poll.options.len()].id;
            feed.vote_poll(poll.id, option)
        }
    }
}

fn check_tally(tally: &VoteTally, mark: Option<Vote>) {
    match mark {
        Some(Vote::Up) => assert!(tally.up >= 1, "marked Up with up == 0"),
        Some(Vote::Down) => assert!(tally.down >= 1, "marked Down with down == 0"),
        None => (),
    }
}

fn check_comments(comments: &[Arc<Comment>]) {
    for c in comments.iter() {
        check_tally(&c.votes, c.viewer_vote);
        check_comments(&c.children);
    }
}

fn check_invariants(feed: &Feed) {
    for post in feed.posts.iter() {
        assert_eq!(
            post.comment_count,
            count_all(&post.comments),
            "denormalized comment count drifted on post {:?}",
            post.id,
        );
        check_tally(&post.votes, post.viewer_vote);
        check_comments(&post.comments);
    }
    for poll in feed.polls.iter() {
        let sum: u64 = poll.options.iter().map(|o| u64::from(o.votes)).sum();
        assert_eq!(sum, u64::from(poll.total_votes), "poll total out of sync");
        assert_eq!(poll.has_voted, poll.user_vote.is_some());
        if poll.total_votes > 0 {
            let pct: f32 = poll.options.iter().map(|o| o.percentage).sum();
            assert!((pct - 100.0).abs() < 0.01, "percentages sum to {pct}");
        } else {
            assert!(poll.options.iter().all(|o| o.percentage == 0.0));
        }
    }
}

#[test]
fn random_op_scripts_preserve_feed_invariants() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt::init();
    }
    bolero::check!()
        .with_type::<Vec<FuzzOp>>()
        .cloned()
        .for_each(|ops| {
            let mut feed = seed_feed();
            check_invariants(&feed);
            for op in ops {
                match apply(&feed, op) {
                    Ok(next) => {
                        check_invariants(&next);
                        feed = next;
                    }
                    // Validation and one-shot failures are expected outcomes
                    // of generated scripts; anything else is an engine bug.
                    Err(Error::EmptyContent)
                    | Err(Error::NullByteInString(_))
                    | Err(Error::AlreadyVoted(_)) => (),
                    Err(e) => panic!("unexpected engine failure: {e}"),
                }
            }
            // Mutated snapshots still round-trip through serde.
            let json = serde_json::to_string(&feed.posts).expect("serializing posts");
            let back: Vec<Arc<Post>> = serde_json::from_str(&json).expect("parsing posts back");
            assert_eq!(back, feed.posts);
        })
}
