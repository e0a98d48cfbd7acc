use std::sync::Arc;

use crate::{
    api::{
        self, Comment, CommentId, Error, Poll, PollId, PollOptionId, Post, PostId, SortMode,
        UserId, Vote,
    },
    apply_vote, thread, PollExt, SortExt,
};

/// The feed snapshot a page controller holds: the viewer plus the posts and
/// polls currently on screen.
///
/// Every engagement operation takes `&self` and returns a whole new `Feed`;
/// the caller must adopt the returned snapshot as the new source of truth.
/// Entities the operation does not touch keep their `Arc`s, so an old
/// snapshot stays valid (and cheap) for as long as anything still reads it.
#[derive(Clone, Debug, PartialEq)]
pub struct Feed {
    pub viewer: UserId,
    pub posts: Vec<Arc<Post>>,
    pub polls: Vec<Arc<Poll>>,
}

impl Feed {
    pub fn stub() -> Feed {
        Feed {
            viewer: UserId::stub(),
            posts: Vec::new(),
            polls: Vec::new(),
        }
    }

    pub fn add_posts(&mut self, posts: Vec<Post>) {
        self.posts.extend(posts.into_iter().map(Arc::new));
    }

    pub fn add_polls(&mut self, polls: Vec<Poll>) {
        self.polls.extend(polls.into_iter().map(Arc::new));
    }

    pub fn post(&self, id: PostId) -> Option<&Arc<Post>> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn poll(&self, id: PollId) -> Option<&Arc<Poll>> {
        self.polls.iter().find(|p| p.id == id)
    }

    /// Toggles the viewer's vote on a post.
    pub fn vote_post(&self, post: PostId, vote: Vote) -> Result<Feed, Error> {
        self.with_post(post, |p| {
            let (votes, mark) = apply_vote(&p.votes, p.viewer_vote, vote)?;
            p.votes = votes;
            p.viewer_vote = mark;
            Ok(())
        })
    }

    /// Toggles the viewer's vote on one comment of a post. Same algorithm
    /// as post voting; only the ancestor spine of the comment is rebuilt.
    pub fn vote_comment(&self, post: PostId, comment: CommentId, vote: Vote) -> Result<Feed, Error> {
        self.with_post(post, |p| {
            p.comments = thread::update_node(&p.comments, comment, |c| {
                let (votes, mark) = apply_vote(&c.votes, c.viewer_vote, vote)?;
                c.votes = votes;
                c.viewer_vote = mark;
                Ok(())
            })?;
            Ok(())
        })
    }

    /// Adds a comment by the given author, top-level when `parent` is
    /// `None`, otherwise appended under the parent comment.
    pub fn add_comment(
        &self,
        post: PostId,
        author: UserId,
        content: String,
        parent: Option<CommentId>,
    ) -> Result<Feed, Error> {
        api::validate_string(&content)?;
        if content.trim().is_empty() {
            return Err(Error::EmptyContent);
        }
        self.with_post(post, |p| {
            p.comments = thread::insert_reply(&p.comments, parent, Comment::now(author, content))?;
            let count = thread::count_all(&p.comments);
            if count != p.comment_count + 1 {
                tracing::warn!(
                    stored = p.comment_count,
                    actual = count - 1,
                    post = ?p.id,
                    "comment count had drifted from the tree, fixing up"
                );
            }
            p.comment_count = count;
            Ok(())
        })
    }

    /// Flips the collapse flag on one comment of a post.
    pub fn toggle_collapse(&self, post: PostId, comment: CommentId) -> Result<Feed, Error> {
        self.with_post(post, |p| {
            p.comments = thread::toggle_collapse(&p.comments, comment)?;
            Ok(())
        })
    }

    /// Flips the viewer's bookmark on a post.
    pub fn toggle_bookmark(&self, post: PostId) -> Result<Feed, Error> {
        self.with_post(post, |p| {
            p.is_bookmarked = !p.is_bookmarked;
            Ok(())
        })
    }

    /// Reorders a post's top-level comments; replies are untouched.
    pub fn sort_comments(&self, post: PostId, mode: SortMode) -> Result<Feed, Error> {
        self.with_post(post, |p| {
            mode.sort(&mut p.comments);
            Ok(())
        })
    }

    /// Casts the viewer's one-shot vote on a poll.
    pub fn vote_poll(&self, poll: PollId, option: PollOptionId) -> Result<Feed, Error> {
        let idx = match self.polls.iter().position(|p| p.id == poll) {
            None => return Err(Error::UnknownPoll(poll)),
            Some(idx) => idx,
        };
        let mut feed = self.clone();
        feed.polls[idx] = Arc::new(self.polls[idx].vote(option)?);
        Ok(feed)
    }

    fn with_post<F>(&self, post: PostId, update: F) -> Result<Feed, Error>
    where
        F: FnOnce(&mut Post) -> Result<(), Error>,
    {
        let idx = match self.posts.iter().position(|p| p.id == post) {
            None => return Err(Error::UnknownPost(post)),
            Some(idx) => idx,
        };
        let mut feed = self.clone();
        update(Arc::make_mut(&mut feed.posts[idx]))?;
        Ok(feed)
    }
}
