use std::sync::Arc;

use crate::api::{Comment, CommentId, Error};

/// Depth-first index path from the top-level list down to the comment with
/// the given id. First match wins; ids are assumed globally unique.
pub fn find_path(comments: &[Arc<Comment>], target: CommentId) -> Option<Vec<usize>> {
    for (i, c) in comments.iter().enumerate() {
        if c.id == target {
            return Some(vec![i]);
        }
        if let Some(mut path) = find_path(&c.children, target) {
            path.insert(0, i);
            return Some(path);
        }
    }
    None
}

/// Applies `update` to the comment with the given id and returns a new
/// top-level list.
///
/// Only the ancestor spine from the root down to the target is rebuilt;
/// every subtree not on that path keeps its `Arc` identity, so snapshots
/// before and after an edit share all unaffected nodes.
pub fn update_node<F>(
    comments: &[Arc<Comment>],
    target: CommentId,
    update: F,
) -> Result<Vec<Arc<Comment>>, Error>
where
    F: FnOnce(&mut Comment) -> Result<(), Error>,
{
    let path = match find_path(comments, target) {
        None => return Err(Error::UnknownComment(target)),
        Some(path) => path,
    };
    let mut comments = comments.to_vec();
    rebuild_spine(&mut comments, &path, update)?;
    Ok(comments)
}

fn rebuild_spine<F>(comments: &mut [Arc<Comment>], path: &[usize], update: F) -> Result<(), Error>
where
    F: FnOnce(&mut Comment) -> Result<(), Error>,
{
    let (i, rest) = match path.split_first() {
        // Paths come from find_path and are never empty.
        None => {
            return Err(Error::InvalidState(String::from(
                "empty path into a comment tree",
            )))
        }
        Some((i, rest)) => (*i, rest),
    };
    let slot = match comments.get_mut(i) {
        None => {
            return Err(Error::InvalidState(format!(
                "path index {i} is out of bounds"
            )))
        }
        Some(slot) => slot,
    };
    let node = Arc::make_mut(slot);
    if rest.is_empty() {
        update(node)
    } else {
        rebuild_spine(&mut node.children, rest, update)
    }
}

/// Appends a reply. `parent: None` appends to the top-level list; otherwise
/// the reply becomes the parent's last child. Replies are always appended,
/// never inserted mid-list.
pub fn insert_reply(
    comments: &[Arc<Comment>],
    parent: Option<CommentId>,
    reply: Comment,
) -> Result<Vec<Arc<Comment>>, Error> {
    match parent {
        None => {
            let mut comments = comments.to_vec();
            comments.push(Arc::new(reply));
            Ok(comments)
        }
        Some(parent) => update_node(comments, parent, |p| {
            p.children.push(Arc::new(reply));
            Ok(())
        }),
    }
}

/// Flips the display-only collapse flag; children stay in the tree.
pub fn toggle_collapse(
    comments: &[Arc<Comment>],
    target: CommentId,
) -> Result<Vec<Arc<Comment>>, Error> {
    update_node(comments, target, |c| {
        c.is_collapsed = !c.is_collapsed;
        Ok(())
    })
}

/// Total number of comments in the tree, at every depth.
pub fn count_all(comments: &[Arc<Comment>]) -> usize {
    comments.iter().map(|c| 1 + count_all(&c.children)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{UserId, Vote};

    fn comment(text: &str) -> Comment {
        Comment::now(UserId::stub(), String::from(text))
    }

    // a
    // b
    // └ c
    //   └ d
    // e
    fn example_tree() -> (Vec<Arc<Comment>>, [CommentId; 5]) {
        let (a, b, c, d, e) = (
            comment("a"),
            comment("b"),
            comment("c"),
            comment("d"),
            comment("e"),
        );
        let ids = [a.id, b.id, c.id, d.id, e.id];
        let tree = insert_reply(&[], None, a).unwrap();
        let tree = insert_reply(&tree, None, b).unwrap();
        let tree = insert_reply(&tree, Some(ids[1]), c).unwrap();
        let tree = insert_reply(&tree, Some(ids[2]), d).unwrap();
        let tree = insert_reply(&tree, None, e).unwrap();
        (tree, ids)
    }

    #[test]
    fn find_path_walks_depth_first() {
        let (tree, [a, b, c, d, e]) = example_tree();
        assert_eq!(find_path(&tree, a), Some(vec![0]));
        assert_eq!(find_path(&tree, b), Some(vec![1]));
        assert_eq!(find_path(&tree, c), Some(vec![1, 0]));
        assert_eq!(find_path(&tree, d), Some(vec![1, 0, 0]));
        assert_eq!(find_path(&tree, e), Some(vec![2]));
        assert_eq!(find_path(&tree, CommentId::stub()), None);
    }

    #[test]
    fn update_missing_node_fails() {
        let (tree, _) = example_tree();
        assert_eq!(
            update_node(&tree, CommentId::stub(), |_| Ok(())),
            Err(Error::UnknownComment(CommentId::stub())),
        );
    }

    #[test]
    fn update_rebuilds_only_the_ancestor_spine() {
        let (tree, [_, _, _, d, _]) = example_tree();
        let updated = update_node(&tree, d, |n| {
            n.viewer_vote = Some(Vote::Up);
            Ok(())
        })
        .unwrap();

        // Siblings off the path keep their exact Arc, not just equal values.
        assert!(Arc::ptr_eq(&tree[0], &updated[0]));
        assert!(Arc::ptr_eq(&tree[2], &updated[2]));
        // The spine (b, c, d) is rebuilt.
        assert!(!Arc::ptr_eq(&tree[1], &updated[1]));
        assert!(!Arc::ptr_eq(&tree[1].children[0], &updated[1].children[0]));
        assert_eq!(
            updated[1].children[0].children[0].viewer_vote,
            Some(Vote::Up)
        );
        // The original snapshot is untouched.
        assert_eq!(tree[1].children[0].children[0].viewer_vote, None);
    }

    #[test]
    fn insert_reply_appends_and_counts() {
        let (tree, [_, _, c, _, _]) = example_tree();
        assert_eq!(count_all(&tree), 5);

        let reply = comment("f");
        let reply_id = reply.id;
        let updated = insert_reply(&tree, Some(c), reply).unwrap();
        assert_eq!(count_all(&updated), 6);
        // Appended after the existing child of c.
        assert_eq!(find_path(&updated, reply_id), Some(vec![1, 0, 1]));

        let orphan = comment("orphan");
        assert_eq!(
            insert_reply(&tree, Some(CommentId::stub()), orphan),
            Err(Error::UnknownComment(CommentId::stub())),
        );
    }

    #[test]
    fn toggle_collapse_is_display_only() {
        let (tree, [_, b, _, _, _]) = example_tree();
        let collapsed = toggle_collapse(&tree, b).unwrap();
        assert!(collapsed[1].is_collapsed);
        // All children remain present in the data.
        assert_eq!(count_all(&collapsed), count_all(&tree));
        let again = toggle_collapse(&collapsed, b).unwrap();
        assert!(!again[1].is_collapsed);
    }
}
