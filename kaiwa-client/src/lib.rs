mod feed;
pub use feed::Feed;

mod order;
pub use order::SortExt;

mod poll;
pub use poll::PollExt;

mod thread;
pub use thread::{count_all, find_path, insert_reply, toggle_collapse, update_node};

mod vote;
pub use vote::apply_vote;

mod fuzz;

pub mod api {
    pub use kaiwa_api::*;
}

pub mod prelude {
    pub use crate::{PollExt, SortExt};
}
