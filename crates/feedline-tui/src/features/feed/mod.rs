mod render;
mod state;
mod update;

pub use render::{FEED_HEADER_HEIGHT, render_feed, render_item};
pub use state::{FeedState, FeedViewport, ITEM_HEIGHT, OVERSCAN_ITEMS};
pub use update::{handle_feed_result, handle_key, scroll_lines};
