//! Feed view state and the viewport window math.
//!
//! The feed holds thousands of rows but only the slice intersecting the
//! viewport is ever turned into widget lines. Rows have a fixed height, so
//! visibility is plain arithmetic on the line offset; a small overscan margin
//! keeps wheel scrolling from flashing unrendered rows at the edges.

use std::ops::Range;

use feedline_core::feed::{Feed, FeedError};

/// Rows each feed item occupies (id/title line, body line, separator).
pub const ITEM_HEIGHT: usize = 3;

/// Extra items materialized on each side of the visible slice.
pub const OVERSCAN_ITEMS: usize = 2;

/// Feed view state.
#[derive(Debug)]
pub struct FeedState {
    /// Current feed snapshot, if loaded. Replaced wholesale on refetch.
    pub feed: Option<Feed>,
    /// Fetch failure shown as a full-screen retryable error.
    pub error: Option<FeedError>,
    /// Scroll window over the feed.
    pub viewport: FeedViewport,
    /// Rows available to the list, set from the frame size each loop.
    pub viewport_height: usize,
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedState {
    pub fn new() -> Self {
        Self {
            feed: None,
            error: None,
            viewport: FeedViewport::new(),
            viewport_height: 0,
        }
    }

    /// True when entering the feed route should kick off a fetch.
    pub fn needs_fetch(&self) -> bool {
        self.feed.is_none() && self.error.is_none()
    }

    pub fn set_feed(&mut self, feed: Feed) {
        self.feed = Some(feed);
        self.error = None;
        self.viewport.to_top();
    }

    /// Records a fetch failure. No partial or stale data is kept around.
    pub fn set_error(&mut self, error: FeedError) {
        self.feed = None;
        self.error = Some(error);
    }

    /// Clears the error so the next admission pass retries the fetch.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Drops everything (logout).
    pub fn reset(&mut self) {
        self.feed = None;
        self.error = None;
        self.viewport.to_top();
    }

    pub fn item_count(&self) -> usize {
        self.feed.as_ref().map_or(0, Feed::len)
    }
}

/// Fixed-item-height viewport window.
///
/// `visible_range` returns exactly the item indices whose row rect intersects
/// `[offset, offset + viewport_height)`, widened by the overscan margin and
/// clamped to the collection. The render layer materializes only that range;
/// everything outside it is skipped, and scrolling re-materializes the new
/// range on the next frame.
#[derive(Debug, Clone)]
pub struct FeedViewport {
    /// Scroll offset in lines from the top of the content.
    pub offset: usize,
    /// Fixed height of one item, in lines.
    pub item_height: usize,
    /// Items materialized beyond each edge of the visible slice.
    pub overscan: usize,
}

impl Default for FeedViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedViewport {
    pub fn new() -> Self {
        Self {
            offset: 0,
            item_height: ITEM_HEIGHT,
            overscan: OVERSCAN_ITEMS,
        }
    }

    /// Total content height in lines.
    pub fn content_height(&self, item_count: usize) -> usize {
        item_count * self.item_height
    }

    /// Largest valid offset for the given content and viewport.
    pub fn max_offset(&self, item_count: usize, viewport_height: usize) -> usize {
        self.content_height(item_count).saturating_sub(viewport_height)
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize, item_count: usize, viewport_height: usize) {
        self.offset = (self.offset + lines).min(self.max_offset(item_count, viewport_height));
    }

    pub fn page_up(&mut self, viewport_height: usize) {
        self.scroll_up(viewport_height.max(1));
    }

    pub fn page_down(&mut self, item_count: usize, viewport_height: usize) {
        self.scroll_down(viewport_height.max(1), item_count, viewport_height);
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self, item_count: usize, viewport_height: usize) {
        self.offset = self.max_offset(item_count, viewport_height);
    }

    /// Item indices to materialize for the current offset.
    pub fn visible_range(&self, item_count: usize, viewport_height: usize) -> Range<usize> {
        if item_count == 0 || viewport_height == 0 {
            return 0..0;
        }

        let offset = self.offset.min(self.max_offset(item_count, viewport_height));
        let first = offset / self.item_height;
        let last = (offset + viewport_height)
            .div_ceil(self.item_height)
            .min(item_count);

        first.saturating_sub(self.overscan)..(last + self.overscan).min(item_count)
    }
}
