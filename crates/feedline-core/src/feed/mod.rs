//! Feed data model and dataset synthesis.
//!
//! The upstream source is small (JSONPlaceholder ships 100 posts); the feed
//! simulates a much larger backend by replicating the source block-wise and
//! remapping ids so every item stays uniquely keyed. The expansion is pure and
//! deterministic, which keeps it trivially property-testable.

pub mod source;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use source::{FeedClient, FeedError};

/// One item as returned by the upstream collaborator. Read-only input to
/// synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceItem {
    #[serde(rename = "userId")]
    pub owner_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// One synthesized feed item. Immutable after synthesis; `id` is unique
/// within its feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    #[serde(rename = "userId")]
    pub owner_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// An ordered feed snapshot. Replaced wholesale on refetch, never mutated in
/// place.
#[derive(Debug, Clone)]
pub struct Feed {
    pub items: Vec<FeedItem>,
    pub fetched_at: DateTime<Utc>,
}

impl Feed {
    pub fn new(items: Vec<FeedItem>) -> Self {
        Self {
            items,
            fetched_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Expands `source` to exactly `target_count` items with unique ascending ids.
///
/// The block size is the source length: block `b` replays the source in order
/// with ids `b * |source| + index + 1`, so each block of `|source|` items
/// replicates the source's title/body/owner pattern. The output is truncated
/// to `target_count`; an empty source yields an empty feed.
pub fn synthesize(source: &[SourceItem], target_count: usize) -> Vec<FeedItem> {
    if source.is_empty() || target_count == 0 {
        return Vec::new();
    }

    let block_size = source.len();
    let repeats = target_count.div_ceil(block_size);
    let mut items = Vec::with_capacity(repeats * block_size);

    for block in 0..repeats {
        for (index, item) in source.iter().enumerate() {
            items.push(FeedItem {
                owner_id: item.owner_id,
                id: (block * block_size + index + 1) as u64,
                title: item.title.clone(),
                body: item.body.clone(),
            });
        }
    }

    items.truncate(target_count);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_source(count: usize) -> Vec<SourceItem> {
        (1..=count as u64)
            .map(|id| SourceItem {
                owner_id: (id - 1) / 10 + 1,
                id,
                title: format!("title {id}"),
                body: format!("body {id}"),
            })
            .collect()
    }

    #[test]
    fn test_output_length_and_unique_ascending_ids() {
        let source = sample_source(7);
        for target in [0, 1, 6, 7, 8, 20, 99, 100] {
            let items = synthesize(&source, target);
            assert_eq!(items.len(), target, "target {target}");

            for (i, item) in items.iter().enumerate() {
                assert_eq!(item.id, i as u64 + 1, "ids ascend without gaps");
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let source = sample_source(13);
        assert_eq!(synthesize(&source, 57), synthesize(&source, 57));
    }

    #[test]
    fn test_empty_source_yields_empty_feed() {
        assert!(synthesize(&[], 2000).is_empty());
    }

    #[test]
    fn test_hundred_posts_to_two_thousand() {
        let source = sample_source(100);
        let items = synthesize(&source, 2000);

        assert_eq!(items.len(), 2000);
        assert_eq!(items.first().unwrap().id, 1);
        assert_eq!(items.last().unwrap().id, 2000);

        // Each block of 100 replicates the source pattern with remapped ids.
        for block in 0..20 {
            for index in 0..100 {
                let item = &items[block * 100 + index];
                let original = &source[index];
                assert_eq!(item.id, (block * 100 + index + 1) as u64);
                assert_eq!(item.owner_id, original.owner_id);
                assert_eq!(item.title, original.title);
                assert_eq!(item.body, original.body);
            }
        }
    }

    #[test]
    fn test_truncates_partial_final_block() {
        let source = sample_source(3);
        let items = synthesize(&source, 7);

        assert_eq!(items.len(), 7);
        // 7 = 2 full blocks of 3 + 1 item of the third block.
        assert_eq!(items[6].title, source[0].title);
        assert_eq!(items[6].id, 7);
    }
}
