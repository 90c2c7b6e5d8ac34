//! Home feed loading
//!
//! The client loads three independent sections on mount and on
//! pull-to-refresh: the category list, a grid of random recipes, and one
//! featured recipe. The fetches run concurrently and are joined before
//! the feed is returned.
//!
//! Overlapping refreshes race, and without a guard the last response to
//! resolve would win regardless of which refresh was issued last. Each
//! load is therefore stamped with a generation from a monotonic counter;
//! callers keep a feed only while [`FeedLoader::is_current`] holds.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::client::CatalogClient;
use crate::meal::{Category, Recipe};

/// Number of recipes drawn for the home grid
const HOME_GRID_SIZE: usize = 12;

/// One loaded home feed, stamped with its refresh generation
#[derive(Debug)]
pub struct HomeFeed {
    pub generation: u64,
    pub categories: Vec<Category>,
    pub recipes: Vec<Recipe>,
    pub featured: Option<Recipe>,
}

/// Issues home-feed loads and tracks the newest refresh generation
pub struct FeedLoader {
    client: CatalogClient,
    generation: AtomicU64,
}

impl FeedLoader {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            generation: AtomicU64::new(0),
        }
    }

    /// Generation of the most recently issued load
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Whether a feed is from the most recently issued load
    ///
    /// A stale feed lost the race to a newer refresh and should be
    /// discarded instead of overwriting newer results.
    pub fn is_current(&self, feed: &HomeFeed) -> bool {
        feed.generation == self.latest_generation()
    }

    /// Load all home-feed sections concurrently
    ///
    /// A failed section degrades to empty rather than failing the feed;
    /// the error is logged at the fetch boundary.
    pub async fn load(&self) -> HomeFeed {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;

        let (categories, recipes, featured) = tokio::join!(
            self.client.categories(),
            self.client.random_meals(HOME_GRID_SIZE),
            self.client.random_meal(),
        );

        let categories = categories.unwrap_or_else(|e| {
            tracing::warn!("Category fetch failed: {}", e);
            Vec::new()
        });
        let featured = featured.unwrap_or_else(|e| {
            tracing::warn!("Featured recipe fetch failed: {}", e);
            None
        });

        HomeFeed {
            generation,
            categories,
            recipes,
            featured,
        }
    }
}
