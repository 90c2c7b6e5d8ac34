//! # MealKeep Catalog
//!
//! Read-only client for the external TheMealDB recipe catalog:
//! - [`client::CatalogClient`] wraps the HTTP endpoints
//! - [`meal`] normalizes heterogeneous wire records into [`meal::Recipe`]
//! - [`feed`] loads the home-screen sections concurrently with a
//!   refresh-generation guard against stale responses

pub mod client;
pub mod feed;
pub mod meal;

pub use client::{CatalogClient, CatalogError};
pub use feed::{FeedLoader, HomeFeed};
pub use meal::{Category, Recipe};
