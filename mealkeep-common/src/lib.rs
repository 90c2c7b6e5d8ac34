//! # MealKeep Common Library
//!
//! Shared code for the MealKeep backend including:
//! - Database initialization and models
//! - Configuration loading
//! - Common error types

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
