//! Modules layer - infrastructure shared by the entity features
//!
//! Document persistence, the public read cache and image storage.

pub mod cache;
pub mod documents;
pub mod storage;
