// Service exports
pub mod cache;

pub use cache::{ExtractionCache, CacheKey, CacheStats};
