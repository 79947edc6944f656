pub mod catalog;
pub mod providers;
pub mod recency;
pub mod recommendations;

pub use catalog::CatalogClient;
pub use recency::RecencyBuffer;
pub use recommendations::RecommendationEngine;
