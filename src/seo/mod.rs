pub mod jsonld;
pub mod meta;
pub mod sitemap;

// Re-export commonly used functions
pub use jsonld::build_post_jsonld;
pub use meta::{build_meta, build_og_image};
pub use sitemap::{generate_robots, generate_sitemap};
