pub mod dash;
pub mod facets;
pub mod list;
pub mod refresh;
pub mod show;
pub mod stats;
