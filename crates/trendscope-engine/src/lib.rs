pub mod criteria;
pub mod facets;
pub mod page;
pub mod pipeline;
pub mod summary;
pub mod tier;

pub use criteria::{Criteria, SortKey, TierFilter, ViralFilter};
pub use facets::Facets;
pub use page::{normalize_page_size, paginate, PageView, DEFAULT_PAGE_SIZE};
pub use pipeline::apply;
pub use summary::{summarize, Summary};
pub use tier::{Thresholds, Tier};
