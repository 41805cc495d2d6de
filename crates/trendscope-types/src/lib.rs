pub mod format;
pub mod labels;
pub mod record;

pub use record::TrendRecord;
