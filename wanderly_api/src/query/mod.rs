mod common;
pub use self::common::Query;

mod filters;
pub use self::filters::SearchFilters;
