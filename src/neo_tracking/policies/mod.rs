mod pagination_policy;

pub use pagination_policy::{PaginationPolicy, DEFAULT_PAGE_SPAN_DAYS};
