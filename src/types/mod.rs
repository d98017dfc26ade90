mod errors;
mod page;

pub use errors::PageError;
pub use page::{Direction, Page, PageRequest, Sort, SortField};

pub type AccountId = u64;
pub type StatusId = i16;
