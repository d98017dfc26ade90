mod specification;

pub use specification::{description_contains, due_date_between, has_due_date, has_status, Specification};
