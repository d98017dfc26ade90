mod account;
mod dto;
mod errors;
mod status;

pub use account::{current_timestamp, Account};
pub use dto::{AccountDto, AccountReport, StatusDto};
pub use errors::AccountError;
pub use status::{Status, CANCELLED, PAID, PENDING, VALID_STATUS_IDS};
