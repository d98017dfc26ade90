use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("Page error: page size must be greater than zero")]
    InvalidSize,
    #[error("Page error: invalid sort [{0}]")]
    InvalidSort(String)
}
