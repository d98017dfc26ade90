use crate::importer::ImportError;
use crate::types::{AccountId, StatusId};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("account not found [{account_id}]")]
    AccountNotFound {
        account_id: AccountId
    },
    #[error("status not found [{status_id}]")]
    StatusNotFound {
        status_id: StatusId
    },
    #[error("Field [{field}] is required to store an account")]
    MissingField {
        field: &'static str
    },
    #[error("Numeric overflow occurred summing accounts due between [{start}] and [{end}]")]
    Overflow {
        start: NaiveDate,
        end: NaiveDate
    },
    #[error("Error importing CSV file: {0}")]
    Import(#[from] ImportError)
}

impl AccountError {
    pub fn account_not_found(account_id: AccountId) -> Self {
        Self::AccountNotFound { account_id }
    }

    pub fn status_not_found(status_id: StatusId) -> Self {
        Self::StatusNotFound { status_id }
    }

    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn overflow(start: NaiveDate, end: NaiveDate) -> Self {
        Self::Overflow { start, end }
    }
}
