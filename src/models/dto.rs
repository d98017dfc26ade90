use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Account, Status};
use crate::types::{AccountId, StatusId};

/// Boundary-facing projection of an [`Account`].
///
/// Every field is optional so the same shape doubles as the sparse patch
/// accepted by `AccountService::edit_account`; `AccountDto::default()` is the
/// empty patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub id: Option<AccountId>,
    pub description: Option<String>,
    pub value: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
    pub payment_date: Option<NaiveDate>,
    pub registered_at: Option<NaiveDateTime>,
    pub status: Option<StatusDto>
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDto {
    pub id: StatusId,
    pub description: Option<String>
}

impl StatusDto {
    /// A status reference carrying only its identifier.
    pub fn with_id(id: StatusId) -> Self {
        Self { id, description: None }
    }
}

/// Sum of account values over a due-date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountReport {
    pub total: Decimal
}

impl From<Status> for StatusDto {
    fn from(status: Status) -> Self {
        Self {
            id: status.id,
            description: Some(status.description)
        }
    }
}

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            description: Some(account.description),
            value: Some(account.value),
            due_date: Some(account.due_date),
            payment_date: account.payment_date,
            registered_at: Some(account.registered_at),
            status: Some(account.status.into())
        }
    }
}
