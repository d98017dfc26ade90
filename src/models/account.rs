use crate::models::errors::AccountError;
use crate::models::{AccountDto, Status, VALID_STATUS_IDS};
use crate::types::AccountId;
use chrono::{Local, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::warn;

/// Local wall-clock time used to stamp account registrations.
pub fn current_timestamp() -> NaiveDateTime {
    Local::now().naive_local()
}

/// A payable/receivable ledger entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Assigned by the repository on first save.
    pub id: Option<AccountId>,
    pub description: String,
    /// Exact decimal amount of the entry.
    pub value: Decimal,
    pub due_date: NaiveDate,
    pub payment_date: Option<NaiveDate>,
    /// When the account was registered.
    pub registered_at: NaiveDateTime,
    pub status: Status
}

impl Account {
    /// Creates an unsaved, pending account registered now.
    pub fn new(description: impl Into<String>, value: Decimal, due_date: NaiveDate) -> Self {
        Self {
            id: None,
            description: description.into(),
            value,
            due_date,
            payment_date: None,
            registered_at: current_timestamp(),
            status: Status::default()
        }
    }

    /// Merges a sparse patch into the account.
    ///
    /// Only the fields the patch actually carries are applied:
    /// - dates and value when present,
    /// - status when present and its id is within [`VALID_STATUS_IDS`]
    ///   (anything else is ignored, not rejected),
    /// - description when present and not blank.
    ///
    /// The id and registration timestamp are never touched.
    pub fn apply_patch(&mut self, patch: &AccountDto) {
        if let Some(payment_date) = patch.payment_date {
            self.payment_date = Some(payment_date);
        }

        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }

        if let Some(status) = &patch.status {
            if VALID_STATUS_IDS.contains(&status.id) {
                self.status = status.clone().into();
            } else {
                warn!("Ignoring status [{}] outside of the valid range for account [{:?}]", status.id, self.id);
            }
        }

        if let Some(value) = patch.value {
            self.value = value;
        }

        if let Some(description) = &patch.description {
            if !description.trim().is_empty() {
                self.description = description.clone();
            }
        }
    }
}

impl TryFrom<AccountDto> for Account {
    type Error = AccountError;

    fn try_from(dto: AccountDto) -> Result<Self, Self::Error> {
        let Some(value) = dto.value else {
            return Err(AccountError::missing_field("value"))
        };

        let Some(due_date) = dto.due_date else {
            return Err(AccountError::missing_field("dueDate"))
        };

        Ok(Self {
            id: dto.id,
            description: dto.description.unwrap_or_default(),
            value,
            due_date,
            payment_date: dto.payment_date,
            registered_at: dto.registered_at.unwrap_or_else(current_timestamp),
            status: dto.status.map(Status::from).unwrap_or_default()
        })
    }
}
