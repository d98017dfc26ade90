use crate::filters::{description_contains, due_date_between, has_due_date, has_status};
use crate::importer::CsvImporter;
use crate::models::{current_timestamp, Account, AccountDto, AccountError, AccountReport};
use crate::storage::{AccountRepository, StatusRepository};
use crate::types::{AccountId, Page, PageRequest, StatusId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::Read;
use std::sync::Arc;
use tracing::{debug, info};

/// Stateless orchestration of the account lifecycle.
///
/// Every call reads and writes through the repositories; nothing is kept
/// between calls.
pub struct AccountService<A: AccountRepository, S: StatusRepository> {
    accounts: Arc<A>,
    statuses: Arc<S>,
    importer: CsvImporter
}

impl<A: AccountRepository, S: StatusRepository> AccountService<A, S> {
    pub fn new(accounts: Arc<A>, statuses: Arc<S>) -> Self {
        Self {
            accounts,
            statuses,
            importer: CsvImporter::new()
        }
    }

    /// Replaces the default headerless, comma separated importer.
    pub fn with_importer(mut self, importer: CsvImporter) -> Self {
        self.importer = importer;
        self
    }

    /// Deletes the account if it exists; a missing id is not an error.
    pub fn delete(&self, account_id: AccountId) {
        match self.accounts.find_by_id(account_id) {
            Some(account) => {
                self.accounts.delete(&account);
                debug!("Account [{account_id}] deleted");
            },
            None => debug!("Account [{account_id}] not found, nothing to delete")
        }
    }

    /// Accounts due exactly on `due_date`, optionally narrowed to descriptions
    /// containing `description`. An empty description does not narrow.
    pub fn list_by_filters(&self, due_date: NaiveDate, description: Option<&str>) -> Vec<AccountDto> {
        let mut specification = has_due_date(due_date);

        if let Some(description) = description.filter(|description| !description.is_empty()) {
            specification = specification.and(description_contains(description));
        }

        self.accounts.find_all(&specification)
            .into_iter()
            .map(AccountDto::from)
            .collect()
    }

    /// Parses the stream and stores every account in a single batch.
    ///
    /// # Errors
    /// Returns `AccountError::Import` if the stream cannot be read or a row is
    /// malformed; nothing is stored in that case.
    pub fn import_from_csv<R: Read>(&self, reader: R) -> Result<Vec<AccountDto>, AccountError> {
        let registered_at = current_timestamp();
        let mut accounts = self.importer.parse(reader)?;

        for account in &mut accounts {
            account.registered_at = registered_at;
        }

        let saved = self.accounts.save_all(accounts);

        info!("Imported [{}] accounts from CSV", saved.len());

        Ok(saved.into_iter().map(AccountDto::from).collect())
    }

    /// Sums the values of accounts due within `[start, end]`.
    ///
    /// # Errors
    /// Returns `AccountError::Overflow` when the total does not fit in a `Decimal`.
    pub fn report_total_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Result<AccountReport, AccountError> {
        let total = self.accounts.find_all(&due_date_between(start, end))
            .iter()
            .try_fold(Decimal::ZERO, |total, account| total.checked_add(account.value))
            .ok_or_else(|| AccountError::overflow(start, end))?;

        debug!("Total between [{start}] and [{end}] is [{total}]");

        Ok(AccountReport { total })
    }

    pub fn list_all(&self, page: &PageRequest) -> Page<AccountDto> {
        self.accounts.find_page(page).map(AccountDto::from)
    }

    /// Stores the account, always stamping the registration time with now.
    ///
    /// # Errors
    /// Returns `AccountError::MissingField` when the value or due date is absent.
    pub fn save(&self, mut dto: AccountDto) -> Result<AccountDto, AccountError> {
        dto.registered_at = Some(current_timestamp());

        let account = self.accounts.save(Account::try_from(dto)?);

        debug!("Account [{:?}] saved", account.id);

        Ok(account.into())
    }

    pub fn list_by_status(&self, status_id: StatusId, page: &PageRequest) -> Page<AccountDto> {
        self.accounts.find_all_paged(&has_status(status_id), page).map(AccountDto::from)
    }

    pub fn find_by_id(&self, account_id: AccountId) -> Option<AccountDto> {
        self.accounts.find_by_id(account_id).map(AccountDto::from)
    }

    /// Moves the account to any status the status repository knows about.
    ///
    /// # Errors
    /// `AccountNotFound` or `StatusNotFound`, checked in that order.
    pub fn edit_status(&self, account_id: AccountId, status_id: StatusId) -> Result<AccountDto, AccountError> {
        let mut account = self.accounts.find_by_id(account_id)
            .ok_or_else(|| AccountError::account_not_found(account_id))?;

        let status = self.statuses.find_by_id(status_id)
            .ok_or_else(|| AccountError::status_not_found(status_id))?;

        account.status = status;

        debug!("Account [{account_id}] moved to status [{status_id}]");

        Ok(self.accounts.save(account).into())
    }

    /// Merges a sparse patch into the stored account, see [`Account::apply_patch`].
    ///
    /// # Errors
    /// `AccountNotFound` when no account has the id.
    pub fn edit_account(&self, account_id: AccountId, patch: AccountDto) -> Result<AccountDto, AccountError> {
        let mut account = self.accounts.find_by_id(account_id)
            .ok_or_else(|| AccountError::account_not_found(account_id))?;

        account.apply_patch(&patch);

        debug!("Account [{account_id}] edited");

        Ok(self.accounts.save(account).into())
    }
}

impl<A: AccountRepository, S: StatusRepository> Clone for AccountService<A, S> {
    fn clone(&self) -> Self {
        Self {
            accounts: self.accounts.clone(),
            statuses: self.statuses.clone(),
            importer: self.importer.clone()
        }
    }
}
