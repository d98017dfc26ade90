mod account_storage;
mod status_storage;

use crate::filters::Specification;
use crate::models::{Account, Status};
use crate::types::{AccountId, Page, PageRequest, StatusId};

pub use account_storage::AccountStorage;
pub use status_storage::StatusStorage;

/// Persistence boundary for account records.
pub trait AccountRepository: Send + Sync + 'static {
    fn find_by_id(&self, account_id: AccountId) -> Option<Account>;

    /// Every account satisfying the specification, ordered by id.
    fn find_all(&self, specification: &Specification) -> Vec<Account>;

    fn find_all_paged(&self, specification: &Specification, page: &PageRequest) -> Page<Account>;

    fn find_page(&self, page: &PageRequest) -> Page<Account> {
        self.find_all_paged(&Specification::All, page)
    }

    /// Inserts when the account has no id yet, overwrites otherwise.
    fn save(&self, account: Account) -> Account;

    /// Saves one account at a time; a failure part-way leaves earlier saves applied.
    fn save_all(&self, accounts: Vec<Account>) -> Vec<Account> {
        accounts.into_iter().map(|account| self.save(account)).collect()
    }

    fn delete(&self, account: &Account);
}

/// Lookup of the fixed status entities.
pub trait StatusRepository: Send + Sync + 'static {
    fn find_by_id(&self, status_id: StatusId) -> Option<Status>;
}
