use crate::filters::Specification;
use crate::models::Account;
use crate::storage::AccountRepository;
use crate::types::{AccountId, Direction, Page, PageRequest, Sort, SortField};
use dashmap::DashMap;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use tracing::{trace, warn};

/// In-memory account repository keyed by id.
pub struct AccountStorage {
    cache: Arc<DashMap<AccountId, Account>>,
    sequence: AtomicU64
}

impl AccountStorage {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(DashMap::new()),
            sequence: AtomicU64::new(1)
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    fn matching(&self, specification: &Specification) -> Vec<Account> {
        self.cache.iter()
            .filter(|item| specification.is_satisfied_by(item.value()))
            .map(|item| item.value().clone())
            .collect()
    }

    /// Hands out the next unused id. Once the sequence reaches `AccountId::MAX`
    /// it stops advancing and the lowest free id is reused instead, so a stored
    /// account is never overwritten by a fresh insert.
    fn next_id(&self) -> AccountId {
        loop {
            let advanced = self.sequence.fetch_update(AtomicOrdering::SeqCst, AtomicOrdering::SeqCst, |current| {
                current.checked_add(1)
            });

            match advanced {
                Ok(candidate) if !self.cache.contains_key(&candidate) => return candidate,
                Ok(_) => continue,
                Err(_) => return self.lowest_free_id()
            }
        }
    }

    fn lowest_free_id(&self) -> AccountId {
        let account_id = (1..=AccountId::MAX)
            .find(|account_id| !self.cache.contains_key(account_id))
            .unwrap_or_default();

        warn!("Account id sequence exhausted, reusing free id [{account_id}]");

        account_id
    }
}

impl AccountRepository for AccountStorage {
    fn find_by_id(&self, account_id: AccountId) -> Option<Account> {
        self.cache.get(&account_id).map(|item| item.value().clone())
    }

    fn find_all(&self, specification: &Specification) -> Vec<Account> {
        let mut accounts = self.matching(specification);
        accounts.sort_by_key(|account| account.id);
        accounts
    }

    fn find_all_paged(&self, specification: &Specification, page: &PageRequest) -> Page<Account> {
        let mut accounts = self.matching(specification);
        let sort = page.sort().unwrap_or(Sort::ascending(SortField::Id));

        accounts.sort_by(|left, right| compare(left, right, sort));

        let total_elements = accounts.len();
        let content = accounts.into_iter()
            .skip(page.offset())
            .take(page.size())
            .collect();

        Page::new(content, page, total_elements)
    }

    fn save(&self, mut account: Account) -> Account {
        let account_id = match account.id {
            Some(account_id) => {
                //NOTE: Keep the sequence ahead of any caller-chosen id so inserts never collide
                self.sequence.fetch_max(account_id.saturating_add(1), AtomicOrdering::SeqCst);
                account_id
            },
            None => self.next_id()
        };

        account.id = Some(account_id);
        self.cache.insert(account_id, account.clone());

        trace!("Account [{account_id}] stored");

        account
    }

    fn delete(&self, account: &Account) {
        if let Some(account_id) = account.id {
            self.cache.remove(&account_id);
        }
    }
}

fn compare(left: &Account, right: &Account, sort: Sort) -> Ordering {
    let ordering = match sort.field {
        SortField::Id => left.id.cmp(&right.id),
        SortField::Description => left.description.cmp(&right.description),
        SortField::Value => left.value.cmp(&right.value),
        SortField::DueDate => left.due_date.cmp(&right.due_date),
        SortField::PaymentDate => left.payment_date.cmp(&right.payment_date),
        SortField::RegisteredAt => left.registered_at.cmp(&right.registered_at)
    };

    let ordering = match sort.direction {
        Direction::Ascending => ordering,
        Direction::Descending => ordering.reverse()
    };

    ordering.then_with(|| left.id.cmp(&right.id))
}
