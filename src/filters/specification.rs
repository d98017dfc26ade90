use chrono::NaiveDate;

use crate::models::Account;
use crate::types::StatusId;

/// Composable predicate over accounts.
///
/// Kept as plain data so a repository can either evaluate it in memory with
/// [`Specification::is_satisfied_by`] or translate it into its own query
/// language.
#[derive(Debug, Clone, PartialEq)]
pub enum Specification {
    /// Matches every account.
    All,
    DueDateEquals(NaiveDate),
    /// Inclusive on both ends.
    DueDateBetween(NaiveDate, NaiveDate),
    /// Raw, case-sensitive substring match on the description.
    DescriptionContains(String),
    StatusEquals(StatusId),
    And(Box<Specification>, Box<Specification>),
    Or(Box<Specification>, Box<Specification>)
}

impl Specification {
    pub fn and(self, other: Specification) -> Self {
        Specification::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Specification) -> Self {
        Specification::Or(Box::new(self), Box::new(other))
    }

    pub fn is_satisfied_by(&self, account: &Account) -> bool {
        match self {
            Specification::All => true,
            Specification::DueDateEquals(date) => account.due_date == *date,
            Specification::DueDateBetween(start, end) => *start <= account.due_date && account.due_date <= *end,
            Specification::DescriptionContains(text) => account.description.contains(text.as_str()),
            Specification::StatusEquals(status_id) => account.status.id == *status_id,
            Specification::And(left, right) => left.is_satisfied_by(account) && right.is_satisfied_by(account),
            Specification::Or(left, right) => left.is_satisfied_by(account) || right.is_satisfied_by(account)
        }
    }
}

pub fn has_due_date(due_date: NaiveDate) -> Specification {
    Specification::DueDateEquals(due_date)
}

pub fn due_date_between(start: NaiveDate, end: NaiveDate) -> Specification {
    Specification::DueDateBetween(start, end)
}

pub fn description_contains(text: impl Into<String>) -> Specification {
    Specification::DescriptionContains(text.into())
}

pub fn has_status(status_id: StatusId) -> Specification {
    Specification::StatusEquals(status_id)
}
