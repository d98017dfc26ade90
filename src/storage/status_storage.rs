use crate::models::Status;
use crate::storage::StatusRepository;
use crate::types::StatusId;
use dashmap::DashMap;

/// In-memory status lookup, seeded with the domain's fixed statuses.
pub struct StatusStorage {
    statuses: DashMap<StatusId, Status>
}

impl StatusStorage {
    pub fn new() -> Self {
        Self::with_statuses(Status::seeded())
    }

    /// Replaces the seeded statuses with a custom set.
    pub fn with_statuses(statuses: impl IntoIterator<Item = Status>) -> Self {
        Self {
            statuses: statuses.into_iter().map(|status| (status.id, status)).collect()
        }
    }
}

impl StatusRepository for StatusStorage {
    fn find_by_id(&self, status_id: StatusId) -> Option<Status> {
        self.statuses.get(&status_id).map(|item| item.value().clone())
    }
}
