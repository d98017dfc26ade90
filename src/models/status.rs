use std::ops::RangeInclusive;

use crate::models::StatusDto;
use crate::types::StatusId;

pub const PENDING: StatusId = 1;
pub const PAID: StatusId = 2;
pub const CANCELLED: StatusId = 3;

/// Status ids an account patch is allowed to assign.
pub const VALID_STATUS_IDS: RangeInclusive<StatusId> = PENDING..=CANCELLED;

/// Categorical state of an account record.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Status {
    pub id: StatusId,
    pub description: String
}

impl Status {
    pub fn new(id: StatusId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into()
        }
    }

    pub fn pending() -> Self {
        Self::new(PENDING, "Pending")
    }

    pub fn paid() -> Self {
        Self::new(PAID, "Paid")
    }

    pub fn cancelled() -> Self {
        Self::new(CANCELLED, "Cancelled")
    }

    /// The fixed set of statuses known to the domain.
    pub fn seeded() -> Vec<Status> {
        vec![Self::pending(), Self::paid(), Self::cancelled()]
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::pending()
    }
}

impl From<StatusDto> for Status {
    fn from(dto: StatusDto) -> Self {
        Self {
            id: dto.id,
            description: dto.description.unwrap_or_default()
        }
    }
}
