use crate::types::errors::PageError;
use serde::Serialize;
use std::str::FromStr;

/// Fields an account listing can be ordered by.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SortField {
    Id,
    Description,
    Value,
    DueDate,
    PaymentDate,
    RegisteredAt
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending
}

/// Ordering applied to a paged listing, written as `field[,asc|desc]`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Sort {
    pub field: SortField,
    pub direction: Direction
}

impl Sort {
    pub fn ascending(field: SortField) -> Self {
        Self { field, direction: Direction::Ascending }
    }

    pub fn descending(field: SortField) -> Self {
        Self { field, direction: Direction::Descending }
    }
}

impl FromStr for SortField {
    type Err = PageError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "id" => Ok(SortField::Id),
            "description" => Ok(SortField::Description),
            "value" => Ok(SortField::Value),
            "dueDate" | "due_date" => Ok(SortField::DueDate),
            "paymentDate" | "payment_date" => Ok(SortField::PaymentDate),
            "registeredAt" | "registered_at" => Ok(SortField::RegisteredAt),
            other => Err(PageError::InvalidSort(other.to_string()))
        }
    }
}

impl FromStr for Sort {
    type Err = PageError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.split(',');

        let field = parts.next().unwrap_or_default().parse()?;

        let direction = match parts.next().map(|part| part.trim().to_ascii_lowercase()) {
            None => Direction::Ascending,
            Some(part) if part == "asc" => Direction::Ascending,
            Some(part) if part == "desc" => Direction::Descending,
            Some(_) => return Err(PageError::InvalidSort(value.to_string()))
        };

        if parts.next().is_some() {
            return Err(PageError::InvalidSort(value.to_string()));
        }

        Ok(Sort { field, direction })
    }
}

/// Zero-based page index, page size and optional ordering.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PageRequest {
    page: usize,
    size: usize,
    sort: Option<Sort>
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Result<Self, PageError> {
        if size == 0 {
            return Err(PageError::InvalidSize);
        }

        Ok(Self { page, size, sort: None })
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    /// Number of elements preceding this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 20, sort: None }
    }
}

/// One slice of a larger result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total_elements: usize
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: usize) -> Self {
        Self {
            content,
            page: request.page(),
            size: request.size(),
            total_elements
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_elements.div_ceil(self.size.max(1))
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements
        }
    }
}
