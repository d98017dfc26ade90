use crate::importer::ImportError;
use crate::models::{Account, Status};
use crate::types::StatusId;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::str::FromStr;
use tracing::debug;

/// A single row of an account import file.
///
/// Columns are positional unless the importer expects a header row, in which
/// case the header names must match the field names.
#[derive(Debug, Deserialize)]
struct AccountRow {
    description: String,
    value: String,
    due_date: NaiveDate,
    #[serde(default)]
    payment_date: Option<NaiveDate>,
    #[serde(default)]
    status_id: Option<StatusId>
}

/// Converts a CSV stream into unsaved accounts.
#[derive(Debug, Clone)]
pub struct CsvImporter {
    has_headers: bool,
    delimiter: u8,
    statuses: Vec<Status>
}

impl CsvImporter {
    pub fn new() -> Self {
        Self {
            has_headers: false,
            delimiter: b',',
            statuses: Status::seeded()
        }
    }

    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Replaces the statuses a row's `status_id` may refer to.
    ///
    /// Defaults to the seeded Pending, Paid and Cancelled set. Pass the same
    /// statuses the service's status repository holds when that set differs.
    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = Status>) -> Self {
        self.statuses = statuses.into_iter().collect();
        self
    }

    /// Parses every row of the stream.
    ///
    /// # Errors
    /// Fails on the first unreadable chunk or malformed row; no partial result
    /// is returned.
    pub fn parse<R: Read>(&self, reader: R) -> Result<Vec<Account>, ImportError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(self.has_headers)
            .delimiter(self.delimiter)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers: Option<StringRecord> = if self.has_headers {
            Some(reader.headers()?.clone())
        } else {
            None
        };

        let mut accounts = Vec::new();

        for result in reader.records() {
            let record = result?;

            if record.iter().all(str::is_empty) {
                continue;
            }

            let line = record.position().map(|position| position.line()).unwrap_or_default();
            let row: AccountRow = record.deserialize(headers.as_ref())?;

            accounts.push(self.to_account(row, line)?);
        }

        debug!("Parsed [{}] accounts from CSV stream", accounts.len());

        Ok(accounts)
    }

    fn to_account(&self, row: AccountRow, line: u64) -> Result<Account, ImportError> {
        let value = Decimal::from_str(&row.value)
            .map_err(|error| ImportError::invalid_row(line, format!("invalid value [{}]: {error}", row.value)))?;

        let mut account = Account::new(row.description, value, row.due_date);
        account.payment_date = row.payment_date;

        if let Some(status_id) = row.status_id {
            account.status = self.statuses.iter()
                .find(|status| status.id == status_id)
                .cloned()
                .ok_or_else(|| ImportError::invalid_row(line, format!("unknown status [{status_id}]")))?;
        }

        Ok(account)
    }
}

impl Default for CsvImporter {
    fn default() -> Self {
        Self::new()
    }
}
