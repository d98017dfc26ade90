//! Accounts payable/receivable records: storage, filtering, CSV import and
//! the service that ties them together.

pub mod filters;
pub mod importer;
pub mod models;
pub mod service;
pub mod storage;
pub mod types;
