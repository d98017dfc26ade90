mod csv_importer;
mod errors;

pub use csv_importer::CsvImporter;
pub use errors::ImportError;
