//! Result export adapters.

mod csv_exporter;

pub use csv_exporter::{CsvResultExporter, DEFAULT_CSV_FILENAME};
