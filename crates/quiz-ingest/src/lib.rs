#![deny(unsafe_code)]

pub mod csv_table;
pub mod headers;
pub mod tokenize;

pub use csv_table::{CsvTable, read_csv_table};
pub use headers::{ResolvedColumn, ResolvedHeaders, clean_header, resolve_headers};
pub use tokenize::split_values;
