#![deny(unsafe_code)]

pub mod row;

pub use row::{RowError, validate_row};
