#![deny(unsafe_code)]

pub mod json_store;
pub mod logging;
