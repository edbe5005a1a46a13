#![deny(unsafe_code)]

pub mod batch;
pub mod store;
pub mod template;

pub use batch::BulkUploader;
pub use store::{AccountStore, MemoryStore, QuestionStore};
pub use template::{TEMPLATE_FILENAME, upload_template};
