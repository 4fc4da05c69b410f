pub mod record_repo;

pub use record_repo::{NewRecord, RecordRepository};
