pub mod csv_export;
pub mod csv_import;
pub mod repository;

pub use repository::{StudentRepository, StudentStore};
