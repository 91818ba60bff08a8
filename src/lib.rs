//! Student register: the `Student` model, its validation rules, and
//! whole-list JSON persistence under the per-user data directory.

pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod settings;

pub use error::{CsvError, RosterError, StoreCause, StoreError, StudentValidationError};
pub use io::{StudentRepository, StudentStore};
pub use model::{Roster, Student};
pub use settings::AppSettings;
