use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::StudentValidationError;

pub const MIN_MARKS: f64 = 0.0;
pub const MAX_MARKS: f64 = 100.0;

/// A single student record.
///
/// Identity is the `id`: two values with the same id are the same student,
/// possibly at different points in time, so `==` and `Hash` ignore `name`
/// and `marks`. Use [`Student::same_snapshot`] to compare every field.
///
/// Validity is not enforced on construction; call [`Student::validate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub marks: f64,
}

impl Student {
    pub fn new(id: i32, name: impl Into<String>, marks: f64) -> Self {
        Self {
            id,
            name: name.into(),
            marks,
        }
    }

    /// Check the rules in order (id, name, marks) and report the first one broken.
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        if self.id <= 0 {
            return Err(StudentValidationError::NonPositiveId);
        }
        if self.name.trim().is_empty() {
            return Err(StudentValidationError::EmptyName);
        }
        // NaN fails both comparisons and is rejected here.
        if !(MIN_MARKS..=MAX_MARKS).contains(&self.marks) {
            return Err(StudentValidationError::MarksOutOfRange);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Human-readable reason the student is invalid, or an empty string.
    pub fn validation_message(&self) -> String {
        match self.validate() {
            Ok(()) => String::new(),
            Err(e) => e.to_string(),
        }
    }

    /// Field-by-field comparison, unlike `==`.
    pub fn same_snapshot(&self, other: &Student) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.marks.to_bits() == other.marks.to_bits()
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}, Marks: {}", self.id, self.name, self.marks)
    }
}
