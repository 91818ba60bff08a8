use crate::error::RosterError;

use super::student::Student;

/// The ordered, in-memory student list edited by the UI.
///
/// The repository stores whatever it is given, so duplicate ids are kept
/// out here: `add` and `update` refuse an id that is already taken.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a freshly loaded list as-is, duplicates included.
    pub fn from_students(students: Vec<Student>) -> Self {
        Self { students }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn into_students(self) -> Vec<Student> {
        self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn find(&self, id: i32) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: i32) -> bool {
        self.find(id).is_some()
    }

    /// Validate and append a new student.
    pub fn add(&mut self, student: Student) -> Result<(), RosterError> {
        student.validate()?;
        if self.contains(student.id) {
            return Err(RosterError::DuplicateId(student.id));
        }
        self.students.push(student);
        Ok(())
    }

    /// Replace the student currently stored under `original_id`, keeping its position.
    ///
    /// The id itself may change as long as the new id is not taken by another entry.
    pub fn update(&mut self, original_id: i32, student: Student) -> Result<(), RosterError> {
        student.validate()?;
        let pos = self
            .students
            .iter()
            .position(|s| s.id == original_id)
            .ok_or(RosterError::NotFound(original_id))?;
        if student.id != original_id && self.contains(student.id) {
            return Err(RosterError::DuplicateId(student.id));
        }
        self.students[pos] = student;
        Ok(())
    }

    /// Remove the first student with this id.
    pub fn remove(&mut self, id: i32) -> Option<Student> {
        let pos = self.students.iter().position(|s| s.id == id)?;
        Some(self.students.remove(pos))
    }

    pub fn clear(&mut self) {
        self.students.clear();
    }

    pub fn average_marks(&self) -> Option<f64> {
        if self.students.is_empty() {
            return None;
        }
        let total: f64 = self.students.iter().map(|s| s.marks).sum();
        Some(total / self.students.len() as f64)
    }

    /// One past the highest id in use, or 1 for an empty roster.
    pub fn next_free_id(&self) -> i32 {
        self.students
            .iter()
            .map(|s| s.id)
            .max()
            .map_or(1, |max| max.saturating_add(1).max(1))
    }
}
