use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use student_manager::{Student, StudentValidationError};

fn hash_of(student: &Student) -> u64 {
    let mut hasher = DefaultHasher::new();
    student.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn non_positive_id_fails_first_regardless_of_other_fields() {
    for id in [0, -1, i32::MIN] {
        for (name, marks) in [("Alice", 50.0), ("   ", 50.0), ("Alice", 250.0), ("", -3.0)] {
            let student = Student::new(id, name, marks);
            assert_eq!(student.validate(), Err(StudentValidationError::NonPositiveId));
            assert_eq!(student.validation_message(), "ID must be a positive number.");
            assert!(!student.is_valid());
        }
    }
}

#[test]
fn blank_name_fails_with_name_message() {
    for name in ["", " ", "\t", " \n  "] {
        let student = Student::new(3, name, 500.0);
        assert_eq!(student.validate(), Err(StudentValidationError::EmptyName));
        assert_eq!(student.validation_message(), "Name cannot be empty.");
    }
}

#[test]
fn marks_outside_range_fail_with_marks_message() {
    for marks in [-0.01, 100.01, -100.0, 1e9, f64::NAN, f64::INFINITY] {
        let student = Student::new(3, "Bob", marks);
        assert_eq!(student.validate(), Err(StudentValidationError::MarksOutOfRange));
        assert_eq!(student.validation_message(), "Marks must be between 0 and 100.");
    }
}

#[test]
fn valid_student_passes_with_empty_message() {
    for marks in [0.0, 42.0, 85.5, 100.0] {
        let student = Student::new(1, "Alice", marks);
        assert_eq!(student.validate(), Ok(()));
        assert!(student.is_valid());
        assert_eq!(student.validation_message(), "");
    }
}

#[test]
fn default_is_an_invalid_empty_shell() {
    let mut student = Student::default();
    assert_eq!(student.id, 0);
    assert_eq!(student.name, "");
    assert_eq!(student.marks, 0.0);
    assert!(!student.is_valid());

    student.id = 9;
    student.name = "Carol".to_string();
    student.marks = 77.0;
    assert!(student.is_valid());
}

#[test]
fn display_format() {
    assert_eq!(
        Student::new(1, "Alice", 85.5).to_string(),
        "ID: 1, Name: Alice, Marks: 85.5"
    );
    assert_eq!(Student::new(2, "Bob", 42.0).to_string(), "ID: 2, Name: Bob, Marks: 42");
}

#[test]
fn equality_and_hash_follow_id_only() {
    let before = Student::new(7, "Dana", 60.0);
    let after = Student::new(7, "Dana Smith", 91.0);
    let other = Student::new(8, "Dana", 60.0);

    assert_eq!(before, after);
    assert_eq!(hash_of(&before), hash_of(&after));
    assert_ne!(before, other);
    assert!(!before.same_snapshot(&after));
    assert!(before.same_snapshot(&before.clone()));

    let set: HashSet<Student> = [before, after, other].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn serializes_with_pascal_case_fields() {
    let json = serde_json::to_value(Student::new(1, "Alice", 85.5)).unwrap();
    assert_eq!(json["Id"], 1);
    assert_eq!(json["Name"], "Alice");
    assert_eq!(json["Marks"], 85.5);

    let decoded: Student = serde_json::from_str(r#"{"Id":2,"Name":"Bob","Marks":42}"#).unwrap();
    assert!(decoded.same_snapshot(&Student::new(2, "Bob", 42.0)));
}
