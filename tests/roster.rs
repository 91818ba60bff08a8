use student_manager::{Roster, RosterError, Student, StudentValidationError};

fn sample() -> Roster {
    let mut roster = Roster::new();
    roster.add(Student::new(1, "Alice", 85.5)).unwrap();
    roster.add(Student::new(2, "Bob", 42.0)).unwrap();
    roster
}

#[test]
fn add_appends_in_insertion_order() {
    let mut roster = sample();
    roster.add(Student::new(10, "Carol", 70.0)).unwrap();

    let ids: Vec<i32> = roster.students().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 10]);
    assert_eq!(roster.len(), 3);
}

#[test]
fn add_rejects_invalid_and_duplicate_students() {
    let mut roster = sample();

    assert_eq!(
        roster.add(Student::new(3, " ", 50.0)),
        Err(RosterError::Invalid(StudentValidationError::EmptyName))
    );
    assert_eq!(
        roster.add(Student::new(2, "Another Bob", 50.0)),
        Err(RosterError::DuplicateId(2))
    );
    assert_eq!(roster.len(), 2);
}

#[test]
fn update_replaces_in_place() {
    let mut roster = sample();

    roster.update(1, Student::new(1, "Alice B.", 90.0)).unwrap();

    let first = &roster.students()[0];
    assert!(first.same_snapshot(&Student::new(1, "Alice B.", 90.0)));
}

#[test]
fn update_may_change_id_when_free() {
    let mut roster = sample();

    roster.update(1, Student::new(5, "Alice", 85.5)).unwrap();
    assert_eq!(roster.students()[0].id, 5);
    assert!(roster.find(1).is_none());

    assert_eq!(
        roster.update(5, Student::new(2, "Alice", 85.5)),
        Err(RosterError::DuplicateId(2))
    );
    assert_eq!(
        roster.update(99, Student::new(99, "Nobody", 1.0)),
        Err(RosterError::NotFound(99))
    );
    assert_eq!(
        roster.update(5, Student::new(5, "Alice", 101.0)),
        Err(RosterError::Invalid(StudentValidationError::MarksOutOfRange))
    );
}

#[test]
fn remove_and_clear() {
    let mut roster = sample();

    let removed = roster.remove(1).expect("present");
    assert_eq!(removed.name, "Alice");
    assert!(roster.remove(1).is_none());
    assert_eq!(roster.len(), 1);

    roster.clear();
    assert!(roster.is_empty());
}

#[test]
fn loaded_duplicates_are_kept() {
    let roster = Roster::from_students(vec![
        Student::new(4, "Dup", 1.0),
        Student::new(4, "Dup", 2.0),
    ]);

    assert_eq!(roster.len(), 2);
    assert_eq!(roster.find(4).map(|s| s.marks), Some(1.0));
}

#[test]
fn average_and_next_free_id() {
    let empty = Roster::new();
    assert_eq!(empty.average_marks(), None);
    assert_eq!(empty.next_free_id(), 1);

    let roster = sample();
    assert_eq!(roster.average_marks(), Some((85.5 + 42.0) / 2.0));
    assert_eq!(roster.next_free_id(), 3);
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(
        RosterError::DuplicateId(7).to_string(),
        "A student with ID 7 already exists."
    );
    assert_eq!(
        RosterError::Invalid(StudentValidationError::NonPositiveId).to_string(),
        "ID must be a positive number."
    );
}

#[test]
fn cleared_roster_persists_as_empty_list() {
    let dir = tempfile::TempDir::new().unwrap();
    let repo = student_manager::StudentRepository::with_path(dir.path().join("students.json"));
    let mut roster = sample();
    repo.save(roster.students()).unwrap();

    let mut next = roster.clone();
    next.clear();
    repo.save(next.students()).unwrap();
    roster = next;

    assert!(roster.is_empty());
    assert!(repo.load().unwrap().is_empty());
}
