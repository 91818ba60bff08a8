use std::fs;

use student_manager::io::csv_export::export_csv;
use student_manager::io::csv_import::import_csv;
use student_manager::{CsvError, Student};
use tempfile::TempDir;

#[test]
fn exported_file_imports_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("students.csv");
    let students = vec![
        Student::new(1, "Alice", 85.5),
        Student::new(2, "Bob, Jr.", 42.0),
    ];

    let written = export_csv(&students, &path).unwrap();
    assert_eq!(written, 2);

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Id,Name,Marks"));

    let (imported, skipped) = import_csv(&path).unwrap();
    assert_eq!(skipped, 0);
    assert_eq!(imported.len(), 2);
    for (a, e) in imported.iter().zip(&students) {
        assert!(a.same_snapshot(e), "{a} != {e}");
    }
}

#[test]
fn semicolon_file_with_loose_headers_and_bad_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("class.csv");
    fs::write(
        &path,
        "Full Name;Student ID;Score\n\
         Alice;1;85,5\n\
         Bob;two;40\n\
         ;3;50\n\
         Carol;4;120\n\
         \n\
         Dave;5;64\n",
    )
    .unwrap();

    let (imported, skipped) = import_csv(&path).unwrap();

    let names: Vec<&str> = imported.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Dave"]);
    assert_eq!(imported[0].marks, 85.5);
    assert_eq!(skipped, 3);
}

#[test]
fn missing_columns_are_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "Name,Comment\nAlice,hello\n").unwrap();

    let err = import_csv(&path).unwrap_err();

    match err {
        CsvError::MissingColumns { found } => assert_eq!(found, vec!["Name", "Comment"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = import_csv(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, CsvError::Io(_)));
}
