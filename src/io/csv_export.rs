use crate::error::CsvError;
use crate::model::Student;
use std::path::Path;

/// Export students to a comma-delimited CSV file that `import_csv` reads back.
///
/// Columns: Id , Name , Marks
/// Returns the number of students written.
pub fn export_csv(students: &[Student], path: &Path) -> Result<usize, CsvError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(["Id", "Name", "Marks"])?;

    for student in students {
        wtr.write_record([
            student.id.to_string(),
            student.name.clone(),
            student.marks.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(students.len())
}
