use std::path::Path;

use tracing::debug;

use crate::error::CsvError;
use crate::model::Student;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Id,
    Name,
    Marks,
}

/// Detect delimiter by checking the first line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if commas >= semicolons && commas >= tabs {
        b','
    } else if semicolons >= tabs {
        b';'
    } else {
        b'\t'
    }
}

/// Normalize a header string to a canonical column key.
fn normalize_header(h: &str) -> String {
    h.trim_start_matches('\u{feff}')
        .trim()
        .to_lowercase()
        .replace([' ', '-', '_', '.'], "")
}

fn header_to_col(normalized: &str) -> Option<Column> {
    match normalized {
        "id" | "studentid" | "rollno" | "rollnumber" | "no" => Some(Column::Id),

        "name" | "studentname" | "fullname" | "student" => Some(Column::Name),

        "marks" | "mark" | "score" | "grade" | "points" => Some(Column::Marks),

        _ => None,
    }
}

/// Import students from a CSV file.
///
/// Auto-detects delimiter (comma, semicolon, tab) and matches column headers
/// flexibly ("Student ID", "Full Name", "Score", ...).
/// Rows that don't parse or fail validation are skipped.
/// Returns `(students, skipped_count)` on success.
pub fn import_csv(path: &Path) -> Result<(Vec<Student>, usize), CsvError> {
    let content = std::fs::read_to_string(path)?;

    let first_line = content.lines().next().unwrap_or("");
    let delimiter = detect_delimiter(first_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();

    // First matching header wins for each column.
    let find = |col: Column| {
        headers
            .iter()
            .position(|h| header_to_col(&normalize_header(h)) == Some(col))
    };
    let (Some(id_idx), Some(name_idx), Some(marks_idx)) =
        (find(Column::Id), find(Column::Name), find(Column::Marks))
    else {
        return Err(CsvError::MissingColumns {
            found: headers.iter().map(str::to_string).collect(),
        });
    };

    let mut students = Vec::new();
    let mut skipped = 0usize;

    for (row, record) in reader.records().enumerate() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                debug!(row = row + 2, error = %e, "skipping unreadable CSV row");
                skipped += 1;
                continue;
            }
        };

        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let name = field(name_idx);
        if name.is_empty() && field(id_idx).is_empty() && field(marks_idx).is_empty() {
            // Blank line in the middle of the file
            continue;
        }

        let (Ok(id), Ok(marks)) = (field(id_idx).parse::<i32>(), parse_marks(field(marks_idx)))
        else {
            debug!(row = row + 2, "skipping CSV row with non-numeric id or marks");
            skipped += 1;
            continue;
        };

        let student = Student::new(id, name, marks);
        if let Err(e) = student.validate() {
            debug!(row = row + 2, reason = %e, "skipping invalid student");
            skipped += 1;
            continue;
        }
        students.push(student);
    }

    Ok((students, skipped))
}

/// Accept a decimal comma ("85,5") as well as a decimal point.
fn parse_marks(s: &str) -> Result<f64, std::num::ParseFloatError> {
    s.parse::<f64>().or_else(|_| s.replace(',', ".").parse::<f64>())
}
