use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{StoreCause, StoreError};
use crate::model::Student;

/// Folder created under the per-user application data directory.
pub const APP_FOLDER_NAME: &str = "StudentManagementSystem";
/// Name of the JSON file holding the whole student list.
pub const DATA_FILE_NAME: &str = "students.json";

/// Whole-list persistence for students.
///
/// Implementations always read and write the full list as one unit.
pub trait StudentStore {
    fn load(&self) -> Result<Vec<Student>, StoreError>;
    fn save(&self, students: &[Student]) -> Result<(), StoreError>;
    fn data_file_path(&self) -> &Path;

    /// Directory holding the data file.
    fn data_dir(&self) -> &Path;
}

/// Resolve `<data dir>/StudentManagementSystem/students.json`.
///
/// Falls back to the working directory when the OS reports no home directory.
pub fn default_data_file_path() -> PathBuf {
    let base = match directories::BaseDirs::new() {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => {
            warn!("no home directory found; storing students in the working directory");
            PathBuf::from(".")
        }
    };
    base.join(APP_FOLDER_NAME).join(DATA_FILE_NAME)
}

/// Stores the student list as a JSON array in a single file.
///
/// Holds nothing but the resolved path; every call checks the file again and
/// no handle outlives the call that opened it.
#[derive(Debug, Clone)]
pub struct StudentRepository {
    path: PathBuf,
}

impl Default for StudentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentRepository {
    /// Repository backed by the default per-user location.
    pub fn new() -> Self {
        Self::with_path(default_data_file_path())
    }

    /// Repository backed by an explicit file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn data_file_path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the data file.
    pub fn data_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    /// Load the whole list. A missing file yields an empty list and creates the
    /// storage directory; JSON `null` also yields an empty list.
    pub fn load(&self) -> Result<Vec<Student>, StoreError> {
        match self.read_students() {
            Ok(students) => {
                debug!(path = %self.path.display(), count = students.len(), "loaded students");
                Ok(students)
            }
            Err(source) => {
                warn!(path = %self.path.display(), error = %source, "loading students failed");
                Err(StoreError::Load {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }

    /// Overwrite the file with the whole list.
    ///
    /// The list goes to a sibling temp file first and is renamed into place, so
    /// a reader sees either the previous contents or the new ones.
    pub fn save(&self, students: &[Student]) -> Result<(), StoreError> {
        match self.write_students(students) {
            Ok(()) => {
                info!(path = %self.path.display(), count = students.len(), "saved students");
                Ok(())
            }
            Err(source) => {
                warn!(path = %self.path.display(), error = %source, "saving students failed");
                Err(StoreError::Save {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }

    fn read_students(&self) -> Result<Vec<Student>, StoreCause> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                fs::create_dir_all(self.data_dir())?;
                debug!(path = %self.path.display(), "no data file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        let students: Option<Vec<Student>> = serde_json::from_reader(BufReader::new(file))?;
        Ok(students.unwrap_or_default())
    }

    fn write_students(&self, students: &[Student]) -> Result<(), StoreCause> {
        if let Some(bad) = students.iter().find(|s| !s.marks.is_finite()) {
            return Err(StoreCause::NonFiniteMarks { id: bad.id });
        }
        fs::create_dir_all(self.data_dir())?;

        let tmp = self.temp_path();
        let result = write_json(&tmp, students)
            .and_then(|()| fs::rename(&tmp, &self.path).map_err(StoreCause::from));
        if result.is_err() {
            // Target is untouched; only the temp file may be left behind.
            if let Err(e) = fs::remove_file(&tmp) {
                if e.kind() != io::ErrorKind::NotFound {
                    debug!(path = %tmp.display(), error = %e, "could not remove temp file");
                }
            }
        }
        result
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

fn write_json(path: &Path, students: &[Student]) -> Result<(), StoreCause> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, students)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

impl StudentStore for StudentRepository {
    fn load(&self) -> Result<Vec<Student>, StoreError> {
        StudentRepository::load(self)
    }

    fn save(&self, students: &[Student]) -> Result<(), StoreError> {
        StudentRepository::save(self, students)
    }

    fn data_file_path(&self) -> &Path {
        StudentRepository::data_file_path(self)
    }

    fn data_dir(&self) -> &Path {
        StudentRepository::data_dir(self)
    }
}
