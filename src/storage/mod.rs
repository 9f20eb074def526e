pub mod types;
pub mod validation;

pub use types::{AssignmentRecord, CategoryRecord, CourseDocument, CourseRecord, FORMAT_VERSION};
pub use validation::validate_document;

use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use thiserror::Error;

use crate::model::{Course, ValidationError};

/// The saved form of a course could not be read or written
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("malformed course data: {0}")]
    Format(#[from] serde_json::Error),
    #[error("invalid course data: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

impl From<ValidationError> for PersistenceError {
    fn from(e: ValidationError) -> Self {
        PersistenceError::Invalid(vec![e.to_string()])
    }
}

/// Decode a whole course from a byte stream
pub fn read_course<R: Read>(reader: R) -> Result<Course, PersistenceError> {
    let doc: CourseDocument = serde_json::from_reader(reader)?;
    validate_document(&doc).map_err(PersistenceError::Invalid)?;
    let course = Course::try_from(doc.course)?;

    tracing::debug!(
        "decoded course '{}' with {} categories",
        course.name,
        course.category_count()
    );
    Ok(course)
}

/// Encode a whole course to a byte stream as pretty-printed JSON
pub fn write_course<W: Write>(mut writer: W, course: &Course) -> Result<(), PersistenceError> {
    let doc = CourseDocument::from(course);
    serde_json::to_writer_pretty(&mut writer, &doc)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Load a course from a file
pub fn load_course(path: &Path) -> Result<Course, PersistenceError> {
    tracing::debug!("loading course from {}", path.display());
    let file = File::open(path)?;
    read_course(BufReader::new(file))
}

/// Save a course to a file atomically.
///
/// The file is either fully replaced or left as it was.
pub fn save_course(path: &Path, course: &Course) -> Result<(), PersistenceError> {
    tracing::debug!("saving course '{}' to {}", course.name, path.display());
    let mut file = AtomicWriteFile::open(path)?;
    write_course(&mut file, course)?;
    file.commit()?;
    Ok(())
}
