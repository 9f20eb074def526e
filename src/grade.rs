use std::io::{Read, Write};
use thiserror::Error;

use crate::model::ScoringError;
use crate::output::format_score;
use crate::scoring::CourseScore;
use crate::storage::{read_course, PersistenceError};

/// Non-interactive grading failed
#[derive(Debug, Error)]
pub enum GradeError {
    #[error("Error reading course: {0}")]
    Read(#[from] PersistenceError),
    #[error("Error computing grade: {0}")]
    Score(#[from] ScoringError),
    #[error("Error writing grade: {0}")]
    Write(#[from] std::io::Error),
}

/// Read a saved course from `reader` and write its final score as one line
pub fn grade<R: Read, W: Write>(
    reader: R,
    mut out: W,
    precision: usize,
) -> Result<CourseScore, GradeError> {
    let course = read_course(reader)?;
    let result = course.score_breakdown()?;

    tracing::debug!(
        "scored {} of {} categories",
        result.breakdown.iter().filter(|c| !c.is_excluded()).count(),
        result.breakdown.len()
    );

    writeln!(out, "{}", format_score(result.score, result.incomplete, precision))?;
    out.flush()?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Assignment, Category, Course};
    use crate::storage::write_course;
    use std::io::Cursor;

    fn saved(course: &Course) -> Cursor<Vec<u8>> {
        let mut buf = Vec::new();
        write_course(&mut buf, course).unwrap();
        Cursor::new(buf)
    }

    fn category(weight: f64, items: &[(f64, f64)]) -> Category {
        let mut category = Category::new("category", weight, false).unwrap();
        for &(earned, possible) in items {
            category.add_assignment(Assignment::new("item", 1.0, earned, possible).unwrap());
        }
        category
    }

    #[test]
    fn test_grade_prints_score_line() {
        let mut course = Course::new("Physics");
        course.add_category(category(3.0, &[(8.0, 10.0)]));
        course.add_category(category(1.0, &[(6.0, 10.0)]));

        let mut out = Vec::new();
        let result = grade(saved(&course), &mut out, 2).unwrap();

        assert!(!result.incomplete);
        assert_eq!(String::from_utf8(out).unwrap(), "75.00%\n");
    }

    #[test]
    fn test_grade_marks_excluded_categories() {
        let mut course = Course::new("Physics");
        course.add_category(category(1.0, &[(9.0, 10.0)]));
        course.add_category(category(1.0, &[]));

        let mut out = Vec::new();
        let result = grade(saved(&course), &mut out, 1).unwrap();

        assert!(result.incomplete);
        assert_eq!(String::from_utf8(out).unwrap(), "90.0%*\n");
    }

    #[test]
    fn test_grade_rejects_corrupt_input() {
        let mut out = Vec::new();
        let err = grade(Cursor::new(b"{not json".to_vec()), &mut out, 2).unwrap_err();

        assert!(matches!(err, GradeError::Read(PersistenceError::Format(_))));
        assert!(err.to_string().starts_with("Error reading course: "));
        assert!(out.is_empty());
    }

    #[test]
    fn test_grade_without_scorable_categories_fails() {
        let mut course = Course::new("Physics");
        course.add_category(category(1.0, &[(5.0, 0.0)]));

        let mut out = Vec::new();
        let err = grade(saved(&course), &mut out, 2).unwrap_err();

        assert!(matches!(
            err,
            GradeError::Score(ScoringError::NoScorableCategories)
        ));
        assert_eq!(err.to_string(), "Error computing grade: no scorable categories");
        assert!(out.is_empty());
    }
}
