use std::collections::HashSet;

use super::types::{CourseDocument, FORMAT_VERSION};

/// Validate a loaded course document before building a course from it.
/// Returns all validation errors at once (not just the first).
pub fn validate_document(doc: &CourseDocument) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if doc.version != FORMAT_VERSION {
        errors.push(format!(
            "version: unsupported course format version {} (expected {})",
            doc.version, FORMAT_VERSION
        ));
    }

    let mut seen_ids = HashSet::new();

    for (i, category) in doc.course.categories.iter().enumerate() {
        let path = format!("categories[{}]", i);

        check_number(&mut errors, &format!("{}.weight", path), category.weight);

        if !seen_ids.insert(category.id) {
            errors.push(format!("{}.id: duplicate id {}", path, category.id));
        }

        for (j, assignment) in category.assignments.iter().enumerate() {
            let path = format!("{}.assignments[{}]", path, j);

            check_number(&mut errors, &format!("{}.weight", path), assignment.weight);
            check_number(&mut errors, &format!("{}.earned", path), assignment.earned);
            check_number(&mut errors, &format!("{}.possible", path), assignment.possible);

            if !seen_ids.insert(assignment.id) {
                errors.push(format!("{}.id: duplicate id {}", path, assignment.id));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_number(errors: &mut Vec<String>, path: &str, value: f64) {
    if !value.is_finite() {
        errors.push(format!("{}: must be a finite number", path));
    } else if value < 0.0 {
        errors.push(format!("{}: must be non-negative (got {})", path, value));
    }
}
