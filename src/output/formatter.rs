use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::model::{Assignment, Category, Course};
use crate::scoring::CourseScore;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a fractional score as a percentage, e.g. 0.875 -> "87.50%"
pub fn format_percent(score: f64, precision: usize) -> String {
    format!("{:.*}%", precision, score * 100.0)
}

/// Format a course score. If incomplete is true, appends an asterisk to
/// indicate some categories were left out.
pub fn format_score(score: f64, incomplete: bool, precision: usize) -> String {
    let formatted = format_percent(score, precision);
    if incomplete {
        format!("{}*", formatted)
    } else {
        formatted
    }
}

pub fn format_course_info(course: &Course) -> String {
    format!(
        "name: {}\ncategories: {}",
        course.name,
        course.category_count()
    )
}

/// One line per category, sorted by name then id
pub fn format_category_list(course: &Course, use_colors: bool) -> String {
    let mut categories: Vec<&Category> = course.categories().collect();
    categories.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id().cmp(&b.id())));

    let mut lines = vec![format!("categories ({}):", categories.len())];
    lines.extend(
        categories
            .iter()
            .map(|c| format_entry(&c.id().to_string(), &c.name, use_colors)),
    );
    lines.join("\n")
}

/// One line per assignment, sorted by name then id
pub fn format_assignment_list(category: &Category, use_colors: bool) -> String {
    let mut assignments: Vec<&Assignment> = category.assignments().collect();
    assignments.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id().cmp(&b.id())));

    let mut lines = vec![format!("assignments ({}):", assignments.len())];
    lines.extend(
        assignments
            .iter()
            .map(|a| format_entry(&a.id().to_string(), &a.name, use_colors)),
    );
    lines.join("\n")
}

fn format_entry(id: &str, name: &str, use_colors: bool) -> String {
    if use_colors {
        format!("\t{} : {}", id.dimmed(), name.bold())
    } else {
        format!("\t{} : {}", id, name)
    }
}

pub fn format_category_detail(category: &Category, precision: usize) -> String {
    let score = match category.score() {
        Ok(score) => format_percent(score, precision),
        Err(e) => format!("unavailable ({})", e),
    };

    format!(
        "category {}:\n\tname: {}\n\tweight: {}\n\tuses weights: {}\n\tassignments: {}\n\tscore: {}",
        category.id(),
        category.name,
        category.weight(),
        category.use_weights,
        category.assignment_count(),
        score
    )
}

pub fn format_assignment_detail(assignment: &Assignment, precision: usize) -> String {
    let score = match assignment.score() {
        Ok(score) => format_percent(score, precision),
        Err(e) => format!("unavailable ({})", e),
    };

    format!(
        "assignment {}:\n\tname: {}\n\tweight: {}\n\tearned: {}\n\tpossible: {}\n\tscore: {}",
        assignment.id(),
        assignment.name,
        assignment.weight(),
        assignment.earned(),
        assignment.possible(),
        score
    )
}

/// Final grade line followed by each category's contribution
pub fn format_breakdown(result: &CourseScore, precision: usize, use_colors: bool) -> String {
    let score = format_score(result.score, result.incomplete, precision);
    let mut lines = if use_colors {
        vec![format!("grade: {}", score.bold())]
    } else {
        vec![format!("grade: {}", score)]
    };

    let mut contributions: Vec<_> = result.breakdown.iter().collect();
    contributions.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

    for contribution in contributions {
        let line = match &contribution.outcome {
            Ok(score) => format!(
                "\t{} (weight {}): {}",
                contribution.name,
                contribution.weight,
                format_percent(*score, precision)
            ),
            Err(e) => {
                let reason = format!("excluded ({})", e);
                if use_colors {
                    format!(
                        "\t{} (weight {}): {}",
                        contribution.name,
                        contribution.weight,
                        reason.yellow()
                    )
                } else {
                    format!("\t{} (weight {}): {}", contribution.name, contribution.weight, reason)
                }
            }
        };
        lines.push(line);
    }

    if result.incomplete {
        lines.push("* some categories could not be scored and were excluded".to_string());
    }

    lines.join("\n")
}
