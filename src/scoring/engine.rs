use crate::model::{Assignment, Category, Course, EntityId, ScoreScope, ScoringError};

/// How one category took part in the course score
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryContribution {
    pub id: EntityId,
    pub name: String,
    pub weight: f64,
    /// Category score, or the reason it was left out of the average
    pub outcome: Result<f64, ScoringError>,
}

impl CategoryContribution {
    pub fn is_excluded(&self) -> bool {
        self.outcome.is_err()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseScore {
    pub score: f64,
    /// True when at least one category could not be scored and was excluded
    pub incomplete: bool,
    pub breakdown: Vec<CategoryContribution>,
}

pub fn score_assignment(assignment: &Assignment) -> Result<f64, ScoringError> {
    if assignment.possible() > 0.0 {
        Ok(assignment.earned() / assignment.possible())
    } else {
        Err(ScoringError::ZeroPossible(assignment.id()))
    }
}

pub fn score_category(category: &Category) -> Result<f64, ScoringError> {
    if category.use_weights {
        score_weighted(category)
    } else {
        score_pooled(category)
    }
}

/// Σ(score × weight) / Σ(weight); any unscorable assignment fails the whole category
fn score_weighted(category: &Category) -> Result<f64, ScoringError> {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for assignment in category.assignments() {
        let score = score_assignment(assignment)?;
        weighted_sum += score * assignment.weight();
        total_weight += assignment.weight();
    }

    if !weighted_sum.is_finite() || !total_weight.is_finite() {
        return Err(ScoringError::Overflow(ScoreScope::Category(category.id())));
    }
    if total_weight > 0.0 {
        Ok(weighted_sum / total_weight)
    } else {
        Err(ScoringError::ZeroAssignmentWeight(category.id()))
    }
}

/// Σ(earned) / Σ(possible); individual assignments are never scored
fn score_pooled(category: &Category) -> Result<f64, ScoringError> {
    let (earned, possible) = category
        .assignments()
        .fold((0.0, 0.0), |(earned, possible), a| {
            (earned + a.earned(), possible + a.possible())
        });

    if !earned.is_finite() || !possible.is_finite() {
        return Err(ScoringError::Overflow(ScoreScope::Category(category.id())));
    }
    if possible > 0.0 {
        Ok(earned / possible)
    } else {
        Err(ScoringError::ZeroTotalPossible(category.id()))
    }
}

/// Weighted average over scorable categories.
///
/// A category whose own score fails is left out of both the numerator and
/// the denominator. Only an empty scorable set (or one with zero total
/// weight) fails the course.
pub fn score_course(course: &Course) -> Result<CourseScore, ScoringError> {
    let breakdown: Vec<CategoryContribution> = course
        .categories()
        .map(|category| CategoryContribution {
            id: category.id(),
            name: category.name.clone(),
            weight: category.weight(),
            outcome: score_category(category),
        })
        .collect();

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    let mut scorable = 0;

    for contribution in &breakdown {
        match &contribution.outcome {
            Ok(score) => {
                weighted_sum += score * contribution.weight;
                total_weight += contribution.weight;
                scorable += 1;
            }
            Err(e) => {
                tracing::debug!("excluding category '{}' from course score: {}", contribution.name, e);
            }
        }
    }

    if scorable == 0 {
        return Err(ScoringError::NoScorableCategories);
    }
    if !weighted_sum.is_finite() || !total_weight.is_finite() {
        return Err(ScoringError::Overflow(ScoreScope::Course));
    }
    if total_weight <= 0.0 {
        return Err(ScoringError::ZeroCategoryWeight);
    }

    Ok(CourseScore {
        score: weighted_sum / total_weight,
        incomplete: scorable < breakdown.len(),
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assignment(weight: f64, earned: f64, possible: f64) -> Assignment {
        Assignment::new("item", weight, earned, possible).unwrap()
    }

    fn category(weight: f64, use_weights: bool, items: Vec<Assignment>) -> Category {
        let mut category = Category::new("category", weight, use_weights).unwrap();
        for item in items {
            category.add_assignment(item);
        }
        category
    }

    #[test]
    fn test_assignment_score_succeeds_iff_possible_positive() {
        for possible in [0.0, 0.5, 1.0, 40.0] {
            let a = assignment(1.0, 3.0, possible);
            let result = score_assignment(&a);
            if possible > 0.0 {
                assert_eq!(result, Ok(3.0 / possible));
            } else {
                assert_eq!(result, Err(ScoringError::ZeroPossible(a.id())));
            }
        }
    }

    #[test]
    fn test_pooled_score() {
        let c = category(1.0, false, vec![assignment(1.0, 5.0, 10.0), assignment(1.0, 3.0, 10.0)]);
        assert!((score_category(&c).unwrap() - 0.4).abs() < EPSILON);
    }

    #[test]
    fn test_pooled_ignores_single_zero_possible() {
        let c = category(1.0, false, vec![assignment(1.0, 5.0, 10.0), assignment(1.0, 2.0, 0.0)]);
        assert!((score_category(&c).unwrap() - 0.7).abs() < EPSILON);
    }

    #[test]
    fn test_pooled_empty_category_fails() {
        let c = category(1.0, false, vec![]);
        assert_eq!(score_category(&c), Err(ScoringError::ZeroTotalPossible(c.id())));
    }

    #[test]
    fn test_weighted_score() {
        let c = category(1.0, true, vec![assignment(2.0, 8.0, 10.0), assignment(1.0, 5.0, 10.0)]);
        assert!((score_category(&c).unwrap() - 0.7).abs() < EPSILON);
    }

    #[test]
    fn test_weighted_zero_weight_assignment_counts_nothing() {
        let c = category(1.0, true, vec![assignment(1.0, 9.0, 10.0), assignment(0.0, 0.0, 10.0)]);
        assert!((score_category(&c).unwrap() - 0.9).abs() < EPSILON);
    }

    #[test]
    fn test_weighted_propagates_assignment_failure() {
        let broken = assignment(1.0, 0.0, 0.0);
        let broken_id = broken.id();
        let c = category(1.0, true, vec![assignment(2.0, 8.0, 10.0), broken]);
        assert_eq!(score_category(&c), Err(ScoringError::ZeroPossible(broken_id)));
    }

    #[test]
    fn test_weighted_zero_total_weight_fails() {
        let c = category(1.0, true, vec![assignment(0.0, 8.0, 10.0)]);
        assert_eq!(score_category(&c), Err(ScoringError::ZeroAssignmentWeight(c.id())));

        let empty = category(1.0, true, vec![]);
        assert_eq!(
            score_category(&empty),
            Err(ScoringError::ZeroAssignmentWeight(empty.id()))
        );
    }

    #[test]
    fn test_pooled_overflowing_totals_fail() {
        let c = category(1.0, false, vec![assignment(1.0, 1e308, 1e308), assignment(1.0, 1e308, 1e308)]);
        assert_eq!(
            score_category(&c),
            Err(ScoringError::Overflow(ScoreScope::Category(c.id())))
        );
    }

    #[test]
    fn test_weighted_overflowing_weights_fail() {
        let c = category(1.0, true, vec![assignment(1e308, 5.0, 10.0), assignment(1e308, 5.0, 10.0)]);
        assert_eq!(
            score_category(&c),
            Err(ScoringError::Overflow(ScoreScope::Category(c.id())))
        );
    }

    #[test]
    fn test_large_finite_weights_still_score() {
        let c = category(1.0, true, vec![assignment(1e307, 8.0, 10.0), assignment(1e307, 4.0, 10.0)]);
        assert!((score_category(&c).unwrap() - 0.6).abs() < EPSILON);
    }

    #[test]
    fn test_course_overflowing_category_weights_fail() {
        let mut course = Course::new("course");
        course.add_category(category(1e308, false, vec![assignment(1.0, 5.0, 10.0)]));
        course.add_category(category(1e308, false, vec![assignment(1.0, 5.0, 10.0)]));
        assert_eq!(
            score_course(&course),
            Err(ScoringError::Overflow(ScoreScope::Course))
        );
    }

    #[test]
    fn test_course_excludes_unscorable_category() {
        let mut course = Course::new("course");
        course.add_category(category(1.0, false, vec![assignment(1.0, 9.0, 10.0)]));
        let empty_id = course.add_category(category(1.0, false, vec![]));

        let result = score_course(&course).unwrap();
        assert!((result.score - 0.9).abs() < EPSILON);
        assert!(result.incomplete);
        assert_eq!(result.breakdown.len(), 2);

        let excluded: Vec<_> = result.breakdown.iter().filter(|c| c.is_excluded()).collect();
        assert_eq!(excluded.len(), 1);
        assert_eq!(excluded[0].id, empty_id);
    }

    #[test]
    fn test_course_weighted_average() {
        let mut course = Course::new("course");
        // 0.8 at weight 3, 0.6 at weight 1 -> (2.4 + 0.6) / 4 = 0.75
        course.add_category(category(3.0, false, vec![assignment(1.0, 8.0, 10.0)]));
        course.add_category(category(1.0, false, vec![assignment(1.0, 6.0, 10.0)]));

        let result = score_course(&course).unwrap();
        assert!((result.score - 0.75).abs() < EPSILON);
        assert!(!result.incomplete);
    }

    #[test]
    fn test_course_weighted_category_failure_is_absorbed() {
        let mut course = Course::new("course");
        course.add_category(category(1.0, false, vec![assignment(1.0, 7.0, 10.0)]));
        course.add_category(category(
            5.0,
            true,
            vec![assignment(1.0, 10.0, 10.0), assignment(1.0, 0.0, 0.0)],
        ));

        let result = score_course(&course).unwrap();
        assert!((result.score - 0.7).abs() < EPSILON);
        assert!(result.incomplete);
    }

    #[test]
    fn test_course_without_scorable_categories_fails() {
        let mut course = Course::new("course");
        course.add_category(category(1.0, false, vec![]));
        course.add_category(category(1.0, true, vec![assignment(1.0, 1.0, 0.0)]));
        assert_eq!(score_course(&course), Err(ScoringError::NoScorableCategories));
    }

    #[test]
    fn test_course_zero_weight_scorable_categories_fail() {
        let mut course = Course::new("course");
        course.add_category(category(0.0, false, vec![assignment(1.0, 9.0, 10.0)]));
        assert_eq!(score_course(&course), Err(ScoringError::ZeroCategoryWeight));
    }
}
