use super::error::{validate_non_negative, Field, ScoringError, ValidationError};
use super::id::EntityId;

/// A single graded item with earned/possible points and a weight
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    id: EntityId,
    pub name: String,
    weight: f64,
    earned: f64,
    possible: f64,
}

impl Assignment {
    /// Create an assignment with a fresh random id.
    ///
    /// Each numeric field goes through its own setter, so the error names the
    /// first field that is out of range.
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        earned: f64,
        possible: f64,
    ) -> Result<Self, ValidationError> {
        Self::with_id(EntityId::new(), name, weight, earned, possible)
    }

    /// Rebuild an assignment under a known id (used when loading a saved course)
    pub(crate) fn with_id(
        id: EntityId,
        name: impl Into<String>,
        weight: f64,
        earned: f64,
        possible: f64,
    ) -> Result<Self, ValidationError> {
        let mut assignment = Self {
            id,
            name: name.into(),
            weight: 0.0,
            earned: 0.0,
            possible: 0.0,
        };
        assignment.set_weight(weight)?;
        assignment.set_earned(earned)?;
        assignment.set_possible(possible)?;
        Ok(assignment)
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn earned(&self) -> f64 {
        self.earned
    }

    pub fn possible(&self) -> f64 {
        self.possible
    }

    pub fn set_weight(&mut self, weight: f64) -> Result<(), ValidationError> {
        self.weight = validate_non_negative(Field::Weight, weight)?;
        Ok(())
    }

    pub fn set_earned(&mut self, earned: f64) -> Result<(), ValidationError> {
        self.earned = validate_non_negative(Field::Earned, earned)?;
        Ok(())
    }

    pub fn set_possible(&mut self, possible: f64) -> Result<(), ValidationError> {
        self.possible = validate_non_negative(Field::Possible, possible)?;
        Ok(())
    }

    /// Fraction of possible points earned
    pub fn score(&self) -> Result<f64, ScoringError> {
        crate::scoring::score_assignment(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assignment_keeps_fields() {
        let a = Assignment::new("Homework 1", 2.0, 8.0, 10.0).unwrap();
        assert_eq!(a.name, "Homework 1");
        assert_eq!(a.weight(), 2.0);
        assert_eq!(a.earned(), 8.0);
        assert_eq!(a.possible(), 10.0);
    }

    #[test]
    fn test_new_reports_offending_field() {
        let err = Assignment::new("hw", 1.0, -3.0, 10.0).unwrap_err();
        assert_eq!(err.field(), Field::Earned);

        let err = Assignment::new("hw", -1.0, 3.0, 10.0).unwrap_err();
        assert_eq!(err.field(), Field::Weight);

        let err = Assignment::new("hw", 1.0, 3.0, -10.0).unwrap_err();
        assert_eq!(err.field(), Field::Possible);
    }

    #[test]
    fn test_rejected_set_keeps_previous_value() {
        let mut a = Assignment::new("hw", 1.0, 5.0, 10.0).unwrap();
        assert!(a.set_weight(-0.5).is_err());
        assert!(a.set_earned(-1.0).is_err());
        assert!(a.set_possible(-2.0).is_err());
        assert_eq!(a.weight(), 1.0);
        assert_eq!(a.earned(), 5.0);
        assert_eq!(a.possible(), 10.0);
    }

    #[test]
    fn test_setters_replace_values() {
        let mut a = Assignment::new("hw", 1.0, 5.0, 10.0).unwrap();
        a.set_weight(3.0).unwrap();
        a.set_earned(7.0).unwrap();
        a.set_possible(20.0).unwrap();
        assert_eq!((a.weight(), a.earned(), a.possible()), (3.0, 7.0, 20.0));
    }

    #[test]
    fn test_earned_may_exceed_possible() {
        let a = Assignment::new("extra credit", 1.0, 12.0, 10.0).unwrap();
        assert!((a.score().unwrap() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_score_is_earned_over_possible() {
        let a = Assignment::new("quiz", 1.0, 3.0, 4.0).unwrap();
        assert_eq!(a.score().unwrap(), 0.75);
    }

    #[test]
    fn test_score_fails_on_zero_possible() {
        let a = Assignment::new("ungraded", 1.0, 0.0, 0.0).unwrap();
        assert_eq!(a.score(), Err(ScoringError::ZeroPossible(a.id())));
    }
}
