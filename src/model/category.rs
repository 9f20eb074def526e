use std::collections::BTreeMap;

use super::assignment::Assignment;
use super::error::{validate_non_negative, EntityKind, Field, LookupError, ScoringError, ValidationError};
use super::id::{resolve_prefix, EntityId};

/// A weighted group of assignments.
///
/// Owns its assignments; removing one from the category is the only way it
/// is destroyed.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    id: EntityId,
    pub name: String,
    weight: f64,
    /// Score assignments by their weights instead of pooling raw points
    pub use_weights: bool,
    assignments: BTreeMap<EntityId, Assignment>,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        use_weights: bool,
    ) -> Result<Self, ValidationError> {
        Self::with_id(EntityId::new(), name, weight, use_weights)
    }

    pub(crate) fn with_id(
        id: EntityId,
        name: impl Into<String>,
        weight: f64,
        use_weights: bool,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: name.into(),
            weight: validate_non_negative(Field::Weight, weight)?,
            use_weights,
            assignments: BTreeMap::new(),
        })
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) -> Result<(), ValidationError> {
        self.weight = validate_non_negative(Field::Weight, weight)?;
        Ok(())
    }

    /// Take ownership of an assignment, returning its id
    pub fn add_assignment(&mut self, assignment: Assignment) -> EntityId {
        let id = assignment.id();
        self.assignments.insert(id, assignment);
        id
    }

    pub fn remove_assignment(&mut self, id: &EntityId) -> Option<Assignment> {
        self.assignments.remove(id)
    }

    pub fn assignment(&self, id: &EntityId) -> Option<&Assignment> {
        self.assignments.get(id)
    }

    /// Assignments in id order
    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.values()
    }

    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Find the assignment whose id starts with `prefix`
    pub fn find_assignment(&self, prefix: &str) -> Result<&Assignment, LookupError> {
        resolve_prefix(&self.assignments, prefix)
            .and_then(|id| self.assignments.get(&id))
            .ok_or_else(|| LookupError::new(EntityKind::Assignment, prefix))
    }

    pub fn find_assignment_mut(&mut self, prefix: &str) -> Result<&mut Assignment, LookupError> {
        resolve_prefix(&self.assignments, prefix)
            .and_then(|id| self.assignments.get_mut(&id))
            .ok_or_else(|| LookupError::new(EntityKind::Assignment, prefix))
    }

    /// Aggregate score of the assignments, in weighted or point-sum mode
    pub fn score(&self) -> Result<f64, ScoringError> {
        crate::scoring::score_category(self)
    }
}
