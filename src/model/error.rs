use std::fmt;
use thiserror::Error;

use super::id::EntityId;

/// Numeric field of an entity that is subject to validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Weight,
    Earned,
    Possible,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Weight => write!(f, "weight"),
            Field::Earned => write!(f, "earned"),
            Field::Possible => write!(f, "possible"),
        }
    }
}

/// A field value violated the non-negativity invariant when it was set
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be negative (got {value})")]
    Negative { field: Field, value: f64 },
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: Field, value: f64 },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Negative { field, .. } | ValidationError::NotFinite { field, .. } => {
                *field
            }
        }
    }
}

/// A score could not be computed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("assignment {0} has 0 possible points")]
    ZeroPossible(EntityId),
    #[error("category {0} has 0 total possible points")]
    ZeroTotalPossible(EntityId),
    #[error("category {0} has 0 total assignment weight")]
    ZeroAssignmentWeight(EntityId),
    #[error("scorable categories have 0 total weight")]
    ZeroCategoryWeight,
    #[error("no scorable categories")]
    NoScorableCategories,
    #[error("{0} is too large to total")]
    Overflow(ScoreScope),
}

/// Where a score total overflowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreScope {
    Category(EntityId),
    Course,
}

impl fmt::Display for ScoreScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreScope::Category(id) => write!(f, "category {}", id),
            ScoreScope::Course => write!(f, "course"),
        }
    }
}

/// Kind of entity a lookup was aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Category,
    Assignment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Category => write!(f, "category"),
            EntityKind::Assignment => write!(f, "assignment"),
        }
    }
}

/// An identifier prefix matched no entity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind}: '{prefix}'")]
pub struct LookupError {
    pub kind: EntityKind,
    pub prefix: String,
}

impl LookupError {
    pub fn new(kind: EntityKind, prefix: &str) -> Self {
        Self {
            kind,
            prefix: prefix.to_string(),
        }
    }
}

/// Check a value for a numeric entity field
pub(crate) fn validate_non_negative(field: Field, value: f64) -> Result<f64, ValidationError> {
    if value.is_nan() || value.is_infinite() {
        Err(ValidationError::NotFinite { field, value })
    } else if value < 0.0 {
        Err(ValidationError::Negative { field, value })
    } else {
        Ok(value)
    }
}
