pub mod assignment;
pub mod category;
pub mod course;
pub mod error;
pub mod id;

pub use assignment::Assignment;
pub use category::Category;
pub use course::Course;
pub use error::{EntityKind, Field, LookupError, ScoreScope, ScoringError, ValidationError};
pub use id::{resolve_prefix, EntityId};
