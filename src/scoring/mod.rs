pub mod engine;

pub use engine::{
    score_assignment, score_category, score_course, CategoryContribution, CourseScore,
};
