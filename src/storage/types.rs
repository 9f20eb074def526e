use serde::{Deserialize, Serialize};

use crate::model::{Assignment, Category, Course, EntityId};

/// Current version of the saved course format
pub const FORMAT_VERSION: u32 = 1;

/// On-disk representation of a course: a versioned envelope around the whole graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseDocument {
    pub version: u32,
    pub course: CourseRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseRecord {
    pub name: String,
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryRecord {
    pub id: EntityId,
    pub name: String,
    pub weight: f64,
    pub use_weights: bool,
    #[serde(default)]
    pub assignments: Vec<AssignmentRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssignmentRecord {
    pub id: EntityId,
    pub name: String,
    pub weight: f64,
    pub earned: f64,
    pub possible: f64,
}

impl From<&Assignment> for AssignmentRecord {
    fn from(assignment: &Assignment) -> Self {
        Self {
            id: assignment.id(),
            name: assignment.name.clone(),
            weight: assignment.weight(),
            earned: assignment.earned(),
            possible: assignment.possible(),
        }
    }
}

impl From<&Category> for CategoryRecord {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id(),
            name: category.name.clone(),
            weight: category.weight(),
            use_weights: category.use_weights,
            assignments: category.assignments().map(AssignmentRecord::from).collect(),
        }
    }
}

impl From<&Course> for CourseDocument {
    fn from(course: &Course) -> Self {
        Self {
            version: FORMAT_VERSION,
            course: CourseRecord {
                name: course.name.clone(),
                categories: course.categories().map(CategoryRecord::from).collect(),
            },
        }
    }
}

impl TryFrom<AssignmentRecord> for Assignment {
    type Error = crate::model::ValidationError;

    fn try_from(record: AssignmentRecord) -> Result<Self, Self::Error> {
        Assignment::with_id(
            record.id,
            record.name,
            record.weight,
            record.earned,
            record.possible,
        )
    }
}

impl TryFrom<CategoryRecord> for Category {
    type Error = crate::model::ValidationError;

    fn try_from(record: CategoryRecord) -> Result<Self, Self::Error> {
        let mut category =
            Category::with_id(record.id, record.name, record.weight, record.use_weights)?;
        for assignment in record.assignments {
            category.add_assignment(Assignment::try_from(assignment)?);
        }
        Ok(category)
    }
}

impl TryFrom<CourseRecord> for Course {
    type Error = crate::model::ValidationError;

    fn try_from(record: CourseRecord) -> Result<Self, Self::Error> {
        let mut course = Course::new(record.name);
        for category in record.categories {
            course.add_category(Category::try_from(category)?);
        }
        Ok(course)
    }
}
