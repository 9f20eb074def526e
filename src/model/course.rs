use std::collections::BTreeMap;

use super::category::Category;
use super::error::{EntityKind, LookupError, ScoringError};
use super::id::{resolve_prefix, EntityId};
use crate::scoring::CourseScore;

/// Top-level graded entity. At most one is loaded at a time, so it carries no id.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub name: String,
    categories: BTreeMap<EntityId, Category>,
}

impl Course {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            categories: BTreeMap::new(),
        }
    }

    /// Take ownership of a category, returning its id
    pub fn add_category(&mut self, category: Category) -> EntityId {
        let id = category.id();
        self.categories.insert(id, category);
        id
    }

    pub fn remove_category(&mut self, id: &EntityId) -> Option<Category> {
        self.categories.remove(id)
    }

    pub fn category(&self, id: &EntityId) -> Option<&Category> {
        self.categories.get(id)
    }

    /// Categories in id order
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Find the category whose id starts with `prefix`
    pub fn find_category(&self, prefix: &str) -> Result<&Category, LookupError> {
        resolve_prefix(&self.categories, prefix)
            .and_then(|id| self.categories.get(&id))
            .ok_or_else(|| LookupError::new(EntityKind::Category, prefix))
    }

    pub fn find_category_mut(&mut self, prefix: &str) -> Result<&mut Category, LookupError> {
        resolve_prefix(&self.categories, prefix)
            .and_then(|id| self.categories.get_mut(&id))
            .ok_or_else(|| LookupError::new(EntityKind::Category, prefix))
    }

    /// Weighted average over the categories that can currently be scored
    pub fn score(&self) -> Result<f64, ScoringError> {
        self.score_breakdown().map(|result| result.score)
    }

    /// Final score together with each category's contribution or exclusion reason
    pub fn score_breakdown(&self) -> Result<CourseScore, ScoringError> {
        crate::scoring::score_course(self)
    }
}
