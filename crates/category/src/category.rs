use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use catalog_core::{DomainResult, Entity, UniqueEntityId};

/// Constructor input for [`Category`].
///
/// Only `name` is required; unset fields take their defaults when the category is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProps {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl CategoryProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_active: None,
            created_at: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Entity: Category.
///
/// Immutable once built: every field is private and only readable through accessors.
///
/// ```compile_fail
/// use catalog_category::{Category, CategoryProps};
///
/// let mut category = Category::new(CategoryProps::new("Movie"));
/// category.name = String::new();
/// ```
///
/// The owned identifier cannot be swapped out either, so `id()` always matches it:
///
/// ```compile_fail
/// use catalog_category::{Category, CategoryProps};
/// use catalog_core::UniqueEntityId;
///
/// let mut category = Category::new(CategoryProps::new("Movie"));
/// category.unique_entity_id = UniqueEntityId::new();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "id")]
    unique_entity_id: UniqueEntityId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Build a category with a freshly generated identifier.
    pub fn new(props: CategoryProps) -> Self {
        Self::with_id(UniqueEntityId::new(), props)
    }

    /// Build a category around an existing identifier.
    pub fn with_id(unique_entity_id: UniqueEntityId, props: CategoryProps) -> Self {
        let category = Self {
            unique_entity_id,
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
        };
        tracing::debug!(id = %category.unique_entity_id, name = %category.name, "category built");
        category
    }

    /// Build a category from a raw identifier string, e.g. one read back from storage.
    pub fn restore(id: &str, props: CategoryProps) -> DomainResult<Self> {
        let unique_entity_id = UniqueEntityId::parse(id)?;
        Ok(Self::with_id(unique_entity_id, props))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Category {
    fn unique_entity_id(&self) -> &UniqueEntityId {
        &self.unique_entity_id
    }

    fn props(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("name", json!(self.name)),
            ("description", json!(self.description)),
            ("is_active", json!(self.is_active)),
            ("created_at", json!(self.created_at.to_rfc3339())),
        ]
    }
}
