//! Validated unique identifier shared by every entity.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Value object wrapping an entity identifier.
///
/// The wrapped `id` is always the canonical (lowercase, hyphenated) text of a UUID.
/// A candidate that does not parse never produces a value:
///
/// ```
/// use catalog_core::{DomainError, UniqueEntityId};
///
/// let err = UniqueEntityId::parse("fake id").unwrap_err();
/// assert_eq!(err, DomainError::InvalidUuid);
/// assert_eq!(err.to_string(), "ID must be a valid UUID");
/// ```
///
/// Once built, the identifier cannot be reassigned:
///
/// ```compile_fail
/// use catalog_core::UniqueEntityId;
///
/// let mut id = UniqueEntityId::new();
/// id.id = String::from("8635ef94-1a9b-486b-a7cc-d1d0ab416fb5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UniqueEntityId {
    id: String,
}

impl UniqueEntityId {
    /// Generate a fresh random (v4) identifier.
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Validate `candidate` and wrap its canonical form.
    ///
    /// Accepts every textual form the `uuid` crate parses (hyphenated, simple, braced,
    /// `urn:uuid:`), of any version or variant. Hyphens are only accepted at the
    /// standard 8-4-4-4-12 positions.
    pub fn parse(candidate: &str) -> DomainResult<Self> {
        match Uuid::parse_str(candidate) {
            Ok(uuid) => Ok(Self::from_uuid(uuid)),
            Err(e) => {
                tracing::debug!(candidate, error = %e, "rejected entity id candidate");
                Err(DomainError::invalid_uuid())
            }
        }
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            id: uuid.hyphenated().to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl Default for UniqueEntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueObject for UniqueEntityId {
    fn fields(&self) -> Vec<(&'static str, Value)> {
        vec![("id", json!(self.id))]
    }
}

crate::impl_value_object_display!(UniqueEntityId);

impl AsRef<str> for UniqueEntityId {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

impl From<Uuid> for UniqueEntityId {
    fn from(value: Uuid) -> Self {
        Self::from_uuid(value)
    }
}

impl From<UniqueEntityId> for String {
    fn from(value: UniqueEntityId) -> Self {
        value.id
    }
}

impl FromStr for UniqueEntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for UniqueEntityId {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for UniqueEntityId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
