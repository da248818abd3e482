//! Entity trait: identity + continuity across state changes.

use serde_json::{Map, Value};

use crate::id::UniqueEntityId;

/// Entity capability.
///
/// An entity exclusively owns a [`UniqueEntityId`] and a set of typed properties. The
/// externally visible [`Entity::id`] is always derived from that owned value, so the two
/// can never disagree.
pub trait Entity {
    /// Returns the owned identifier value object.
    fn unique_entity_id(&self) -> &UniqueEntityId;

    /// Typed properties as `(name, value)` pairs, in declaration order.
    fn props(&self) -> Vec<(&'static str, Value)>;

    /// Returns the entity identifier as text.
    fn id(&self) -> &str {
        self.unique_entity_id().as_str()
    }

    /// Flatten identifier and properties into one mapping: `id` first, then each
    /// property in declaration order.
    ///
    /// `id` leads so every entity's mapping starts with its identity; callers comparing
    /// mappings should not rely on key order anyway. The mapping is an owned snapshot,
    /// detached from the entity.
    fn to_dict(&self) -> Map<String, Value> {
        let mut dict = Map::new();
        dict.insert("id".to_string(), Value::String(self.id().to_string()));
        for (name, value) in self.props() {
            dict.insert(name.to_string(), value);
        }
        dict
    }
}
