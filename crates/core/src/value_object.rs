//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use serde_json::Value;

/// Capability trait for value objects.
///
/// Value objects are domain objects that are **immutable** and **compared by value**.
/// They represent concepts where identity doesn't matter - only the values matter.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// ## Immutability
///
/// Implementors keep their fields private and expose no setters. To "modify" a value
/// object, construct a new one. Reassigning a field of a constructed value is therefore
/// a compile error rather than a runtime failure.
///
/// ## Field listing
///
/// Each implementor lists its fields as `(name, value)` pairs in declaration order.
/// The listing drives the canonical string form returned by [`ValueObject::repr`]:
///
/// - one field: the value itself (strings unquoted),
/// - two or more fields: a JSON mapping, e.g. `{"amount": 100, "currency": "USD"}`.
///
/// ## Usage Pattern
///
/// ```
/// use catalog_core::{ValueObject, impl_value_object_display};
/// use serde_json::{Value, json};
///
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {
///     fn fields(&self) -> Vec<(&'static str, Value)> {
///         vec![("amount", json!(self.amount)), ("currency", json!(self.currency))]
///     }
/// }
///
/// impl_value_object_display!(Money);
///
/// let m1 = Money { amount: 100, currency: "USD".to_string() };
/// let m2 = Money { amount: 100, currency: "USD".to_string() };
/// assert_eq!(m1, m2);
/// assert_eq!(m1.to_string(), r#"{"amount": 100, "currency": "USD"}"#);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {
    /// Field names and values, in declaration order.
    fn fields(&self) -> Vec<(&'static str, Value)>;

    /// Canonical string form derived from [`ValueObject::fields`].
    ///
    /// A lone non-string field renders as its JSON text: `true`, `null`, `42`.
    fn repr(&self) -> String {
        render_fields(&self.fields())
    }
}

/// Render a field listing the way [`ValueObject::repr`] does.
pub fn render_fields(fields: &[(&'static str, Value)]) -> String {
    match fields {
        [(_, Value::String(raw))] => raw.clone(),
        [(_, value)] => value.to_string(),
        _ => {
            let mut out = String::new();
            write_entries(&mut out, fields.iter().map(|(name, value)| (*name, value)));
            out
        }
    }
}

/// JSON text with `", "` between entries and `": "` after keys.
fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => write_entries(out, map.iter().map(|(k, v)| (k.as_str(), v))),
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn write_entries<'a>(out: &mut String, entries: impl Iterator<Item = (&'a str, &'a Value)>) {
    out.push('{');
    for (i, (name, value)) in entries.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&Value::from(name).to_string());
        out.push_str(": ");
        write_value(out, value);
    }
    out.push('}');
}

/// Implement `Display` for one or more [`ValueObject`] types via [`ValueObject::repr`].
#[macro_export]
macro_rules! impl_value_object_display {
    ($($t:ty),+ $(,)?) => {
        $(
            impl ::core::fmt::Display for $t {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(&$crate::ValueObject::repr(self))
                }
            }
        )+
    };
}
