// SPDX-License-Identifier: MPL-2.0

//! Enum members.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::{OrderBy, TypeKey, Value};

/// One member of an [`EnumType`], such as `Colour.red`.
///
/// A `Constant` is created exactly once, while its type is built, and lives in that type's arena.
/// Every lookup of the same name on the same type yields a reference to the same instance, so
/// equality is identity: two constants are equal only if they are the same member of the same
/// built type, no matter what their names and values are.
///
/// The [`Debug`](fmt::Debug) form is the same as the [`Display`](fmt::Display) form.
///
/// [`EnumType`]: crate::EnumType
pub struct Constant {
    name: String,
    type_name: Arc<str>,
    type_key: TypeKey,
    value: Option<Value>,
    ordinal: usize,
    order_by: OrderBy,
}

impl Constant {
    pub(crate) fn new(
        name: String,
        type_name: Arc<str>,
        type_key: TypeKey,
        value: Option<Value>,
        ordinal: usize,
        order_by: OrderBy,
    ) -> Self {
        Self { name, type_name, type_key, value, ordinal, order_by }
    }

    /// The member name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name of the owning enum type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The explicit value, if the author supplied one.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Whether this member was declared without a value.
    pub fn is_implicit(&self) -> bool {
        self.value.is_none()
    }

    /// The position of this member in declaration order, starting at zero.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub(crate) fn type_key(&self) -> TypeKey {
        self.type_key
    }
}

impl PartialEq for Constant {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for Constant {}

impl Hash for Constant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.value {
            Some(value) => value.hash(state),
            None => self.ordinal.hash(state),
        }
    }
}

impl PartialOrd for Constant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Constant {
    /// Orders members of a value-ordered type by value and all others by declaration.
    ///
    /// Equal values fall back to declaration order, and members of different types order by type
    /// first, so only a constant compared with itself is `Equal`.
    fn cmp(&self, other: &Self) -> Ordering {
        let by_value = match (self.order_by, &self.value, &other.value) {
            (OrderBy::Value, Some(a), Some(b)) => a.numeric_cmp(b).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        };

        self.type_key
            .cmp(&other.type_key)
            .then(by_value)
            .then(self.ordinal.cmp(&other.ordinal))
    }
}

impl fmt::Debug for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_name, self.name)?;
        if let Some(value) = &self.value {
            write!(f, "(value={value})")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(name: &str, key: u64, value: Option<Value>, ordinal: usize) -> Constant {
        let order_by = if value.is_some() { OrderBy::Value } else { OrderBy::Declaration };
        Constant::new(name.into(), "T".into(), TypeKey(key), value, ordinal, order_by)
    }

    #[test]
    fn equality_is_identity() {
        let a = constant("a", 0, None, 0);
        let twin = constant("a", 0, None, 0);

        assert_eq!(a, a);
        assert_ne!(a, twin);
    }

    #[test]
    fn value_order_breaks_ties_by_ordinal() {
        let low = constant("low", 0, Some(Value::Int(1)), 1);
        let high = constant("high", 0, Some(Value::Int(5)), 0);
        let tie = constant("tie", 0, Some(Value::Int(1)), 2);

        assert!(low < high);
        assert!(low < tie);
        assert_eq!(low.cmp(&low), Ordering::Equal);
    }

    #[test]
    fn display_shows_explicit_values_only() {
        assert_eq!(constant("a", 0, None, 0).to_string(), "T.a");
        assert_eq!(constant("b", 0, Some("x".into()), 0).to_string(), "T.b(value=\"x\")");
    }

    #[test]
    fn debug_matches_display() {
        assert_eq!(format!("{:?}", constant("a", 0, None, 0)), "T.a");
        assert_eq!(format!("{:?}", constant("b", 0, Some(Value::Int(2)), 1)), "T.b(value=2)");
    }
}
