// SPDX-License-Identifier: MPL-2.0

//! Turns a finished [`Namespace`] into a locked [`EnumType`].

use std::sync::Arc;

use indexmap::IndexMap;

use crate::{
    namespace::{is_reserved, Entry, RawValue},
    Constant, EnumType, Error, Namespace, OrderBy, Result, TypeKey, Value,
};

/// External bindings that [aliases] may refer to.
///
/// [aliases]: Namespace::alias
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: IndexMap<String, Value>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.bindings.insert(name.into(), value.into());

        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }
}

/// Builds an [`EnumType`] from a [`Namespace`].
///
/// Obtained from [`EnumType::builder`].
#[derive(Debug)]
pub struct Builder<'s> {
    type_name: String,
    scope: Option<&'s Scope>,
}

impl<'s> Builder<'s> {
    pub(crate) fn new(type_name: impl Into<String>) -> Self {
        Self { type_name: type_name.into(), scope: None }
    }

    /// Resolves aliases against `scope`.
    pub fn scope(mut self, scope: &'s Scope) -> Self {
        self.scope = Some(scope);

        self
    }

    /// Consumes the namespace and produces the locked type.
    ///
    /// # Errors
    ///
    /// An error is returned if
    ///
    /// - the type name or a member name is empty;
    /// - a member name is reserved;
    /// - an alias names a binding missing from the scope ([`Error::UnresolvedAlias`]); or
    /// - some, but not all, members carry numeric values ([`Error::MixedOrdering`]).
    pub fn build(self, namespace: Namespace) -> Result<EnumType> {
        let type_name = self.type_name;
        if type_name.is_empty() {
            return Err(Error::invalid(&type_name, "type name is empty"));
        }

        let (collected, reserved) = namespace.into_parts();

        let mut resolved = Vec::with_capacity(collected.len());
        for (name, Entry { raw, ordinal }) in collected {
            if name.is_empty() {
                return Err(Error::invalid(&type_name, "member name is empty"));
            }
            if is_reserved(&name) {
                return Err(Error::invalid(
                    &type_name,
                    format!("member name `{name}` is reserved"),
                ));
            }

            let value = match raw {
                RawValue::Absent => None,
                RawValue::Given(value) => Some(value),
                RawValue::Alias(target) => {
                    let value = self.scope.and_then(|it| it.get(&target)).cloned();
                    let Some(value) = value else {
                        return Err(Error::UnresolvedAlias { type_name, member: name, target });
                    };
                    Some(value.normalize())
                }
            };
            resolved.push((name, value, ordinal));
        }

        let order_by = order_by(&type_name, &resolved)?;
        let type_key = TypeKey::next();
        let shared_name: Arc<str> = Arc::from(type_name.as_str());

        let constants: Vec<_> = resolved
            .into_iter()
            .map(|(name, value, ordinal)| {
                Constant::new(name, Arc::clone(&shared_name), type_key, value, ordinal, order_by)
            })
            .collect();

        let ty = EnumType::seal(type_name, type_key, constants, order_by, reserved);
        tracing::debug!(
            type_name = ty.type_name(),
            members = ty.len(),
            ?order_by,
            "enum type sealed"
        );

        Ok(ty)
    }
}

/// Decides how the members of a type are ordered.
///
/// Either every member has a numeric value, in which case the type is ordered by value, or none
/// has, in which case it is ordered by declaration. A mixture is an error.
fn order_by(type_name: &str, members: &[(String, Option<Value>, usize)]) -> Result<OrderBy> {
    let is_numeric = |value: &Option<Value>| value.as_ref().is_some_and(Value::is_numeric);

    let valued = members.iter().find(|(_, value, _)| is_numeric(value));
    let unvalued = members.iter().find(|(_, value, _)| !is_numeric(value));

    match (valued, unvalued) {
        (Some(_), None) => Ok(OrderBy::Value),
        (None, _) => Ok(OrderBy::Declaration),
        (Some((valued, ..)), Some((unvalued, ..))) => Err(Error::MixedOrdering {
            type_name: type_name.to_owned(),
            valued: valued.clone(),
            unvalued: unvalued.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn aliases_resolve_against_scope() {
        let mut scope = Scope::new();
        scope.bind("CRIMSON", 0xdc143c).bind("PAIR", (7,));

        let mut ns = Namespace::new();
        ns.alias("red", "CRIMSON").alias("seven", "PAIR").assign("blue", 0x0000ff);
        let ty = EnumType::builder("Colour").scope(&scope).build(ns).unwrap();

        assert_eq!(ty.member("red").unwrap().value(), Some(&Value::Int(0xdc143c)));
        assert_eq!(ty.member("seven").unwrap().value(), Some(&Value::Int(7)));
        assert_eq!(ty.order_by(), OrderBy::Value);
    }

    #[test]
    fn unresolved_alias_fails() {
        let mut ns = Namespace::new();
        ns.alias("red", "CRIMSON");

        assert_eq!(
            EnumType::builder("Colour").build(ns).unwrap_err(),
            Error::UnresolvedAlias {
                type_name: "Colour".into(),
                member: "red".into(),
                target: "CRIMSON".into(),
            },
        );
    }

    #[test]
    fn mixed_ordering_fails() {
        let mut ns = Namespace::new();
        ns.declare("a");
        ns.assign("b", 2);

        assert_eq!(
            EnumType::builder("Mixed").build(ns).unwrap_err(),
            Error::MixedOrdering {
                type_name: "Mixed".into(),
                valued: "b".into(),
                unvalued: "a".into(),
            },
        );
    }

    #[test]
    fn non_numeric_values_order_by_declaration() {
        let mut ns = Namespace::new();
        ns.assign("hello", "hi").assign("bye", "ciao");
        let ty = EnumType::builder("Greeting").build(ns).unwrap();

        assert_eq!(ty.order_by(), OrderBy::Declaration);
        let names: Vec<_> = ty.iter().map(Constant::name).collect();
        assert_eq!(names, ["hello", "bye"]);
    }

    #[test]
    fn invalid_names_fail() {
        assert!(matches!(
            EnumType::builder("").build(Namespace::new()),
            Err(Error::InvalidDeclaration { .. }),
        ));

        let mut ns = Namespace::new();
        ns.declare("");
        assert!(matches!(
            EnumType::builder("T").build(ns),
            Err(Error::InvalidDeclaration { .. }),
        ));

        let mut ns = Namespace::new();
        ns.declare("_hidden");
        assert!(matches!(
            EnumType::builder("T").build(ns),
            Err(Error::InvalidDeclaration { .. }),
        ));
    }

    #[test]
    fn reserved_attributes_pass_through() {
        let mut ns = Namespace::new();
        ns.assign("_doc", "primary colours");
        ns.declare("red");
        let ty = EnumType::builder("Colour").build(ns).unwrap();

        assert_eq!(ty.len(), 1);
        assert_eq!(ty.attr("_doc"), Some(&Value::from("primary colours")));
    }
}
