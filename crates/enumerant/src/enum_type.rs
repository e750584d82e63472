// SPDX-License-Identifier: MPL-2.0

//! The finalized enum type and its runtime protocol.

use std::{
    ops::Index,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
};

use indexmap::IndexMap;

use crate::{namespace::is_reserved, Builder, Constant, Error, Namespace, Result, Value};

/// How the members of an [`EnumType`] are ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderBy {
    /// Every member carries a numeric value, and members are ordered by it.
    Value,
    /// Members are ordered as they were declared.
    Declaration,
}

/// Identifies one built [`EnumType`] for the lifetime of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct TypeKey(pub(crate) u64);

impl TypeKey {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);

        Self(NEXT.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// A finalized enumeration: a locked registry of [`Constant`]s.
///
/// The type owns its constants; every accessor hands out references into that storage, so the
/// same name always resolves to the same instance. Members can neither be added, reassigned nor
/// removed once the type is built. Only reserved attributes (see [`RESERVED_PREFIX`]) stay
/// writable.
///
/// [`RESERVED_PREFIX`]: crate::RESERVED_PREFIX
#[derive(Debug)]
pub struct EnumType {
    type_name: String,
    type_key: TypeKey,
    /// Members in declaration order.
    constants: Vec<Constant>,
    /// Member name to index into `constants`.
    by_name: IndexMap<String, usize>,
    /// Indices into `constants`, in iteration order.
    order: Vec<usize>,
    order_by: OrderBy,
    reserved: IndexMap<String, Value>,
}

impl EnumType {
    /// Starts building a type named `type_name`.
    pub fn builder<'s>(type_name: impl Into<String>) -> Builder<'s> {
        Builder::new(type_name)
    }

    /// Runs `body` against a fresh [`Namespace`] and builds the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerant::EnumType;
    ///
    /// let colour = EnumType::declare("Colour", |ns| {
    ///     ns.declare("red");
    ///     ns.declare("blue");
    ///     ns.declare("yellow");
    /// })?;
    /// assert_eq!(colour.member("red")?.to_string(), "Colour.red");
    /// # Ok::<(), enumerant::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// See [`Builder::build`].
    pub fn declare(type_name: impl Into<String>, body: impl FnOnce(&mut Namespace)) -> Result<Self> {
        let mut namespace = Namespace::new();
        body(&mut namespace);

        Self::builder(type_name).build(namespace)
    }

    pub(crate) fn seal(
        type_name: String,
        type_key: TypeKey,
        constants: Vec<Constant>,
        order_by: OrderBy,
        reserved: IndexMap<String, Value>,
    ) -> Self {
        let by_name =
            constants.iter().enumerate().map(|(i, it)| (it.name().to_owned(), i)).collect();
        let mut order: Vec<usize> = (0..constants.len()).collect();
        order.sort_by(|&a, &b| constants[a].cmp(&constants[b]));

        Self { type_name, type_key, constants, by_name, order, order_by, reserved }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn order_by(&self) -> OrderBy {
        self.order_by
    }

    /// The number of members.
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// The members in declaration order.
    ///
    /// A member's position in this slice equals its [ordinal](Constant::ordinal).
    pub fn constants(&self) -> &[Constant] {
        &self.constants
    }

    /// Looks up a member by name, as in `Colour.red`.
    ///
    /// # Errors
    ///
    /// [`Error::MemberNotFound`] if there is no such member.
    pub fn member(&self, name: &str) -> Result<&Constant> {
        self.by_name.get(name).map(|&i| &self.constants[i]).ok_or_else(|| {
            Error::MemberNotFound { type_name: self.type_name.clone(), member: name.to_owned() }
        })
    }

    /// Looks up a member by string key, as in `Colour["red"]`.
    ///
    /// This is the fallible counterpart of indexing and behaves exactly like [`member`].
    ///
    /// [`member`]: Self::member
    pub fn get(&self, name: &str) -> Result<&Constant> {
        self.member(name)
    }

    /// Whether `constant` is a member of this very type.
    pub fn contains(&self, constant: &Constant) -> bool {
        constant.type_key() == self.type_key
            && self.constants.get(constant.ordinal()).is_some_and(|it| it == constant)
    }

    /// Iterates the members in order: by value for value-ordered types, by declaration otherwise.
    ///
    /// Each call starts a fresh pass.
    pub fn iter(&self) -> Iter<'_> {
        Iter { ty: self, order: self.order.iter() }
    }

    /// The first member in iteration order.
    pub fn first(&self) -> Option<&Constant> {
        self.order.first().map(|&i| &self.constants[i])
    }

    /// The last member in iteration order.
    pub fn last(&self) -> Option<&Constant> {
        self.order.last().map(|&i| &self.constants[i])
    }

    /// Returns the member after `constant` in iteration order, wrapping from the last member to
    /// the first.
    ///
    /// # Errors
    ///
    /// [`Error::ConstantNotFound`] if `constant` belongs to another type.
    pub fn next(&self, constant: &Constant) -> Result<&Constant> {
        let position = self.order.iter().position(|&i| &self.constants[i] == constant);
        let Some(position) = position else {
            return Err(Error::ConstantNotFound {
                type_name: self.type_name.clone(),
                constant: constant.to_string(),
            });
        };

        let next = self.order[(position + 1) % self.order.len()];
        Ok(&self.constants[next])
    }

    /// Reads a reserved attribute.
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.reserved.get(name)
    }

    /// Sets a reserved attribute.
    ///
    /// # Errors
    ///
    /// [`Error::LockedTypeMutation`] if `name` is not reserved. This covers both adding a member
    /// and reassigning an existing one.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.check_unlocked(name)?;
        self.reserved.insert(name.to_owned(), value.into());

        Ok(())
    }

    /// Removes a reserved attribute, returning its value.
    ///
    /// # Errors
    ///
    /// [`Error::LockedTypeMutation`] if `name` is not reserved.
    pub fn remove(&mut self, name: &str) -> Result<Option<Value>> {
        self.check_unlocked(name)?;

        Ok(self.reserved.shift_remove(name))
    }

    fn check_unlocked(&self, name: &str) -> Result<()> {
        if is_reserved(name) {
            return Ok(());
        }

        Err(Error::LockedTypeMutation {
            type_name: self.type_name.clone(),
            attribute: name.to_owned(),
        })
    }
}

impl Index<&str> for EnumType {
    type Output = Constant;

    /// # Panics
    ///
    /// Panics with the [`Error::MemberNotFound`] message if there is no such member. Use
    /// [`EnumType::get`] to handle that case.
    fn index(&self, name: &str) -> &Constant {
        match self.get(name) {
            Ok(it) => it,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'a> IntoIterator for &'a EnumType {
    type Item = &'a Constant;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the members of an [`EnumType`], returned by [`EnumType::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    ty: &'a EnumType,
    order: std::slice::Iter<'a, usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Constant;

    fn next(&mut self) -> Option<Self::Item> {
        self.order.next().map(|&i| &self.ty.constants[i])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.order.next_back().map(|&i| &self.ty.constants[i])
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn colour() -> EnumType {
        EnumType::declare("Colour", |ns| {
            ns.declare("red");
            ns.declare("blue");
            ns.declare("yellow");
        })
        .unwrap()
    }

    fn names(ty: &EnumType) -> Vec<&str> {
        ty.iter().map(Constant::name).collect()
    }

    #[test]
    fn lookup_returns_the_same_instance() {
        let ty = colour();

        assert!(std::ptr::eq(ty.member("red").unwrap(), ty.member("red").unwrap()));
        assert!(std::ptr::eq(ty.member("red").unwrap(), &ty["red"]));
        assert_eq!(ty.member("red").unwrap(), ty.get("red").unwrap());
        assert_ne!(ty.member("red").unwrap(), ty.member("blue").unwrap());
    }

    #[test]
    fn missing_members() {
        let ty = colour();
        let expected =
            Error::MemberNotFound { type_name: "Colour".into(), member: "green".into() };

        assert_eq!(ty.member("green").unwrap_err(), expected);
        assert_eq!(ty.get("green").unwrap_err(), expected);
    }

    #[test]
    #[should_panic(expected = "enum constant not found: Colour.green")]
    fn indexing_a_missing_member_panics() {
        let _ = &colour()["green"];
    }

    #[test]
    fn iteration_is_restartable() {
        let ty = colour();

        assert_eq!(names(&ty), ["red", "blue", "yellow"]);
        assert_eq!(names(&ty), ["red", "blue", "yellow"]);
        assert_eq!(ty.iter().len(), 3);
        assert_eq!(ty.iter().rev().map(Constant::name).collect::<Vec<_>>(), ["yellow", "blue", "red"]);
    }

    #[test]
    fn value_ordered_iteration() {
        let ty = EnumType::declare("Float", |ns| {
            ns.assign("half", 0.5);
            ns.assign("two", 2);
            ns.assign("one", 1.0);
        })
        .unwrap();

        assert_eq!(names(&ty), ["half", "one", "two"]);
        assert_eq!(ty.first().map(Constant::name), Some("half"));
        assert_eq!(ty.last().map(Constant::name), Some("two"));
    }

    #[test]
    fn successor_wraps() {
        let ty = colour();
        let red = ty.member("red").unwrap();
        let blue = ty.next(red).unwrap();
        let yellow = ty.next(blue).unwrap();

        assert_eq!(blue.name(), "blue");
        assert_eq!(yellow.name(), "yellow");
        assert_eq!(ty.next(yellow).unwrap(), red);
    }

    #[test]
    fn successor_of_a_foreign_constant_fails() {
        let ty = colour();
        let other = colour();

        assert_eq!(
            ty.next(other.member("red").unwrap()).unwrap_err(),
            Error::ConstantNotFound { type_name: "Colour".into(), constant: "Colour.red".into() },
        );
        assert!(!ty.contains(other.member("red").unwrap()));
        assert!(ty.contains(ty.member("red").unwrap()));
    }

    #[test]
    fn members_are_locked() {
        let mut ty = colour();

        for name in ["green", "red"] {
            assert_eq!(
                ty.set(name, 1).unwrap_err(),
                Error::LockedTypeMutation { type_name: "Colour".into(), attribute: name.into() },
            );
        }
        assert!(matches!(ty.remove("red"), Err(Error::LockedTypeMutation { .. })));
        assert_eq!(names(&ty), ["red", "blue", "yellow"]);
    }

    #[test]
    fn reserved_attributes_stay_writable() {
        let mut ty = colour();

        ty.set("_label", "paint").unwrap();
        assert_eq!(ty.attr("_label"), Some(&Value::from("paint")));
        assert_eq!(ty.remove("_label").unwrap(), Some(Value::from("paint")));
        assert_eq!(ty.attr("_label"), None);
        assert_eq!(ty.len(), 3);
    }

    #[test]
    fn empty_types_are_allowed() {
        let ty = EnumType::declare("Empty", |_| {}).unwrap();

        assert!(ty.is_empty());
        assert_eq!(ty.first(), None);
        assert_eq!(ty.iter().next(), None);
    }
}
