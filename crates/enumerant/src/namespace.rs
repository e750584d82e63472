// SPDX-License-Identifier: MPL-2.0

//! The scratch structure that collects an enum declaration.

use indexmap::IndexMap;

use crate::Value;

/// Names starting with this prefix are bookkeeping, never members.
pub const RESERVED_PREFIX: &str = "_";

/// Whether `name` is reserved for bookkeeping.
pub fn is_reserved(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIX)
}

/// Collects the members of one enum declaration, in order, before the type is built.
///
/// A fresh namespace is used for every declaration. Each distinct member name receives an
/// ordinal when it is first mentioned, whether by [`declare`], [`assign`] or [`alias`], and keeps
/// it for the rest of the declaration.
///
/// [`declare`]: Self::declare
/// [`assign`]: Self::assign
/// [`alias`]: Self::alias
#[derive(Debug, Default)]
pub struct Namespace {
    collected: IndexMap<String, Entry>,
    reserved: IndexMap<String, Value>,
    next_ordinal: usize,
}

/// One collected member.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    /// What the declaration body said about the member's value.
    pub raw: RawValue,
    /// The implicit ordinal assigned at first mention.
    pub ordinal: usize,
}

/// The value of a member as written, before the builder resolves it.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    /// Bare declaration.
    Absent,
    /// Explicit assignment.
    Given(Value),
    /// A reference to an external binding, resolved at build time.
    Alias(String),
}

/// The result of a bare declaration.
///
/// A placeholder can stand in for a value in later assignments, where it evaluates to the
/// member's implicit ordinal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholder {
    pub name: String,
    pub ordinal: usize,
}

impl From<Placeholder> for Value {
    fn from(it: Placeholder) -> Self {
        // Ordinals past `i64::MAX` cannot occur: each one costs an allocation.
        Value::Int(it.ordinal as i64)
    }
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` as a member without a value.
    ///
    /// Mentioning a name that is already collected leaves it untouched and returns its existing
    /// placeholder.
    pub fn declare(&mut self, name: impl Into<String>) -> Placeholder {
        let name = name.into();
        let ordinal = self.mention(&name, RawValue::Absent).ordinal;

        Placeholder { name, ordinal }
    }

    /// Assigns `value` to `name`.
    ///
    /// One-element tuples are unwrapped first. A reserved name is stored as a bookkeeping
    /// attribute instead of a member. Reassigning a collected name replaces its value but not its
    /// ordinal.
    pub fn assign(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let name = name.into();
        let value = value.into().normalize();

        if is_reserved(&name) {
            tracing::trace!(%name, "reserved attribute collected");
            self.reserved.insert(name, value);
            return self;
        }

        self.record(name, RawValue::Given(value));

        self
    }

    /// Declares `name` as a member whose value is the external binding `target`.
    ///
    /// The binding is looked up in the builder's [`Scope`] when the type is built.
    ///
    /// [`Scope`]: crate::Scope
    pub fn alias(&mut self, name: impl Into<String>, target: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.record(name, RawValue::Alias(target.into()));

        self
    }

    /// Returns the collected entry for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.collected.get(name)
    }

    /// Iterates the collected members in first-mention order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.collected.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// The number of collected members.
    pub fn len(&self) -> usize {
        self.collected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collected.is_empty()
    }

    pub(crate) fn into_parts(self) -> (IndexMap<String, Entry>, IndexMap<String, Value>) {
        (self.collected, self.reserved)
    }

    /// Returns the entry for `name`, creating it with `raw` and the next ordinal if it is new.
    /// Stores `raw` for `name`, keeping the ordinal of an earlier mention.
    fn record(&mut self, name: String, raw: RawValue) {
        match self.collected.get_mut(&name) {
            Some(entry) => {
                tracing::debug!(%name, ordinal = entry.ordinal, "member value replaced");
                entry.raw = raw;
            }
            None => {
                self.mention(&name, raw);
            }
        }
    }

    fn mention(&mut self, name: &str, raw: RawValue) -> &mut Entry {
        let next_ordinal = &mut self.next_ordinal;

        self.collected.entry(name.to_owned()).or_insert_with(|| {
            let ordinal = *next_ordinal;
            *next_ordinal += 1;
            tracing::trace!(name, ordinal, "member mentioned");

            Entry { raw, ordinal }
        })
    }
}
