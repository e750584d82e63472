// SPDX-License-Identifier: MPL-2.0

//! Closed, ordered enumerations whose members are singleton constants.
//!
//! An enum type is declared by recording member names, bare or with a value, into a
//! [`Namespace`] and then building it into a locked [`EnumType`]:
//!
//! ```
//! use enumerant::{EnumType, Value};
//!
//! let car_brand = EnumType::declare("CarBrand", |ns| {
//!     ns.assign("Ford", 1).assign("Toyota", 3).assign("Mitsubishi", 2);
//! })?;
//!
//! let names: Vec<_> = car_brand.iter().map(|it| it.name()).collect();
//! assert_eq!(names, ["Ford", "Mitsubishi", "Toyota"]);
//! assert_eq!(car_brand["Toyota"].to_string(), "CarBrand.Toyota(value=3)");
//! assert_eq!(car_brand.member("Mitsubishi")?.value(), Some(&Value::Int(2)));
//! # Ok::<(), enumerant::Error>(())
//! ```
//!
//! When the members are known at compile time, the [`enumeration`] attribute macro turns a Rust
//! `enum` into an implementor of [`Enumeration`], backed by a process-wide `EnumType`. Refer to
//! the [`spec`] module for its syntax.

#![deny(rustdoc::broken_intra_doc_links, rustdoc::private_intra_doc_links)]

// Lets generated code name this crate from within its own tests.
extern crate self as enumerant;

mod builder;
mod constant;
mod enum_type;
mod error;
mod namespace;
pub mod spec;
mod value;

pub use builder::{Builder, Scope};
pub use constant::Constant;
pub(crate) use enum_type::TypeKey;
pub use enum_type::{EnumType, Iter, OrderBy};
#[cfg(feature = "macros")]
pub use enumerant_internals::enumeration;
pub use error::{Error, Result};
pub use namespace::{is_reserved, Entry, Namespace, Placeholder, RawValue, RESERVED_PREFIX};
pub use value::Value;

/// A Rust `enum` whose variants are the members of an [`EnumType`].
///
/// This trait is normally implemented by the [`enumeration`] attribute macro. Variant `i` of
/// [`VARIANTS`] must be the member with ordinal `i`, which holds whenever [`declare`] mentions
/// each variant once, in order.
///
/// [`VARIANTS`]: Self::VARIANTS
/// [`declare`]: Self::declare
pub trait Enumeration: Sized + 'static {
    /// The type name shown when members are displayed.
    const NAME: &'static str;

    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// Records the members into `namespace`.
    fn declare(namespace: &mut Namespace);

    /// The declaration position of this variant.
    fn index(&self) -> usize;

    /// The process-wide enum type backing this `enum`.
    ///
    /// Built on first use.
    fn enum_type() -> &'static EnumType;

    /// The constant corresponding to this variant.
    fn constant(&self) -> &'static Constant {
        &Self::enum_type().constants()[self.index()]
    }

    /// The explicit value of this variant, if any.
    fn value(&self) -> Option<&'static Value> {
        self.constant().value()
    }

    /// Iterates the variants in the order of [`EnumType::iter`].
    fn iter() -> impl Iterator<Item = &'static Self> {
        Self::enum_type().iter().map(|it| &Self::VARIANTS[it.ordinal()])
    }

    /// The cyclic successor of this variant.
    ///
    /// # Errors
    ///
    /// See [`EnumType::next`].
    fn next(&self) -> Result<&'static Self> {
        let next = Self::enum_type().next(self.constant())?;

        Ok(&Self::VARIANTS[next.ordinal()])
    }

    /// Looks up a variant by member name.
    ///
    /// # Errors
    ///
    /// See [`EnumType::member`].
    fn from_name(name: &str) -> Result<&'static Self> {
        let constant = Self::enum_type().member(name)?;

        Ok(&Self::VARIANTS[constant.ordinal()])
    }
}

#[doc(hidden)]
pub mod __private {
    use super::*;

    /// Builds the enum type behind an [`Enumeration`].
    ///
    /// # Panics
    ///
    /// Panics if the declaration is invalid. `#[enumeration]` rejects such declarations at
    /// compile time, so this only fires for hand-written implementations.
    pub fn build<E: Enumeration>() -> EnumType {
        let mut namespace = Namespace::new();
        E::declare(&mut namespace);

        match EnumType::builder(E::NAME).build(namespace) {
            Ok(it) => it,
            Err(e) => panic!("{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use pretty_assertions::assert_eq;

    use super::*;

    /// A hand-written implementation, the shape `#[enumeration]` expands to.
    #[derive(Debug, PartialEq)]
    enum Suit {
        Hearts,
        Spades,
        Clubs,
    }

    impl Enumeration for Suit {
        const NAME: &'static str = "Suit";
        const VARIANTS: &'static [Self] = &[Self::Hearts, Self::Spades, Self::Clubs];

        fn declare(namespace: &mut Namespace) {
            namespace.assign("Hearts", 3);
            namespace.assign("Spades", 1);
            namespace.assign("Clubs", 2);
        }

        fn index(&self) -> usize {
            match self {
                Self::Hearts => 0,
                Self::Spades => 1,
                Self::Clubs => 2,
            }
        }

        fn enum_type() -> &'static EnumType {
            static TYPE: OnceLock<EnumType> = OnceLock::new();
            TYPE.get_or_init(__private::build::<Self>)
        }
    }

    #[test]
    fn typed_iteration_follows_value_order() {
        let order: Vec<_> = Suit::iter().collect();

        assert_eq!(order, [&Suit::Spades, &Suit::Clubs, &Suit::Hearts]);
    }

    #[test]
    fn typed_accessors() {
        assert_eq!(Suit::Hearts.constant().to_string(), "Suit.Hearts(value=3)");
        assert_eq!(Suit::Clubs.value(), Some(&Value::Int(2)));
        assert_eq!(Suit::Hearts.next().unwrap(), &Suit::Spades);
        assert_eq!(Suit::from_name("Clubs").unwrap(), &Suit::Clubs);
        assert!(matches!(Suit::from_name("Diamonds"), Err(Error::MemberNotFound { .. })));
        assert!(std::ptr::eq(Suit::Spades.constant(), &Suit::enum_type()["Spades"]));
    }
}
