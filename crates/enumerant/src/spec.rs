// SPDX-License-Identifier: MPL-2.0

//! A documentation-only module that explains how to use [`enumeration`].
//!
//! [`enumeration`]: crate::enumeration
//!
//! This module is dedicated to describing the syntax and behavior of the `enumeration` attribute
//! macro. The runtime items it builds on, including [`EnumType`] and the [`Enumeration`] trait,
//! are documented separately.
//!
//! [`EnumType`]: crate::EnumType
//! [`Enumeration`]: crate::Enumeration
//!
//! ## Syntax
//!
//! At macro evaluation time, `enumeration` parses the input item and validates it against its own
//! syntactical rules. This syntax is a subset of Rust syntax and is notated in a modified
//! [Augmented Backus-Naur Form] where:
//!
//! [Augmented Backus-Naur Form]: https://en.wikipedia.org/wiki/Augmented_Backus%E2%80%93Naur_form
//!
//! - implicit whitespace is allowed between concatenated rule elements (and may be required,
//!   depending on the context);
//! - literal text strings are case sensitive by default; and
//! - <code>%r"<em>rule</em>"</code> is a rule from [The Rust Reference] (and should not be
//!   interpreted as a literal text string).
//!
//! [The Rust Reference]: https://doc.rust-lang.org/reference/
//!
//! ```abnf
//! item = *item-attr %r"Visibility" "enum" %r"IDENTIFIER" enum-body
//! item-attr = enumeration-attr / %r"OuterAttribute"
//! enumeration-attr = "#[" "enumeration" [enumeration-attr-input] "]"
//! enumeration-attr-input = "(" [name-arg [","]] ")"
//! name-arg = "name" "=" %r"STRING_LITERAL"
//! enum-body = "{" *(variant ",") [variant [","]] "}"
//! ; Note: variants cannot contain fields.
//! variant = *variant-attr %r"IDENTIFIER" ["=" discriminant]
//! variant-attr = value-attr / %r"OuterAttribute"
//! value-attr = "#[" "value" "=" value-literal "]"
//! value-literal = %r"STRING_LITERAL" / %r"INTEGER_LITERAL" / %r"FLOAT_LITERAL" / %r"CHAR_LITERAL"
//!     / "true" / "false"
//! discriminant = ["-"] %r"INTEGER_LITERAL"
//! ```
//!
//! ## Semantics
//!
//! Each variant becomes one member of the backing [`EnumType`], declared in source order. A
//! variant with a discriminant or a `#[value]` attribute carries that value explicitly; a variant
//! with neither is an implicit member. A variant may not have both. Variant names starting with
//! `_` are reserved for bookkeeping attributes and are rejected.
//!
//! Integer discriminants, integer values and float values are numeric. Either every variant is
//! numeric, in which case iteration follows the values, or none is, in which case iteration
//! follows declaration order. Mixing the two is rejected at macro evaluation time, as are enums
//! without variants.
//!
//! The `name` argument sets the type name used when members are displayed. It defaults to the
//! identifier of the enum.
//!
//! ## Output
//!
//! This macro produces two items:
//!
//! - The `enum` definition, with `#[value]` attributes removed.
//! - An `impl ::enumerant::Enumeration` block implementing the [`Enumeration`] trait for the enum.
//!   Its `enum_type` function builds the backing type once per process.
