// SPDX-License-Identifier: MPL-2.0

//! The error type returned by fallible functions in *enumerant*.

use thiserror::Error;

/// A type alias for [`Result<T, E>`] where `E` is [`Error`].
///
/// [`Result<T, E>`]: std::result::Result
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while declaring, building or using an enum type.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A member lookup, by name or by index, found nothing.
    #[error("enum constant not found: {type_name}.{member}")]
    MemberNotFound {
        /// Name of the enum type that was searched.
        type_name: String,
        /// The requested member name.
        member: String,
    },

    /// An attempt to add, reassign or remove a member of a built type.
    #[error("cannot mutate `{attribute}` on locked enum type `{type_name}`")]
    LockedTypeMutation {
        /// Name of the locked enum type.
        type_name: String,
        /// The attribute that was targeted.
        attribute: String,
    },

    /// The constant being advanced is not part of the type it was advanced through.
    #[error("constant `{constant}` is not a member of enum type `{type_name}`")]
    ConstantNotFound {
        /// Name of the enum type that was scanned.
        type_name: String,
        /// Display form of the stray constant.
        constant: String,
    },

    /// Some members are ordered by a numeric value and others by declaration order.
    #[error(
        "enum type `{type_name}` mixes value-ordered member `{valued}` with declaration-ordered \
         member `{unvalued}`"
    )]
    MixedOrdering {
        /// Name of the enum type under construction.
        type_name: String,
        /// The first member carrying a numeric value.
        valued: String,
        /// The first member without one.
        unvalued: String,
    },

    /// An alias names a binding that the build scope does not contain.
    #[error("member `{type_name}.{member}` aliases unknown binding `{target}`")]
    UnresolvedAlias {
        /// Name of the enum type under construction.
        type_name: String,
        /// The aliasing member.
        member: String,
        /// The external binding it refers to.
        target: String,
    },

    /// Any other malformed declaration.
    #[error("invalid declaration of enum type `{type_name}`: {reason}")]
    InvalidDeclaration {
        /// Name of the enum type under construction.
        type_name: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid(type_name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDeclaration { type_name: type_name.to_owned(), reason: reason.into() }
    }
}
