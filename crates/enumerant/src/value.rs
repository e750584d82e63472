// SPDX-License-Identifier: MPL-2.0

//! Explicit values attached to enum members.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

/// A value assigned to an enum member by its author.
///
/// Only [`Int`] and [`Float`] are *numeric*; a type whose members all carry numeric values is
/// ordered by those values rather than by declaration order.
///
/// [`Int`]: Self::Int
/// [`Float`]: Self::Float
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Char(char),
    Tuple(Vec<Value>),
}

impl Value {
    /// Whether this value participates in value ordering.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Returns the integer payload, if any.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(it) => Some(*it),
            _ => None,
        }
    }

    /// Returns the string payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(it) => Some(it),
            _ => None,
        }
    }

    /// Unwraps a one-element tuple to its sole element.
    ///
    /// Declarations that end every entry with a comma produce one-element tuples; all assigned
    /// values pass through here before they are stored.
    pub(crate) fn normalize(self) -> Self {
        match self {
            Self::Tuple(mut elems) if elems.len() == 1 => elems.remove(0),
            other => other,
        }
    }

    /// Compares two numeric values.
    ///
    /// Returns [`None`] if either side is not numeric.
    pub(crate) fn numeric_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (Self::Int(a), Self::Float(b)) => Some((*a as f64).total_cmp(b)),
            (Self::Float(a), Self::Int(b)) => Some(a.total_cmp(&(*b as f64))),
            (Self::Float(a), Self::Float(b)) => Some(a.total_cmp(b)),
            _ => None,
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Int(it) => it.hash(state),
            Self::Float(it) => it.to_bits().hash(state),
            Self::Str(it) => it.hash(state),
            Self::Bool(it) => it.hash(state),
            Self::Char(it) => it.hash(state),
            Self::Tuple(it) => it.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(it) => write!(f, "{it}"),
            Self::Float(it) => write!(f, "{it:?}"),
            Self::Str(it) => write!(f, "{it:?}"),
            Self::Bool(it) => write!(f, "{it}"),
            Self::Char(it) => write!(f, "{it:?}"),
            Self::Tuple(elems) => {
                f.write_str("(")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{elem}")?;
                }
                if elems.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Implements `From<$ty> for Value` for each integer type that fits losslessly in an `i64`.
macro_rules! from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(it: $ty) -> Self {
                    Self::Int(i64::from(it))
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(it: f32) -> Self {
        Self::Float(f64::from(it))
    }
}

impl From<f64> for Value {
    fn from(it: f64) -> Self {
        Self::Float(it)
    }
}

impl From<bool> for Value {
    fn from(it: bool) -> Self {
        Self::Bool(it)
    }
}

impl From<char> for Value {
    fn from(it: char) -> Self {
        Self::Char(it)
    }
}

impl From<&str> for Value {
    fn from(it: &str) -> Self {
        Self::Str(it.to_owned())
    }
}

impl From<String> for Value {
    fn from(it: String) -> Self {
        Self::Str(it)
    }
}

impl<A: Into<Value>> From<(A,)> for Value {
    fn from((a,): (A,)) -> Self {
        Self::Tuple(vec![a.into()])
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for Value {
    fn from((a, b): (A, B)) -> Self {
        Self::Tuple(vec![a.into(), b.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_element_tuples_unwrap() {
        assert_eq!(Value::from((3,)).normalize(), Value::Int(3));
        assert_eq!(Value::from(("a", 1)).normalize(), Value::Tuple(vec!["a".into(), 1.into()]));
        assert_eq!(Value::from(7).normalize(), Value::Int(7));
    }

    #[test]
    fn display() {
        assert_eq!(Value::from(3).to_string(), "3");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from("hi").to_string(), "\"hi\"");
        assert_eq!(Value::from('x').to_string(), "'x'");
        assert_eq!(Value::from((1, "a")).to_string(), "(1, \"a\")");
        assert_eq!(Value::Tuple(vec![Value::Int(1)]).to_string(), "(1,)");
    }

    #[test]
    fn numeric_comparison() {
        assert_eq!(Value::Int(1).numeric_cmp(&Value::Int(2)), Some(Ordering::Less));
        assert_eq!(Value::Float(2.5).numeric_cmp(&Value::Int(2)), Some(Ordering::Greater));
        assert_eq!(Value::Int(1).numeric_cmp(&Value::from("1")), None);
    }
}
