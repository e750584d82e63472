// SPDX-License-Identifier: MPL-2.0

//! The `enumeration` macro for enums.

use super::*;

/// The name of the variant attribute that assigns a non-discriminant value.
const VALUE_ATTR: &str = "value";

/// Member names starting with this prefix are bookkeeping attributes in the runtime crate and
/// never become members.
const RESERVED_PREFIX: &str = "_";

pub(crate) struct Enum;

impl Enum {
    pub(crate) fn enumeration(args: &Args, mut item: syn::ItemEnum) -> Result<Output> {
        check_generics(&item.generics)?;

        let mut members = Vec::with_capacity(item.variants.len());
        for variant in item.variants.iter_mut() {
            if !variant.fields.is_empty() {
                return Err(err!(variant.fields.span(); "variant fields are not supported"));
            }

            let name = syn::ext::IdentExt::unraw(&variant.ident).to_string();
            if name.starts_with(RESERVED_PREFIX) {
                return Err(err!(
                    variant.ident.span();
                    "variant name `{name}` is reserved; names starting with `{RESERVED_PREFIX}` \
                     cannot be members",
                ));
            }

            let span = variant.span();
            // The `#[value]` attribute must not survive into the emitted item; the compiler does
            // not know it.
            let value_attr = take_value_attr(&mut variant.attrs)?;
            let value = match (&variant.discriminant, value_attr) {
                (Some(_), Some(_)) => {
                    return Err(err!(
                        span;
                        "variant cannot have both a discriminant and a `{VALUE_ATTR}` attribute",
                    ));
                }
                (Some((_, expr)), None) => Some(parse_discriminant(expr)?),
                (None, Some(expr)) => Some(parse_value(&expr)?),
                (None, None) => None,
            };

            members.push(Member { ident: variant.ident.clone(), value });
        }

        if members.is_empty() {
            return Err(err!(item.brace_token.span.join(); "enum cannot have zero variants"));
        }
        check_ordering(&members)?;

        let name = args.name.clone().unwrap_or_else(|| {
            let ident = syn::ext::IdentExt::unraw(&item.ident);
            syn::LitStr::new(&ident.to_string(), item.ident.span())
        });
        let impl_enumeration_for_item =
            EnumerationImpl { ident: item.ident.clone(), name, members };

        Ok(Output { item, impl_enumeration_for_item })
    }
}

/// Removes the `#[value = ...]` attribute from `attrs` and returns its value expression.
///
/// # Errors
///
/// An error is returned if the attribute is not of the name-value form or appears twice.
fn take_value_attr(attrs: &mut Vec<syn::Attribute>) -> Result<Option<syn::Expr>> {
    let mut value = None;
    let mut kept = Vec::with_capacity(attrs.len());

    for attr in attrs.drain(..) {
        if !attr.path().is_ident(VALUE_ATTR) {
            kept.push(attr);
            continue;
        }

        let span = attr.span();
        let syn::Meta::NameValue(meta) = attr.meta else {
            return Err(err!(span; "expected `#[{VALUE_ATTR} = ...]`"));
        };
        if value.is_some() {
            return Err(err!(span; "`{VALUE_ATTR}` attribute is a duplicate"));
        }
        value = Some(meta.value);
    }
    *attrs = kept;

    Ok(value)
}

/// Converts a variant discriminant into a member value.
///
/// Discriminants must be integer literals, optionally negated.
fn parse_discriminant(expr: &syn::Expr) -> Result<MemberValue> {
    match split_negation(expr) {
        (is_negated, syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Int(lit), .. })) => {
            make_int_value(is_negated, lit)
        }
        _ => Err(err!(expr.span(); "variant discriminant must be an integer literal")),
    }
}

/// Converts the expression of a `#[value]` attribute into a member value.
fn parse_value(expr: &syn::Expr) -> Result<MemberValue> {
    let (is_negated, inner) = split_negation(expr);
    let syn::Expr::Lit(syn::ExprLit { lit, .. }) = inner else {
        return Err(err!(expr.span(); "value must be a literal"));
    };

    match lit {
        syn::Lit::Int(lit) => make_int_value(is_negated, lit),
        syn::Lit::Float(_) => Ok(MemberValue { expr: expr.clone(), is_numeric: true }),
        syn::Lit::Str(_) | syn::Lit::Char(_) | syn::Lit::Bool(_) if !is_negated => {
            Ok(MemberValue { expr: expr.clone(), is_numeric: false })
        }
        _ => Err(err!(
            expr.span();
            "value must be a string, integer, float, character or boolean literal",
        )),
    }
}

/// Strips one leading unary minus from `expr`.
fn split_negation(expr: &syn::Expr) -> (bool, &syn::Expr) {
    match expr {
        syn::Expr::Unary(syn::ExprUnary { op: syn::UnOp::Neg(_), expr, .. }) => (true, &**expr),
        other => (false, other),
    }
}

/// Re-emits an integer literal with an `i64` suffix so that it converts into a `Value` without
/// falling back to `i32`.
fn make_int_value(is_negated: bool, lit: &syn::LitInt) -> Result<MemberValue> {
    let span = lit.span();
    let limit = if is_negated { i64::MIN.unsigned_abs() } else { i64::MAX as u64 };
    let magnitude = lit
        .base10_parse::<u64>()
        .ok()
        .filter(|it| *it <= limit)
        .ok_or_else(|| err!(span; "integer value does not fit in an `i64`"))?;

    // Rendered:
    //   #magnitude i64
    let mut expr: syn::Expr = syn::ExprLit {
        attrs: vec![],
        lit: syn::LitInt::new(&format!("{magnitude}i64"), span).into(),
    }
    .into();
    if is_negated {
        // Rendered:
        //   -#magnitude i64
        expr = syn::ExprUnary {
            attrs: vec![],
            op: syn::UnOp::Neg(syn::Token![-](span)),
            expr: Box::new(expr),
        }
        .into();
    }

    Ok(MemberValue { expr, is_numeric: true })
}

/// Rejects enums that mix numeric and non-numeric members.
///
/// A type is ordered either by value or by declaration, never both.
fn check_ordering(members: &[Member]) -> Result<()> {
    let is_numeric = |member: &&Member| member.value.as_ref().is_some_and(|it| it.is_numeric);

    let valued = members.iter().find(is_numeric);
    let unvalued = members.iter().find(|it| !is_numeric(it));
    if let (Some(valued), Some(unvalued)) = (valued, unvalued) {
        return Err(err!(
            unvalued.ident.span();
            "enum mixes value-ordered variant `{}` with declaration-ordered variant `{}`",
            valued.ident,
            unvalued.ident,
        ));
    }

    Ok(())
}
