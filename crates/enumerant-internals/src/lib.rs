// SPDX-License-Identifier: MPL-2.0

//! Implementation details for *enumerant*.
//!
//! This crate provides the [`enumeration!`] attribute macro that is re-exported by the main
//! *enumerant* crate.
//!
//! [`enumeration!`]: macro@enumeration

#![deny(rustdoc::broken_intra_doc_links, rustdoc::private_intra_doc_links)]

/// A type alias for [`Result<T, E>`] where `E` is [`Error`].
///
/// [`Result<T, E>`]: std::result::Result
type Result<T> = std::result::Result<T, Error>;

/// The error type returned by fallible functions in *enumerant-internals*.
///
/// This is a wrapper over [`syn::Error`] and is convertible into [`TokenStream`] via a [`From`]
/// implementation.
#[derive(Debug)]
struct Error(syn::Error);

impl From<Error> for TokenStream {
    fn from(e: Error) -> Self {
        e.0.into_compile_error().into()
    }
}

/// Creates an [`Error`] with the given message and, optionally, span.
///
/// The syntax of this macro is similar to that of [`format!`] except that the format string may
/// be preceded by a span expression and semicolon (e.g., `span;`). The span of the error message
/// is the span expression, if present, or [`Span2::call_site`] otherwise.
///
/// # Examples
///
/// ```ignore
/// # fn main() -> Result<(), Error> {
/// let variant: syn::Variant;
/// # variant = syn::parse_quote!(Red);
/// return Err(err!(variant.span(); "variant `{}` has a value twice", variant.ident));
/// # }
/// ```
macro_rules! err {
    ($fmt:expr $(, $fmt_arg:expr)* $(,)?) => {
        err!(Span2::call_site(); $fmt $(, $fmt_arg)*)
    };
    ($span:expr ; $fmt:expr $(, $fmt_arg:expr)* $(,)?) => {
        Error(syn::Error::new($span, format!($fmt $(, $fmt_arg)*)))
    };
}

/// Creates a [`syn::Path`] from the given path and span.
///
/// This macro accepts a span expression, semicolon ';', and path, in that order.
///
/// # Examples
///
/// ```ignore
/// let span: Span2;
/// # span = Span2::call_site();
/// let paths: [syn::Path; 3] = [
///     path!(span; usize),
///     path!(span; Self::VARIANTS),
///     path!(span; ::enumerant::EnumType),
/// ];
/// ```
macro_rules! path {
    // Case for identifiers and paths without leading colons.
    ($span:expr ; $head_seg:ident $(:: $tail_seg:ident)*) => {
        path!(@internal => {
            span: $span,
            leading_colon: None,
            segments: $head_seg $($tail_seg)*,
        })
    };
    // Case for paths with leading colons `::`.
    ($span:expr ; :: $head_seg:ident $(:: $tail_seg:ident)*) => {
        path!(@internal => {
            span: $span,
            leading_colon: Some(syn::Token![::]($span)),
            segments: $head_seg $($tail_seg)*,
        })
    };
    // Implementation detail.
    (@internal => {
        span: $span:expr,
        leading_colon: $leading_colon:expr,
        segments: $($seg:ident)* $(,)?
    }) => {
        syn::Path {
            leading_colon: $leading_colon,
            segments: [$(stringify!($seg)),*]
                .into_iter()
                .map(|seg| syn::PathSegment::from(syn::Ident::new(seg, $span)))
                .collect(),
        }
    };
}

/// Creates an implementor of `From<syn::ExprPath>`.
///
/// This macro offers two syntaxes: one equivalent to [`path!`], and one that accepts an expression
/// implementing `Into<syn::Path>`.
macro_rules! expr_path {
    ($span:expr ; $($path_piece:tt)*) => {
        syn::ExprPath { attrs: vec![], qself: None, path: path!($span; $($path_piece)*) }.into()
    };
    ($path:expr $(,)?) => {
        syn::ExprPath { attrs: vec![], qself: None, path: $path.into() }.into()
    }
}

/// Creates an implementor of `From<syn::PatPath>` from an expression implementing
/// `Into<syn::Path>`.
macro_rules! pat_path {
    ($path:expr $(,)?) => {
        syn::PatPath { attrs: vec![], qself: None, path: $path.into() }.into()
    };
}

/// Creates an implementor of `From<syn::TypePath>`.
///
/// This macro offers two syntaxes: one equivalent to [`path!`], and one that accepts an expression
/// implementing `Into<syn::Path>`.
macro_rules! ty_path {
    ($span:expr ; $($path_piece:tt)*) => {
        syn::TypePath { qself: None, path: path!($span; $($path_piece)*) }.into()
    };
    ($path:expr $(,)?) => {
        syn::TypePath { qself: None, path: $path.into() }.into()
    }
}

/// Wraps expressions in a [`syn::Block`], each terminated by a semicolon.
fn blockify_stmts<E>(span: Span2, exprs: impl IntoIterator<Item = E>) -> syn::Block
where
    E: Into<syn::Expr>,
{
    syn::Block {
        brace_token: syn::token::Brace(span),
        stmts: exprs
            .into_iter()
            .map(|it| syn::Stmt::Expr(it.into(), Some(syn::Token![;](span))))
            .collect(),
    }
}

/// Wraps an expression in a [`syn::Block`] as its tail expression.
///
/// # Examples
///
/// ```ignore
/// let span: Span2;
/// # span = Span2::call_site();
/// // Rendered:
/// //   { Self::VARIANTS }
/// let block: syn::Block = blockify::<syn::Expr>(expr_path!(span; Self::VARIANTS));
/// ```
fn blockify<E: Into<syn::Expr>>(expr: E) -> syn::Block {
    let expr = expr.into();

    syn::Block {
        brace_token: syn::token::Brace(expr.span()),
        stmts: vec![syn::Stmt::Expr(expr, None)],
    }
}

/// Creates a type of the form `&'static #elem`.
fn make_static_ref_ty(span: Span2, elem: syn::Type) -> syn::Type {
    syn::TypeReference {
        and_token: syn::Token![&](span),
        lifetime: Some(syn::Lifetime::new("'static", span)),
        mutability: None,
        elem: Box::new(elem),
    }
    .into()
}

/// Creates a string literal expression.
fn make_str_lit(span: Span2, value: &str) -> syn::Expr {
    syn::ExprLit { attrs: vec![], lit: syn::LitStr::new(value, span).into() }.into()
}

/// Creates a method call expression of the form `#receiver.#method(#args)`.
fn make_method_call(
    span: Span2,
    receiver: syn::Expr,
    method: &str,
    args: impl IntoIterator<Item = syn::Expr>,
) -> syn::Expr {
    syn::ExprMethodCall {
        attrs: vec![],
        receiver: Box::new(receiver),
        dot_token: syn::Token![.](span),
        method: syn::Ident::new(method, span),
        turbofish: None,
        paren_token: syn::token::Paren(span),
        args: args.into_iter().collect(),
    }
    .into()
}

/// Appends angle-bracketed generic arguments to the last segment of `path`.
///
/// If `turbofish` is set, the arguments are preceded by `::`, as required in expression position.
fn with_generic_args(
    span: Span2,
    mut path: syn::Path,
    turbofish: bool,
    args: impl IntoIterator<Item = syn::Type>,
) -> syn::Path {
    if let Some(last) = path.segments.last_mut() {
        last.arguments = syn::PathArguments::AngleBracketed(syn::AngleBracketedGenericArguments {
            colon2_token: turbofish.then(|| syn::Token![::](span)),
            lt_token: syn::Token![<](span),
            args: args.into_iter().map(syn::GenericArgument::Type).collect(),
            gt_token: syn::Token![>](span),
        });
    }

    path
}

mod forms;
mod sig;

use forms::*;
use proc_macro::TokenStream;
use proc_macro2::{Span as Span2, TokenStream as TokenStream2};
use syn::{__private::ToTokens, parse::Parser as _, spanned::Spanned as _};

/// The whole point.
///
/// Refer to the `spec` module in the *enumerant* crate root for usage information.
#[proc_macro_attribute]
pub fn enumeration(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = match Args::parse(args.into()) {
        Ok(it) => it,
        Err(e) => {
            return e.into();
        }
    };

    let result = match syn::parse_macro_input!(item as _) {
        syn::Item::Enum(item) => Enum::enumeration(&args, item),
        item => Err(err!(item.span(); "item must be an enum")),
    };

    match result {
        Ok(it) => it.into_token_stream().into(),
        Err(e) => e.into(),
    }
}

/// Models acceptable arguments to the `#[enumeration]` attribute.
#[derive(Default)]
struct Args {
    /// The `name` argument, if present.
    ///
    /// This overrides the type name shown when members of the emitted item are displayed.
    name: Option<syn::LitStr>,
}

impl Args {
    /// Parses comma-separated arguments to the `#[enumeration]` attribute.
    ///
    /// # Errors
    ///
    /// An error is returned if any argument
    ///
    /// - is not of the form `"name" "=" "value"` (ABNF);
    /// - has a name other than `name`;
    /// - has the same name as a previous argument; or
    /// - has a value that is not a string literal.
    fn parse(args: TokenStream2) -> Result<Self> {
        let mut output = Self::default();

        if args.is_empty() {
            return Ok(output);
        }

        syn::meta::parser(|meta| {
            let ident = meta.path.get_ident().ok_or_else(|| -> syn::Error {
                syn::Error::new(meta.path.span(), "argument path must be an identifier")
            })?;
            let arg = if ident == "name" {
                &mut output.name
            } else {
                return Err(meta.error("argument is not supported"));
            };
            if arg.is_some() {
                return Err(meta.error("argument is a duplicate"));
            }
            let value = meta.value()?.parse::<syn::LitStr>()?;
            if value.value().is_empty() {
                return Err(syn::Error::new(value.span(), "name cannot be empty"));
            }
            *arg = Some(value);

            Ok(())
        })
        .parse2(args)
        .map_err(Error)?;

        Ok(output)
    }
}

/// The output of [`Enum::enumeration`].
struct Output {
    /// The emitted item.
    item: syn::ItemEnum,
    /// The implementation of the `Enumeration` trait for [the emitted item].
    ///
    /// [the emitted item]: Self::item
    impl_enumeration_for_item: EnumerationImpl,
}

impl Output {
    fn into_token_stream(self) -> TokenStream2 {
        let item_span = self.item.span();
        let impl_enumeration_for_item = self.impl_enumeration_for_item.into_item_impl(item_span);

        let mut tokens = self.item.into_token_stream();
        impl_enumeration_for_item.to_tokens(&mut tokens);

        tokens
    }
}

/// One member of the emitted enumeration.
struct Member {
    /// The variant identifier.
    ident: syn::Ident,
    /// The explicit value, if the variant has one.
    value: Option<MemberValue>,
}

/// An explicit member value, already in the form it is passed to `Namespace::assign`.
struct MemberValue {
    expr: syn::Expr,
    /// Whether the value is an integer or a float.
    is_numeric: bool,
}

/// An implementation of the `Enumeration` trait.
struct EnumerationImpl {
    /// The name of the implementor.
    ident: syn::Ident,
    /// The type name shown when members are displayed.
    name: syn::LitStr,
    /// The members, in declaration order.
    members: Vec<Member>,
}

impl EnumerationImpl {
    /// Converts this into a [`syn::ItemImpl`] with the given span.
    fn into_item_impl(self, span: Span2) -> syn::ItemImpl {
        let colon_token = syn::Token![:](span);
        let const_token = syn::Token![const](span);
        let eq_token = syn::Token![=](span);
        let semi_token = syn::Token![;](span);

        let make_variant_path = |ident: &syn::Ident| syn::Path {
            leading_colon: None,
            segments: [syn::Ident::new("Self", span), ident.clone()]
                .into_iter()
                .map(syn::PathSegment::from)
                .collect(),
        };

        // Rendered:
        //   const NAME: &'static str = /* self.name */;
        let name_item: syn::ImplItem = syn::ImplItemConst {
            attrs: vec![],
            vis: syn::Visibility::Inherited,
            defaultness: None,
            const_token,
            ident: syn::Ident::new("NAME", span),
            generics: Default::default(),
            colon_token,
            ty: make_static_ref_ty(span, ty_path!(span; str)),
            eq_token,
            expr: syn::ExprLit { attrs: vec![], lit: self.name.into() }.into(),
            semi_token,
        }
        .into();

        // Rendered:
        //   const VARIANTS: &'static [Self] = &[Self::A, Self::B, /* ... */];
        let variants_item: syn::ImplItem = syn::ImplItemConst {
            attrs: vec![],
            vis: syn::Visibility::Inherited,
            defaultness: None,
            const_token,
            ident: syn::Ident::new("VARIANTS", span),
            generics: Default::default(),
            colon_token,
            ty: make_static_ref_ty(
                span,
                syn::TypeSlice {
                    bracket_token: syn::token::Bracket(span),
                    elem: Box::new(ty_path!(span; Self)),
                }
                .into(),
            ),
            eq_token,
            expr: syn::ExprReference {
                attrs: vec![],
                and_token: syn::Token![&](span),
                mutability: None,
                expr: Box::new(
                    syn::ExprArray {
                        attrs: vec![],
                        bracket_token: syn::token::Bracket(span),
                        elems: self
                            .members
                            .iter()
                            .map(|it| -> syn::Expr { expr_path!(make_variant_path(&it.ident)) })
                            .collect(),
                    }
                    .into(),
                ),
            }
            .into(),
            semi_token,
        }
        .into();

        // Rendered:
        //   fn declare(namespace: &mut ::enumerant::Namespace) {
        //       namespace.declare("A");
        //       namespace.assign("B", /* value */);
        //       /* ... */
        //   }
        let declare_stmts = self.members.iter().map(|member| {
            let span = member.ident.span();
            let name = make_str_lit(span, &syn::ext::IdentExt::unraw(&member.ident).to_string());
            let receiver = expr_path!(span; namespace);

            match &member.value {
                Some(value) => make_method_call(span, receiver, "assign", [name, value.expr.clone()]),
                None => make_method_call(span, receiver, "declare", [name]),
            }
        });
        let declare_fn = sig::Builder::new().build(
            span,
            syn::Ident::new("declare", span),
            |span| {
                [sig::make_arg(
                    span,
                    "namespace",
                    syn::TypeReference {
                        and_token: syn::Token![&](span),
                        lifetime: None,
                        mutability: Some(syn::Token![mut](span)),
                        elem: Box::new(ty_path!(span; ::enumerant::Namespace)),
                    }
                    .into(),
                )]
            },
            |_| None,
        );
        let declare_block = blockify_stmts(span, declare_stmts);

        // Rendered:
        //   fn index(&self) -> usize {
        //       match self {
        //           Self::A => 0usize,
        //           /* ... */
        //       }
        //   }
        let index_arms = self
            .members
            .iter()
            .enumerate()
            .map(|(i, member)| {
                let span = member.ident.span();

                syn::Arm {
                    attrs: vec![],
                    pat: pat_path!(make_variant_path(&member.ident)),
                    guard: None,
                    fat_arrow_token: syn::Token![=>](span),
                    body: Box::new(
                        syn::ExprLit {
                            attrs: vec![],
                            lit: syn::LitInt::new(&format!("{i}usize"), span).into(),
                        }
                        .into(),
                    ),
                    comma: Some(syn::Token![,](span)),
                }
            })
            .collect();
        let index_fn = sig::Builder::new().with_ref_self().build(
            span,
            syn::Ident::new("index", span),
            |_| [],
            |span| Some(ty_path!(span; usize)),
        );
        let index_block = blockify(syn::ExprMatch {
            attrs: vec![],
            match_token: syn::Token![match](span),
            expr: Box::new(expr_path!(span; self)),
            brace_token: syn::token::Brace(span),
            arms: index_arms,
        });

        // Rendered:
        //   fn enum_type() -> &'static ::enumerant::EnumType {
        //       static TYPE: ::std::sync::OnceLock<::enumerant::EnumType> =
        //           ::std::sync::OnceLock::new();
        //       TYPE.get_or_init(::enumerant::__private::build::<Self>)
        //   }
        let enum_type_fn = sig::Builder::new().build(
            span,
            syn::Ident::new("enum_type", span),
            |_| [],
            |span| Some(make_static_ref_ty(span, ty_path!(span; ::enumerant::EnumType))),
        );
        let type_static = syn::ItemStatic {
            attrs: vec![],
            vis: syn::Visibility::Inherited,
            static_token: syn::Token![static](span),
            mutability: syn::StaticMutability::None,
            ident: syn::Ident::new("TYPE", span),
            colon_token,
            ty: Box::new(ty_path!(with_generic_args(
                span,
                path!(span; ::std::sync::OnceLock),
                false,
                [ty_path!(span; ::enumerant::EnumType)],
            ))),
            eq_token,
            expr: Box::new(
                syn::ExprCall {
                    attrs: vec![],
                    func: Box::new(expr_path!(span; ::std::sync::OnceLock::new)),
                    paren_token: syn::token::Paren(span),
                    args: Default::default(),
                }
                .into(),
            ),
            semi_token,
        };
        let get_or_init = make_method_call(
            span,
            expr_path!(span; TYPE),
            "get_or_init",
            [expr_path!(with_generic_args(
                span,
                path!(span; ::enumerant::__private::build),
                true,
                [ty_path!(span; Self)],
            ))],
        );
        let enum_type_block = syn::Block {
            brace_token: syn::token::Brace(span),
            stmts: vec![syn::Stmt::Item(type_static.into()), syn::Stmt::Expr(get_or_init, None)],
        };

        let fn_items = [
            (declare_fn, declare_block),
            (index_fn, index_block),
            (enum_type_fn, enum_type_block),
        ]
        .into_iter()
        .map(|(sig, block)| {
            syn::ImplItem::Fn(syn::ImplItemFn {
                attrs: vec![],
                vis: syn::Visibility::Inherited,
                defaultness: None,
                sig,
                block,
            })
        });

        // Rendered:
        //   impl ::enumerant::Enumeration for /* self.ident */ {
        //       #name_item
        //       #variants_item
        //       /* fn_items */
        //   }
        syn::ItemImpl {
            attrs: vec![],
            defaultness: None,
            unsafety: None,
            impl_token: syn::Token![impl](span),
            generics: Default::default(),
            trait_: Some((None, path!(span; ::enumerant::Enumeration), syn::Token![for](span))),
            self_ty: Box::new(ty_path!(self.ident)),
            brace_token: syn::token::Brace(span),
            items: [name_item, variants_item].into_iter().chain(fn_items).collect(),
        }
    }
}
