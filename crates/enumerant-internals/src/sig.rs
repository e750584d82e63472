// SPDX-License-Identifier: MPL-2.0

//! A convenience builder for [`syn::Signature`].

use super::*;

/// A convenience builder for [`syn::Signature`].
pub(crate) struct Builder {
    /// Whether the function takes `&self`.
    has_ref_self: bool,
}

impl Builder {
    /// Creates a new `Builder`.
    ///
    /// At creation, the builder state represents an associated function without a receiver.
    pub(crate) fn new() -> Self {
        Self { has_ref_self: false }
    }

    /// Adds a `&self` receiver to the function signature.
    pub(crate) fn with_ref_self(mut self) -> Self {
        self.has_ref_self = true;

        self
    }

    /// Consumes this builder to produce a [`syn::Signature`].
    ///
    /// # Arguments
    ///
    /// `span` is the [span](Span2) used for the `fn` keyword, the receiver and the 'right arrow'
    /// token `->`. `ident` is the [identifier](syn::Ident) corresponding to the name of the
    /// function. `get_inputs` and `get_output` are functions that receive the `span` argument
    /// by-copy and produce the function arguments and return type, respectively, for the resultant
    /// signature.
    pub(crate) fn build<In>(
        self,
        span: Span2,
        ident: syn::Ident,
        get_inputs: impl FnOnce(Span2) -> In,
        get_output: impl FnOnce(Span2) -> Option<syn::Type>,
    ) -> syn::Signature
    where
        In: IntoIterator<Item = syn::PatType>,
    {
        let receiver = self.has_ref_self.then(|| make_ref_self(span));

        syn::Signature {
            constness: None,
            asyncness: None,
            unsafety: None,
            abi: None,
            fn_token: syn::Token![fn](span),
            ident,
            generics: Default::default(),
            paren_token: syn::token::Paren(span),
            inputs: receiver
                .into_iter()
                .chain(get_inputs(span).into_iter().map(syn::FnArg::Typed))
                .collect(),
            variadic: None,
            output: match get_output(span) {
                Some(ty) => syn::ReturnType::Type(syn::Token![->](span), Box::new(ty)),
                None => syn::ReturnType::Default,
            },
        }
    }
}

/// Produces a [`syn::PatType`] of the form `#name: #ty`.
pub(crate) fn make_arg(span: Span2, name: &str, ty: syn::Type) -> syn::PatType {
    syn::PatType {
        attrs: vec![],
        pat: Box::new(
            syn::PatIdent {
                attrs: vec![],
                by_ref: None,
                mutability: None,
                ident: syn::Ident::new(name, span),
                subpat: None,
            }
            .into(),
        ),
        colon_token: syn::Token![:](span),
        ty: Box::new(ty),
    }
}

/// Produces a [`syn::FnArg`] of the form `&self`.
fn make_ref_self(span: Span2) -> syn::FnArg {
    let and_token = syn::Token![&](span);
    // Rendered:
    //   &Self
    let ty = syn::TypeReference {
        and_token,
        lifetime: None,
        mutability: None,
        elem: Box::new(ty_path!(span; Self)),
    }
    .into();

    syn::FnArg::Receiver(syn::Receiver {
        attrs: vec![],
        reference: Some((and_token, None)),
        mutability: None,
        self_token: syn::Token![self](span),
        colon_token: None,
        ty: Box::new(ty),
    })
}
