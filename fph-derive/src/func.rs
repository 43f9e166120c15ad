//! Implementation of the `func!` procedural macro.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `func!(|a, b| body)`
//! 2. Named form: `func!("name", |a, b| body)`
//!
//! # Generated Code Structure
//!
//! For `func!("add", |a, b| body)`, the macro generates:
//!
//! ```text
//! ::fph::Function::named("add", 2usize, move |__fph_arguments: &[::fph::Value]|
//!     -> ::fph::Result<::fph::Value> {
//!     let a = ::fph::Function::argument(__fph_arguments, 0usize);
//!     let b = ::fph::Function::argument(__fph_arguments, 1usize);
//!     body
//! })
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{Expr, ExprClosure, ExprLit, Lit, LitStr, Pat, ReturnType, Token, spanned::Spanned};

const ANONYMOUS: &str = "anonymous";

struct FuncInput {
    name: Option<LitStr>,
    closure: ExprClosure,
}

pub fn func_impl(input: TokenStream) -> TokenStream {
    let expanded = match parse_func_input(input) {
        Ok(func_input) => generate_function(&func_input).unwrap_or_else(|error| error.to_compile_error()),
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn parse_func_input(input: TokenStream) -> syn::Result<FuncInput> {
    let input_tokens: proc_macro2::TokenStream = input.into();
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions: Punctuated<Expr, Token![,]> =
        syn::parse::Parser::parse2(parser, input_tokens)?;

    let mut iterator = expressions.into_iter();
    match (iterator.next(), iterator.next(), iterator.next()) {
        (Some(Expr::Closure(closure)), None, None) => Ok(FuncInput {
            name: None,
            closure,
        }),
        (
            Some(Expr::Lit(ExprLit {
                lit: Lit::Str(name),
                ..
            })),
            Some(Expr::Closure(closure)),
            None,
        ) => Ok(FuncInput {
            name: Some(name),
            closure,
        }),
        (Some(other), _, _) => Err(syn::Error::new(
            other.span(),
            "func! requires a closure or a string literal name followed by a closure",
        )),
        (None, _, _) => Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "func! requires a closure",
        )),
    }
}

fn generate_function(func_input: &FuncInput) -> syn::Result<TokenStream2> {
    let closure = &func_input.closure;

    if let ReturnType::Type(_, return_type) = &closure.output {
        return Err(syn::Error::new(
            return_type.span(),
            "func! bodies always return fph::Result<fph::Value>; remove the return type",
        ));
    }

    let bindings = closure
        .inputs
        .iter()
        .enumerate()
        .map(|(index, parameter)| generate_binding(index, parameter))
        .collect::<syn::Result<Vec<_>>>()?;

    let arity = closure.inputs.len();
    let name = func_input
        .name
        .as_ref()
        .map_or_else(|| quote! { #ANONYMOUS }, |literal| quote! { #literal });
    let body = &closure.body;

    Ok(quote! {
        ::fph::Function::named(
            #name,
            #arity,
            move |__fph_arguments: &[::fph::Value]| -> ::fph::Result<::fph::Value> {
                #(#bindings)*
                #body
            },
        )
    })
}

fn generate_binding(index: usize, parameter: &Pat) -> syn::Result<TokenStream2> {
    match parameter {
        Pat::Ident(pattern) if pattern.subpat.is_none() && pattern.by_ref.is_none() => {
            let mutability = &pattern.mutability;
            let identifier = &pattern.ident;
            Ok(quote! {
                #[allow(unused_variables)]
                let #mutability #identifier = ::fph::Function::argument(__fph_arguments, #index);
            })
        }
        Pat::Wild(_) => Ok(TokenStream2::new()),
        Pat::Type(typed) => Err(syn::Error::new(
            typed.ty.span(),
            "func! parameters are dynamic fph::Value arguments; remove the type annotation",
        )),
        other => Err(syn::Error::new(
            other.span(),
            "func! parameters must be plain identifiers or `_`",
        )),
    }
}
