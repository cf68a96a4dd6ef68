//! # return-self-macros
//!
//! Procedural macro surface for `return-self`.
//!
//! This crate is a thin shim: it parses the attribute arguments into a
//! naming policy and delegates the rewrite to `return-self-core`. Use the
//! `return-self` facade crate rather than depending on this crate directly.

#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use return_self_core::{NamingPolicy, RewriteError, Rewriter};

/// Derives a chainable sibling for a method with no return type.
///
/// The generated sibling keeps the original body, appends `return self;`,
/// returns `Self`, and is named `<original>_and_return_self`. The original
/// method is left in place. Methods that already declare a return type are
/// passed through unchanged.
///
/// ```ignore
/// impl Counter {
///     #[return_self]
///     fn increment(mut self) {
///         self.value += 1;
///     }
///     // generated:
///     // #[allow(clippy::must_use_candidate)]
///     // fn increment_and_return_self(mut self) -> Self {
///     //     self.value += 1;
///     //     return self;
///     // }
/// }
/// ```
///
/// # Arguments
///
/// - `#[return_self(suffix = "_chained")]` - custom sibling suffix.
/// - `#[return_self(in_place)]` - transform the method itself instead of
///   emitting a sibling; the name stays the same.
///
/// # Receivers
///
/// The rewrite is purely syntactic: take the receiver by value
/// (`mut self`) so the generated `-> Self` body type-checks.
#[proc_macro_attribute]
pub fn return_self(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand(attr.into(), item.into())
        .unwrap_or_else(RewriteError::into_compile_error)
        .into()
}

fn expand(attr: TokenStream2, item: TokenStream2) -> Result<TokenStream2, RewriteError> {
    let policy = NamingPolicy::from_attr_args(attr).map_err(RewriteError::InvalidPolicy)?;
    let rewriter = Rewriter::builder().policy(policy).build()?;
    rewriter.expand(item)
}
