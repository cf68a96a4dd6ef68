//! # return-self-core
//!
//! Core declaration rewriter for the `#[return_self]` attribute macro.
//!
//! Given a function-like declaration with no explicit return type, the
//! rewriter derives a sibling (or replacement) declaration that appends
//! `return self;` to the body, sets the return type to `Self`, and carries
//! a discardable-result marker. The logic lives here, behind a plain
//! library API, so it can be driven and tested without the proc-macro
//! boundary; the `return-self-macros` crate is a thin shim over
//! [`Rewriter::expand`].
//!
//! ## Example
//!
//! ```
//! use return_self_core::{FnDecl, Rewriter};
//! use syn::parse_quote;
//!
//! let rewriter = Rewriter::default();
//! let decl = FnDecl::Method(parse_quote! {
//!     fn increment(mut self) { self.value += 1; }
//! });
//!
//! let generated = rewriter.rewrite(&decl).expect("eligible declaration");
//! assert_eq!(generated.name(), "increment_and_return_self");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assemble;
mod body;
mod decl;
mod eligibility;
mod policy;
mod rewriter;
mod signature;

pub use assemble::assemble;
pub use body::with_return_receiver;
pub use decl::FnDecl;
pub use eligibility::is_eligible;
pub use policy::{NamingPolicy, DEFAULT_SUFFIX};
pub use rewriter::{RewriteError, Rewriter, RewriterBuilder, DEFAULT_TRIGGER};
pub use signature::with_self_return;
