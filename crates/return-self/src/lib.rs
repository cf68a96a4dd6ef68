//! # return-self
//!
//! Attribute macro that derives chainable, `Self`-returning siblings for
//! methods with no return type.
//!
//! This is the main facade crate that re-exports the macro and the core
//! rewriter API.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! return-self = "0.2"
//! ```
//!
//! ```rust
//! use return_self::return_self;
//!
//! #[derive(Default)]
//! struct Counter {
//!     value: i32,
//! }
//!
//! impl Counter {
//!     #[return_self]
//!     fn increment(mut self) {
//!         self.value += 1;
//!     }
//! }
//!
//! let counter = Counter::default()
//!     .increment_and_return_self()
//!     .increment_and_return_self();
//! assert_eq!(counter.value, 2);
//! ```
//!
//! ## Naming
//!
//! By default the generated method is a sibling named
//! `<original>_and_return_self`, and the original method stays as it is.
//! Two knobs change that:
//!
//! ```rust,ignore
//! #[return_self(suffix = "_chained")]   // sibling named `increment_chained`
//! #[return_self(in_place)]              // rewrite `increment` itself
//! ```
//!
//! ## What gets rewritten
//!
//! Only methods with no declared return type. A method that already
//! returns something compiles unchanged, as does any item the macro does
//! not understand. Take the receiver by value (`mut self`); the rewrite is
//! syntactic and a generated `fn(&mut self) -> Self` would not type-check.
//!
//! ## Programmatic Usage
//!
//! The rewrite pipeline is a plain library in `return-self-core`,
//! re-exported here for host-independent use:
//!
//! ```rust
//! use return_self::{FnDecl, Rewriter};
//! use syn::parse_quote;
//!
//! let decl = FnDecl::Method(parse_quote! {
//!     fn reset(mut self) { self.value = 0; }
//! });
//! let generated = Rewriter::default().rewrite(&decl);
//! assert!(generated.is_some());
//! ```

#![forbid(unsafe_code)]

// Re-export the core rewriter API
pub use return_self_core::{
    FnDecl, NamingPolicy, RewriteError, Rewriter, RewriterBuilder, DEFAULT_SUFFIX, DEFAULT_TRIGGER,
};

// Re-export the attribute macro
pub use return_self_macros::return_self;
