//! Orchestration of the rewrite pipeline.

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{parse_quote, Attribute};
use thiserror::Error;
use tracing::debug;

use crate::decl::FnDecl;
use crate::policy::NamingPolicy;
use crate::{assemble, body, eligibility, signature};

/// Attribute name that triggers the rewrite by default.
pub const DEFAULT_TRIGGER: &str = "return_self";

/// Errors that can occur during a rewrite.
///
/// Ineligible input is not an error: the rewrite degrades to a no-op and
/// the original declaration is emitted unchanged.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// The item tokens do not parse as any declaration. This indicates a
    /// host contract violation, not a legitimate input shape.
    #[error("malformed declaration: {0}")]
    Malformed(#[source] syn::Error),

    /// The naming-policy configuration is invalid.
    #[error("invalid naming policy: {0}")]
    InvalidPolicy(#[source] syn::Error),
}

impl RewriteError {
    /// Renders the error as a `compile_error!` invocation at the span the
    /// underlying parse error carries.
    #[must_use]
    pub fn into_compile_error(self) -> TokenStream {
        match self {
            Self::Malformed(e) | Self::InvalidPolicy(e) => e.to_compile_error(),
        }
    }
}

/// Builder for configuring a [`Rewriter`].
#[derive(Default)]
pub struct RewriterBuilder {
    trigger: Option<String>,
    policy: Option<NamingPolicy>,
    result_marker: Option<Attribute>,
}

impl RewriterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the trigger attribute name (default: `return_self`).
    #[must_use]
    pub fn trigger(mut self, name: impl Into<String>) -> Self {
        self.trigger = Some(name.into());
        self
    }

    /// Sets the naming policy (default: suffixed).
    #[must_use]
    pub fn policy(mut self, policy: NamingPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Sets the discardable-result marker appended to generated
    /// declarations (default: `#[allow(clippy::must_use_candidate)]`).
    #[must_use]
    pub fn result_marker(mut self, marker: Attribute) -> Self {
        self.result_marker = Some(marker);
        self
    }

    /// Builds the rewriter.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::InvalidPolicy`] for a suffixed policy whose
    /// suffix cannot extend an identifier: an empty suffix would mark every
    /// declaration as already generated, and one with non-identifier
    /// characters could never form the sibling name.
    pub fn build(self) -> Result<Rewriter, RewriteError> {
        let policy = self.policy.unwrap_or_default();
        if let NamingPolicy::Suffixed { suffix } = &policy {
            if let Some(message) = crate::policy::invalid_suffix_message(suffix) {
                return Err(RewriteError::InvalidPolicy(syn::Error::new(
                    proc_macro2::Span::call_site(),
                    message,
                )));
            }
        }

        Ok(Rewriter {
            trigger: self.trigger.unwrap_or_else(|| DEFAULT_TRIGGER.to_string()),
            policy,
            result_marker: self.result_marker.unwrap_or_else(default_marker),
        })
    }
}

fn default_marker() -> Attribute {
    parse_quote!(#[allow(clippy::must_use_candidate)])
}

/// The declaration rewriter.
///
/// A pure, synchronous transform from one function-like declaration to zero
/// or one new declarations: filter, body synthesis, signature synthesis,
/// assembly. It holds only configuration and no per-call state, so a single
/// instance can serve concurrent expansions.
///
/// Use [`Rewriter::builder()`] to construct a customized instance.
#[derive(Debug)]
pub struct Rewriter {
    trigger: String,
    policy: NamingPolicy,
    result_marker: Attribute,
}

impl Default for Rewriter {
    fn default() -> Self {
        Self {
            trigger: DEFAULT_TRIGGER.to_string(),
            policy: NamingPolicy::default(),
            result_marker: default_marker(),
        }
    }
}

impl Rewriter {
    /// Creates a new builder for configuring a rewriter.
    #[must_use]
    pub fn builder() -> RewriterBuilder {
        RewriterBuilder::new()
    }

    /// Returns the trigger attribute name.
    #[must_use]
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Returns the naming policy.
    #[must_use]
    pub fn policy(&self) -> &NamingPolicy {
        &self.policy
    }

    /// Returns the discardable-result marker.
    #[must_use]
    pub fn result_marker(&self) -> &Attribute {
        &self.result_marker
    }

    /// Runs the rewrite pipeline on a parsed declaration.
    ///
    /// Returns `None` when the declaration is ineligible; the caller emits
    /// the original unchanged. Otherwise returns the synthesized
    /// declaration, renamed under the suffixed policy.
    #[must_use]
    pub fn rewrite(&self, decl: &FnDecl) -> Option<FnDecl> {
        if !eligibility::is_eligible(decl, &self.policy) {
            debug!(name = %decl.name(), "declaration ineligible, skipping");
            return None;
        }

        let body = body::with_return_receiver(decl.block());
        let sig = signature::with_self_return(decl.sig());
        Some(assemble::assemble(
            decl,
            body,
            sig,
            &self.trigger,
            &self.result_marker,
            &self.policy,
        ))
    }

    /// Host-facing entry point: token stream in, token stream out.
    ///
    /// - Suffixed policy: the original item followed by the synthesized
    ///   sibling.
    /// - In-place policy: the transformed declaration alone, replacing the
    ///   original.
    /// - Ineligible declarations and well-formed items of unsupported kinds:
    ///   the original tokens, unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::Malformed`] when the tokens parse as no item
    /// at all.
    pub fn expand(&self, item: TokenStream) -> Result<TokenStream, RewriteError> {
        let decl = match FnDecl::parse(item.clone()) {
            Ok(Some(decl)) => decl,
            Ok(None) => {
                debug!("unsupported item kind, passing through");
                return Ok(item);
            }
            Err(e) => return Err(RewriteError::Malformed(e)),
        };

        match self.rewrite(&decl) {
            None => Ok(item),
            Some(generated) => {
                if self.policy == NamingPolicy::InPlace {
                    Ok(generated.to_token_stream())
                } else {
                    let mut out = item;
                    out.extend(generated.to_token_stream());
                    Ok(out)
                }
            }
        }
    }
}
