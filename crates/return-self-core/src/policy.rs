//! Naming policy configuration.

use proc_macro2::TokenStream;
use syn::{Expr, Lit, Meta};

/// Suffix appended to generated sibling names by default.
pub const DEFAULT_SUFFIX: &str = "_and_return_self";

/// How the generated declaration is named relative to the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingPolicy {
    /// Keep the original name; the transformed declaration replaces the
    /// original instead of being emitted alongside it.
    InPlace,
    /// Emit a sibling named `<original><suffix>`, leaving the original
    /// declaration in place. Declarations whose name already ends with the
    /// suffix are skipped, so re-running the rewrite on its own output is a
    /// no-op.
    Suffixed {
        /// The suffix appended to the original name.
        suffix: String,
    },
}

impl Default for NamingPolicy {
    fn default() -> Self {
        Self::suffixed()
    }
}

impl NamingPolicy {
    /// Creates the suffixed policy with the default suffix.
    #[must_use]
    pub fn suffixed() -> Self {
        Self::Suffixed {
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }

    /// Creates the suffixed policy with a custom suffix.
    #[must_use]
    pub fn suffixed_with(suffix: impl Into<String>) -> Self {
        Self::Suffixed {
            suffix: suffix.into(),
        }
    }

    /// Creates the in-place policy.
    #[must_use]
    pub fn in_place() -> Self {
        Self::InPlace
    }

    /// Parses a policy from an attribute's argument tokens.
    ///
    /// Accepted shapes:
    /// - empty tokens: the default suffixed policy
    /// - `in_place`: the in-place policy
    /// - `suffix = "..."`: the suffixed policy with a custom suffix
    ///
    /// # Errors
    ///
    /// Returns a spanned error for any other argument shape, and for a
    /// suffix that cannot extend an identifier: an empty one (which would
    /// make every declaration look already-suffixed and disable the rewrite
    /// entirely) or one containing non-identifier characters.
    pub fn from_attr_args(tokens: TokenStream) -> syn::Result<Self> {
        if tokens.is_empty() {
            return Ok(Self::default());
        }

        let meta: Meta = syn::parse2(tokens)?;
        match &meta {
            Meta::Path(path) if path.is_ident("in_place") => Ok(Self::InPlace),
            Meta::NameValue(nv) if nv.path.is_ident("suffix") => {
                if let Expr::Lit(lit) = &nv.value {
                    if let Lit::Str(s) = &lit.lit {
                        let suffix = s.value();
                        if let Some(message) = invalid_suffix_message(&suffix) {
                            return Err(syn::Error::new_spanned(s, message));
                        }
                        return Ok(Self::Suffixed { suffix });
                    }
                }
                Err(syn::Error::new_spanned(
                    &nv.value,
                    "suffix must be a string literal",
                ))
            }
            _ => Err(syn::Error::new_spanned(
                &meta,
                "expected `in_place` or `suffix = \"...\"`, or no arguments",
            )),
        }
    }
}

/// Checks that a suffix can extend an identifier.
///
/// The generated name is `<original><suffix>`, so the suffix must be
/// non-empty (an empty one would mark every declaration as already
/// generated and disable the rewrite entirely) and every character must be
/// legal inside an identifier. Returns the rejection message, if any.
pub(crate) fn invalid_suffix_message(suffix: &str) -> Option<&'static str> {
    if suffix.is_empty() {
        return Some("suffix must not be empty");
    }
    if !suffix.chars().all(|c| c == '_' || c.is_alphanumeric()) {
        return Some("suffix must contain only alphanumerics and `_`");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn empty_args_yield_default_suffixed_policy() {
        let policy = NamingPolicy::from_attr_args(TokenStream::new()).expect("should parse");
        assert_eq!(policy, NamingPolicy::suffixed_with(DEFAULT_SUFFIX));
    }

    #[test]
    fn in_place_arg_yields_in_place_policy() {
        let policy = NamingPolicy::from_attr_args(quote! { in_place }).expect("should parse");
        assert_eq!(policy, NamingPolicy::InPlace);
    }

    #[test]
    fn suffix_arg_yields_custom_suffix() {
        let policy =
            NamingPolicy::from_attr_args(quote! { suffix = "_chained" }).expect("should parse");
        assert_eq!(policy, NamingPolicy::suffixed_with("_chained"));
    }

    #[test]
    fn empty_suffix_is_rejected() {
        let err = NamingPolicy::from_attr_args(quote! { suffix = "" })
            .expect_err("empty suffix should be rejected");
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn non_identifier_suffix_is_rejected() {
        let err = NamingPolicy::from_attr_args(quote! { suffix = "-chained" })
            .expect_err("non-identifier suffix should be rejected");
        assert!(err.to_string().contains("alphanumerics"));
    }

    #[test]
    fn non_string_suffix_is_rejected() {
        assert!(NamingPolicy::from_attr_args(quote! { suffix = 3 }).is_err());
    }

    #[test]
    fn unknown_arg_is_rejected() {
        let err = NamingPolicy::from_attr_args(quote! { rename }).expect_err("should be rejected");
        assert!(err.to_string().contains("expected `in_place`"));
    }
}
