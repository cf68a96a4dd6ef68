//! Eligibility filter: decides whether a declaration is transformed.

use syn::ReturnType;

use crate::decl::FnDecl;
use crate::policy::NamingPolicy;

/// Checks whether a declaration qualifies for the rewrite.
///
/// A declaration is ineligible when it already has an explicit return type
/// (non-void declarations are never touched, regardless of policy), or when
/// the suffixed policy would derive a name the declaration already has --
/// i.e. its name already ends with the suffix, which marks it as a previous
/// generation of this rewrite.
#[must_use]
pub fn is_eligible(decl: &FnDecl, policy: &NamingPolicy) -> bool {
    if matches!(decl.sig().output, ReturnType::Type(..)) {
        return false;
    }

    if let NamingPolicy::Suffixed { suffix } = policy {
        if decl.name().to_string().ends_with(suffix.as_str()) {
            return false;
        }
    }

    true
}
