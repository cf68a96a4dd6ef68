//! Declaration assembler: attributes, naming, and final composition.

use quote::format_ident;
use syn::{Attribute, Block, ImplItemFn, ItemFn, Signature};

use crate::decl::FnDecl;
use crate::policy::NamingPolicy;

/// Combines the synthesized body and signature with the filtered attribute
/// list and the resolved name into the final declaration.
///
/// Every other field of the original (visibility, defaultness, parameters,
/// generics, doc attributes) is copied unchanged.
#[must_use]
pub fn assemble(
    decl: &FnDecl,
    body: Block,
    mut sig: Signature,
    trigger: &str,
    marker: &Attribute,
    policy: &NamingPolicy,
) -> FnDecl {
    let attrs = transformed_attrs(decl.attrs(), trigger, marker);

    if let NamingPolicy::Suffixed { suffix } = policy {
        sig.ident = format_ident!("{}{}", sig.ident, suffix, span = sig.ident.span());
    }

    match decl {
        FnDecl::Free(f) => FnDecl::Free(ItemFn {
            attrs,
            vis: f.vis.clone(),
            sig,
            block: Box::new(body),
        }),
        FnDecl::Method(m) => FnDecl::Method(ImplItemFn {
            attrs,
            vis: m.vis.clone(),
            defaultness: m.defaultness,
            sig,
            block: body,
        }),
    }
}

/// Builds the output attribute list: every attribute whose simple name
/// equals the trigger is dropped (so the host never re-expands the output),
/// any pre-existing copy of the marker is dropped, and the marker is
/// appended as the last element. Surviving attributes keep their relative
/// order.
fn transformed_attrs(attrs: &[Attribute], trigger: &str, marker: &Attribute) -> Vec<Attribute> {
    let mut out: Vec<Attribute> = attrs
        .iter()
        .filter(|attr| !has_simple_name(attr, trigger) && *attr != marker)
        .cloned()
        .collect();
    out.push(marker.clone());
    out
}

/// Matches an attribute by the identifier of its last path segment.
///
/// Name-based rather than identity-based: multiple independent attribute
/// instances can carry the same name, and all of them must be filtered.
fn has_simple_name(attr: &Attribute, name: &str) -> bool {
    attr.path()
        .segments
        .last()
        .is_some_and(|segment| segment.ident == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use syn::parse_quote;

    fn marker() -> Attribute {
        parse_quote!(#[allow(clippy::must_use_candidate)])
    }

    fn assemble_method(decl: ImplItemFn, policy: &NamingPolicy) -> FnDecl {
        let decl = FnDecl::Method(decl);
        let body = crate::body::with_return_receiver(decl.block());
        let sig = crate::signature::with_self_return(decl.sig());
        assemble(&decl, body, sig, "return_self", &marker(), policy)
    }

    #[test]
    fn suffixed_policy_renames_the_output() {
        let out = assemble_method(
            parse_quote! {
                #[return_self]
                fn increment(mut self) { self.value += 1; }
            },
            &NamingPolicy::suffixed(),
        );
        let expected: ImplItemFn = parse_quote! {
            #[allow(clippy::must_use_candidate)]
            fn increment_and_return_self(mut self) -> Self {
                self.value += 1;
                return self;
            }
        };
        assert_eq!(out, FnDecl::Method(expected));
    }

    #[test]
    fn in_place_policy_keeps_the_name_and_modifiers() {
        let out = assemble_method(
            parse_quote! {
                pub fn update(mut self) { self.value += 1; }
            },
            &NamingPolicy::in_place(),
        );
        let expected: ImplItemFn = parse_quote! {
            #[allow(clippy::must_use_candidate)]
            pub fn update(mut self) -> Self {
                self.value += 1;
                return self;
            }
        };
        assert_eq!(out, FnDecl::Method(expected));
    }

    #[test]
    fn trigger_is_removed_and_unrelated_attributes_survive_in_order() {
        let out = assemble_method(
            parse_quote! {
                #[logged]
                #[return_self]
                #[inline]
                fn rename(mut self, name: &str) { self.name = name.to_string(); }
            },
            &NamingPolicy::suffixed(),
        );
        let expected: ImplItemFn = parse_quote! {
            #[logged]
            #[inline]
            #[allow(clippy::must_use_candidate)]
            fn rename_and_return_self(mut self, name: &str) -> Self {
                self.name = name.to_string();
                return self;
            }
        };
        assert_eq!(out, FnDecl::Method(expected));
    }

    #[test]
    fn every_trigger_instance_is_removed() {
        let out = assemble_method(
            parse_quote! {
                #[return_self]
                #[return_self]
                fn touch(mut self) {}
            },
            &NamingPolicy::suffixed(),
        );
        assert!(!out
            .attrs()
            .iter()
            .any(|attr| has_simple_name(attr, "return_self")));
    }

    #[test]
    fn marker_appears_exactly_once_even_when_already_present() {
        let out = assemble_method(
            parse_quote! {
                #[allow(clippy::must_use_candidate)]
                #[return_self]
                fn touch(mut self) {}
            },
            &NamingPolicy::suffixed(),
        );
        let marker = marker();
        assert_eq!(out.attrs().iter().filter(|a| **a == marker).count(), 1);
        assert_eq!(out.attrs().last(), Some(&marker));
    }

    #[test]
    fn trigger_matching_uses_the_simple_path_name() {
        let attr: Attribute = parse_quote!(#[fluent::return_self]);
        assert!(has_simple_name(&attr, "return_self"));
        assert!(!has_simple_name(&attr, "fluent"));
    }
}
