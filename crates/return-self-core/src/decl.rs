//! The declaration sum type consumed by the rewriter.

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{Attribute, Block, Ident, ImplItemFn, Item, ItemFn, Signature, TraitItemFn};

/// A function-like declaration the rewriter can transform.
///
/// This is a closed sum over the `syn` node kinds the engine accepts.
/// Bodiless declarations (trait requirements, foreign functions) never
/// construct a `FnDecl`; [`FnDecl::parse`] classifies them as unsupported
/// so the caller can pass them through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum FnDecl {
    /// A free function with a body (`syn::ItemFn`).
    Free(ItemFn),
    /// A function inside an `impl` block (`syn::ImplItemFn`).
    Method(ImplItemFn),
}

impl FnDecl {
    /// Parses a token stream into a declaration.
    ///
    /// Returns `Ok(None)` when the tokens form a well-formed item of an
    /// unsupported kind (a struct, a bodiless trait requirement, ...);
    /// the caller is expected to emit the original tokens unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error when the tokens do not parse as any item at all,
    /// which indicates a host contract violation rather than a legitimate
    /// input shape.
    pub fn parse(tokens: TokenStream) -> syn::Result<Option<Self>> {
        if let Ok(item_fn) = syn::parse2::<ItemFn>(tokens.clone()) {
            return Ok(Some(Self::Free(item_fn)));
        }
        if let Ok(method) = syn::parse2::<ImplItemFn>(tokens.clone()) {
            return Ok(Some(Self::Method(method)));
        }
        // Trait requirements parse here even without a body.
        if syn::parse2::<TraitItemFn>(tokens.clone()).is_ok() {
            return Ok(None);
        }
        match syn::parse2::<Item>(tokens) {
            Ok(_) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Returns the declaration's attribute list.
    #[must_use]
    pub fn attrs(&self) -> &[Attribute] {
        match self {
            Self::Free(f) => &f.attrs,
            Self::Method(m) => &m.attrs,
        }
    }

    /// Returns the declaration's signature.
    #[must_use]
    pub fn sig(&self) -> &Signature {
        match self {
            Self::Free(f) => &f.sig,
            Self::Method(m) => &m.sig,
        }
    }

    /// Returns the declaration's body.
    #[must_use]
    pub fn block(&self) -> &Block {
        match self {
            Self::Free(f) => &f.block,
            Self::Method(m) => &m.block,
        }
    }

    /// Returns the declaration's name.
    #[must_use]
    pub fn name(&self) -> &Ident {
        &self.sig().ident
    }
}

impl ToTokens for FnDecl {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Self::Free(f) => f.to_tokens(tokens),
            Self::Method(m) => m.to_tokens(tokens),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn parses_free_function() {
        let decl = FnDecl::parse(quote! { fn compute() { let _ = 1; } })
            .expect("should parse")
            .expect("should be a function");
        assert!(matches!(decl, FnDecl::Free(_)));
        assert_eq!(decl.name(), "compute");
    }

    #[test]
    fn parses_method_with_receiver() {
        let decl = FnDecl::parse(quote! { fn tick(mut self) { self.count += 1; } })
            .expect("should parse")
            .expect("should be a function");
        assert_eq!(decl.name(), "tick");
        assert_eq!(decl.block().stmts.len(), 1);
    }

    #[test]
    fn parses_default_method_as_impl_item() {
        let decl = FnDecl::parse(quote! { default fn tick(mut self) {} })
            .expect("should parse")
            .expect("should be a function");
        assert!(matches!(decl, FnDecl::Method(_)));
    }

    #[test]
    fn classifies_struct_as_unsupported() {
        let parsed = FnDecl::parse(quote! { struct Counter { value: i32 } }).expect("should parse");
        assert!(parsed.is_none());
    }

    #[test]
    fn classifies_bodiless_fn_as_unsupported() {
        let parsed = FnDecl::parse(quote! { fn requirement(&self); }).expect("should parse");
        assert!(parsed.is_none());
    }

    #[test]
    fn rejects_token_soup() {
        assert!(FnDecl::parse(quote! { 1 + 2 }).is_err());
    }
}
