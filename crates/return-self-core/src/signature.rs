//! Signature synthesizer: sets the return type to `Self`.

use syn::{parse_quote, Signature};

/// Builds the transformed signature: identical to the input except the
/// return-type slot is set to `Self`.
///
/// `Self` rather than the concrete type is deliberate: implementors picking
/// the declaration up through a trait default, or code moved between impls,
/// keep returning their own type. Parameters, generics and effect markers
/// (`async`, `unsafe`, `const`, ABI) pass through untouched.
#[must_use]
pub fn with_self_return(sig: &Signature) -> Signature {
    let mut sig = sig.clone();
    sig.output = parse_quote!(-> Self);
    sig
}
