//! Body synthesizer: appends the return-the-receiver statement.

use syn::{parse_quote, Block};

/// Builds the transformed body: the original statements, in order and
/// unmodified, followed by exactly one `return self;`.
///
/// An empty original block is valid and yields a body containing only the
/// return statement.
#[must_use]
pub fn with_return_receiver(block: &Block) -> Block {
    let mut block = block.clone();
    block.stmts.push(parse_quote!(return self;));
    block
}
