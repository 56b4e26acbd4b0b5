//! The matrix container and the helpers every multiplier shares.
//!
//! - `dense`: flat row-major storage plus elementwise add/subtract
//! - `random`: digit-valued random generation from an injected RNG

pub mod dense;
pub mod random;
