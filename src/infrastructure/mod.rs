//! Infrastructure layer - host-supplied primitives
//!
//! This layer contains the address and amount formatters the renderer
//! calls to build display text.

pub mod format;
