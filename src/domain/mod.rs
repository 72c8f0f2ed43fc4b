//! Domain layer - call decoding and screen rendering, free of host concerns

pub mod abi;
pub mod screen;
