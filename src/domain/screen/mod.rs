//! Screen finalizer and renderer
//!
//! Turns a completed [`ParseContext`] into ordered (title, value) pairs for
//! the device's paged display.

mod render;

pub use render::{finalize, render, DisplayPair};
