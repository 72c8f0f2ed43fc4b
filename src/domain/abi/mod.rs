//! Streaming decoder for contract call parameters
//!
//! Call data arrives as 32-byte words in emission order. A [`ParseContext`]
//! tracks which field of the active [`CallShape`] comes next and, for fields
//! reached through an offset pointer, the absolute position the stream must
//! reach before decoding resumes.

mod address;
mod context;
mod decoder;
mod shape;
mod stream;

pub use address::{TronAddress, ADDRESS_LENGTH};
pub use context::ParseContext;
pub use shape::{
    swapExactTokensForTokensCall, transferCall, CallShape, FieldSlot, PARAMETER_LENGTH,
    SELECTOR_SIZE,
};
pub use stream::CallData;
