//! Error taxonomy shared by the decoder, finalizer and renderer

use thiserror::Error;

use crate::domain::abi::{CallShape, FieldSlot};

/// Every failure the plugin core can report to the host.
///
/// None of these are fatal: each one collapses into [`PluginResult::Error`]
/// at the host boundary and the device shows a failure screen instead.
///
/// [`PluginResult::Error`]: super::PluginResult::Error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluginError {
    /// The selector does not belong to any known call shape
    #[error("selector 0x{} not supported", hex::encode(.0))]
    UnsupportedSelector([u8; 4]),

    /// An operation ran before a selector was classified
    #[error("plugin not initialized")]
    NotInitialized,

    /// Streaming ended before every field of the shape was decoded
    #[error("parameters incomplete, still expecting {slot:?}")]
    IncompleteParameters { slot: FieldSlot },

    /// A chunk arrived for a slot the active shape cannot place
    #[error("parameter not supported for {shape:?} at slot {slot:?} (offset {offset})")]
    UnsupportedParameterSlot {
        shape: CallShape,
        slot: FieldSlot,
        offset: usize,
    },

    /// The stream rewound or repeated an offset
    #[error("chunk at offset {offset} does not follow offset {previous}")]
    OutOfOrderChunk { previous: usize, offset: usize },

    /// The stream moved past a pending jump target without landing on it
    #[error("jump target {target} skipped, stream already at offset {offset}")]
    JumpTargetMissed { target: usize, offset: usize },

    /// Screen queried outside `[0, screen_count)` or before finalize
    #[error("invalid screen index {index} (screen count {count})")]
    InvalidScreenIndex { index: u8, count: u8 },

    /// A formatter could not produce output within the display budget
    #[error("formatting failed: {0}")]
    FormattingFailure(String),

    /// Call data that cannot be split into a selector and whole chunks
    #[error("malformed call data: {0}")]
    MalformedCallData(String),
}
