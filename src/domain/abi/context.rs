//! Per-transaction parse state

use alloy_primitives::U256;

use super::{CallShape, FieldSlot, TronAddress};
use crate::store::TokenMetadata;

/// State threaded through every decode step of one transaction.
///
/// Created once the selector is classified, mutated only by
/// [`ParseContext::accept_chunk`], then read by the renderer.
#[derive(Debug, Clone)]
pub struct ParseContext {
    pub(super) shape: CallShape,
    pub(super) next_slot: FieldSlot,
    /// Absolute offset of the `path` array data, read from its head word
    pub(super) path_offset: usize,
    /// Absolute offset the stream must reach before decoding resumes
    pub(super) pending_jump: Option<usize>,
    pub(super) last_offset: Option<usize>,
    pub(super) to_address: TronAddress,
    /// Transfer amount, or the swap's input amount
    pub(super) amount_in: U256,
    pub(super) amount_out: U256,
    pub(super) token_received: TronAddress,
    pub(super) token: Option<TokenMetadata>,
}

impl ParseContext {
    pub fn new(shape: CallShape) -> Self {
        Self {
            shape,
            next_slot: shape.first_slot(),
            path_offset: 0,
            pending_jump: None,
            last_offset: None,
            to_address: TronAddress::default(),
            amount_in: U256::ZERO,
            amount_out: U256::ZERO,
            token_received: TronAddress::default(),
            token: None,
        }
    }

    /// Reset every buffer and start over at the first slot of `shape`
    pub fn initialize(&mut self, shape: CallShape) {
        *self = Self::new(shape);
    }

    pub fn shape(&self) -> CallShape {
        self.shape
    }

    pub fn next_slot(&self) -> FieldSlot {
        self.next_slot
    }

    /// True once every field of the shape has been decoded
    pub fn is_complete(&self) -> bool {
        self.next_slot == FieldSlot::Done
    }

    pub fn pending_jump(&self) -> Option<usize> {
        self.pending_jump
    }

    pub fn to_address(&self) -> &TronAddress {
        &self.to_address
    }

    pub fn amount_in(&self) -> U256 {
        self.amount_in
    }

    pub fn amount_out(&self) -> U256 {
        self.amount_out
    }

    pub fn token_received(&self) -> &TronAddress {
        &self.token_received
    }

    pub fn token(&self) -> Option<&TokenMetadata> {
        self.token.as_ref()
    }

    /// Store the token lookup outcome for the renderer
    pub fn set_token(&mut self, token: TokenMetadata) {
        self.token = Some(token);
    }
}
