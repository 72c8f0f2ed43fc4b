//! Chunk decoder: advances a [`ParseContext`] by one field per chunk

use alloy_primitives::U256;
use tracing::{debug, trace, warn};

use super::{
    CallShape, FieldSlot, ParseContext, TronAddress, PARAMETER_LENGTH, SELECTOR_SIZE,
};
use crate::core::PluginError;

impl ParseContext {
    /// Consume one 32-byte chunk found at absolute `offset` of the call data.
    ///
    /// Offsets must strictly increase. While a jump is pending every chunk
    /// before the target is ignored; the chunk at the target is decoded as
    /// the current slot.
    pub fn accept_chunk(
        &mut self,
        offset: usize,
        chunk: &[u8; PARAMETER_LENGTH],
    ) -> Result<(), PluginError> {
        debug!(offset, bytes = %hex::encode(chunk), "provide parameter");

        if let Some(previous) = self.last_offset {
            if offset <= previous {
                return Err(PluginError::OutOfOrderChunk { previous, offset });
            }
        }
        self.last_offset = Some(offset);

        if let Some(target) = self.pending_jump {
            if offset < target {
                trace!(offset, target, "skipping chunk until jump target");
                return Ok(());
            }
            // The stream never rewinds, so a passed target can no longer be
            // reached: report it instead of waiting on the remaining chunks.
            if offset > target {
                warn!(offset, target, "stream moved past jump target");
                return Err(PluginError::JumpTargetMissed { target, offset });
            }
            self.pending_jump = None;
        }

        let slot = self.next_slot;
        if !self.shape.has_slot(slot) {
            return Err(self.unsupported(slot, offset));
        }

        match slot {
            FieldSlot::ToAddress => {
                self.to_address = TronAddress::from_word(chunk);
                if self.shape == CallShape::IndirectedSwap {
                    self.arm_jump(self.path_offset, offset)?;
                }
            }
            FieldSlot::Amount | FieldSlot::AmountIn => {
                self.amount_in = U256::from_be_bytes(*chunk);
            }
            FieldSlot::AmountOutMin => {
                self.amount_out = U256::from_be_bytes(*chunk);
            }
            FieldSlot::PathOffset => {
                let relative = u16::from_be_bytes([
                    chunk[PARAMETER_LENGTH - 2],
                    chunk[PARAMETER_LENGTH - 1],
                ]);
                self.path_offset = usize::from(relative) + SELECTOR_SIZE;
            }
            FieldSlot::PathLength => {
                self.arm_jump(offset + PARAMETER_LENGTH, offset)?;
            }
            FieldSlot::TokenReceived => {
                self.token_received = TronAddress::from_word(chunk);
            }
            FieldSlot::Done => return Err(self.unsupported(slot, offset)),
        }

        self.next_slot = self.shape.next_slot(slot);
        Ok(())
    }

    fn unsupported(&self, slot: FieldSlot, offset: usize) -> PluginError {
        warn!(shape = ?self.shape, ?slot, offset, "param not supported");
        PluginError::UnsupportedParameterSlot {
            shape: self.shape,
            slot,
            offset,
        }
    }

    fn arm_jump(&mut self, target: usize, offset: usize) -> Result<(), PluginError> {
        if target <= offset {
            return Err(PluginError::JumpTargetMissed { target, offset });
        }
        self.pending_jump = Some(target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;

    fn uint_word(value: u64) -> [u8; 32] {
        U256::from(value).to_be_bytes()
    }

    fn address_word(byte: u8) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[12..].fill(byte);
        word
    }

    /// Feed `words` at consecutive offsets starting right after the selector
    fn feed(ctx: &mut ParseContext, words: &[[u8; 32]]) -> Vec<Result<(), PluginError>> {
        words
            .iter()
            .enumerate()
            .map(|(i, word)| ctx.accept_chunk(SELECTOR_SIZE + i * PARAMETER_LENGTH, word))
            .collect()
    }

    fn swap_words(path_offset: u64) -> Vec<[u8; 32]> {
        vec![
            uint_word(500),
            uint_word(490),
            uint_word(path_offset),
            address_word(0xaa),
            uint_word(1_703_462_400),
        ]
    }

    #[test]
    fn test_transfer_decodes_two_fields() {
        let mut ctx = ParseContext::new(CallShape::SimpleTransfer);
        let results = feed(&mut ctx, &[address_word(0x57), uint_word(1_000_000)]);

        assert!(results.iter().all(|r| r.is_ok()));
        assert!(ctx.is_complete());
        assert_eq!(ctx.to_address().raw(), Address::from([0x57; 20]));
        assert_eq!(ctx.amount_in(), U256::from(1_000_000));
    }

    #[test]
    fn test_chunk_after_done_is_rejected() {
        let mut ctx = ParseContext::new(CallShape::SimpleTransfer);
        let results = feed(
            &mut ctx,
            &[address_word(0x57), uint_word(10), uint_word(99)],
        );

        assert!(matches!(
            results[2],
            Err(PluginError::UnsupportedParameterSlot {
                slot: FieldSlot::Done,
                offset: 68,
                ..
            })
        ));
        // buffers untouched by the rejected chunk
        assert_eq!(ctx.amount_in(), U256::from(10));
    }

    #[test]
    fn test_swap_follows_path_offset() {
        let mut ctx = ParseContext::new(CallShape::IndirectedSwap);
        let mut words = swap_words(0xa0);
        words.push(uint_word(2));
        words.push(address_word(0xc0));
        words.push(address_word(0x6b));

        let results = feed(&mut ctx, &words);

        assert!(results[..7].iter().all(|r| r.is_ok()));
        assert!(ctx.is_complete());
        assert_eq!(ctx.amount_in(), U256::from(500));
        assert_eq!(ctx.amount_out(), U256::from(490));
        assert_eq!(ctx.to_address().raw(), Address::from([0xaa; 20]));
        assert_eq!(ctx.token_received().raw(), Address::from([0xc0; 20]));
        assert!(results[7].is_err());
    }

    #[test]
    fn test_pending_jump_ignores_chunks_until_target() {
        let mut ctx = ParseContext::new(CallShape::IndirectedSwap);
        // path data pushed three words further than usual
        let mut words = swap_words(0x100);
        words.push(address_word(0x01));
        words.push(address_word(0x02));
        words.push(address_word(0x03));

        for result in feed(&mut ctx, &words) {
            assert!(result.is_ok());
        }
        assert_eq!(ctx.pending_jump(), Some(0x104));
        assert_eq!(ctx.next_slot(), FieldSlot::PathLength);
        assert_eq!(ctx.token_received(), &TronAddress::default());

        ctx.accept_chunk(0x104, &uint_word(2)).unwrap();
        assert_eq!(ctx.pending_jump(), Some(0x124));
        ctx.accept_chunk(0x124, &address_word(0x44)).unwrap();

        assert!(ctx.is_complete());
        assert_eq!(ctx.token_received().raw(), Address::from([0x44; 20]));
    }

    #[test]
    fn test_jump_target_right_after_to_address() {
        let mut ctx = ParseContext::new(CallShape::IndirectedSwap);
        // target 132 is the chunk directly after `to`
        let words = vec![
            uint_word(1),
            uint_word(2),
            uint_word(0x80),
            address_word(0xaa),
            uint_word(1),
            address_word(0xbb),
        ];
        for result in feed(&mut ctx, &words) {
            assert!(result.is_ok());
        }
        assert!(ctx.is_complete());
        assert_eq!(ctx.token_received().raw(), Address::from([0xbb; 20]));
    }

    #[test]
    fn test_out_of_order_chunk_rejected() {
        let mut ctx = ParseContext::new(CallShape::SimpleTransfer);
        ctx.accept_chunk(36, &address_word(0x57)).unwrap();
        assert_eq!(
            ctx.accept_chunk(36, &uint_word(1)),
            Err(PluginError::OutOfOrderChunk {
                previous: 36,
                offset: 36
            })
        );
        assert_eq!(ctx.next_slot(), FieldSlot::Amount);
    }

    #[test]
    fn test_unaligned_jump_target_is_missed() {
        let mut ctx = ParseContext::new(CallShape::IndirectedSwap);
        let mut words = swap_words(0xa1);
        words.push(uint_word(2));
        words.push(address_word(0xc0));
        let results = feed(&mut ctx, &words);

        assert!(results[..6].iter().all(|r| r.is_ok()));
        assert_eq!(
            results[6],
            Err(PluginError::JumpTargetMissed {
                target: 0xa5,
                offset: 196
            })
        );
    }

    #[test]
    fn test_backward_path_offset_rejected() {
        let mut ctx = ParseContext::new(CallShape::IndirectedSwap);
        let results = feed(&mut ctx, &swap_words(0x20));
        assert_eq!(
            results[3],
            Err(PluginError::JumpTargetMissed {
                target: 0x24,
                offset: 100
            })
        );
    }
}
