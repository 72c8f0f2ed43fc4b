//! Call shapes and their field sequences

use alloy_sol_types::{sol, SolCall};

use crate::core::PluginError;

sol! {
    function transfer(address to, uint256 amount);
    function swapExactTokensForTokens(
        uint256 amountIn,
        uint256 amountOutMin,
        address[] path,
        address to,
        uint256 deadline
    );
}

/// Size of the function selector that precedes the first parameter chunk
pub const SELECTOR_SIZE: usize = 4;

/// Width of one ABI word
pub const PARAMETER_LENGTH: usize = 32;

/// Decoding plan for one contract function signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallShape {
    /// `transfer(address,uint256)`
    SimpleTransfer,
    /// `swapExactTokensForTokens(uint256,uint256,address[],address,uint256)`
    IndirectedSwap,
}

impl CallShape {
    pub const ALL: [CallShape; 2] = [CallShape::SimpleTransfer, CallShape::IndirectedSwap];

    /// Classify a 4-byte selector
    pub fn from_selector(selector: [u8; 4]) -> Result<Self, PluginError> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.selector() == selector)
            .ok_or(PluginError::UnsupportedSelector(selector))
    }

    pub fn selector(self) -> [u8; 4] {
        match self {
            CallShape::SimpleTransfer => transferCall::SELECTOR,
            CallShape::IndirectedSwap => swapExactTokensForTokensCall::SELECTOR,
        }
    }

    pub fn signature(self) -> &'static str {
        match self {
            CallShape::SimpleTransfer => transferCall::SIGNATURE,
            CallShape::IndirectedSwap => swapExactTokensForTokensCall::SIGNATURE,
        }
    }

    /// Short label shown on the contract identification screen
    pub fn label(self) -> &'static str {
        match self {
            CallShape::SimpleTransfer => "Transfer",
            CallShape::IndirectedSwap => "Swap",
        }
    }

    /// Slot expected for the first parameter chunk
    pub fn first_slot(self) -> FieldSlot {
        match self {
            CallShape::SimpleTransfer => FieldSlot::ToAddress,
            CallShape::IndirectedSwap => FieldSlot::AmountIn,
        }
    }

    /// Slot that follows `slot`; `Done` is terminal
    pub fn next_slot(self, slot: FieldSlot) -> FieldSlot {
        use FieldSlot::*;
        match (self, slot) {
            (CallShape::SimpleTransfer, ToAddress) => Amount,
            (CallShape::IndirectedSwap, AmountIn) => AmountOutMin,
            (CallShape::IndirectedSwap, AmountOutMin) => PathOffset,
            (CallShape::IndirectedSwap, PathOffset) => ToAddress,
            (CallShape::IndirectedSwap, ToAddress) => PathLength,
            (CallShape::IndirectedSwap, PathLength) => TokenReceived,
            _ => Done,
        }
    }

    /// Whether the shape decodes `slot` at all
    pub fn has_slot(self, slot: FieldSlot) -> bool {
        use FieldSlot::*;
        match self {
            CallShape::SimpleTransfer => matches!(slot, ToAddress | Amount),
            CallShape::IndirectedSwap => matches!(
                slot,
                AmountIn | AmountOutMin | PathOffset | ToAddress | PathLength | TokenReceived
            ),
        }
    }

    /// Number of screens the shape renders
    pub fn screen_count(self) -> u8 {
        match self {
            CallShape::SimpleTransfer => 2,
            CallShape::IndirectedSwap => 4,
        }
    }
}

/// Next field expected by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSlot {
    ToAddress,
    Amount,
    AmountIn,
    AmountOutMin,
    /// Head word holding the relative offset of the `path` array
    PathOffset,
    /// Length word at the start of the `path` array data
    PathLength,
    /// First element of `path`
    TokenReceived,
    Done,
}
