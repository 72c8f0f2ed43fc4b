//! Splits buffered call data into the chunk stream the decoder expects

use super::{PARAMETER_LENGTH, SELECTOR_SIZE};
use crate::core::PluginError;

/// Call data split into its selector and 32-byte parameter words
#[derive(Debug, Clone, Copy)]
pub struct CallData<'a> {
    selector: [u8; SELECTOR_SIZE],
    params: &'a [u8],
}

impl<'a> CallData<'a> {
    pub fn parse(data: &'a [u8]) -> Result<Self, PluginError> {
        if data.len() < SELECTOR_SIZE {
            return Err(PluginError::MalformedCallData(format!(
                "need at least {} bytes for the selector, got {}",
                SELECTOR_SIZE,
                data.len()
            )));
        }
        let (selector, params) = data.split_at(SELECTOR_SIZE);
        if params.len() % PARAMETER_LENGTH != 0 {
            return Err(PluginError::MalformedCallData(format!(
                "{} parameter bytes is not a whole number of words",
                params.len()
            )));
        }

        let mut sel = [0u8; SELECTOR_SIZE];
        sel.copy_from_slice(selector);
        Ok(Self {
            selector: sel,
            params,
        })
    }

    /// Parse a `0x`-prefixed (or bare) hex string's bytes
    pub fn decode_hex(input: &str) -> Result<Vec<u8>, PluginError> {
        let trimmed = input.trim();
        let payload = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        hex::decode(payload)
            .map_err(|e| PluginError::MalformedCallData(format!("invalid hex: {}", e)))
    }

    pub fn selector(&self) -> [u8; SELECTOR_SIZE] {
        self.selector
    }

    pub fn chunk_count(&self) -> usize {
        self.params.len() / PARAMETER_LENGTH
    }

    /// `(absolute offset, word)` pairs in emission order
    pub fn chunks(&self) -> impl Iterator<Item = (usize, [u8; PARAMETER_LENGTH])> + 'a {
        self.params
            .chunks_exact(PARAMETER_LENGTH)
            .enumerate()
            .map(|(index, chunk)| {
                let mut word = [0u8; PARAMETER_LENGTH];
                word.copy_from_slice(chunk);
                (SELECTOR_SIZE + index * PARAMETER_LENGTH, word)
            })
    }
}
