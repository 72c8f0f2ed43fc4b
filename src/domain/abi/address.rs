//! Prefixed 21-byte address buffer

use alloy_primitives::Address;

use super::PARAMETER_LENGTH;

/// Length of a prefixed address buffer
pub const ADDRESS_LENGTH: usize = 21;

/// A 20-byte contract-argument address stored behind a reserved prefix byte.
///
/// The prefix stays zero while decoding; the renderer stamps the network's
/// prefix in before handing the buffer to the address formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TronAddress([u8; ADDRESS_LENGTH]);

impl TronAddress {
    /// Take the last 20 bytes of an ABI word
    pub fn from_word(word: &[u8; PARAMETER_LENGTH]) -> Self {
        let mut buf = [0u8; ADDRESS_LENGTH];
        buf[1..].copy_from_slice(&word[PARAMETER_LENGTH - 20..]);
        Self(buf)
    }

    pub fn from_prefixed(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Copy of this address with `prefix` written in the reserved byte
    pub fn with_prefix(mut self, prefix: u8) -> Self {
        self.0[0] = prefix;
        self
    }

    pub fn prefix(&self) -> u8 {
        self.0[0]
    }

    /// The 20 raw address bytes
    pub fn raw(&self) -> Address {
        Address::from_slice(&self.0[1..])
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }
}

impl From<Address> for TronAddress {
    fn from(address: Address) -> Self {
        let mut buf = [0u8; ADDRESS_LENGTH];
        buf[1..].copy_from_slice(address.as_slice());
        Self(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_word_takes_trailing_bytes() {
        let mut word = [0xffu8; 32];
        word[12..].copy_from_slice(&[0x11; 20]);
        let address = TronAddress::from_word(&word);
        assert_eq!(address.prefix(), 0);
        assert_eq!(address.raw(), Address::from([0x11; 20]));
    }

    #[test]
    fn test_with_prefix_keeps_payload() {
        let address = TronAddress::from(Address::from([0x22; 20])).with_prefix(0x41);
        assert_eq!(address.as_bytes()[0], 0x41);
        assert_eq!(address.raw(), Address::from([0x22; 20]));
    }
}
