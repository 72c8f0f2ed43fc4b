//! Address and amount formatters used by the screen renderer

use alloy_primitives::U256;

use crate::core::PluginError;
use crate::domain::abi::{TronAddress, ADDRESS_LENGTH};

/// Base58Check text of a prefixed address.
///
/// Fails when the reserved prefix byte has not been stamped yet.
pub fn address_to_base58(address: &TronAddress) -> Result<String, PluginError> {
    if address.prefix() == 0 {
        return Err(PluginError::FormattingFailure(
            "address prefix byte not set".to_string(),
        ));
    }
    Ok(bs58::encode(address.as_bytes()).with_check().into_string())
}

/// Parse a Base58Check (`T...`), `41`-prefixed hex, or `0x` hex address
pub fn parse_address(input: &str) -> Option<TronAddress> {
    let trimmed = input.trim();
    if let Some(payload) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        let bytes = hex::decode(payload).ok()?;
        let raw: [u8; 20] = bytes.try_into().ok()?;
        return Some(TronAddress::from(alloy_primitives::Address::from(raw)));
    }

    let bytes = if trimmed.len() == ADDRESS_LENGTH * 2 {
        hex::decode(trimmed).ok()?
    } else {
        bs58::decode(trimmed).with_check(None).into_vec().ok()?
    };
    let prefixed: [u8; ADDRESS_LENGTH] = bytes.try_into().ok()?;
    Some(TronAddress::from_prefixed(prefixed))
}

/// Exact decimal text of `amount / 10^decimals` followed by `ticker`.
///
/// The fractional part always carries `decimals` digits; no rounding takes
/// place. Fails when the text would exceed `max_len` characters.
pub fn amount_to_string(
    amount: U256,
    decimals: u8,
    ticker: &str,
    max_len: usize,
) -> Result<String, PluginError> {
    let digits = amount.to_string();
    let decimals = usize::from(decimals);

    let value = if decimals == 0 {
        digits
    } else {
        let padded = format!("{:0>width$}", digits, width = decimals + 1);
        let (whole, frac) = padded.split_at(padded.len() - decimals);
        format!("{}.{}", whole, frac)
    };

    let text = if ticker.is_empty() {
        value
    } else {
        format!("{} {}", value, ticker)
    };

    if text.len() > max_len {
        return Err(PluginError::FormattingFailure(format!(
            "amount needs {} characters, budget is {}",
            text.len(),
            max_len
        )));
    }
    Ok(text)
}
