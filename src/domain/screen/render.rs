use serde::Serialize;
use tracing::debug;

use crate::core::{DisplayLimits, Network, PluginError};
use crate::domain::abi::{CallShape, ParseContext, TronAddress};
use crate::infrastructure::format::{address_to_base58, amount_to_string};

/// One screen's worth of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayPair {
    pub title: String,
    pub value: String,
}

/// Number of screens `shape` needs once streaming has ended
pub fn finalize(shape: CallShape) -> u8 {
    shape.screen_count()
}

/// Render screen `index` of the decoded call.
///
/// Pure with respect to `ctx`: the same context and index always give the
/// same pair. A context still waiting for fields renders nothing.
pub fn render(
    ctx: &ParseContext,
    network: &Network,
    limits: &DisplayLimits,
    index: u8,
) -> Result<DisplayPair, PluginError> {
    let count = finalize(ctx.shape());
    if !ctx.is_complete() {
        return Err(PluginError::IncompleteParameters {
            slot: ctx.next_slot(),
        });
    }
    let (title, value) = match (ctx.shape(), index) {
        (CallShape::SimpleTransfer, 0) => (
            "Transfer To",
            address_value(ctx.to_address(), network, limits)?,
        ),
        (CallShape::SimpleTransfer, 1) => (
            "Amount",
            amount_to_string(ctx.amount_in(), 0, &network.ticker, limits.value_max)?,
        ),
        (CallShape::IndirectedSwap, 0) => {
            let (decimals, ticker) = amount_policy(ctx, network);
            (
                "Amount In",
                amount_to_string(ctx.amount_in(), decimals, ticker, limits.value_max)?,
            )
        }
        (CallShape::IndirectedSwap, 1) => {
            let (decimals, ticker) = amount_policy(ctx, network);
            (
                "Amount Out",
                amount_to_string(ctx.amount_out(), decimals, ticker, limits.value_max)?,
            )
        }
        (CallShape::IndirectedSwap, 2) => (
            "Address To",
            address_value(ctx.to_address(), network, limits)?,
        ),
        (CallShape::IndirectedSwap, 3) => (
            "Token From",
            address_value(ctx.token_received(), network, limits)?,
        ),
        _ => return Err(PluginError::InvalidScreenIndex { index, count }),
    };

    if title.len() > limits.title_max {
        return Err(PluginError::FormattingFailure(format!(
            "title {:?} exceeds {} characters",
            title, limits.title_max
        )));
    }

    Ok(DisplayPair {
        title: title.to_string(),
        value,
    })
}

/// Decimals and ticker for swap amounts: the looked-up token when found,
/// the network defaults otherwise.
fn amount_policy<'a>(ctx: &'a ParseContext, network: &'a Network) -> (u8, &'a str) {
    match ctx.token() {
        Some(token) if token.found => (token.decimals, token.symbol.as_str()),
        _ => {
            debug!(
                decimals = network.default_decimals,
                ticker = %network.ticker,
                "token not resolved, using network defaults"
            );
            (network.default_decimals, network.ticker.as_str())
        }
    }
}

fn address_value(
    address: &TronAddress,
    network: &Network,
    limits: &DisplayLimits,
) -> Result<String, PluginError> {
    let text = address_to_base58(&address.with_prefix(network.address_prefix))?;
    if text.len() > limits.value_max {
        return Err(PluginError::FormattingFailure(format!(
            "address needs {} characters, budget is {}",
            text.len(),
            limits.value_max
        )));
    }
    Ok(text)
}
