//! Host-facing plugin facade
//!
//! The host drives one transaction strictly in order: `init`, zero or more
//! `provide_parameter`, `finalize`, optionally `provide_token`, then any
//! number of `query_contract_id` / `query_ui` calls. Every call returns a
//! `Result`; [`PluginResult::from`] folds it into the host's result code.
//!
//! [`PluginResult::from`]: crate::core::PluginResult

use tracing::{debug, info, warn};

use crate::core::{DisplayLimits, Network, PluginError};
use crate::domain::abi::{CallShape, ParseContext, PARAMETER_LENGTH};
use crate::domain::screen::{self, DisplayPair};
use crate::store::TokenLookup;

/// Name shown on the contract identification screen
pub const PLUGIN_NAME: &str = "Tron Plugin";

/// Contract identification screen: plugin name over the call label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractId {
    pub name: String,
    pub version: String,
}

/// One in-flight transaction
#[derive(Debug)]
pub struct Plugin {
    network: Network,
    limits: DisplayLimits,
    context: Option<ParseContext>,
    screen_count: Option<u8>,
}

impl Plugin {
    pub fn new(network: Network, limits: DisplayLimits) -> Self {
        Self {
            network,
            limits,
            context: None,
            screen_count: None,
        }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Decoded state, once a selector has been accepted
    pub fn context(&self) -> Option<&ParseContext> {
        self.context.as_ref()
    }

    /// Screen count set by `finalize`
    pub fn screen_count(&self) -> Option<u8> {
        self.screen_count
    }

    /// Classify `selector` and start a fresh parse context for it.
    ///
    /// Any state from a previous transaction is dropped, even on failure.
    pub fn init(&mut self, selector: [u8; 4]) -> Result<CallShape, PluginError> {
        self.context = None;
        self.screen_count = None;

        let shape = CallShape::from_selector(selector).inspect_err(|err| {
            warn!(%err, "selector index not supported");
        })?;
        info!(?shape, signature = shape.signature(), "plugin initialized");
        self.context = Some(ParseContext::new(shape));
        Ok(shape)
    }

    pub fn provide_parameter(
        &mut self,
        offset: usize,
        chunk: &[u8; PARAMETER_LENGTH],
    ) -> Result<(), PluginError> {
        let ctx = self.context.as_mut().ok_or(PluginError::NotInitialized)?;
        ctx.accept_chunk(offset, chunk)
    }

    /// Fix the number of screens for the active shape
    pub fn finalize(&mut self) -> Result<u8, PluginError> {
        let ctx = self.context.as_ref().ok_or(PluginError::NotInitialized)?;
        if !ctx.is_complete() {
            debug!(slot = ?ctx.next_slot(), "finalizing before every field was decoded");
        }
        let count = screen::finalize(ctx.shape());
        self.screen_count = Some(count);
        Ok(count)
    }

    /// Resolve the decoded token's decimals and ticker.
    ///
    /// A token the lookup does not know is stored as not found; rendering
    /// then falls back to the network defaults. Fails while the token
    /// address has not been decoded.
    pub fn provide_token(&mut self, lookup: &dyn TokenLookup) -> Result<(), PluginError> {
        let ctx = self.context.as_mut().ok_or(PluginError::NotInitialized)?;
        if ctx.shape() != CallShape::IndirectedSwap {
            return Ok(());
        }
        if !ctx.is_complete() {
            return Err(PluginError::IncompleteParameters {
                slot: ctx.next_slot(),
            });
        }
        let token = lookup.lookup(ctx.token_received());
        if !token.found {
            debug!("token lookup found nothing");
        }
        ctx.set_token(token);
        Ok(())
    }

    pub fn query_contract_id(&self) -> Result<ContractId, PluginError> {
        let ctx = self.context.as_ref().ok_or(PluginError::NotInitialized)?;
        Ok(ContractId {
            name: PLUGIN_NAME.to_string(),
            version: ctx.shape().label().to_string(),
        })
    }

    /// Render screen `index`; fails for any index outside the finalized range
    pub fn query_ui(&self, index: u8) -> Result<DisplayPair, PluginError> {
        let ctx = self.context.as_ref().ok_or(PluginError::NotInitialized)?;
        let count = self.screen_count.unwrap_or(0);
        if index >= count {
            warn!(index, count, "received an invalid screen index");
            return Err(PluginError::InvalidScreenIndex { index, count });
        }
        screen::render(ctx, &self.network, &self.limits, index)
    }

    /// Every screen in order, stopping at the first failure
    pub fn screens(&self) -> Result<Vec<DisplayPair>, PluginError> {
        let count = self.screen_count.unwrap_or(0);
        (0..count).map(|index| self.query_ui(index)).collect()
    }
}
