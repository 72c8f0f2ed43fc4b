use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tron_plugin::config;
use tron_plugin::{CallData, DisplayPair, Plugin, TokenRegistry};

#[derive(Debug, Parser)]
#[command(
    name = "tron-plugin",
    version,
    about = "Decode Tron contract call data into device review screens"
)]
struct Args {
    /// Hex call data including the 4-byte selector (e.g. 0xa9059cbb...)
    calldata: String,

    /// Network whose address prefix and ticker to use (mainnet, shasta, ...)
    #[arg(long)]
    network: Option<String>,

    /// Print screens as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = config::load();
    let network = config.resolve_network(args.network.as_deref());
    let tokens = TokenRegistry::from_specs(&config.tokens);

    let bytes = CallData::decode_hex(&args.calldata)?;
    let call = CallData::parse(&bytes)?;

    let mut plugin = Plugin::new(network, config.display);
    plugin
        .init(call.selector())
        .context("unsupported contract call")?;

    for (offset, chunk) in call.chunks() {
        if plugin.context().is_some_and(|ctx| ctx.is_complete()) {
            debug!(offset, "all fields decoded, ignoring trailing chunks");
            break;
        }
        plugin
            .provide_parameter(offset, &chunk)
            .with_context(|| format!("decoding parameter at offset {}", offset))?;
    }

    plugin.finalize()?;
    plugin.provide_token(&tokens)?;

    let id = plugin.query_contract_id()?;
    let screens = plugin.screens().context("rendering screens")?;

    if args.json {
        let mut all = vec![DisplayPair {
            title: id.name,
            value: id.version,
        }];
        all.extend(screens);
        println!("{}", serde_json::to_string_pretty(&all)?);
    } else {
        println!("{}: {}", id.name, id.version);
        for pair in screens {
            println!("{}: {}", pair.title, pair.value);
        }
    }

    Ok(())
}

fn init_tracing() {
    const DEFAULT_FILTER: &str = "warn";
    // try to load filter from `RUST_LOG` or fall back to warnings only
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
