//! End-to-end flow for `transfer(address,uint256)` call data

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use tron_plugin::domain::abi::transferCall;
use tron_plugin::infrastructure::format::address_to_base58;
use tron_plugin::{
    CallData, CallShape, DisplayLimits, Network, NoTokens, Plugin, PluginError, PluginResult,
    TronAddress,
};

const TRANSFER_CALLDATA: &str = "a9059cbb000000000000000000000000573708726db88a32c1b9c828fef508577cfb8483000000000000000000000000000000000000000000000000000000000000000a";

fn run(calldata: &[u8], network: Network) -> Plugin {
    let call = CallData::parse(calldata).expect("well-formed call data");
    let mut plugin = Plugin::new(network, DisplayLimits::default());
    plugin.init(call.selector()).expect("supported selector");
    for (offset, chunk) in call.chunks() {
        let result = plugin.provide_parameter(offset, &chunk);
        assert_eq!(PluginResult::from(&result), PluginResult::Ok);
    }
    plugin.finalize().expect("finalize");
    plugin.provide_token(&NoTokens).expect("token");
    plugin
}

#[test]
fn test_transfer_from_device_capture() {
    let bytes = CallData::decode_hex(TRANSFER_CALLDATA).unwrap();
    let plugin = run(&bytes, Network::mainnet());

    assert_eq!(plugin.screen_count(), Some(2));
    assert_eq!(plugin.query_contract_id().unwrap().version, "Transfer");

    let recipient = plugin.query_ui(0).unwrap();
    assert_eq!(recipient.title, "Transfer To");
    let expected = TronAddress::from(
        "0x573708726db88a32c1b9c828fef508577cfb8483"
            .parse::<Address>()
            .unwrap(),
    )
    .with_prefix(0x41);
    assert_eq!(recipient.value, address_to_base58(&expected).unwrap());

    let amount = plugin.query_ui(1).unwrap();
    assert_eq!(amount.title, "Amount");
    assert_eq!(amount.value, "10 TRX");
}

#[test]
fn test_transfer_one_million() {
    let to = Address::from([0x42; 20]);
    let calldata = transferCall {
        to,
        amount: U256::from(1_000_000u64),
    }
    .abi_encode();
    let plugin = run(&calldata, Network::mainnet());

    let ctx = plugin.context().unwrap();
    assert_eq!(ctx.shape(), CallShape::SimpleTransfer);
    assert_eq!(ctx.to_address().raw(), to);

    assert_eq!(plugin.query_ui(1).unwrap().value, "1000000 TRX");
}

#[test]
fn test_recipient_round_trips_through_base58() {
    let to = Address::from([0x9c; 20]);
    let calldata = transferCall {
        to,
        amount: U256::from(1u64),
    }
    .abi_encode();
    let plugin = run(&calldata, Network::shasta());

    let text = plugin.query_ui(0).unwrap().value;
    let decoded = bs58::decode(&text).with_check(None).into_vec().unwrap();
    assert_eq!(decoded[0], 0xa0);
    assert_eq!(&decoded[1..], to.as_slice());
}

#[test]
fn test_screen_queries_out_of_range() {
    let bytes = CallData::decode_hex(TRANSFER_CALLDATA).unwrap();
    let plugin = run(&bytes, Network::mainnet());

    for index in [2u8, 3, 255] {
        assert_eq!(
            plugin.query_ui(index),
            Err(PluginError::InvalidScreenIndex { index, count: 2 })
        );
    }
}

#[test]
fn test_extra_chunk_after_transfer_reports_error() {
    let mut bytes = CallData::decode_hex(TRANSFER_CALLDATA).unwrap();
    bytes.extend([0u8; 32]);
    let call = CallData::parse(&bytes).unwrap();

    let mut plugin = Plugin::new(Network::mainnet(), DisplayLimits::default());
    plugin.init(call.selector()).unwrap();
    let results: Vec<_> = call
        .chunks()
        .map(|(offset, chunk)| plugin.provide_parameter(offset, &chunk))
        .collect();

    assert!(results[0].is_ok() && results[1].is_ok());
    assert!(matches!(
        results[2],
        Err(PluginError::UnsupportedParameterSlot { offset: 68, .. })
    ));

    // the decoded fields are still presentable
    assert_eq!(plugin.finalize(), Ok(2));
    assert_eq!(plugin.query_ui(1).unwrap().value, "10 TRX");
}
