//! Mint transaction payload assembly.
//!
//! Reconstructs the JSON payload a wallet needs to mint from an edition
//! contract: ABI-encoded `collectBatch(uint256)` calldata plus the total
//! cost in wei (edition price plus the launchpad fee). Pricing inputs come
//! from the caller; querying the indexer for them stays outside this crate.

use crate::error::{Error, MintError, Result};
use alloy_primitives::utils::parse_ether;
use alloy_primitives::{hex, Address, U256};
use alloy_sol_types::{sol, SolCall};
use serde::Serialize;

sol! {
  function collectBatch(uint256 quantity) external payable;
}

/// Flat per-token fee charged by the launchpad, in ether.
pub const LAUNCHPAD_FEE_ETH: &str = "0.0004";

/// CAIP-2 identifier of the Base mainnet chain.
pub const BASE_CHAIN_ID: &str = "eip155:8453";

/// Pricing facts for an edition, as reported by the indexer.
#[derive(Debug, Clone, Default)]
pub struct EditionPricing {
  /// Mint price in ether, as a decimal string. Empty is treated as zero.
  pub price_eth: String,
  /// Free mints still pay the launchpad fee.
  pub is_free_mint: bool,
}

/// Wallet-ready mint transaction payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintTransaction {
  pub chain_id: String,
  pub method: String,
  pub params: MintTransactionParams,
}

#[derive(Debug, Clone, Serialize)]
pub struct MintTransactionParams {
  /// Checksummed edition contract address.
  pub to: String,
  /// 0x-prefixed `collectBatch(uint256)` calldata.
  pub data: String,
  /// Total cost in wei, as a decimal string.
  pub value: String,
}

/// Builds the mint transaction payload for an edition contract.
///
/// The total value is computed exactly in wei: the launchpad fee plus the
/// edition price (zero for free mints).
pub fn build_mint_transaction(
  contract_address: &str,
  pricing: &EditionPricing,
  quantity: u64,
) -> Result<MintTransaction> {
  let address: Address = contract_address.parse().map_err(|_| {
    Error::Mint(MintError::InvalidAddress {
      address: contract_address.to_string(),
    })
  })?;

  let fee = parse_amount(LAUNCHPAD_FEE_ETH)?;
  let price = if pricing.is_free_mint {
    U256::ZERO
  } else {
    let raw = if pricing.price_eth.is_empty() {
      "0"
    } else {
      pricing.price_eth.as_str()
    };
    parse_amount(raw)?
  };
  let total = fee.checked_add(price).ok_or_else(|| {
    Error::Mint(MintError::InvalidAmount {
      value: pricing.price_eth.clone(),
      reason: "total cost overflows".to_string(),
    })
  })?;

  let calldata = collectBatchCall {
    quantity: U256::from(quantity),
  }
  .abi_encode();

  Ok(MintTransaction {
    chain_id: BASE_CHAIN_ID.to_string(),
    method: "eth_sendTransaction".to_string(),
    params: MintTransactionParams {
      to: address.to_string(),
      data: hex::encode_prefixed(calldata),
      value: total.to_string(),
    },
  })
}

fn parse_amount(eth: &str) -> Result<U256> {
  parse_ether(eth).map_err(|e| {
    Error::Mint(MintError::InvalidAmount {
      value: eth.to_string(),
      reason: e.to_string(),
    })
  })
}
