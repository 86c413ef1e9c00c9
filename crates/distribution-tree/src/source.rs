//! Allocation source document
//!
//! The JSON input describing who receives what:
//!
//! ```json
//! {
//!   "decimals": 6,
//!   "airdrop": {
//!     "3gmBN8LBomg3sZEjTgp2YsECMYgJpjcT7xUfpnDB4gSs": 1.5,
//!     "8G9xE8awr9vA2PZWFTJSHNhS16KLnXYdV6XEaJP1a2Yx": "2000"
//!   }
//! }
//! ```
//!
//! Amounts are whole-token values scaled by `10^decimals`. Entry order is kept
//! and determines leaf order.

use std::str::FromStr;

use anchor_lang::prelude::Pubkey;
use merkle_vesting::utils::leaf_hash;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, TreeError};

/// Decimals assumed when the source omits them (SPL default)
pub const DEFAULT_DECIMALS: u8 = 9;

fn default_decimals() -> u8 {
    DEFAULT_DECIMALS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSource {
    #[serde(default = "default_decimals")]
    pub decimals: u8,
    /// Base58 address to whole-token amount (number or decimal string)
    pub airdrop: Map<String, Value>,
}

impl AllocationSource {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses every entry into a scaled recipient, in source order
    pub fn recipients(&self) -> Result<Vec<Recipient>> {
        self.airdrop
            .iter()
            .map(|(address, value)| {
                let text = match value {
                    Value::Number(number) => number.to_string(),
                    Value::String(text) => text.clone(),
                    other => {
                        return Err(TreeError::InvalidAmount {
                            address: address.clone(),
                            reason: format!("expected a number or string, got {}", other),
                        })
                    }
                };
                let amount = scale_amount(&text, self.decimals).map_err(|reason| {
                    TreeError::InvalidAmount {
                        address: address.clone(),
                        reason,
                    }
                })?;
                Ok(Recipient {
                    address: parse_address(address)?,
                    amount,
                })
            })
            .collect()
    }
}

/// One leaf of the distribution: a recipient and their scaled amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    #[serde(with = "pubkey_string")]
    pub address: Pubkey,
    pub amount: u64,
}

impl Recipient {
    pub fn new(address: Pubkey, amount: u64) -> Self {
        Self { address, amount }
    }

    /// Leaf digest, identical to the one the program recomputes
    pub fn leaf(&self) -> [u8; 32] {
        leaf_hash(&self.address, self.amount)
    }
}

pub fn parse_address(address: &str) -> Result<Pubkey> {
    Pubkey::from_str(address.trim()).map_err(|_| TreeError::InvalidAddress(address.to_string()))
}

/// Scales a decimal string by `10^decimals` without going through floats
///
/// Rejects signs, exponents, more fractional digits than `decimals`, zero and
/// results that do not fit in a u64.
pub fn scale_amount(text: &str, decimals: u8) -> std::result::Result<u64, String> {
    let text = text.trim();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, fraction.trim_end_matches('0')),
        None => (text, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(format!("'{}' is not a decimal amount", text));
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return Err(format!("'{}' is not a non-negative decimal amount", text));
    }
    if fraction.len() > decimals as usize {
        return Err(format!("'{}' has more than {} fractional digits", text, decimals));
    }

    let overflow = || format!("'{}' overflows u64 at {} decimals", text, decimals);
    let unit = 10u64.checked_pow(decimals as u32).ok_or_else(overflow)?;

    let whole = if whole.is_empty() {
        0
    } else {
        whole.parse::<u64>().map_err(|_| overflow())?
    };
    let fraction = if fraction.is_empty() {
        0
    } else {
        let padding = 10u64
            .checked_pow((decimals as usize - fraction.len()) as u32)
            .ok_or_else(overflow)?;
        fraction
            .parse::<u64>()
            .map_err(|_| overflow())?
            .checked_mul(padding)
            .ok_or_else(overflow)?
    };

    let amount = whole
        .checked_mul(unit)
        .and_then(|scaled| scaled.checked_add(fraction))
        .ok_or_else(overflow)?;
    if amount == 0 {
        return Err("amount is zero".to_string());
    }
    Ok(amount)
}

mod pubkey_string {
    use super::*;
    use serde::{de::Error, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(key: &Pubkey, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&key.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Pubkey, D::Error> {
        let text = String::deserialize(deserializer)?;
        Pubkey::from_str(&text).map_err(|_| D::Error::custom(format!("invalid address {}", text)))
    }
}
