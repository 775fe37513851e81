use crate::fees::StaticFees;
use alloy_primitives::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Free-form description stored with the token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub description: String,
}

/// Where and how the launch was requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenContext {
    pub interface: String,
    pub platform: String,
    pub message_id: String,
    pub id: String,
}

/// A reward recipient and its share of LP fees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRecipient {
    pub recipient: Address,
    /// Admin allowed to update the recipient; defaults to the recipient.
    pub admin: Option<Address>,
    pub bps: u16,
}

impl RewardRecipient {
    pub fn new(recipient: Address, bps: u16) -> Self {
        Self {
            recipient,
            admin: None,
            bps,
        }
    }

    /// Admin, falling back to the recipient itself.
    pub fn effective_admin(&self) -> Address {
        self.admin.unwrap_or(self.recipient)
    }
}

/// A single liquidity position of the launch pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolPosition {
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub position_bps: u16,
}

/// Either the deployer's standard position or an explicit list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolPositions {
    /// One full-share position from configured defaults or the live price.
    #[default]
    Standard,
    Explicit(Vec<PoolPosition>),
}

/// Pool settings supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSettings {
    pub positions: PoolPositions,
    /// When set, must equal the first position's lower tick.
    pub starting_tick: Option<i32>,
}

/// Initial purchase made in the deployment transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevBuy {
    pub eth_amount: Decimal,
}

/// Everything a caller specifies about a token launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub admin: Address,
    #[serde(default)]
    pub metadata: TokenMetadata,
    #[serde(default)]
    pub context: TokenContext,
    #[serde(default)]
    pub dev_buy: Option<DevBuy>,
    pub rewards: Vec<RewardRecipient>,
    #[serde(default)]
    pub pool: PoolSettings,
    #[serde(default)]
    pub fees: Option<StaticFees>,
}

impl TokenConfig {
    /// Metadata as the compact JSON string stored on-chain.
    pub fn metadata_json(&self) -> String {
        serde_json::to_string(&self.metadata).unwrap_or_default()
    }

    /// Context as the compact JSON string stored on-chain.
    pub fn context_json(&self) -> String {
        serde_json::to_string(&self.context).unwrap_or_default()
    }
}
