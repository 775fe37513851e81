use alloy_primitives::{Address, B256, Bytes, U256};
use serde::{Deserialize, Serialize};

/// Token section of the deployment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDeployConfig {
    pub admin: Address,
    pub name: String,
    pub symbol: String,
    pub salt: B256,
    pub image: String,
    pub metadata: String,
    pub context: String,
    pub originating_chain_id: u64,
}

/// Pool section of the deployment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    pub hook: Address,
    pub paired_token: Address,
    /// Initial tick, valid when the paired token ends up as token1.
    pub starting_tick: i32,
    pub tick_spacing: i32,
    pub pool_data: Bytes,
}

/// LP locker section: reward split and position layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockerConfig {
    pub locker: Address,
    pub reward_admins: Vec<Address>,
    pub reward_recipients: Vec<Address>,
    pub reward_bps: Vec<u16>,
    pub tick_lower: Vec<i32>,
    pub tick_upper: Vec<i32>,
    pub position_bps: Vec<u16>,
    pub locker_data: Bytes,
}

/// MEV module section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MevModuleConfig {
    pub mev_module: Address,
    pub mev_module_data: Bytes,
}

/// An extension invoked during deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionConfig {
    pub extension: Address,
    /// Wei forwarded to the extension.
    pub msg_value: U256,
    pub extension_bps: u16,
    pub extension_data: Bytes,
}

/// The full argument of the factory's deploy call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    pub token: TokenDeployConfig,
    pub pool: PoolConfig,
    pub locker: LockerConfig,
    pub mev_module: MevModuleConfig,
    pub extensions: Vec<ExtensionConfig>,
}

impl DeploymentConfig {
    /// Wei the deploy transaction must carry.
    pub fn total_msg_value(&self) -> U256 {
        self.extensions
            .iter()
            .fold(U256::ZERO, |acc, ext| acc + ext.msg_value)
    }
}
