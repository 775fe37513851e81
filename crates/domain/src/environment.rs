//! Per-network contract addresses.

use crate::error::{LaunchError, Result};
use alloy_primitives::{Address, address};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Environment {
    EthSepolia,
    BaseMainnet,
}

impl Environment {
    pub fn chain_id(&self) -> u64 {
        match self {
            Self::EthSepolia => 11_155_111,
            Self::BaseMainnet => 8453,
        }
    }

    /// Built-in address book for this network.
    pub fn addresses(&self) -> LaunchAddresses {
        match self {
            Self::EthSepolia => LaunchAddresses {
                factory: Some(address!("30304e34F52a233b63BeAb0E0959B255D3cbc739")),
                locker: Some(address!("37E00F6Dd89EE447297Eb48cB868b791171A7BCB")),
                hook: Some(address!("932D55D7B86d27eedd0934503e49F5F362FAa8cc")),
                fee_static_hook: Some(address!("932D55D7B86d27eedd0934503e49F5F362FAa8cc")),
                mev_module: Some(address!("4f22145a5E4bba42092B29FC12b3bC346d42De71")),
                dev_buy: Some(address!("D9f8bF18259160Ae26fE926E5C958320d5E900A0")),
                fee_locker: Some(address!("FB7CE8edF568EEF3739cCf5AE11Dda164B35c9a9")),
                paired_token: Some(address!("a76533E77228E76C1d65c7BD3834228730f77Ffd")),
                vault: Some(address!("188A2E743fA6b798a09dFAcd3Cd39C827D7daa68")),
                buy_back_router: Some(address!("2c3948170691660CB974b5B8885A2818C4C179d0")),
                lp_locker: Some(address!("37E00F6Dd89EE447297Eb48cB868b791171A7BCB")),
                weth: None,
            },
            Self::BaseMainnet => LaunchAddresses {
                factory: Some(address!("8EEF0dC80ADf57908bB1be0236c2a72a7e379C2d")),
                locker: Some(address!("282B4e72a79ebe79c1bd295c5ebd72940e50e836")),
                hook: Some(address!("5B409184204b86f708d3aeBb3cad3F02835f68cC")),
                fee_static_hook: Some(address!("5B409184204b86f708d3aeBb3cad3F02835f68cC")),
                mev_module: Some(address!("2ebc0fA629b268dFA3d455b67027d507a562EAC0")),
                dev_buy: Some(address!("173077c319c38bb08D4C4968014357fd518446b4")),
                fee_locker: Some(address!("f739FC4094F3Df0a1Be08E2925b609F3C3Aa13c6")),
                paired_token: Some(address!("D09cf0982A32DD6856e12d6BF2F08A822eA5D91D")),
                vault: Some(address!("72f5565Ab147105614ca4Eb83ecF15f751Fd8C50")),
                buy_back_router: Some(address!("97828Af05d581368d8Ee3Da14c06d9B168D0A1F5")),
                lp_locker: Some(address!("282B4e72a79ebe79c1bd295c5ebd72940e50e836")),
                weth: None,
            },
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EthSepolia => write!(f, "eth-sepolia"),
            Self::BaseMainnet => write!(f, "base-mainnet"),
        }
    }
}

impl FromStr for Environment {
    type Err = LaunchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "eth-sepolia" => Ok(Self::EthSepolia),
            "base-mainnet" => Ok(Self::BaseMainnet),
            other => Err(LaunchError::Validation(format!(
                "unknown environment '{other}'"
            ))),
        }
    }
}

/// Contract addresses, any of which may be overridden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchAddresses {
    pub factory: Option<Address>,
    pub locker: Option<Address>,
    pub hook: Option<Address>,
    pub fee_static_hook: Option<Address>,
    pub mev_module: Option<Address>,
    pub dev_buy: Option<Address>,
    pub fee_locker: Option<Address>,
    pub paired_token: Option<Address>,
    pub vault: Option<Address>,
    pub buy_back_router: Option<Address>,
    pub lp_locker: Option<Address>,
    pub weth: Option<Address>,
}

/// Addresses the deployer cannot work without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployerAddresses {
    pub factory: Address,
    pub locker: Address,
    pub mev_module: Address,
    pub fee_locker: Address,
    pub fee_static_hook: Address,
    pub paired_token: Address,
    pub dev_buy: Option<Address>,
    pub weth: Option<Address>,
}

impl LaunchAddresses {
    /// Overlays `overrides` on top of `self`.
    #[must_use]
    pub fn merge(self, overrides: &LaunchAddresses) -> Self {
        Self {
            factory: overrides.factory.or(self.factory),
            locker: overrides.locker.or(self.locker),
            hook: overrides.hook.or(self.hook),
            fee_static_hook: overrides.fee_static_hook.or(self.fee_static_hook),
            mev_module: overrides.mev_module.or(self.mev_module),
            dev_buy: overrides.dev_buy.or(self.dev_buy),
            fee_locker: overrides.fee_locker.or(self.fee_locker),
            paired_token: overrides.paired_token.or(self.paired_token),
            vault: overrides.vault.or(self.vault),
            buy_back_router: overrides.buy_back_router.or(self.buy_back_router),
            lp_locker: overrides.lp_locker.or(self.lp_locker),
            weth: overrides.weth.or(self.weth),
        }
    }

    /// Checks required addresses and narrows to [`DeployerAddresses`].
    ///
    /// # Errors
    /// Returns [`LaunchError::Validation`] naming the first missing key.
    pub fn validate(&self, environment: Environment) -> Result<DeployerAddresses> {
        let require = |value: Option<Address>, key: &str| {
            value.filter(|a| !a.is_zero()).ok_or_else(|| {
                LaunchError::Validation(format!(
                    "missing required address '{key}' for environment {environment}"
                ))
            })
        };

        Ok(DeployerAddresses {
            factory: require(self.factory, "factory")?,
            locker: require(self.locker, "locker")?,
            mev_module: require(self.mev_module, "mevModule")?,
            fee_locker: require(self.fee_locker, "feeLocker")?,
            fee_static_hook: require(self.fee_static_hook, "feeStaticHook")?,
            paired_token: require(self.paired_token, "pairedToken")?,
            dev_buy: self.dev_buy,
            weth: self.weth,
        })
    }
}
