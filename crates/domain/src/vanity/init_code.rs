use crate::constants::max_supply_base_units;
use alloy_primitives::{Address, U256};
use alloy_sol_types::SolValue;
use serde::{Deserialize, Serialize};

/// Constructor arguments of the launched token contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorArgs {
    pub name: String,
    pub symbol: String,
    pub max_supply: U256,
    pub admin: Address,
    pub image: String,
    pub metadata: String,
    pub context: String,
    pub chain_id: u64,
}

impl ConstructorArgs {
    /// Builds arguments for the fixed token supply.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        admin: Address,
        image: impl Into<String>,
        metadata: impl Into<String>,
        context: impl Into<String>,
        chain_id: u64,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            max_supply: max_supply_base_units(),
            admin,
            image: image.into(),
            metadata: metadata.into(),
            context: context.into(),
            chain_id,
        }
    }

    /// ABI-encoded constructor arguments.
    pub fn abi_encode(&self) -> Vec<u8> {
        (
            self.name.clone(),
            self.symbol.clone(),
            self.max_supply,
            self.admin,
            self.image.clone(),
            self.metadata.clone(),
            self.context.clone(),
            U256::from(self.chain_id),
        )
            .abi_encode_params()
    }

    /// Creation bytecode followed by the encoded arguments.
    pub fn init_code(&self, creation_code: &[u8]) -> Vec<u8> {
        let args = self.abi_encode();
        let mut init_code = Vec::with_capacity(creation_code.len() + args.len());
        init_code.extend_from_slice(creation_code);
        init_code.extend_from_slice(&args);
        init_code
    }
}
