pub mod deployment_config;
pub mod token;

// Re-export for easier access
pub use deployment_config::{
    DeploymentConfig, ExtensionConfig, LockerConfig, MevModuleConfig, PoolConfig, TokenDeployConfig,
};
pub use token::{
    DevBuy, PoolPosition, PoolPositions, PoolSettings, RewardRecipient, TokenConfig, TokenContext,
    TokenMetadata,
};
