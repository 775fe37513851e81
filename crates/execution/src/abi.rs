//! ABI payloads for the factory, the fee hook and the fee locker.

use crate::submitter::ReceiptLog;
use alloy_primitives::aliases::{I24, U24};
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{SolCall, SolEvent, SolValue, sol};
use launchpad_domain::constants::DYNAMIC_FEE_FLAG;
use launchpad_domain::entities as domain;
use launchpad_domain::fees::StaticFees;
use launchpad_domain::{LaunchError, Result};

sol! {
    struct TokenConfig {
        address tokenAdmin;
        string name;
        string symbol;
        bytes32 salt;
        string image;
        string metadata;
        string context;
        uint256 originatingChainId;
    }

    struct PoolConfig {
        address hook;
        address pairedToken;
        int24 tickIfToken0IsPaired;
        int24 tickSpacing;
        bytes poolData;
    }

    struct LockerConfig {
        address locker;
        address[] rewardAdmins;
        address[] rewardRecipients;
        uint16[] rewardBps;
        int24[] tickLower;
        int24[] tickUpper;
        uint16[] positionBps;
        bytes lockerData;
    }

    struct MevModuleConfig {
        address mevModule;
        bytes mevModuleData;
    }

    struct ExtensionConfig {
        address extension;
        uint256 msgValue;
        uint16 extensionBps;
        bytes extensionData;
    }

    struct DeploymentConfig {
        TokenConfig tokenConfig;
        PoolConfig poolConfig;
        LockerConfig lockerConfig;
        MevModuleConfig mevModuleConfig;
        ExtensionConfig[] extensionConfigs;
    }

    struct PoolKey {
        address currency0;
        address currency1;
        uint24 fee;
        int24 tickSpacing;
        address hooks;
    }

    struct StaticFeeData {
        uint24 pairedFee;
        uint24 tokenFee;
    }

    struct StaticFeePoolData {
        address extension;
        bytes extensionData;
        bytes feeData;
    }

    struct LockerFeePreferences {
        uint8[] feePreference;
    }

    function deployToken(DeploymentConfig deploymentConfig) external payable returns (address tokenAddress);

    function claim(address feeOwner, address token) external;

    event TokenCreated(
        address msgSender,
        address indexed tokenAddress,
        address indexed tokenAdmin,
        string tokenImage,
        string tokenName,
        string tokenSymbol,
        string tokenMetadata,
        string tokenContext,
        int24 startingTick,
        address poolHook,
        bytes32 poolId,
        address pairedToken,
        address locker,
        address mevModule,
        uint256 extensionsSupply,
        address[] extensions
    );
}

/// Fee preference flag set for every reward recipient.
const FEE_PREFERENCE_PAIRED: u8 = 1;

fn int24(value: i32) -> Result<I24> {
    I24::try_from(value)
        .map_err(|_| LaunchError::Encoding(format!("{value} does not fit in int24")))
}

fn int24_vec(values: &[i32]) -> Result<Vec<I24>> {
    values.iter().copied().map(int24).collect()
}

/// Pool data for the static-fee hook: no hook extension, fixed fees in ppm.
pub fn encode_static_fee_pool_data(fees: &StaticFees) -> Bytes {
    let (paired_ppm, token_ppm) = fees.as_ppm();
    let fee_data = StaticFeeData {
        pairedFee: U24::from(paired_ppm),
        tokenFee: U24::from(token_ppm),
    };
    StaticFeePoolData {
        extension: Address::ZERO,
        extensionData: Bytes::new(),
        feeData: fee_data.abi_encode().into(),
    }
    .abi_encode_params()
    .into()
}

/// Locker data: one fee preference per reward recipient.
pub fn encode_locker_data(recipient_count: usize) -> Bytes {
    LockerFeePreferences {
        feePreference: vec![FEE_PREFERENCE_PAIRED; recipient_count],
    }
    .abi_encode()
    .into()
}

/// Key of the paired-token/WETH pool the dev buy routes through.
///
/// Currencies are sorted numerically.
pub fn paired_pool_key(
    paired_token: Address,
    weth: Address,
    tick_spacing: i32,
    hook: Address,
) -> Result<PoolKey> {
    let (currency0, currency1) = if paired_token < weth {
        (paired_token, weth)
    } else {
        (weth, paired_token)
    };
    Ok(PoolKey {
        currency0,
        currency1,
        fee: U24::from(DYNAMIC_FEE_FLAG),
        tickSpacing: int24(tick_spacing)?,
        hooks: hook,
    })
}

/// Extension data of the dev-buy extension.
pub fn encode_dev_buy_data(pool_key: PoolKey, recipient: Address) -> Bytes {
    let amount_out_minimum: u128 = 0;
    (pool_key, amount_out_minimum, recipient)
        .abi_encode_params()
        .into()
}

/// Converts the domain configuration into its ABI form.
///
/// # Errors
/// Returns [`LaunchError::Encoding`] when a tick does not fit in `int24`.
pub fn to_sol_config(config: &domain::DeploymentConfig) -> Result<DeploymentConfig> {
    let token = &config.token;
    let pool = &config.pool;
    let locker = &config.locker;

    Ok(DeploymentConfig {
        tokenConfig: TokenConfig {
            tokenAdmin: token.admin,
            name: token.name.clone(),
            symbol: token.symbol.clone(),
            salt: token.salt,
            image: token.image.clone(),
            metadata: token.metadata.clone(),
            context: token.context.clone(),
            originatingChainId: U256::from(token.originating_chain_id),
        },
        poolConfig: PoolConfig {
            hook: pool.hook,
            pairedToken: pool.paired_token,
            tickIfToken0IsPaired: int24(pool.starting_tick)?,
            tickSpacing: int24(pool.tick_spacing)?,
            poolData: pool.pool_data.clone(),
        },
        lockerConfig: LockerConfig {
            locker: locker.locker,
            rewardAdmins: locker.reward_admins.clone(),
            rewardRecipients: locker.reward_recipients.clone(),
            rewardBps: locker.reward_bps.clone(),
            tickLower: int24_vec(&locker.tick_lower)?,
            tickUpper: int24_vec(&locker.tick_upper)?,
            positionBps: locker.position_bps.clone(),
            lockerData: locker.locker_data.clone(),
        },
        mevModuleConfig: MevModuleConfig {
            mevModule: config.mev_module.mev_module,
            mevModuleData: config.mev_module.mev_module_data.clone(),
        },
        extensionConfigs: config
            .extensions
            .iter()
            .map(|ext| ExtensionConfig {
                extension: ext.extension,
                msgValue: ext.msg_value,
                extensionBps: ext.extension_bps,
                extensionData: ext.extension_data.clone(),
            })
            .collect(),
    })
}

/// Calldata of `deployToken(config)`.
pub fn encode_deploy_call(config: &domain::DeploymentConfig) -> Result<Bytes> {
    let call = deployTokenCall {
        deploymentConfig: to_sol_config(config)?,
    };
    Ok(call.abi_encode().into())
}

/// Calldata of `claim(feeOwner, token)`.
pub fn encode_claim_call(fee_owner: Address, token: Address) -> Bytes {
    claimCall {
        feeOwner: fee_owner,
        token,
    }
    .abi_encode()
    .into()
}

/// Token address from a `TokenCreated` log, if the log is one.
pub fn decode_token_created(log: &ReceiptLog) -> Option<Address> {
    TokenCreated::decode_raw_log(log.topics.iter().copied(), &log.data)
        .ok()
        .map(|event| event.tokenAddress)
}
