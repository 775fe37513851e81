//! Command Line Interface for the launchpad SDK.
use alloy_primitives::{Address, B256, Bytes};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use launchpad_data::PriceOracle;
use launchpad_data::providers::{DEFAULT_PAIR_URL, DexScreenerOracle, OracleConfig};
use launchpad_domain::constants::DEFAULT_TICK_SPACING;
use launchpad_domain::entities::{RewardRecipient, TokenConfig, TokenContext, TokenMetadata};
use launchpad_domain::environment::Environment;
use launchpad_domain::math::price_tick::{DEFAULT_RANGE_WIDTH_TICKS, DEFAULT_TARGET_MARKET_CAP_USD};
use launchpad_domain::math::{TickDerivationParams, derive_ticks, tick_to_price};
use launchpad_domain::vanity::{AddressMiner, MinerConfig};
use launchpad_execution::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "launchpad")]
#[command(about = "Token launch configuration, salt mining and tick derivation", long_about = None)]
struct Cli {
    /// Target network
    #[arg(long, global = true, env = "LAUNCHPAD_ENV", default_value = "base-mainnet")]
    env: Environment,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive a tick range from a USD price of the paired token
    Ticks {
        /// Paired token price in USD
        #[arg(long)]
        price: f64,

        /// Target market cap at the lower tick, in USD
        #[arg(long, default_value_t = DEFAULT_TARGET_MARKET_CAP_USD)]
        market_cap: f64,

        /// Range width in ticks
        #[arg(long, default_value_t = DEFAULT_RANGE_WIDTH_TICKS)]
        width: i32,

        /// Tick spacing
        #[arg(long, default_value_t = DEFAULT_TICK_SPACING)]
        spacing: i32,
    },
    /// Fetch a guarded USD quote for the paired token
    Quote {
        /// DexScreener pair endpoint
        #[arg(long, env = "LAUNCHPAD_PRICE_URL", default_value = DEFAULT_PAIR_URL)]
        url: String,

        /// Bypass the cache
        #[arg(long)]
        force: bool,
    },
    /// Search a salt whose token address sorts below the paired token
    MineSalt {
        #[command(flatten)]
        token: TokenArgs,

        /// Salts to try before giving up
        #[arg(long, default_value_t = MinerConfig::default().max_attempts)]
        max_attempts: u64,
    },
    /// Compute the token address for a given inner salt
    PredictAddress {
        #[command(flatten)]
        token: TokenArgs,

        /// Inner salt (32-byte hex)
        #[arg(long)]
        salt: B256,
    },
    /// Assemble a deployment configuration and print it as JSON
    BuildConfig {
        /// Token configuration JSON file
        #[arg(long)]
        token: PathBuf,

        /// Creation bytecode: hex file or compiler artifact with a `bytecode` field
        #[arg(long)]
        bytecode: PathBuf,

        /// DexScreener pair endpoint used for automatic ticks
        #[arg(long, env = "LAUNCHPAD_PRICE_URL", default_value = DEFAULT_PAIR_URL)]
        url: String,

        /// Lower tick of the standard position; disables automatic ticks
        #[arg(long, requires = "tick_upper", allow_hyphen_values = true)]
        tick_lower: Option<i32>,

        /// Upper tick of the standard position
        #[arg(long, requires = "tick_lower", allow_hyphen_values = true)]
        tick_upper: Option<i32>,
    },
}

#[derive(clap::Args)]
struct TokenArgs {
    /// Creation bytecode: hex file or compiler artifact with a `bytecode` field
    #[arg(long)]
    bytecode: PathBuf,

    #[arg(long)]
    name: String,

    #[arg(long)]
    symbol: String,

    /// Token admin address
    #[arg(long)]
    admin: Address,

    #[arg(long, default_value = "")]
    image: String,

    #[arg(long, default_value = "")]
    description: String,

    /// Overrides the network chain id
    #[arg(long)]
    chain_id: Option<u64>,
}

impl TokenArgs {
    fn token(&self) -> TokenConfig {
        TokenConfig {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            image: self.image.clone(),
            admin: self.admin,
            metadata: TokenMetadata {
                description: self.description.clone(),
            },
            context: TokenContext::default(),
            dev_buy: None,
            rewards: vec![RewardRecipient::new(self.admin, 10_000)],
            pool: Default::default(),
            fees: None,
        }
    }

    fn builder(&self, env: Environment) -> Result<DeploymentConfigBuilder> {
        let addresses = env.addresses().validate(env)?;
        let code = load_bytecode(&self.bytecode)?;
        Ok(DeploymentConfigBuilder::new(
            addresses,
            self.chain_id.unwrap_or_else(|| env.chain_id()),
            code,
        ))
    }
}

/// Reads creation bytecode from raw hex or from a JSON artifact.
fn load_bytecode(path: &Path) -> Result<Bytes> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading bytecode from {}", path.display()))?;
    let trimmed = raw.trim();

    let hex = if trimmed.starts_with('{') {
        let artifact: serde_json::Value =
            serde_json::from_str(trimmed).context("parsing bytecode artifact")?;
        match &artifact["bytecode"] {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Object(o) => o
                .get("object")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .context("artifact bytecode has no `object` field")?,
            _ => bail!("artifact has no `bytecode` field"),
        }
    } else {
        trimmed.to_string()
    };

    hex.parse::<Bytes>().context("decoding bytecode hex")
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Ticks {
            price,
            market_cap,
            width,
            spacing,
        } => {
            let params = TickDerivationParams {
                target_market_cap_usd: *market_cap,
                tick_spacing: *spacing,
                range_width_ticks: *width,
            };
            let range = derive_ticks(*price, &params)?;
            // token price in paired-token units at each bound
            let output = serde_json::json!({
                "tickLower": range.tick_lower,
                "tickUpper": range.tick_upper,
                "pairedPerTokenLower": tick_to_price(range.tick_lower),
                "pairedPerTokenUpper": tick_to_price(range.tick_upper),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Quote { url, force } => {
            let oracle = DexScreenerOracle::new(OracleConfig {
                url: url.clone(),
                ..OracleConfig::default()
            })?;
            let quote = oracle.get_quote(*force).await?;
            println!("{}", serde_json::to_string_pretty(quote.as_ref())?);
        }
        Commands::MineSalt {
            token,
            max_attempts,
        } => {
            let builder = token
                .builder(cli.env)?
                .with_miner(AddressMiner::new(MinerConfig {
                    max_attempts: *max_attempts,
                }));
            info!(env = %cli.env, name = %token.name, "Mining salt");
            let result = builder.generate_salt(&token.token())?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::PredictAddress { token, salt } => {
            let builder = token.builder(cli.env)?;
            let address = builder.predict_address(*salt, &token.token());
            println!("{address}");
        }
        Commands::BuildConfig {
            token,
            bytecode,
            url,
            tick_lower,
            tick_upper,
        } => {
            let raw = std::fs::read_to_string(token)
                .with_context(|| format!("reading token config from {}", token.display()))?;
            let token: TokenConfig =
                serde_json::from_str(&raw).context("parsing token config")?;

            let defaults = match (tick_lower, tick_upper) {
                (Some(lower), Some(upper)) => Some(TickDefaults::new(*lower, *upper)),
                _ => None,
            };
            let config = LaunchSdkConfig {
                environment: cli.env,
                defaults,
                simulate: true,
                oracle: OracleConfig {
                    url: url.clone(),
                    ..OracleConfig::default()
                },
                ..LaunchSdkConfig::default()
            };
            let sdk = LaunchSdk::new(config, load_bytecode(bytecode)?, None)?;
            let built = sdk.build_config(&token).await?;

            info!(token = %built.predicted_address, "Deployment config built");
            let output = serde_json::json!({
                "predictedAddress": built.predicted_address,
                "config": built.config,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
