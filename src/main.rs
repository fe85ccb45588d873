//! Aptos Sniper - balance, gas, swap and transfer bot
//!
//! Runs the orchestrator once while the price feed streams in a separate task.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use aptos_sniper::adapters::cli::{self, CliApp};
use aptos_sniper::adapters::http::HttpConfig;
use aptos_sniper::adapters::{AptosClient, DexClient, FeedConfig, FeedListener, LocalSigner};
use aptos_sniper::application::{RunPlan, SniperOrchestrator};
use aptos_sniper::config::{default_config, load_config, BotConfig, Credentials};
use aptos_sniper::ports::{BotError, SwapRequest};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (secrets go here, not in the config file)
    dotenvy::dotenv().ok();

    let app = cli::init();
    init_logging(&app)?;

    let config = load(&app).context("Failed to load configuration")?;
    // Missing or malformed credentials fail their own steps, not the whole run
    let credentials = Credentials::from_env();
    let wallet_address = match credentials.wallet_address() {
        Ok(address) => address.to_string(),
        Err(e) => {
            tracing::error!("{}", e);
            String::new()
        }
    };
    let signer = credentials
        .private_key()
        .map_err(|e| BotError::Signing(e.to_string()))
        .and_then(LocalSigner::from_hex);

    let timeout = config.http.timeout();
    let aptos = AptosClient::new(HttpConfig::new(&config.aptos.api_url).with_timeout(timeout))
        .context("Failed to create Aptos client")?;
    let dex = DexClient::new(HttpConfig::new(&config.swap.api_url).with_timeout(timeout))
        .context("Failed to create DEX client")?;

    let feed = if config.feed.enabled && !app.no_feed {
        let listener = FeedListener::new(FeedConfig::new(&config.feed.ws_url, &config.feed.pair));
        Some(tokio::spawn(async move {
            let result = listener
                .run(|msg| {
                    println!("Price update: {}", msg.payload);
                })
                .await;
            if let Err(e) = result {
                tracing::error!("Price feed stopped: {}", e);
            }
        }))
    } else {
        None
    };

    let plan = RunPlan {
        wallet_address: wallet_address.clone(),
        swap: SwapRequest::new(
            &config.swap.from_token,
            &config.swap.to_token,
            config.swap.amount,
            &wallet_address,
        ),
        recipient: config.transfer.recipient.clone(),
        amount: config.transfer.amount,
    };

    let report = SniperOrchestrator::with_signer_result(aptos, dex, signer, plan)
        .run()
        .await;
    if report.transaction.is_err() {
        tracing::error!("Failed to send transaction.");
    }

    if let Some(handle) = feed {
        tracing::info!("Streaming prices, press Ctrl+C to exit");
        tokio::select! {
            _ = handle => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received");
            }
        }
    }

    Ok(())
}

fn init_logging(app: &CliApp) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(app.log_level()));

    fmt().with_env_filter(filter).init();
    Ok(())
}

fn load(app: &CliApp) -> Result<BotConfig> {
    match &app.config {
        Some(path) => {
            // Expand config path (handles ~ for home directory)
            let path = shellexpand::tilde(&path.to_string_lossy()).to_string();
            Ok(load_config(&path)?)
        }
        None => Ok(default_config()?),
    }
}
