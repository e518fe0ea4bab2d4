//! Storefront Binary
//!
//! Wires the local adapters from configuration and walks through every
//! storefront workflow once.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin storefront -- --config config.yaml --at 2024-12-25T09:00:00
//! ```
//!
//! # Arguments
//!
//! - `--config <path>`: YAML config (default: `config.yaml` if present, else built-in defaults)
//! - `--at <datetime>`: pin the store clock to a local `YYYY-MM-DDTHH:MM:SS`
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: from config, `info`)

use std::path::Path;

use anyhow::{Context, bail};
use chrono::NaiveDateTime;
use storefront::config::{Config, DEFAULT_CONFIG_PATH, load_config};
use storefront::domain::ordering::{Order, PaymentInstrument};
use storefront::domain::shared::{EmailAddress, Money};
use storefront::infrastructure::analytics::describe_metrics;
use storefront::infrastructure::clock::{FixedClock, StoreClock, SystemClock};
use storefront::telemetry::init_tracing;
use storefront::StorefrontContainer;

/// Parsed command line.
#[derive(Debug, Default)]
struct Args {
    config_path: Option<String>,
    at: Option<NaiveDateTime>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = resolve_config(args.config_path.as_deref())?;

    init_tracing(&config.observability.logging).context("failed to initialize tracing")?;
    describe_metrics();

    let clock = args.at.map_or(StoreClock::System(SystemClock), |at| {
        StoreClock::Fixed(FixedClock::new(at))
    });
    let container = StorefrontContainer::from_config(&config, clock);

    tracing::info!("Starting storefront walk-through");
    run_walkthrough(&container, &config).await?;
    tracing::info!("Walk-through complete");
    Ok(())
}

/// Parse `--config` and `--at`.
fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Args> {
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                parsed.config_path = Some(args.next().context("--config needs a path")?);
            }
            "--at" => {
                let value = args.next().context("--at needs a datetime")?;
                let at = NaiveDateTime::parse_from_str(&value, "%Y-%m-%dT%H:%M:%S")
                    .with_context(|| format!("invalid --at value '{value}'"))?;
                parsed.at = Some(at);
            }
            other => bail!("unknown argument '{other}'"),
        }
    }

    Ok(parsed)
}

/// Load the explicit config, the default file if it exists, or defaults.
fn resolve_config(path: Option<&str>) -> anyhow::Result<Config> {
    match path {
        Some(path) => load_config(Some(path)).context("failed to load configuration"),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_config(None).context("failed to load configuration")
        }
        None => Ok(Config::default()),
    }
}

async fn run_walkthrough(container: &StorefrontContainer, config: &Config) -> anyhow::Result<()> {
    let status = container.store_status_service();
    println!("Online: {}", status.is_online());
    println!("Discount today: {}", status.get_discount());

    println!("{}", container.render_page_use_case().execute());

    let pricing = container.price_in_currency_use_case();
    let base_price = Money::from_units(10);
    for currency in container.rates().currencies() {
        let price = pricing.execute(base_price, currency.as_str())?;
        println!("{base_price} in {currency}: {}", price.amount());
    }

    let shipping = container.shipping_info_use_case();
    for destination in config.shipping.destinations.keys() {
        println!("{destination}: {}", shipping.execute(destination)?);
    }
    println!("Nowhere: {}", shipping.execute("Nowhere")?);

    let order = Order::new(Money::from_units(10))?;
    let card = PaymentInstrument::new("4111111111111111");
    let result = container.submit_order_use_case().execute(&order, &card).await?;
    println!("Order submitted: {}", serde_json::to_string(&result)?);

    let signed_up = container.sign_up_use_case().execute("name@domain.com").await?;
    println!("Signed up: {signed_up}");

    let email = EmailAddress::parse("name@domain.com")?;
    container.login_use_case().execute(&email).await?;
    println!("Security code sent to {email}");

    Ok(())
}
