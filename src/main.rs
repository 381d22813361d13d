//! MagicSwap display CLI
//!
//! Runs the display helpers from the command line, mostly for checking how
//! a value will render in the UI.
//!
//! Usage:
//!   magicswap-display sanitize "1,234.5,6"       -> 1234.56
//!   magicswap-display usd 1234.5                 -> $1,234.50
//!   magicswap-display number 1.123456 -m 2       -> 1.12
//!   magicswap-display apr --volume 700 --liquidity 1000   -> 9.13
//!   magicswap-display tab stake --pool-id 0xabc
//!   magicswap-display token WETH "Wrapped Ether" 0x82af --price-magic 2500 --magic-usd 0.5 --amount 2
//!
//! `--json` prints a JSON object instead of the bare string.

use anyhow::Result;
use clap::{Parser, Subcommand};
use magicswap_display::{
    load_config, sanitize_amount_input, format_number, format_usd, AmountInput, FractionDigits,
    ManageTab, Token,
};
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

/// MagicSwap display helpers
#[derive(Parser)]
#[command(name = "magicswap-display")]
struct Args {
    /// TOML display config
    #[arg(short, long, env = "MAGICSWAP_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sanitize raw amount field input
    Sanitize {
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },
    /// Format a value as US dollars
    Usd {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Format a value as a grouped decimal
    Number {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Defaults to the config value (5)
        #[arg(short, long)]
        max_fraction_digits: Option<u32>,
    },
    /// Estimate pool APR from 7-day volume and liquidity
    Apr {
        #[arg(long, allow_negative_numbers = true)]
        volume: f64,
        #[arg(long, allow_negative_numbers = true)]
        liquidity: f64,
    },
    /// Resolve the manage page tab for a `tab` query value
    Tab {
        query: Option<String>,
        #[arg(long)]
        pool_id: String,
    },
    /// Show a token's label, USD estimate and explorer link
    Token {
        symbol: String,
        name: String,
        /// Contract address
        id: String,
        /// Token price in MAGIC
        #[arg(long)]
        price_magic: f64,
        /// MAGIC/USD rate
        #[arg(long)]
        magic_usd: f64,
        /// Raw amount field text (empty means one unit)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        amount: String,
        #[arg(long, default_value_t = 18)]
        decimals: u8,
    },
}

fn main() -> Result<()> {
    // Initialize logging (stderr, stdout carries the result)
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    debug!("Config: {:?}", config);

    let (plain, structured) = match args.command {
        Command::Sanitize { raw } => {
            let sanitized = sanitize_amount_input(&raw);
            (sanitized.clone(), json!({ "input": raw, "sanitized": sanitized }))
        }
        Command::Usd { value } => {
            let formatted = format_usd(value);
            (formatted.clone(), json!({ "value": value, "usd": formatted }))
        }
        Command::Number {
            value,
            max_fraction_digits,
        } => {
            let digits = match max_fraction_digits {
                Some(d) => FractionDigits::new(d)?,
                None => config.max_fraction_digits()?,
            };
            let formatted = format_number(value, digits);
            (
                formatted.clone(),
                json!({
                    "value": value,
                    "max_fraction_digits": digits.get(),
                    "formatted": formatted,
                }),
            )
        }
        Command::Apr { volume, liquidity } => {
            let params = config.apr_params()?;
            if liquidity == 0.0 {
                info!("Zero liquidity, APR is not meaningful");
            }
            let apr = params.apr_string(volume, liquidity);
            (
                apr.clone(),
                json!({
                    "volume": volume,
                    "liquidity": liquidity,
                    "params": params,
                    "apr": apr,
                }),
            )
        }
        Command::Tab { query, pool_id } => {
            let selected = ManageTab::from_query(query.as_deref());
            let tabs: Vec<Value> = ManageTab::ALL
                .iter()
                .map(|tab| {
                    json!({
                        "name": tab.to_string(),
                        "href": tab.href(&pool_id),
                        "active": *tab == selected,
                    })
                })
                .collect();
            (selected.href(&pool_id), json!({ "selected": selected, "tabs": tabs }))
        }
        Command::Token {
            symbol,
            name,
            id,
            price_magic,
            magic_usd,
            amount,
            decimals,
        } => {
            let token = Token::new(&id, &symbol, &name, decimals, price_magic);
            let input = AmountInput::from_raw(&amount);
            let label = token.display_name();
            let estimate = token.estimate_usd_display(magic_usd, &input);
            let explorer_url = config.token_explorer_url(&token);
            (
                format!("{label}  ~ {estimate}  {explorer_url}"),
                json!({
                    "token": token,
                    "label": label,
                    "amount": input.value(),
                    "estimate_usd": estimate,
                    "explorer_url": explorer_url,
                }),
            )
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&structured)?);
    } else {
        println!("{}", plain);
    }

    Ok(())
}
