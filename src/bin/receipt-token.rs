use anyhow::{anyhow, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use receipt_token::codec::v1::{decode_v1, encode_v1, TOKEN_V1_LEN};
use receipt_token::codec::v2::{decode_v2, encode_v2, TOKEN_V2_LEN};
use receipt_token::input::{parse_amount_minor, parse_date};
use receipt_token::utils::logging;
use receipt_token::utils::logging::{LogFormat, LogLevel};
use serde_json::json;
use tracing::debug;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Mint a token from a date and an amount
    Encode {
        /// Display amount, e.g. `12.50`, `1,234` or `1234`
        #[arg(short, long)]
        amount: String,
        /// Date as YYYYMMDD; defaults to today (UTC)
        #[arg(short, long)]
        date: Option<String>,
        /// Mint a v2 token (variant byte + payload); implied by --variant
        #[arg(long)]
        v2: bool,
        /// Explicit v2 variant; clamped into 0..=255, random when omitted
        #[arg(long)]
        variant: Option<i64>,
        /// Print the result as a JSON object
        #[arg(long)]
        json: bool,
    },
    /// Decode a token back into date, amount and (for v2) variant
    Decode {
        token: String,
        /// Print the result as a JSON object
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.log_level, LogFormat::from_env());

    match args.command {
        Command::Encode { amount, date, v2, variant, json } => {
            run_encode(&amount, date.as_deref(), v2 || variant.is_some(), variant, json)
        }
        Command::Decode { token, json } => run_decode(&token, json),
    }
}

fn run_encode(amount: &str, date: Option<&str>, v2: bool, variant: Option<i64>, as_json: bool) -> Result<()> {
    let date = date
        .map(|d| d.to_owned())
        .unwrap_or_else(|| Utc::now().format("%Y%m%d").to_string());

    let (year, month, day) = parse_date(&date)?;
    let amount_minor = parse_amount_minor(amount)?;
    debug!(year, month, day, amount_minor, "input parsed");

    if v2 {
        let minted = encode_v2(year, month, day, amount_minor, variant)?;
        if as_json {
            println!("{}", json!({ "version": 2, "token": minted.token, "variant": minted.variant }));
        } else {
            println!("{} variant={}", minted.token, minted.variant);
        }
    } else {
        let token = encode_v1(year, month, day, amount_minor)?;
        if as_json {
            println!("{}", json!({ "version": 1, "token": token }));
        } else {
            println!("{}", token);
        }
    }

    Ok(())
}

fn run_decode(token: &str, as_json: bool) -> Result<()> {
    // the version is implied by the fixed encoded lengths
    match token.len() {
        TOKEN_V1_LEN => {
            let got = decode_v1(token)?;
            debug!(?got, "decoded v1 token");
            if as_json {
                println!("{}", json!({ "version": 1, "date_amount": got }));
            } else {
                println!(
                    "date={:04}-{:02}-{:02} amount={}",
                    got.year,
                    got.month,
                    got.day,
                    display_amount(got.amount_minor)
                );
            }
        }
        TOKEN_V2_LEN => {
            let got = decode_v2(token)?;
            debug!(?got, "decoded v2 token");
            if as_json {
                println!("{}", json!({ "version": 2, "date_amount": got.date_amount, "variant": got.variant }));
            } else {
                println!(
                    "date={:04}-{:02}-{:02} amount={} variant={}",
                    got.date_amount.year,
                    got.date_amount.month,
                    got.date_amount.day,
                    display_amount(got.date_amount.amount_minor),
                    got.variant
                );
            }
        }
        n => {
            return Err(anyhow!(
                "token must be {} (v1) or {} (v2) characters, got {}",
                TOKEN_V1_LEN,
                TOKEN_V2_LEN,
                n
            ))
        }
    }

    Ok(())
}

fn display_amount(minor: u32) -> String {
    format!("{}.{:02}", minor / 100, minor % 100)
}
