//! CLI argument definitions for `openfigi`.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `map` | Map one third-party identifier to FIGIs |
//! | `search` | Keyword search with optional filters |
//! | `filter` | Filtered listing with total count |
//! | `values` | Accepted values for a constrained field |
//! | `generate-values` | Render the core crate's reference tables from the live API |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--base-url` | `$OPENFIGI_BASE_URL` or v3 | API root |
//! | `--api-key` | `$OPENFIGI_API_KEY` | API key |
//! | `--timeout-ms` | `10000` | Request timeout in ms |
//! | `-v` | | Raise log verbosity (repeatable) |
//!
//! # Examples
//!
//! ```bash
//! openfigi map --id-type TICKER --id-value IBM --exch-code US
//! openfigi search IBM --security-type2 Option --expiration 2021-01-01:2021-06-30
//! openfigi filter --exch-code US --pages 2 --pretty
//! openfigi values currency
//! openfigi generate-values > crates/openfigi-core/src/values/tables.rs
//! ```

use clap::{ArgAction, Args, Parser, Subcommand};
use openfigi_core::{BaseItemSetters, DateInterval, NumericInterval};

/// Command-line client for the OpenFIGI API.
#[derive(Debug, Parser)]
#[command(name = "openfigi", author, version, about = "OpenFIGI API client")]
pub struct Cli {
    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Override the API root (defaults to $OPENFIGI_BASE_URL, then the public v3 URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// API key sent as X-OPENFIGI-APIKEY (defaults to $OPENFIGI_API_KEY).
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Request timeout in milliseconds.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Otherwise RUST_LOG applies.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Map a third-party identifier to FIGIs.
    ///
    /// # Examples
    ///
    ///   openfigi map --id-type TICKER --id-value IBM --exch-code US
    ///   openfigi map --id-type BASE_TICKER --id-value "IBM 10/22/21 C130" --security-type2 Option
    Map(MapArgs),

    /// Keyword search for FIGIs.
    ///
    /// # Examples
    ///
    ///   openfigi search IBM
    ///   openfigi search IBM --exch-code US --pages 3
    Search(PageArgs),

    /// List FIGIs matching the filters, with the total match count.
    ///
    /// # Examples
    ///
    ///   openfigi filter --security-type2 Pool --maturity 2020-01-01:2020-12-31
    Filter(PageArgs),

    /// Print the accepted values for a constrained field.
    ///
    /// # Examples
    ///
    ///   openfigi values exchCode
    ///   openfigi values securityType2
    Values(ValuesArgs),

    /// Print every published value list as Rust source for the core crate.
    ///
    /// # Examples
    ///
    ///   openfigi generate-values > crates/openfigi-core/src/values/tables.rs
    GenerateValues,
}

/// Arguments for the `map` command.
#[derive(Debug, Args)]
pub struct MapArgs {
    /// Identifier type (e.g. TICKER, ID_ISIN, BASE_TICKER).
    #[arg(long)]
    pub id_type: String,

    /// Identifier value.
    #[arg(long)]
    pub id_value: String,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments shared by `search` and `filter`.
#[derive(Debug, Args)]
pub struct PageArgs {
    /// Free-form keywords; may be omitted for `filter`.
    pub query: Option<String>,

    /// Cursor returned as `next` by a previous page.
    #[arg(long)]
    pub start: Option<String>,

    /// Number of pages to fetch, following `next` cursors.
    #[arg(long, default_value_t = 1)]
    pub pages: usize,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for the `values` command.
#[derive(Debug, Args)]
pub struct ValuesArgs {
    /// Field name (idType, exchCode, micCode, currency, marketSecDes,
    /// securityType, securityType2, stateCode, optionType).
    pub key: String,
}

/// Optional item attributes. Ranges are written `LOW:HIGH`; either side may be empty.
#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    #[arg(long)]
    pub exch_code: Option<String>,

    #[arg(long)]
    pub mic_code: Option<String>,

    #[arg(long)]
    pub currency: Option<String>,

    #[arg(long)]
    pub market_sec_des: Option<String>,

    #[arg(long)]
    pub security_type: Option<String>,

    #[arg(long)]
    pub security_type2: Option<String>,

    #[arg(long, default_value_t = false)]
    pub include_unlisted_equities: bool,

    /// Call or Put.
    #[arg(long)]
    pub option_type: Option<String>,

    #[arg(long, value_parser = parse_numeric_range)]
    pub strike: Option<NumericInterval>,

    #[arg(long, value_parser = parse_numeric_range)]
    pub contract_size: Option<NumericInterval>,

    #[arg(long, value_parser = parse_numeric_range)]
    pub coupon: Option<NumericInterval>,

    /// Requires --security-type2 Option.
    #[arg(long, value_parser = parse_date_range)]
    pub expiration: Option<DateInterval>,

    /// Requires --security-type2 Pool.
    #[arg(long, value_parser = parse_date_range)]
    pub maturity: Option<DateInterval>,

    #[arg(long)]
    pub state_code: Option<String>,
}

impl FilterArgs {
    /// Copy every given flag onto `builder`.
    pub fn apply<B: BaseItemSetters>(&self, mut builder: B) -> B {
        let text_fields: [(&Option<String>, fn(B, String) -> B); 8] = [
            (&self.exch_code, |b, v| b.with_exch_code(v)),
            (&self.mic_code, |b, v| b.with_mic_code(v)),
            (&self.currency, |b, v| b.with_currency(v)),
            (&self.market_sec_des, |b, v| b.with_market_sec_des(v)),
            (&self.security_type, |b, v| b.with_security_type(v)),
            (&self.security_type2, |b, v| b.with_security_type2(v)),
            (&self.option_type, |b, v| b.with_option_type(v)),
            (&self.state_code, |b, v| b.with_state_code(v)),
        ];
        for (value, set) in text_fields {
            if let Some(value) = value {
                builder = set(builder, value.clone());
            }
        }

        if self.include_unlisted_equities {
            builder = builder.with_include_unlisted_equities(true);
        }
        if let Some(strike) = self.strike {
            builder = builder.with_strike(strike);
        }
        if let Some(contract_size) = self.contract_size {
            builder = builder.with_contract_size(contract_size);
        }
        if let Some(coupon) = self.coupon {
            builder = builder.with_coupon(coupon);
        }
        if let Some(expiration) = &self.expiration {
            builder = builder.with_expiration(expiration.clone());
        }
        if let Some(maturity) = &self.maturity {
            builder = builder.with_maturity(maturity.clone());
        }
        builder
    }
}

fn split_range<'a>(raw: &'a str) -> Result<(Option<&'a str>, Option<&'a str>), String> {
    let (low, high) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected LOW:HIGH, got '{raw}'"))?;
    let side = |value: &'a str| Some(value.trim()).filter(|value| !value.is_empty());
    Ok((side(low), side(high)))
}

fn parse_numeric_range(raw: &str) -> Result<NumericInterval, String> {
    let (low, high) = split_range(raw)?;
    let parse = |value: Option<&str>| {
        value
            .map(|value| {
                value
                    .parse::<f64>()
                    .map_err(|_| format!("'{value}' is not a number"))
            })
            .transpose()
    };
    Ok(NumericInterval::new(parse(low)?, parse(high)?))
}

fn parse_date_range(raw: &str) -> Result<DateInterval, String> {
    let (low, high) = split_range(raw)?;
    Ok(DateInterval::new(low, high))
}
