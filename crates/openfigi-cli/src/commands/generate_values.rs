use std::fmt::Write;

use openfigi_core::{OpenFigiClient, ValueKey};
use tracing::info;

use crate::error::CliError;

const HEADER: &str = "\
//! Accepted values per field, as served by `GET /v3/mapping/values/{key}`.
//!
//! Generated by `openfigi generate-values`. Refresh with
//! `openfigi generate-values > crates/openfigi-core/src/values/tables.rs`
//! rather than editing by hand.
";

/// Fetch every published value list and render it as the core crate's table module.
pub async fn run(client: &OpenFigiClient) -> Result<String, CliError> {
    let mut tables = Vec::with_capacity(ValueKey::PUBLISHED.len());
    for key in ValueKey::PUBLISHED {
        let values = client.mapping_values(key).await?;
        info!(key = key.as_str(), count = values.len(), "fetched values");
        tables.push((key, values));
    }
    Ok(render_tables(tables))
}

fn render_tables(tables: Vec<(ValueKey, Vec<String>)>) -> String {
    let mut out = String::from(HEADER);
    for (key, mut values) in tables {
        values.sort_unstable();
        values.dedup();

        // Writing into a String cannot fail.
        let _ = writeln!(out);
        let _ = writeln!(out, "/// `{key}`");
        let _ = writeln!(out, "pub(super) const {}: &[&str] = &[", const_name(key));
        for value in &values {
            let _ = writeln!(out, "    {value:?},");
        }
        out.push_str("];\n");
    }
    out
}

const fn const_name(key: ValueKey) -> &'static str {
    match key {
        ValueKey::IdType => "ID_TYPES",
        ValueKey::ExchCode => "EXCH_CODES",
        ValueKey::MicCode => "MIC_CODES",
        ValueKey::Currency => "CURRENCIES",
        ValueKey::MarketSecDes => "MARKET_SEC_DES",
        ValueKey::SecurityType => "SECURITY_TYPES",
        ValueKey::SecurityType2 => "SECURITY_TYPES_2",
        ValueKey::StateCode => "STATE_CODES",
        ValueKey::OptionType => "OPTION_TYPES",
    }
}
