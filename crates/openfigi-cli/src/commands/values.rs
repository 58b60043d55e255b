use openfigi_core::{OpenFigiClient, ValueKey};
use serde::Serialize;
use serde_json::Value;

use crate::cli::ValuesArgs;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct ValuesResponseData {
    key: &'static str,
    values: Vec<String>,
}

pub async fn run(args: &ValuesArgs, client: &OpenFigiClient) -> Result<Value, CliError> {
    let key: ValueKey = args.key.parse()?;
    let values = client.mapping_values(key).await?;

    Ok(serde_json::to_value(ValuesResponseData {
        key: key.as_str(),
        values,
    })?)
}
