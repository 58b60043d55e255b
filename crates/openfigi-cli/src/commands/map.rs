use openfigi_core::{MappingItem, MappingRequest, OpenFigiClient};
use serde_json::Value;
use tracing::info;

use crate::cli::MapArgs;
use crate::error::CliError;

pub async fn run(args: &MapArgs, client: &OpenFigiClient) -> Result<Value, CliError> {
    let job = args
        .filters
        .apply(MappingItem::builder(
            args.id_type.trim(),
            args.id_value.as_str(),
        ))
        .build()?;

    let request = MappingRequest::from(vec![job]);
    let results = request.fetch(client).await?;
    info!(results = results.len(), "mapping complete");

    Ok(serde_json::to_value(results)?)
}
