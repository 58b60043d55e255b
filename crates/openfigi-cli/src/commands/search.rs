use openfigi_core::{BaseItem, FigiObject, OpenFigiClient};
use serde::Serialize;
use serde_json::Value;

use crate::cli::PageArgs;
use crate::error::CliError;

use super::ensure_pages;

#[derive(Debug, Serialize)]
struct SearchResponseData {
    query: String,
    data: Vec<FigiObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next: Option<String>,
}

pub async fn run(args: &PageArgs, client: &OpenFigiClient) -> Result<Value, CliError> {
    ensure_pages(args.pages)?;

    let item = args.filters.apply(BaseItem::builder()).build()?;
    let query = args.query.as_deref().unwrap_or_default().trim();

    let mut page = client.search(&item, query, args.start.as_deref()).await?;
    let mut data = std::mem::take(&mut page.data);
    for _ in 1..args.pages {
        if !page.has_next() {
            break;
        }
        page = page.next(client).await?;
        data.append(&mut page.data);
    }

    Ok(serde_json::to_value(SearchResponseData {
        query: query.to_owned(),
        data,
        next: page.cursor().map(str::to_owned),
    })?)
}
