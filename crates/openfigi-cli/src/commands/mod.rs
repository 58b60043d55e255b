mod filter;
mod generate_values;
mod map;
mod search;
mod values;

use openfigi_core::{ClientConfig, OpenFigiClient};

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::output::Output;

pub async fn run(cli: &Cli) -> Result<Output, CliError> {
    let client = OpenFigiClient::new(client_config(cli));

    let output = match &cli.command {
        Command::Map(args) => Output::Json(map::run(args, &client).await?),
        Command::Search(args) => Output::Json(search::run(args, &client).await?),
        Command::Filter(args) => Output::Json(filter::run(args, &client).await?),
        Command::Values(args) => Output::Json(values::run(args, &client).await?),
        Command::GenerateValues => Output::Text(generate_values::run(&client).await?),
    };
    Ok(output)
}

/// Environment first, then explicit flags.
fn client_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env().with_timeout_ms(cli.timeout_ms);
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str());
    }
    if let Some(api_key) = &cli.api_key {
        config = config.with_api_key(api_key.as_str());
    }
    config
}

fn ensure_pages(pages: usize) -> Result<(), CliError> {
    if pages == 0 {
        return Err(CliError::Command(String::from(
            "--pages must be greater than zero",
        )));
    }
    Ok(())
}
