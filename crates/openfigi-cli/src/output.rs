use std::io::Write;

use serde_json::Value;

use crate::error::CliError;

/// What a command hands back for printing.
#[derive(Debug)]
pub enum Output {
    Json(Value),
    /// Already formatted; printed verbatim.
    Text(String),
}

pub fn render(output: &Output, pretty: bool) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    match output {
        Output::Json(data) => {
            let rendered = if pretty {
                serde_json::to_string_pretty(data)?
            } else {
                serde_json::to_string(data)?
            };
            writeln!(stdout, "{rendered}")?;
        }
        Output::Text(text) => stdout.write_all(text.as_bytes())?,
    }
    Ok(())
}
