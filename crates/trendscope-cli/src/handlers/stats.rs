use anyhow::Result;
use trendscope_api::ApiClient;
use trendscope_engine::{apply, summarize};

use crate::args::FilterArgs;
use crate::output;
use crate::types::OutputFormat;

pub fn handle(client: &ApiClient, filters: &FilterArgs, format: OutputFormat) -> Result<()> {
    let criteria = filters.to_criteria()?;
    let records = client.fetch_trends()?;

    if records.is_empty() {
        match format {
            OutputFormat::Json => println!("{}", serde_json::json!({ "trends": [] })),
            OutputFormat::Plain => println!("{}", output::NO_DATA_MESSAGE),
        }
        return Ok(());
    }

    let filtered = apply(&records, &criteria);
    let summary = summarize(&filtered);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Plain => output::print_summary(&summary),
    }

    Ok(())
}
