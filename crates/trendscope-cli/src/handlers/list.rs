use anyhow::Result;
use trendscope_api::ApiClient;
use trendscope_engine::{apply, normalize_page_size, paginate};

use crate::args::FilterArgs;
use crate::output;
use crate::types::OutputFormat;

pub fn handle(
    client: &ApiClient,
    filters: &FilterArgs,
    page: usize,
    page_size: i64,
    format: OutputFormat,
) -> Result<()> {
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
    let view = paginate(&filtered, normalize_page_size(page_size), page.max(1));

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Plain => output::print_page(&view),
    }

    Ok(())
}
