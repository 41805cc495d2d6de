use anyhow::Result;
use trendscope_api::ApiClient;

use crate::output;
use crate::types::OutputFormat;

pub fn handle(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let records = client.refresh_trends()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "count": records.len() }))
        }
        OutputFormat::Plain => {
            if records.is_empty() {
                println!("Refresh complete, but the backend returned no records.");
            } else {
                println!("Refresh complete: {} records.", records.len());
            }
        }
    }

    Ok(())
}
