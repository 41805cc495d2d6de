use anyhow::{bail, Result};
use trendscope_api::ApiClient;
use trendscope_engine::Thresholds;

use crate::output;
use crate::types::OutputFormat;

pub fn handle(client: &ApiClient, video_id: &str, format: OutputFormat) -> Result<()> {
    let records = client.fetch_trends()?;
    let wanted = video_id.trim();

    let Some(record) = records
        .iter()
        .find(|r| r.video_id.as_deref().map(str::trim) == Some(wanted))
    else {
        bail!("no record with video id {:?}", wanted);
    };

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    // Tier badge is relative to the whole loaded set.
    let scores: Vec<f64> = records.iter().map(|r| r.engagement_or_zero()).collect();
    let tier = Thresholds::compute(&scores).classify(record.engagement_or_zero());
    output::print_detail(record, tier);

    Ok(())
}
