use anyhow::Result;
use trendscope_api::ApiClient;
use trendscope_engine::Facets;
use trendscope_types::labels;

use crate::output;
use crate::types::OutputFormat;

pub fn handle(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let records = client.fetch_trends()?;
    let facets = Facets::from_records(&records);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&facets)?);
        return Ok(());
    }

    println!("{}", output::bold("Countries"));
    for code in &facets.regions {
        println!("  {:<8} {}", code, labels::country_name(Some(code)));
    }

    println!("{}", output::bold("Languages"));
    for code in &facets.languages {
        println!("  {:<8} {}", code, labels::language_name(Some(code)));
    }

    println!("{}", output::bold("Categories"));
    for id in &facets.categories {
        println!("  {:<8} {}", id, labels::category_name(Some(id)));
    }

    Ok(())
}
