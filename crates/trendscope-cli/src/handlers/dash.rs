use anyhow::Result;
use trendscope_api::ApiClient;

use crate::args::FilterArgs;
use crate::ui;

pub fn handle(client: ApiClient, filters: &FilterArgs, page_size: i64) -> Result<()> {
    let criteria = filters.to_criteria()?;
    ui::dash::run(client, criteria, page_size)
}
