use anyhow::Result;
use trendscope_api::ApiClient;
use trendscope_runtime::resolve_api_base;

use crate::args::{Cli, Commands};
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let base = resolve_api_base(cli.api_base.as_deref())?;
    let client = ApiClient::new(base);

    match cli.command {
        Commands::List {
            filters,
            page,
            page_size,
        } => handlers::list::handle(&client, &filters, page, page_size, cli.format),
        Commands::Stats { filters } => handlers::stats::handle(&client, &filters, cli.format),
        Commands::Facets => handlers::facets::handle(&client, cli.format),
        Commands::Show { video_id } => handlers::show::handle(&client, &video_id, cli.format),
        Commands::Refresh => handlers::refresh::handle(&client, cli.format),
        Commands::Dash { filters, page_size } => {
            handlers::dash::handle(client, &filters, page_size)
        }
    }
}
