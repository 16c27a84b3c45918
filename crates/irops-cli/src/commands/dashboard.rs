use crate::commands::utils::{print_origin_banner, print_table};
use anyhow::Result;
use irops_application::DashboardService;
use irops_core::filter::FilterState;
use irops_core::site::QuerySite;
use irops_warehouse::ConnectionCache;
use std::sync::Arc;

/// Renders one dashboard site to the terminal.
pub async fn show(site: QuerySite, filter: FilterState) -> Result<()> {
    let cache = Arc::new(ConnectionCache::from_env());
    let service = DashboardService::new(cache);

    let view = service.render(site, &filter).await?;

    print_origin_banner(view.origin);
    print_table(&view.table);

    Ok(())
}
