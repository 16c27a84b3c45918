//! Live numeric context for chat turns.

use crate::dashboard::DashboardService;
use irops_core::filter::FilterState;
use irops_core::site::QuerySite;
use irops_core::source::DataOrigin;
use irops_core::table::Cell;

/// A one-line summary of current network counts, or `None` when the live
/// path cannot serve. Fallback numbers are never fed to the model as if
/// they were current.
pub async fn live_context(service: &DashboardService, filter: &FilterState) -> Option<String> {
    let (table, origin) = service.fetch(QuerySite::OpsSummary, filter).await.ok()?;
    if origin != DataOrigin::Live {
        return None;
    }

    let total = table.cell(0, "TOTAL_FLIGHTS")?.as_i64()?;
    let delayed = table.cell(0, "DELAYED_FLIGHTS")?.as_i64()?;
    let cancelled = table.cell(0, "CANCELLED_FLIGHTS")?.as_i64()?;

    let mut context = format!(
        "Current network counts: {total} flights scheduled, {delayed} delayed, \
         {cancelled} cancelled."
    );

    if let Some(avg) = table.cell(0, "AVG_DELAY_MINUTES").and_then(Cell::as_f64) {
        context.push_str(&format!(" Average delay {avg:.1} minutes."));
    }

    Some(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use irops_core::source::{DataSource, FallbackDataSource};
    use irops_core::table::ResultTable;
    use irops_core::{IropsError, Result};
    use std::sync::Arc;

    struct SummarySource;

    #[async_trait]
    impl DataSource for SummarySource {
        async fn fetch(&self, site: QuerySite, _filter: &FilterState) -> Result<ResultTable> {
            Ok(ResultTable::from_rows(
                site.columns(),
                vec![vec![
                    Cell::Int(1200),
                    Cell::Int(80),
                    Cell::Int(10),
                    Cell::Int(1080),
                    Cell::Int(30),
                    Cell::Int(9000),
                    Cell::Float(28.5),
                ]],
            ))
        }
    }

    struct DeadSource;

    #[async_trait]
    impl DataSource for DeadSource {
        async fn fetch(&self, _site: QuerySite, _filter: &FilterState) -> Result<ResultTable> {
            Err(IropsError::connection_unavailable("warehouse down"))
        }
    }

    #[tokio::test]
    async fn live_counts_become_a_context_line() {
        let service = DashboardService::with_sources(
            Arc::new(SummarySource),
            Arc::new(FallbackDataSource),
        );

        let context = live_context(&service, &FilterState::default())
            .await
            .unwrap();

        assert!(context.contains("1200 flights scheduled"));
        assert!(context.contains("80 delayed"));
        assert!(context.contains("28.5 minutes"));
    }

    #[tokio::test]
    async fn fallback_data_yields_no_context() {
        let service =
            DashboardService::with_sources(Arc::new(DeadSource), Arc::new(FallbackDataSource));

        assert!(live_context(&service, &FilterState::default())
            .await
            .is_none());
    }
}
