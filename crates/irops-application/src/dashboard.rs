//! Attempt-then-substitute dashboard data policy.
//!
//! Every dashboard read goes through [`DashboardService`]: try the live
//! source, and on failure or an empty result serve the built-in table
//! instead. Callers always learn which origin actually answered.

use irops_core::filter::FilterState;
use irops_core::shape::shape;
use irops_core::site::QuerySite;
use irops_core::source::{DataOrigin, DataSource, FallbackDataSource};
use irops_core::table::{PresentationTable, ResultTable};
use irops_core::Result;
use irops_warehouse::{ConnectionCache, LiveDataSource};
use std::sync::Arc;

/// A shaped table plus where its rows came from.
pub struct DashboardView {
    pub table: PresentationTable,
    pub origin: DataOrigin,
}

/// Chooses between the live and built-in sources per fetch.
pub struct DashboardService {
    live: Arc<dyn DataSource>,
    fallback: Arc<dyn DataSource>,
}

impl DashboardService {
    /// The production wiring: warehouse first, built-in data second.
    pub fn new(cache: Arc<ConnectionCache>) -> Self {
        Self::with_sources(
            Arc::new(LiveDataSource::new(cache)),
            Arc::new(FallbackDataSource),
        )
    }

    /// Explicit wiring (for testing and alternate sources).
    pub fn with_sources(live: Arc<dyn DataSource>, fallback: Arc<dyn DataSource>) -> Self {
        Self { live, fallback }
    }

    /// The table for `site`, with the origin that actually served it.
    ///
    /// An empty live result counts as a miss; operators should never see
    /// a blank dashboard panel while the demo data can fill it.
    pub async fn fetch(
        &self,
        site: QuerySite,
        filter: &FilterState,
    ) -> Result<(ResultTable, DataOrigin)> {
        match self.live.fetch(site, filter).await {
            Ok(table) if !table.is_empty() => {
                tracing::debug!("serving {site} from the warehouse");
                return Ok((table, DataOrigin::Live));
            }
            Ok(_) => {
                tracing::warn!("live {site} returned no rows, substituting built-in data");
            }
            Err(err) => {
                tracing::warn!("live {site} unavailable, substituting built-in data: {err}");
            }
        }

        let table = self.fallback.fetch(site, filter).await?;
        Ok((table, DataOrigin::Fallback))
    }

    /// Fetches and shapes in one step.
    pub async fn render(&self, site: QuerySite, filter: &FilterState) -> Result<DashboardView> {
        let (table, origin) = self.fetch(site, filter).await?;
        let table = shape(&table, site)?;
        Ok(DashboardView { table, origin })
    }
}
