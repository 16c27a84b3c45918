//! The data source seam.
//!
//! Live and built-in data implement the same trait, so the layers above
//! choose between them as a policy decision rather than a code path.

use crate::error::Result;
use crate::fallback::fallback_table;
use crate::filter::FilterState;
use crate::site::QuerySite;
use crate::table::ResultTable;
use async_trait::async_trait;

/// Where a served table actually came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    Live,
    Fallback,
}

/// Anything that can produce a result table for a query site.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self, site: QuerySite, filter: &FilterState) -> Result<ResultTable>;
}

/// Serves the built-in demo tables. Infallible and filter-blind.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackDataSource;

#[async_trait]
impl DataSource for FallbackDataSource {
    async fn fetch(&self, site: QuerySite, _filter: &FilterState) -> Result<ResultTable> {
        Ok(fallback_table(site).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fallback_source_always_serves() {
        let source = FallbackDataSource;
        for site in QuerySite::all() {
            let table = source.fetch(site, &FilterState::default()).await.unwrap();
            assert!(!table.is_empty());
        }
    }
}
