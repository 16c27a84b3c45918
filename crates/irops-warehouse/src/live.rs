//! Live warehouse data source.

use crate::client::{StatementGateway, WarehouseClient};
use crate::connection::ConnectionCache;
use crate::executor::QueryExecutor;
use async_trait::async_trait;
use irops_core::filter::FilterState;
use irops_core::site::QuerySite;
use irops_core::source::DataSource;
use irops_core::table::ResultTable;
use irops_core::{IropsError, Result};
use std::sync::Arc;

/// Serves query sites from the warehouse over the shared connection.
pub struct LiveDataSource<G = WarehouseClient> {
    executor: QueryExecutor<G>,
}

impl<G: StatementGateway> LiveDataSource<G> {
    pub fn new(cache: Arc<ConnectionCache<G>>) -> Self {
        Self {
            executor: QueryExecutor::new(cache),
        }
    }
}

#[async_trait]
impl<G: StatementGateway> DataSource for LiveDataSource<G> {
    async fn fetch(&self, site: QuerySite, filter: &FilterState) -> Result<ResultTable> {
        let statement = site.statement(filter);
        self.executor
            .run(&statement)
            .await
            .ok_or_else(|| IropsError::statement(format!("no live table for {site}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irops_core::predicate::Statement;
    use irops_core::table::Cell;

    struct EchoGateway;

    #[async_trait]
    impl StatementGateway for EchoGateway {
        async fn execute(&self, statement: &Statement) -> Result<ResultTable> {
            Ok(ResultTable::from_rows(
                &["TEXT"],
                vec![vec![Cell::Text(statement.text.clone())]],
            ))
        }
    }

    #[tokio::test]
    async fn fetch_builds_the_site_statement() {
        let cache = Arc::new(ConnectionCache::with_connector(|| Ok(EchoGateway)));
        let source = LiveDataSource::new(cache);

        let table = source
            .fetch(QuerySite::DelayCauses, &FilterState::default())
            .await
            .unwrap();

        let echoed = table.cell(0, "TEXT").and_then(Cell::as_str).unwrap();
        assert!(echoed.contains("GROUP BY DELAY_CAUSE"));
    }

    #[tokio::test]
    async fn dead_connections_surface_as_errors() {
        let cache: Arc<ConnectionCache<EchoGateway>> =
            Arc::new(ConnectionCache::with_connector(|| {
                Err(IropsError::connection_unavailable("warehouse down"))
            }));
        let source = LiveDataSource::new(cache);

        let err = source
            .fetch(QuerySite::FlightBoard, &FilterState::default())
            .await
            .unwrap_err();
        assert!(matches!(err, IropsError::Statement(_)));
    }
}
