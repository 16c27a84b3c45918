//! Statement execution with failure absorption.

use crate::client::{StatementGateway, WarehouseClient};
use crate::connection::ConnectionCache;
use irops_core::predicate::Statement;
use irops_core::table::ResultTable;
use std::sync::Arc;

/// Runs statements through the shared connection, absorbing every failure.
///
/// Callers see `None` for "no connection" and "statement failed" alike;
/// the decision of what to serve instead belongs to the layer above.
pub struct QueryExecutor<G = WarehouseClient> {
    cache: Arc<ConnectionCache<G>>,
}

impl<G: StatementGateway> QueryExecutor<G> {
    pub fn new(cache: Arc<ConnectionCache<G>>) -> Self {
        Self { cache }
    }

    /// Executes `statement` if a connection is available.
    ///
    /// Without a connection the statement is never submitted.
    pub async fn run(&self, statement: &Statement) -> Option<ResultTable> {
        let gateway = self.cache.get().await?;

        match gateway.execute(statement).await {
            Ok(table) => Some(table),
            Err(err) => {
                tracing::warn!("statement failed: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use irops_core::table::Cell;
    use irops_core::{IropsError, Result};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedGateway {
        executions: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl StatementGateway for ScriptedGateway {
        async fn execute(&self, _statement: &Statement) -> Result<ResultTable> {
            self.executions.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(IropsError::statement("boom"));
            }
            Ok(ResultTable::from_rows(
                &["HUB"],
                vec![vec![Cell::Text("ATL".to_string())]],
            ))
        }
    }

    #[tokio::test]
    async fn serves_tables_from_the_gateway() {
        let executions = Arc::new(AtomicUsize::new(0));
        let counter = executions.clone();
        let cache = Arc::new(ConnectionCache::with_connector(move || {
            Ok(ScriptedGateway {
                executions: counter.clone(),
                fail: false,
            })
        }));

        let executor = QueryExecutor::new(cache);
        let table = executor.run(&Statement::new("SELECT 1")).await.unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(executions.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn gateway_failures_become_none() {
        let executions = Arc::new(AtomicUsize::new(0));
        let counter = executions.clone();
        let cache = Arc::new(ConnectionCache::with_connector(move || {
            Ok(ScriptedGateway {
                executions: counter.clone(),
                fail: true,
            })
        }));

        let executor = QueryExecutor::new(cache);
        assert!(executor.run(&Statement::new("SELECT 1")).await.is_none());
        assert_eq!(executions.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn nothing_executes_without_a_connection() {
        let executions = Arc::new(AtomicUsize::new(0));
        let cache: Arc<ConnectionCache<ScriptedGateway>> =
            Arc::new(ConnectionCache::with_connector(|| {
                Err(IropsError::connection_unavailable("warehouse down"))
            }));

        let executor = QueryExecutor::new(cache);
        assert!(executor.run(&Statement::new("SELECT 1")).await.is_none());
        assert_eq!(executions.load(Ordering::SeqCst), 0);
    }
}
