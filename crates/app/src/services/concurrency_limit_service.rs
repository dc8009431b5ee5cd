//! Concurrency limit service — use-cases for displaying global limits.

use flowboard_domain::concurrency_limit::{ConcurrencyLimitTable, GlobalConcurrencyLimit};
use flowboard_domain::error::FlowboardError;

use crate::ports::ConcurrencyLimitRepository;

/// Application service for global concurrency limits.
pub struct ConcurrencyLimitService<R> {
    repo: R,
}

impl<R: ConcurrencyLimitRepository> ConcurrencyLimitService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all global concurrency limits.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_limits(&self) -> Result<Vec<GlobalConcurrencyLimit>, FlowboardError> {
        self.repo.get_all().await
    }

    /// Build the display table over all limits.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn table(&self) -> Result<ConcurrencyLimitTable, FlowboardError> {
        let limits = self.repo.get_all().await?;
        tracing::debug!(count = limits.len(), "building concurrency limit table");
        Ok(ConcurrencyLimitTable::new(limits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowboard_domain::concurrency_limit::Cell;
    use std::future::Future;

    struct StubRepo(Vec<GlobalConcurrencyLimit>);

    impl ConcurrencyLimitRepository for StubRepo {
        fn get_all(
            &self,
        ) -> impl Future<Output = Result<Vec<GlobalConcurrencyLimit>, FlowboardError>> + Send
        {
            let result = self.0.clone();
            async { Ok(result) }
        }
    }

    #[tokio::test]
    async fn should_list_limits_in_repository_order() {
        let svc = ConcurrencyLimitService::new(StubRepo(vec![
            GlobalConcurrencyLimit::new("b", 1),
            GlobalConcurrencyLimit::new("a", 2),
        ]));
        let names: Vec<String> = svc
            .list_limits()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn should_build_table_with_one_row_per_limit() {
        let svc = ConcurrencyLimitService::new(StubRepo(vec![GlobalConcurrencyLimit::new(
            "gpu", 4,
        )]));
        let rows = svc.table().await.unwrap().rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], Cell::Text("gpu".to_string()));
        assert_eq!(rows[0][4], Cell::Indicator(true));
    }

    #[tokio::test]
    async fn should_build_empty_table_when_no_limits() {
        let svc = ConcurrencyLimitService::new(StubRepo(vec![]));
        assert!(svc.table().await.unwrap().is_empty());
    }
}
