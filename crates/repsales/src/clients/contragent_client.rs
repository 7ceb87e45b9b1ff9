//! # Contragent Client
//!
//! Provides a high-level API for interacting with the contragent screen
//! actor. It wraps a `ScreenClient<ContragentStore>` and exposes
//! domain-specific methods.

use crate::contragent_screen::{
    ContragentCommand, ContragentScreenError, ContragentSnapshot, ContragentStore,
};
use crate::view::contragents::ContragentSort;
use async_trait::async_trait;
use screen_flow::{FlowError, ScreenClient, ScreenHandle};
use tracing::{debug, instrument};

/// Client for interacting with the contragent screen actor.
#[derive(Clone)]
pub struct ContragentClient {
    inner: ScreenClient<ContragentStore>,
}

impl ContragentClient {
    pub fn new(inner: ScreenClient<ContragentStore>) -> Self {
        Self { inner }
    }

    async fn apply(
        &self,
        command: ContragentCommand,
    ) -> Result<ContragentSnapshot, ContragentScreenError> {
        self.inner
            .apply(command)
            .await
            .map_err(<Self as ScreenHandle<ContragentStore>>::map_error)
    }

    /// Updates the free-text query over name and address.
    #[instrument(skip(self, query))]
    pub async fn search(
        &self,
        query: impl Into<String>,
    ) -> Result<ContragentSnapshot, ContragentScreenError> {
        debug!("Updating directory query");
        self.apply(ContragentCommand::SetQuery(query.into())).await
    }

    /// Restricts the directory to one legal form; `None` lifts the restriction.
    #[instrument(skip(self))]
    pub async fn filter_by_kind(
        &self,
        kind: Option<String>,
    ) -> Result<ContragentSnapshot, ContragentScreenError> {
        self.apply(ContragentCommand::SetKindFilter(kind)).await
    }

    /// Restricts the directory to one segment; `None` lifts the restriction.
    #[instrument(skip(self))]
    pub async fn filter_by_segment(
        &self,
        segment: Option<String>,
    ) -> Result<ContragentSnapshot, ContragentScreenError> {
        self.apply(ContragentCommand::SetSegmentFilter(segment))
            .await
    }

    /// Changes the sort key.
    #[instrument(skip(self))]
    pub async fn sort_by(
        &self,
        sort: ContragentSort,
    ) -> Result<ContragentSnapshot, ContragentScreenError> {
        self.apply(ContragentCommand::SetSort(sort)).await
    }

    /// Clears the query and both categorical filters; the sort key stays.
    #[instrument(skip(self))]
    pub async fn clear_filters(&self) -> Result<ContragentSnapshot, ContragentScreenError> {
        self.apply(ContragentCommand::ClearFilters).await
    }
}

#[async_trait]
impl ScreenHandle<ContragentStore> for ContragentClient {
    type Error = ContragentScreenError;

    fn inner(&self) -> &ScreenClient<ContragentStore> {
        &self.inner
    }

    fn map_error(e: FlowError) -> Self::Error {
        ContragentScreenError::ScreenCommunication(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::contragents::ContragentCriteria;
    use screen_flow::mock::{create_mock_client, expect_apply};

    fn empty_snapshot() -> ContragentSnapshot {
        ContragentSnapshot {
            contragents: Vec::new(),
            available_kinds: Vec::new(),
            available_segments: Vec::new(),
            criteria: ContragentCriteria::default(),
            loaded: true,
            notice: None,
        }
    }

    #[tokio::test]
    async fn test_search_sends_set_query() {
        let (client, mut receiver) = create_mock_client::<ContragentStore>(10);
        let contragent_client = ContragentClient::new(client);

        let search = tokio::spawn(async move { contragent_client.search("acme").await });

        let (command, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected Apply request");
        match command {
            ContragentCommand::SetQuery(query) => assert_eq!(query, "acme"),
            other => panic!("Expected SetQuery, got {other:?}"),
        }
        responder.send(Ok(empty_snapshot())).unwrap();

        assert!(search.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_sort_by_sends_set_sort() {
        let (client, mut receiver) = create_mock_client::<ContragentStore>(10);
        let contragent_client = ContragentClient::new(client);

        let sort =
            tokio::spawn(async move { contragent_client.sort_by(ContragentSort::TotalSum).await });

        let (command, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected Apply request");
        assert!(matches!(
            command,
            ContragentCommand::SetSort(ContragentSort::TotalSum)
        ));
        responder.send(Ok(empty_snapshot())).unwrap();

        assert!(sort.await.unwrap().is_ok());
    }
}
